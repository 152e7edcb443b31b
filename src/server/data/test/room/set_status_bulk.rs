use super::*;

/// Tests the bulk status change across several rooms.
///
/// Expected: all listed rooms updated, others untouched
#[tokio::test]
async fn updates_only_listed_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::room::create_room(db).await?;
    let b = factory::room::create_room(db).await?;
    let untouched = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .set_status_bulk(&[a.id, b.id], RoomStatus::Maintenance)
        .await?;

    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|r| r.status == "maintenance"));

    let untouched = repo.find_by_id(untouched.id).await?.unwrap();
    assert_eq!(untouched.status, "available");

    Ok(())
}

/// Tests the bulk status change with no ids.
///
/// Expected: Ok(empty), no query issued against missing rows
#[tokio::test]
async fn empty_id_list_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let updated = repo.set_status_bulk(&[], RoomStatus::Occupied).await?;

    assert!(updated.is_empty());

    Ok(())
}
