use super::*;

/// Tests finding a room by its printed number.
///
/// Expected: Ok(Some(room))
#[tokio::test]
async fn finds_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_number("204")
        .floor_number(2)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let room = repo.find_by_number("204").await?;

    assert!(room.is_some());
    let room = room.unwrap();
    assert_eq!(room.room_number, "204");
    assert_eq!(room.floor_number, 2);

    Ok(())
}

/// Tests the lookup for a number that is not assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo.find_by_number("999").await?;

    assert!(room.is_none());

    Ok(())
}

/// Tests that the correct room is returned among several.
///
/// Expected: Ok(Some(room)) matching the requested number
#[tokio::test]
async fn finds_correct_room_among_multiple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_number("101")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("102")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("103")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let room = repo.find_by_number("102").await?.unwrap();

    assert_eq!(room.room_number, "102");

    Ok(())
}
