use super::*;

/// Tests that terminal orders are excluded from the active list.
///
/// Expected: only pending/preparing/ready orders
#[tokio::test]
async fn excludes_terminal_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    for status in ["pending", "preparing", "ready", "delivered", "cancelled"] {
        factory::order::OrderFactory::new(db, room.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = OrderRepository::new(db);
    let active = repo.active_with_room(20).await?;

    assert_eq!(active.len(), 3);
    assert!(active
        .iter()
        .all(|a| a.order.status != "delivered" && a.order.status != "cancelled"));

    Ok(())
}

/// Tests the limit applied to the active list.
///
/// Expected: at most the requested number of rows, newest first
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let now = Utc::now();
    for i in 0..5 {
        factory::order::OrderFactory::new(db, room.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = OrderRepository::new(db);
    let active = repo.active_with_room(2).await?;

    assert_eq!(active.len(), 2);

    Ok(())
}

/// Tests that the room number is joined onto each row.
///
/// Expected: the creating room's number on every entry
#[tokio::test]
async fn carries_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number("808")
        .build()
        .await?;
    factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    let active = repo.active_with_room(20).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].room_number, "808");

    Ok(())
}
