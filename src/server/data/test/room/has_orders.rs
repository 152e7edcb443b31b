use super::*;

/// Tests order detection for a room with an order in any status.
///
/// Expected: Ok(true) even for terminal statuses
#[tokio::test]
async fn true_with_delivered_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("delivered")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    assert!(repo.has_orders(room.id).await?);

    Ok(())
}

/// Tests order detection for a room without orders.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    assert!(!repo.has_orders(room.id).await?);

    Ok(())
}

/// Tests that another room's orders do not count.
///
/// Expected: Ok(false) for the empty room
#[tokio::test]
async fn scoped_to_the_given_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy_room = factory::room::create_room(db).await?;
    let empty_room = factory::room::create_room(db).await?;
    factory::order::create_order(db, busy_room.id).await?;

    let repo = RoomRepository::new(db);
    assert!(repo.has_orders(busy_room.id).await?);
    assert!(!repo.has_orders(empty_room.id).await?);

    Ok(())
}
