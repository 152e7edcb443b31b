use super::*;

/// Tests the status filter with multiple accepted statuses.
///
/// Expected: only orders in the requested statuses
#[tokio::test]
async fn filters_by_status_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("pending")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("preparing")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("delivered")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .list(&OrderListFilter {
            statuses: vec![OrderStatus::Pending, OrderStatus::Preparing],
            room_id: None,
            limit: None,
            offset: None,
        })
        .await?;

    assert_eq!(orders.len(), 2);
    assert!(orders
        .iter()
        .all(|o| o.order.status == "pending" || o.order.status == "preparing"));

    Ok(())
}

/// Tests the room filter.
///
/// Expected: only the requested room's orders, with its room number joined
#[tokio::test]
async fn filters_by_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_a = factory::room::RoomFactory::new(db)
        .room_number("101")
        .build()
        .await?;
    let room_b = factory::room::RoomFactory::new(db)
        .room_number("102")
        .build()
        .await?;
    factory::order::create_order(db, room_a.id).await?;
    factory::order::create_order(db, room_b.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .list(&OrderListFilter {
            statuses: Vec::new(),
            room_id: Some(room_a.id),
            limit: None,
            offset: None,
        })
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].room.room_number, "101");

    Ok(())
}

/// Tests limit and offset pagination over the newest-first ordering.
///
/// Expected: the second-newest order when limit=1 offset=1
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let now = Utc::now();
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER0000000001")
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER0000000002")
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER0000000003")
        .created_at(now)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .list(&OrderListFilter {
            statuses: Vec::new(),
            room_id: None,
            limit: Some(1),
            offset: Some(1),
        })
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.order_number, "ORDER0000000002");

    Ok(())
}
