use super::*;

/// Tests the half-open date window.
///
/// Expected: start inclusive, end exclusive
#[tokio::test]
async fn window_is_half_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let start = Utc::now() - Duration::days(1);
    let end = Utc::now();

    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER00000AT-ST")
        .created_at(start)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER00000AT-EN")
        .created_at(end)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER00000EARLY")
        .created_at(start - Duration::hours(1))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo.list_between(start, end).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number, "ORDER00000AT-ST");

    Ok(())
}

/// Tests counting orders in one status.
///
/// Expected: only the matching rows counted
#[tokio::test]
async fn count_with_status_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("pending")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("pending")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .status("ready")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    assert_eq!(repo.count_with_status(OrderStatus::Pending).await?, 2);
    assert_eq!(repo.count_with_status(OrderStatus::Ready).await?, 1);
    assert_eq!(repo.count_with_status(OrderStatus::Cancelled).await?, 0);

    Ok(())
}
