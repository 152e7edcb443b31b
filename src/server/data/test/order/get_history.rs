use super::*;

/// Tests the history listing with its user join.
///
/// Expected: rows newest first, guest rows without a name
#[tokio::test]
async fn returns_rows_with_names_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::UserFactory::new(db)
        .username("runner")
        .build()
        .await?;
    let room = factory::room::create_room(db).await?;
    let order = factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    repo.add_history(order.id, OrderStatus::Pending, None, None)
        .await?;
    repo.add_history(order.id, OrderStatus::Preparing, Some(staff.id), None)
        .await?;

    let history = repo.get_history(order.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].entry.status, "preparing");
    assert_eq!(history[0].changed_by_name.as_deref(), Some("runner"));
    assert_eq!(history[1].entry.status, "pending");
    assert!(history[1].changed_by_name.is_none());

    Ok(())
}

/// Tests the history of an order without any rows.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_for_order_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let order = factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    let history = repo.get_history(order.id).await?;

    assert!(history.is_empty());

    Ok(())
}

/// Tests that history rows are scoped to their order.
///
/// Expected: only the requested order's rows
#[tokio::test]
async fn scoped_to_the_given_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let order_a = factory::order::create_order(db, room.id).await?;
    let order_b = factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    repo.add_history(order_a.id, OrderStatus::Pending, None, None)
        .await?;
    repo.add_history(order_b.id, OrderStatus::Cancelled, None, None)
        .await?;

    let history = repo.get_history(order_a.id).await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].entry.status, "pending");

    Ok(())
}
