use super::*;

/// Tests the single-order status update.
///
/// Expected: status, assignee, and updated_at all change
#[tokio::test]
async fn updates_status_and_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::create_staff(db).await?;
    let room = factory::room::create_room(db).await?;
    let order = factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(&UpdateOrderStatusParams {
            order_id: order.id,
            status: OrderStatus::Preparing,
            notes: None,
            changed_by: staff.id,
        })
        .await?;

    assert_eq!(updated.status, "preparing");
    assert_eq!(updated.assigned_staff_id, Some(staff.id));
    assert!(updated.updated_at >= order.updated_at);

    Ok(())
}

/// Tests the update against a missing order.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::create_staff(db).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .update_status(&UpdateOrderStatusParams {
            order_id: 4242,
            status: OrderStatus::Ready,
            notes: None,
            changed_by: staff.id,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests the bulk status update.
///
/// Expected: the affected-row count and untouched other orders
#[tokio::test]
async fn bulk_updates_listed_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let a = factory::order::create_order(db, room.id).await?;
    let b = factory::order::create_order(db, room.id).await?;
    let untouched = factory::order::create_order(db, room.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .set_status_bulk(&[a.id, b.id], OrderStatus::Ready)
        .await?;

    assert_eq!(updated, 2);

    let reloaded = repo.find_by_id(untouched.id).await?.unwrap();
    assert_eq!(reloaded.status, "pending");

    Ok(())
}
