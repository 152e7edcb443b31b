use super::*;

/// Tests pagination metadata and embedded lines of the management list.
///
/// Expected: correct total and per-order lines
#[tokio::test]
async fn paginates_and_embeds_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let category = factory::menu_category::create_category(db).await?;
    let item = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Soup")
        .build()
        .await?;

    let now = Utc::now();
    for i in 0..3 {
        let order = factory::order::OrderFactory::new(db, room.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
        factory::order::create_order_item(db, order.id, item.id, 1, item.price_cents).await?;
    }

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .list_managed(&ManageOrdersFilter {
            status: None,
            date_from: None,
            date_to: None,
            room_number: None,
            page: 1,
            limit: 2,
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.lines.len() == 1));
    assert_eq!(orders[0].lines[0].menu_item_name, "Soup");

    Ok(())
}

/// Tests the room-number filter, which lives on the joined room table.
///
/// Expected: only the matching room's orders counted and returned
#[tokio::test]
async fn filters_by_room_number() -> Result<(), DbErr> {
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
    let (orders, total) = repo
        .list_managed(&ManageOrdersFilter {
            status: None,
            date_from: None,
            date_to: None,
            room_number: Some("102".to_string()),
            page: 1,
            limit: 20,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.room.room_number, "102");

    Ok(())
}

/// Tests the date window filter.
///
/// Expected: only orders inside the window
#[tokio::test]
async fn filters_by_date_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let now = Utc::now();
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER0000000OLD")
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, room.id)
        .order_number("ORDER0000000NEW")
        .created_at(now)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .list_managed(&ManageOrdersFilter {
            status: None,
            date_from: Some(now - Duration::days(1)),
            date_to: None,
            room_number: None,
            page: 1,
            limit: 20,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(orders[0].order.order.order_number, "ORDER0000000NEW");

    Ok(())
}
