use super::*;

/// Tests the joined order detail for an existing order.
///
/// Expected: Ok(Some) with room context and all lines
#[tokio::test]
async fn returns_room_and_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number("310")
        .floor_number(3)
        .build()
        .await?;
    let category = factory::menu_category::create_category(db).await?;
    let burger = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Burger")
        .price_cents(1200)
        .build()
        .await?;
    let cola = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Cola")
        .price_cents(300)
        .build()
        .await?;

    let order = factory::order::OrderFactory::new(db, room.id)
        .total_cents(2700)
        .build()
        .await?;
    factory::order::create_order_item(db, order.id, burger.id, 2, 1200).await?;
    factory::order::create_order_item(db, order.id, cola.id, 1, 300).await?;

    let repo = OrderRepository::new(db);
    let detail = repo.get_detail(order.id).await?.unwrap();

    assert_eq!(detail.order.room.room_number, "310");
    assert_eq!(detail.order.room.floor_number, 3);
    assert_eq!(detail.lines.len(), 2);

    let names: Vec<&str> = detail
        .lines
        .iter()
        .map(|l| l.menu_item_name.as_str())
        .collect();
    assert!(names.contains(&"Burger"));
    assert!(names.contains(&"Cola"));

    Ok(())
}

/// Tests the detail lookup for a missing order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let detail = repo.get_detail(4242).await?;

    assert!(detail.is_none());

    Ok(())
}

/// Tests that the assignee's name is joined when set.
///
/// Expected: assigned_staff_name carries the username
#[tokio::test]
async fn resolves_assignee_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::UserFactory::new(db)
        .username("runner")
        .build()
        .await?;
    let room = factory::room::create_room(db).await?;
    let order = factory::order::OrderFactory::new(db, room.id)
        .assigned_staff_id(Some(staff.id))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let detail = repo.get_detail(order.id).await?.unwrap();

    assert_eq!(detail.order.assigned_staff_name.as_deref(), Some("runner"));

    Ok(())
}
