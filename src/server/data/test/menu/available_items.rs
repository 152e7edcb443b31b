use super::*;

/// Tests that only available items of the category are returned, by name.
///
/// Expected: available items ordered alphabetically
#[tokio::test]
async fn filters_and_orders_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::create_category(db).await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Pasta")
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Burger")
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Off Menu")
        .is_available(false)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let items = repo.get_available_by_category(category.id).await?;

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Burger", "Pasta"]);

    Ok(())
}

/// Tests that the availability-scoped single lookup hides unavailable items.
///
/// Expected: Ok(None) for an unavailable item, Ok(Some) for an available one
#[tokio::test]
async fn find_available_hides_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::create_category(db).await?;
    let on_menu = factory::menu_item::create_menu_item(db, category.id).await?;
    let off_menu = factory::menu_item::MenuItemFactory::new(db, category.id)
        .is_available(false)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);

    assert!(repo.find_available_by_id(on_menu.id).await?.is_some());
    assert!(repo.find_available_by_id(off_menu.id).await?.is_none());

    Ok(())
}

/// Tests that items of other categories are not returned.
///
/// Expected: only the requested category's items
#[tokio::test]
async fn scoped_to_the_given_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mains = factory::menu_category::create_category(db).await?;
    let drinks = factory::menu_category::create_category(db).await?;
    factory::menu_item::MenuItemFactory::new(db, mains.id)
        .name("Steak")
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, drinks.id)
        .name("Cola")
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let items = repo.get_available_by_category(mains.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Steak");

    Ok(())
}
