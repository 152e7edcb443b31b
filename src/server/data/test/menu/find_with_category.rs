use super::*;

/// Tests the joined single-item lookup.
///
/// Expected: Ok(Some) carrying the category name
#[tokio::test]
async fn joins_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::MenuCategoryFactory::new(db)
        .name("Breakfast")
        .build()
        .await?;
    let item = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Omelette")
        .price_cents(1250)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let found = repo.find_with_category(item.id).await?.unwrap();

    assert_eq!(found.item.name, "Omelette");
    assert_eq!(found.item.price_cents, 1250);
    assert_eq!(found.category_name, "Breakfast");

    Ok(())
}

/// Tests the joined lookup for a missing item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);
    let found = repo.find_with_category(4242).await?;

    assert!(found.is_none());

    Ok(())
}
