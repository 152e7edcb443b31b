use super::*;

/// Tests item detection for a category with one item.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_with_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::create_category(db).await?;
    factory::menu_item::create_menu_item(db, category.id).await?;

    let repo = MenuCategoryRepository::new(db);
    assert!(repo.has_items(category.id).await?);

    Ok(())
}

/// Tests item detection for an empty category.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::create_category(db).await?;

    let repo = MenuCategoryRepository::new(db);
    assert!(!repo.has_items(category.id).await?);

    Ok(())
}

/// Tests that unavailable items still block category deletion.
///
/// Expected: Ok(true) for a category holding only an unavailable item
#[tokio::test]
async fn counts_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::menu_category::create_category(db).await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .is_available(false)
        .build()
        .await?;

    let repo = MenuCategoryRepository::new(db);
    assert!(repo.has_items(category.id).await?);

    Ok(())
}
