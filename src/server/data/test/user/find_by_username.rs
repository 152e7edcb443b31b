use super::*;

/// Tests finding a user by username when the user exists.
///
/// Expected: Ok(Some(model)) with the stored hash available
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("frontdesk")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("frontdesk").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);

    Ok(())
}

/// Tests finding a user by username when no such user exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the lookup is exact, not a prefix match.
///
/// Expected: Ok(None) for a partial username
#[tokio::test]
async fn does_not_match_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("frontdesk")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("front").await?;

    assert!(found.is_none());

    Ok(())
}
