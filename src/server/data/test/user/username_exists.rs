use super::*;

/// Tests that a taken username is reported as existing.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_username() -> Result<(), DbErr> {
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
    assert!(repo.username_exists("frontdesk", None).await?);

    Ok(())
}

/// Tests that the excluded id makes a user's own name available to itself.
///
/// Expected: Ok(false) when excluding the owner, Ok(true) when excluding
/// another user
#[tokio::test]
async fn exclusion_skips_own_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .username("frontdesk")
        .build()
        .await?;
    let other = factory::user::create_staff(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.username_exists("frontdesk", Some(owner.id)).await?);
    assert!(repo.username_exists("frontdesk", Some(other.id)).await?);

    Ok(())
}
