use super::*;
use sea_orm::EntityTrait;

/// Tests deactivating and reactivating a user.
///
/// Expected: the is_active column follows the calls
#[tokio::test]
async fn toggles_activation_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_staff(db).await?;
    assert!(user.is_active);

    let repo = UserRepository::new(db);

    repo.set_active(user.id, false).await?;
    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!reloaded.is_active);

    repo.set_active(user.id, true).await?;
    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(reloaded.is_active);

    Ok(())
}

/// Tests that deactivation touches the updated_at timestamp.
///
/// Expected: updated_at moves forward
#[tokio::test]
async fn bumps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_staff(db).await?;

    let repo = UserRepository::new(db);
    repo.set_active(user.id, false).await?;

    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(reloaded.updated_at >= user.updated_at);

    Ok(())
}
