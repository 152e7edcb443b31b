use super::*;

/// Tests creating a user from parameters.
///
/// Verifies that the created user carries the given fields, is active, and
/// comes back as a domain model with the parsed role.
///
/// Expected: Ok(User)
#[tokio::test]
async fn creates_user_with_fields() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "frontdesk".to_string(),
            email: "frontdesk@example.com".to_string(),
            password_hash: "$2b$04$notarealhashnotarealhash".to_string(),
            role: UserRole::Staff,
        })
        .await
        .unwrap();

    assert_eq!(user.username, "frontdesk");
    assert_eq!(user.email, "frontdesk@example.com");
    assert_eq!(user.role, UserRole::Staff);
    assert!(user.is_active);
}

/// Tests that duplicate usernames are rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("frontdesk")
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "frontdesk".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "$2b$04$notarealhashnotarealhash".to_string(),
            role: UserRole::Staff,
        })
        .await;

    assert!(result.is_err());
}
