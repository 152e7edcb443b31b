use super::*;

/// Tests the guard with no user id in the session.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_without_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests the guard with a session pointing at a deleted user.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user_id() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 4242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));
}

/// Tests the guard with a live session for a deactivated account.
///
/// Expected: Err(AccountDisabled)
#[tokio::test]
async fn rejects_deactivated_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await
        .unwrap();
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));
}

/// Tests the guard with no required permissions.
///
/// Expected: Ok(user) for any active authenticated user
#[tokio::test]
async fn allows_authenticated_user_without_permissions() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_staff(db).await.unwrap();
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);
}

/// Tests the staff permission for both roles.
///
/// Expected: Ok for staff, Ok for admin
#[tokio::test]
async fn staff_permission_accepts_staff_and_admin() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let staff = factory::user::create_staff(db).await.unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, staff.id)
        .await
        .unwrap();
    assert!(AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    let admin = factory::user::create_admin(db).await.unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, admin.id)
        .await
        .unwrap();
    assert!(AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await
        .is_ok());
}

/// Tests the admin permission against a staff user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn admin_permission_rejects_staff() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let staff = factory::user::create_staff(db).await.unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, staff.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}
