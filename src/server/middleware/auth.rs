use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{User, UserRole},
};

/// Permissions an endpoint can demand from the authenticated user.
pub enum Permission {
    /// Staff or admin role.
    Staff,
    /// Admin role only.
    Admin,
}

/// Resolves the request's session to a user and enforces role permissions.
///
/// Construct one per handler and call `require` with the permissions the
/// endpoint demands; an empty slice means "any authenticated, active user".
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Authenticates the session and checks the required permissions.
    ///
    /// Looks up the user id stored in the session, loads the user, rejects
    /// deactivated accounts, and verifies every requested permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the endpoint requires; all must hold
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user satisfying all permissions
    /// - `Err(AppError::AuthErr)` - Not logged in, unknown user, deactivated
    ///   account, or missing role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let user = User::from_entity(user)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    // Admins satisfy the staff requirement
                    if user.role != UserRole::Staff && user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Staff or admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
