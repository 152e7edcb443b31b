//! Credential verification for the login endpoint.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Service verifying username/password credentials against stored hashes.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a login attempt.
    ///
    /// Unknown usernames and wrong passwords both map to `InvalidCredentials`
    /// so the response does not reveal whether the username exists.
    /// Deactivated accounts are rejected after the password check so the
    /// error is only shown to someone who actually owns the credentials.
    ///
    /// # Arguments
    /// - `username` - Login name as entered
    /// - `password` - Plaintext password as entered
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account active
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::AuthErr(AccountDisabled))` - Valid credentials, deactivated account
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(entity)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        Ok(user)
    }
}
