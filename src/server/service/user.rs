//! User account management for admins.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateAccountParams, CreateUserParams, UpdateUserParams, User, UserRole},
};

/// Service providing business logic for user account management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all user accounts, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo.get_all().await
    }

    /// Creates a user account after checking uniqueness and hashing the password.
    ///
    /// # Arguments
    /// - `params` - Account fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Username or email already taken, or empty fields
    pub async fn create(&self, params: CreateAccountParams) -> Result<User, AppError> {
        if params.username.trim().is_empty()
            || params.email.trim().is_empty()
            || params.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "Username, email, password, and role are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&params.username, None).await? {
            return Err(AppError::BadRequest("Username already exists".to_string()));
        }

        if user_repo.email_exists(&params.email, None).await? {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let password_hash = bcrypt::hash(&params.password, bcrypt::DEFAULT_COST)?;

        user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                role: params.role,
            })
            .await
    }

    /// Updates an existing account with re-checked uniqueness.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Username or email taken by another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if user_repo
            .username_exists(&params.username, Some(params.id))
            .await?
        {
            return Err(AppError::BadRequest("Username already exists".to_string()));
        }

        if user_repo
            .email_exists(&params.email, Some(params.id))
            .await?
        {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        user_repo.update(params).await
    }

    /// Changes the role of an account.
    ///
    /// # Returns
    /// - `Ok(User)` - The account with its new role
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        user_repo.set_role(user.id, role).await?;

        let mut user = User::from_entity(user)?;
        user.role = role;
        Ok(user)
    }

    /// Replaces the password of an account.
    ///
    /// # Returns
    /// - `Ok(User)` - The account whose password was reset
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Empty password
    pub async fn reset_password(&self, id: i32, new_password: &str) -> Result<User, AppError> {
        if new_password.is_empty() {
            return Err(AppError::BadRequest(
                "New password is required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        user_repo.set_password_hash(user.id, &password_hash).await?;

        User::from_entity(user)
    }

    /// Flips the activation flag of an account and returns the new state.
    ///
    /// # Returns
    /// - `Ok(User)` - The account with its toggled flag
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn toggle_active(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let new_state = !user.is_active;
        user_repo.set_active(user.id, new_state).await?;

        let mut user = User::from_entity(user)?;
        user.is_active = new_state;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_rejects_duplicate_username() {
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

        let service = UserService::new(db);
        let result = service
            .create(CreateAccountParams {
                username: "frontdesk".to_string(),
                email: "new@example.com".to_string(),
                password: "secret".to_string(),
                role: UserRole::Staff,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("Username")));
    }

    #[tokio::test]
    async fn toggle_active_flips_state() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_staff(db).await.unwrap();

        let service = UserService::new(db);
        let toggled = service.toggle_active(user.id).await.unwrap();
        assert!(!toggled.is_active);

        let toggled = service.toggle_active(user.id).await.unwrap();
        assert!(toggled.is_active);
    }

    #[tokio::test]
    async fn set_role_requires_existing_user() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let result = service.set_role(9999, UserRole::Admin).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
