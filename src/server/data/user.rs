//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and role management with proper
//! conversion between entity models and domain models at the infrastructure boundary.
//! The password hash is only exposed through `find_by_username`, which the auth
//! service uses for credential verification.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User, UserRole},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The caller provides an already-hashed password; plaintext never reaches
    /// this layer.
    ///
    /// # Arguments
    /// - `params` - Account fields including the bcrypt password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user as a domain model
    /// - `Err(AppError)` - Database error (including unique-constraint violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by username, returning the raw entity including the
    /// password hash. Only the auth service should consume this.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether a username is already taken, optionally ignoring one user
    /// (for updates to an existing account).
    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Checks whether an email is already taken, optionally ignoring one user.
    pub async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether the default admin account must be
    /// seeded.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        use sea_orm::PaginatorTrait;

        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users ordered by creation time, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Updates username, email, role, and activation state of a user.
    ///
    /// # Arguments
    /// - `params` - New account fields; uniqueness must be checked by the caller
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user as a domain model
    /// - `Err(AppError::DbErr(RecordNotFound))` - No user with that id
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.username = ActiveValue::Set(params.username);
        active_model.email = ActiveValue::Set(params.email);
        active_model.role = ActiveValue::Set(params.role.as_str().to_string());
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        User::from_entity(entity)
    }

    /// Sets the role of a user.
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the password hash of a user.
    pub async fn set_password_hash(&self, id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the activation flag of a user.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
