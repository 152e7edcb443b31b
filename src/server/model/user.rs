//! User domain models and parameters.
//!
//! Provides the domain model for application users with role and activation
//! tracking. Includes parameter types for user creation and updates performed
//! by admins. The password hash stays inside the data and service layers and
//! never appears on the domain-to-DTO path.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::error::{internal::InternalError, AppError},
};

/// Role assigned to a user account.
///
/// Staff can manage orders, menu, and rooms; admins can additionally manage
/// user accounts and read reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Staff,
}

impl UserRole {
    /// The string stored in the database and exposed in DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }

    /// Parses a role string, returning `None` for unknown values.
    ///
    /// Used both for request input (where `None` becomes a 400) and for stored
    /// values (where `None` becomes an internal error).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }
}

/// User account with role and activation state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Role controlling which endpoints the user may call.
    pub role: UserRole,
    /// Deactivated users cannot log in or pass the auth guard.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownUserRole))` - The stored role string
    ///   is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = UserRole::parse(&entity.role).ok_or(InternalError::UnknownUserRole {
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is not part of the domain model, so DTOs can never
    /// leak it.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for an admin creating a user account, as received from the API.
///
/// Carries the plaintext password; the service hashes it into
/// `CreateUserParams` before anything is persisted.
#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Parameters for creating a user account.
///
/// The password is hashed by the service before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Parameters for an admin update of an existing user account.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
}
