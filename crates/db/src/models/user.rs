//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskhive_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Owner summary embedded in list/monitoring responses in place of a bare
/// owner id.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerRef {
    pub id: DbId,
    pub name: String,
    pub username: String,
}

/// DTO for inserting a new user. The hash is produced at the API boundary;
/// plaintext passwords never reach this crate.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating a user. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
}
