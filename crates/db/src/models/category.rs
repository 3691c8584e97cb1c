//! Category entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskhive_core::types::{DbId, Timestamp};

use crate::models::user::OwnerRef;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row for category listings joined with the owning user.
///
/// The owner columns are nullable because the owning account may have been
/// deleted since the category was created.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryOwnerRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_by: DbId,
    pub owner_name: Option<String>,
    pub owner_username: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category with its owner resolved, as returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithOwner {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    /// `None` when the owning account no longer exists.
    pub created_by: Option<OwnerRef>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CategoryOwnerRow> for CategoryWithOwner {
    fn from(row: CategoryOwnerRow) -> Self {
        let created_by = match (row.owner_name, row.owner_username) {
            (Some(name), Some(username)) => Some(OwnerRef {
                id: row.created_by,
                name,
                username,
            }),
            _ => None,
        };
        CategoryWithOwner {
            id: row.id,
            name: row.name,
            description: row.description,
            color: row.color,
            created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Minimal category reference embedded in task responses.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for inserting a category. Defaults (empty description, default
/// color) are applied by the caller before insert.
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_by: DbId,
}

/// DTO for patching a category. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}
