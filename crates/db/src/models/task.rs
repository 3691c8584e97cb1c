//! Task entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskhive_core::types::{DbId, Timestamp};

use crate::models::category::CategoryRef;
use crate::models::user::OwnerRef;

/// A row from the `tasks` table.
///
/// Not serialized directly: all task responses embed the resolved category
/// via [`TaskWithCategory`].
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row for task reads joined with the referenced category.
///
/// `category_ref_id`/`category_name`/`category_color` are NULL when the
/// task has no category or when the reference dangles (category deleted).
#[derive(Debug, Clone, FromRow)]
pub struct TaskCategoryRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
    pub category_ref_id: Option<DbId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Task with its category resolved, as returned by all task endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCategory {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    /// `None` when the task has no category or the category was deleted.
    pub category: Option<CategoryRef>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskCategoryRow> for TaskWithCategory {
    fn from(row: TaskCategoryRow) -> Self {
        let category = resolve_category(row.category_ref_id, row.category_name, row.category_color);
        TaskWithCategory {
            id: row.id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            priority: row.priority,
            due_date: row.due_date,
            category,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Flat row for the admin monitoring view: task joined with both its
/// category and its owning user.
#[derive(Debug, Clone, FromRow)]
pub struct TaskMonitorRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub category_ref_id: Option<DbId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub created_by: DbId,
    pub owner_name: Option<String>,
    pub owner_username: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Task with owner and category resolved, as returned by admin monitoring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMonitor {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub category: Option<CategoryRef>,
    /// `None` when the owning account no longer exists.
    pub created_by: Option<OwnerRef>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskMonitorRow> for TaskMonitor {
    fn from(row: TaskMonitorRow) -> Self {
        let category = resolve_category(row.category_ref_id, row.category_name, row.category_color);
        let created_by = match (row.owner_name, row.owner_username) {
            (Some(name), Some(username)) => Some(OwnerRef {
                id: row.created_by,
                name,
                username,
            }),
            _ => None,
        };
        TaskMonitor {
            id: row.id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            priority: row.priority,
            due_date: row.due_date,
            category,
            created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn resolve_category(
    id: Option<DbId>,
    name: Option<String>,
    color: Option<String>,
) -> Option<CategoryRef> {
    match (id, name, color) {
        (Some(id), Some(name), Some(color)) => Some(CategoryRef { id, name, color }),
        _ => None,
    }
}

/// DTO for inserting a task. Defaults are applied by the caller.
#[derive(Debug)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
    pub created_by: DbId,
}

/// DTO for patching a task.
///
/// The outer `Option` distinguishes "field absent from the patch" from
/// "field present"; for the nullable columns the inner `Option` carries an
/// explicit NULL so a patch can clear a due date or detach a category.
#[derive(Debug, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub is_completed: Option<bool>,
    pub due_date: Option<Option<Timestamp>>,
    pub category_id: Option<Option<DbId>>,
}

/// Optional exact-match filters for task listings, combined with AND.
///
/// The owner scope is not part of the filter: it is a mandatory parameter
/// of every listing query.
#[derive(Debug, Default)]
pub struct TaskFilter {
    pub category_id: Option<DbId>,
    pub is_completed: Option<bool>,
    pub priority: Option<String>,
}
