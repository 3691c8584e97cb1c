//! Repository for the `tasks` table.
//!
//! Every read and write is ownership-scoped; there is no admin bypass at
//! this level. The admin monitoring view is the one deliberately unscoped
//! query and lives in [`TaskRepo::list_all_with_owner`].

use sqlx::PgPool;
use taskhive_core::types::DbId;

use crate::models::stats::TaskStatsRow;
use crate::models::task::{
    CreateTask, Task, TaskCategoryRow, TaskFilter, TaskMonitorRow, UpdateTask,
};

/// Column list for single-table queries.
const COLUMNS: &str =
    "id, title, description, is_completed, priority, due_date, category_id, created_by, \
     created_at, updated_at";

/// Column list for reads joined with the referenced category.
const CATEGORY_COLUMNS: &str =
    "t.id, t.title, t.description, t.is_completed, t.priority, t.due_date, t.category_id, \
     c.id AS category_ref_id, c.name AS category_name, c.color AS category_color, \
     t.created_by, t.created_at, t.updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, priority, due_date, category_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(input.category_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List the owner's tasks with optional exact-match filters, newest
    /// first, each joined with its category.
    pub async fn list(
        pool: &PgPool,
        owner: DbId,
        filter: &TaskFilter,
    ) -> Result<Vec<TaskCategoryRow>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["t.created_by = $1".to_string()];
        let mut param_idx: usize = 1;

        if filter.category_id.is_some() {
            param_idx += 1;
            conditions.push(format!("t.category_id = ${param_idx}"));
        }
        if filter.is_completed.is_some() {
            param_idx += 1;
            conditions.push(format!("t.is_completed = ${param_idx}"));
        }
        if filter.priority.is_some() {
            param_idx += 1;
            conditions.push(format!("t.priority = ${param_idx}"));
        }

        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM tasks t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE {}
             ORDER BY t.created_at DESC",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, TaskCategoryRow>(&query).bind(owner);

        if let Some(category_id) = filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(is_completed) = filter.is_completed {
            q = q.bind(is_completed);
        }
        if let Some(ref priority) = filter.priority {
            q = q.bind(priority);
        }

        q.fetch_all(pool).await
    }

    /// Find a task by id, scoped to its owner, joined with its category.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
    ) -> Result<Option<TaskCategoryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM tasks t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE t.id = $1 AND t.created_by = $2"
        );
        sqlx::query_as::<_, TaskCategoryRow>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await
    }

    /// Update an owned task. Only fields present in `input` are written;
    /// the inner `Option` of the nullable fields carries an explicit NULL.
    ///
    /// Returns `None` if no matching owned row exists.
    pub async fn update_for_owner(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut sets: Vec<String> = vec!["updated_at = NOW()".to_string()];
        let mut param_idx: usize = 2;

        if input.title.is_some() {
            param_idx += 1;
            sets.push(format!("title = ${param_idx}"));
        }
        if input.description.is_some() {
            param_idx += 1;
            sets.push(format!("description = ${param_idx}"));
        }
        if input.priority.is_some() {
            param_idx += 1;
            sets.push(format!("priority = ${param_idx}"));
        }
        if input.is_completed.is_some() {
            param_idx += 1;
            sets.push(format!("is_completed = ${param_idx}"));
        }
        if input.due_date.is_some() {
            param_idx += 1;
            sets.push(format!("due_date = ${param_idx}"));
        }
        if input.category_id.is_some() {
            param_idx += 1;
            sets.push(format!("category_id = ${param_idx}"));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 AND created_by = $2 RETURNING {COLUMNS}",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id).bind(owner);

        if let Some(ref title) = input.title {
            q = q.bind(title);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }
        if let Some(ref priority) = input.priority {
            q = q.bind(priority);
        }
        if let Some(is_completed) = input.is_completed {
            q = q.bind(is_completed);
        }
        if let Some(due_date) = input.due_date {
            q = q.bind(due_date);
        }
        if let Some(category_id) = input.category_id {
            q = q.bind(category_id);
        }

        q.fetch_optional(pool).await
    }

    /// Flip an owned task's completion flag in a single statement.
    ///
    /// Returns `None` if no matching owned row exists.
    pub async fn toggle_complete(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET is_completed = NOT is_completed, updated_at = NOW()
             WHERE id = $1 AND created_by = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned task. Returns `true` if a row was removed.
    pub async fn delete_for_owner(pool: &PgPool, id: DbId, owner: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Per-owner task counters in a single scan.
    pub async fn stats(pool: &PgPool, owner: DbId) -> Result<TaskStatsRow, sqlx::Error> {
        sqlx::query_as::<_, TaskStatsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE is_completed) AS completed,
                    COUNT(*) FILTER (WHERE priority = 'HIGH' AND NOT is_completed) AS high_priority
             FROM tasks WHERE created_by = $1",
        )
        .bind(owner)
        .fetch_one(pool)
        .await
    }

    /// Every task across every owner, newest first, joined with both its
    /// category and its owning user. Read-only admin monitoring view.
    pub async fn list_all_with_owner(pool: &PgPool) -> Result<Vec<TaskMonitorRow>, sqlx::Error> {
        sqlx::query_as::<_, TaskMonitorRow>(
            "SELECT t.id, t.title, t.description, t.is_completed, t.priority, t.due_date,
                    c.id AS category_ref_id, c.name AS category_name, c.color AS category_color,
                    t.created_by, u.name AS owner_name, u.username AS owner_username,
                    t.created_at, t.updated_at
             FROM tasks t
             LEFT JOIN categories c ON c.id = t.category_id
             LEFT JOIN users u ON u.id = t.created_by
             ORDER BY t.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
