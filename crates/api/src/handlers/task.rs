//! Handlers for the `/tasks` resource.
//!
//! Every operation here is scoped to the requester, admins included;
//! cross-owner visibility exists only through the admin monitoring view.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use taskhive_core::error::CoreError;
use taskhive_core::priority::{is_valid_priority, PRIORITY_MEDIUM};
use taskhive_core::stats::completion_rate;
use taskhive_core::types::{DbId, Timestamp};
use taskhive_db::models::task::{CreateTask, TaskFilter, TaskWithCategory, UpdateTask};
use taskhive_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub category: Option<DbId>,
}

/// Request body for `PUT /tasks/{id}`.
///
/// `dueDate` and `category` use a double `Option` so an explicit JSON null
/// clears the field while an absent field leaves it untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<DbId>>,
    pub is_completed: Option<bool>,
}

/// Query parameters for `GET /tasks`.
///
/// `isCompleted` arrives as a string and is coerced: exactly `"true"` is
/// true, anything else is false.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListQuery {
    pub category: Option<DbId>,
    pub is_completed: Option<String>,
    pub priority: Option<String>,
}

/// Response body for `GET /tasks/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatsResponse {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub high_priority: i64,
    pub completion_rate: i64,
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/tasks
///
/// The requester's tasks, newest first, with optional exact-match filters.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<TaskListQuery>,
) -> AppResult<Json<Vec<TaskWithCategory>>> {
    let filter = TaskFilter {
        category_id: query.category,
        is_completed: query.is_completed.map(|v| v == "true"),
        priority: query.priority,
    };

    let rows = TaskRepo::list(&state.pool, user.user_id, &filter).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskWithCategory>> {
    fetch_task(&state, id, user.user_id).await.map(Json)
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<TaskWithCategory>)> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Task title is required".into(),
        )));
    }

    let priority = input
        .priority
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| PRIORITY_MEDIUM.to_string());
    validate_priority(&priority)?;

    let create_dto = CreateTask {
        title,
        description: input.description.unwrap_or_default(),
        priority,
        due_date: input.due_date,
        category_id: input.category,
        created_by: user.user_id,
    };

    let task = TaskRepo::create(&state.pool, &create_dto).await?;
    let task = fetch_task(&state, task.id, user.user_id).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskRequest>,
) -> AppResult<Json<TaskWithCategory>> {
    let priority = input.priority.filter(|p| !p.is_empty());
    if let Some(ref priority) = priority {
        validate_priority(priority)?;
    }

    let update_dto = UpdateTask {
        title: input
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        description: input.description,
        priority,
        is_completed: input.is_completed,
        due_date: input.due_date,
        category_id: input.category,
    };

    TaskRepo::update_for_owner(&state.pool, id, user.user_id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    fetch_task(&state, id, user.user_id).await.map(Json)
}

/// PATCH /api/tasks/{id}/toggle
///
/// Flip the completion flag. Two toggles return the task to its original
/// state.
pub async fn toggle_complete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskWithCategory>> {
    TaskRepo::toggle_complete(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    fetch_task(&state, id, user.user_id).await.map(Json)
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TaskRepo::delete_for_owner(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Task deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// GET /api/tasks/stats
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<TaskStatsResponse>> {
    let row = TaskRepo::stats(&state.pool, user.user_id).await?;

    Ok(Json(TaskStatsResponse {
        total: row.total,
        completed: row.completed,
        pending: row.total - row.completed,
        high_priority: row.high_priority,
        completion_rate: completion_rate(row.completed, row.total),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an owned task with its category resolved, or 404.
async fn fetch_task(state: &AppState, id: DbId, owner: DbId) -> AppResult<TaskWithCategory> {
    let row = TaskRepo::find_by_id_for_owner(&state.pool, id, owner)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(row.into())
}

fn validate_priority(priority: &str) -> AppResult<()> {
    if !is_valid_priority(priority) {
        return Err(AppError::Core(CoreError::Validation(
            "Priority must be one of LOW, MEDIUM, HIGH".into(),
        )));
    }
    Ok(())
}
