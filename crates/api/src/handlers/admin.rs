//! Handlers for the `/admin` resource (user management, monitoring, stats).
//!
//! All handlers require the `ADMIN` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskhive_core::error::CoreError;
use taskhive_core::roles::{is_valid_role, ROLE_USER};
use taskhive_core::stats::completion_rate;
use taskhive_core::types::DbId;
use taskhive_db::models::task::TaskMonitor;
use taskhive_db::models::user::{CreateUser, UpdateUser, UserResponse};
use taskhive_db::repositories::{StatsRepo, TaskRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::MIN_PASSWORD_LENGTH;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub role: Option<String>,
}

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Response body for `GET /admin/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStatsResponse {
    pub total_users: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub pending_tasks: i64,
    pub total_categories: i64,
    pub completion_rate: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/stats
///
/// Platform-wide counters across all owners.
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<GlobalStatsResponse>> {
    let row = StatsRepo::global(&state.pool).await?;

    Ok(Json(GlobalStatsResponse {
        total_users: row.total_users,
        total_tasks: row.total_tasks,
        completed_tasks: row.completed_tasks,
        pending_tasks: row.total_tasks - row.completed_tasks,
        total_categories: row.total_categories,
        completion_rate: completion_rate(row.completed_tasks, row.total_tasks),
    }))
}

/// GET /api/admin/users
///
/// Every user, newest first, password hashes excluded.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(user.into()))
}

/// POST /api/admin/users
///
/// Create a user with an explicit role (defaults to USER). Validation
/// mirrors self-registration.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if input.name.is_empty() || input.username.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name, username, and password are required".into(),
        )));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input
        .role
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| ROLE_USER.to_string());
    validate_role(&role)?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        name: input.name,
        username: input.username,
        password_hash: hashed,
        role,
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/admin/users/{id}
///
/// Update name/username/role/password. A changed username re-validates
/// uniqueness; a password shorter than the minimum is silently ignored
/// rather than rejected, preserving the established contract.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let mut update_dto = UpdateUser::default();

    if let Some(username) = input.username.filter(|u| !u.is_empty()) {
        if username != user.username {
            if UserRepo::find_by_username(&state.pool, &username)
                .await?
                .is_some()
            {
                return Err(AppError::Core(CoreError::Conflict(
                    "Username is already taken".into(),
                )));
            }
            update_dto.username = Some(username);
        }
    }

    if let Some(name) = input.name.filter(|n| !n.is_empty()) {
        update_dto.name = Some(name);
    }

    if let Some(role) = input.role.filter(|r| !r.is_empty()) {
        validate_role(&role)?;
        update_dto.role = Some(role);
    }

    if let Some(password) = input.password {
        if password.len() >= MIN_PASSWORD_LENGTH {
            let hashed = hash_password(&password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            update_dto.password_hash = Some(hashed);
        }
    }

    let updated = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(updated.into()))
}

/// DELETE /api/admin/users/{id}
///
/// Hard-delete a user. Self-deletion is rejected regardless of how many
/// other admins exist; the check runs after the existence check so an
/// absent id is still a 404.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if user.id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot delete your own account".into(),
        )));
    }

    UserRepo::delete(&state.pool, id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

/// GET /api/admin/monitoring/tasks
///
/// Every task across every owner with owner and category resolved.
/// Read-only: there is no admin write path to another user's tasks.
pub async fn monitoring_tasks(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<TaskMonitor>>> {
    let rows = TaskRepo::list_all_with_owner(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_role(role: &str) -> AppResult<()> {
    if !is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(
            "Role must be either ADMIN or USER".into(),
        )));
    }
    Ok(())
}
