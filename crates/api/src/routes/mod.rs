pub mod admin;
pub mod auth;
pub mod category;
pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                    liveness probe (public)
///
/// /auth/register             register (public)
/// /auth/login                login (public)
/// /auth/me                   current user (requires auth)
///
/// /categories                list, create
/// /categories/{id}           get, update, delete (owner-scoped)
///
/// /tasks                     list, create
/// /tasks/stats               per-user statistics
/// /tasks/{id}                get, update, delete (owner-scoped)
/// /tasks/{id}/toggle         flip completion (PATCH)
///
/// /admin/stats               global statistics (admin only)
/// /admin/users               list, create (admin only)
/// /admin/users/{id}          get, update, delete (admin only)
/// /admin/monitoring/tasks    all tasks across owners (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/categories", category::router())
        .nest("/tasks", task::router())
        .nest("/admin", admin::router())
}
