//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `ADMIN` role (enforced by handler extractors).
///
/// ```text
/// GET    /stats              -> stats
/// GET    /users              -> list_users
/// POST   /users              -> create_user
/// GET    /users/{id}         -> get_user
/// PUT    /users/{id}         -> update_user
/// DELETE /users/{id}         -> delete_user
/// GET    /monitoring/tasks   -> monitoring_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::stats))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route(
            "/users/{id}",
            get(admin::get_user)
                .put(admin::update_user)
                .delete(admin::delete_user),
        )
        .route("/monitoring/tasks", get(admin::monitoring_tasks))
}
