//! Route definitions for the `/tasks` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`. All require authentication (enforced by
/// handler extractors).
///
/// `/stats` is registered before `/{id}` so it is matched as a literal
/// segment, not an id.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /stats         -> stats
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PATCH  /{id}/toggle   -> toggle_complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/stats", get(task::stats))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/toggle", patch(task::toggle_complete))
}
