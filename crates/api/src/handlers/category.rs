//! Handlers for the `/categories` resource.
//!
//! Listing is the one place admins get a global view; get/update/delete
//! are owner-scoped for everyone, admins included. That asymmetry is part
//! of the public contract and must not be "fixed" here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskhive_core::error::CoreError;
use taskhive_core::roles::ROLE_ADMIN;
use taskhive_core::types::DbId;
use taskhive_db::models::category::{
    Category, CategoryWithOwner, CreateCategory, UpdateCategory,
};
use taskhive_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Display color assigned when a category is created without one.
const DEFAULT_COLOR: &str = "#3B82F6";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Request body for `PUT /categories/{id}`.
///
/// An empty name or color is treated as absent; an empty description is a
/// real value.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/categories
///
/// Admins see every owner's categories; everyone else only their own.
/// Sorted by name ascending, with the owner resolved for display.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<CategoryWithOwner>>> {
    let rows = if user.role == ROLE_ADMIN {
        CategoryRepo::list_all(&state.pool).await?
    } else {
        CategoryRepo::list_by_owner(&state.pool, user.user_id).await?
    };

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/categories/{id}
///
/// Owner-scoped: a category that exists but belongs to someone else is a
/// 404, indistinguishable from one that does not exist.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(category))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name is required".into(),
        )));
    }

    let create_dto = CreateCategory {
        name,
        description: input.description.unwrap_or_default(),
        color: input
            .color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        created_by: user.user_id,
    };

    // A duplicate (owner, name) surfaces as a unique violation and is
    // classified to 400 CONFLICT by the error layer.
    let category = CategoryRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategoryRequest>,
) -> AppResult<Json<Category>> {
    let update_dto = UpdateCategory {
        name: input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
        description: input.description,
        color: input.color.filter(|c| !c.is_empty()),
    };

    let category = CategoryRepo::update_for_owner(&state.pool, id, user.user_id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Removes the category unconditionally. Tasks referencing it keep their
/// now-dangling reference and resolve it to null on read.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CategoryRepo::delete_for_owner(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Category deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
