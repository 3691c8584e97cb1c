//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskhive_core::error::CoreError;
use taskhive_core::roles::ROLE_USER;
use taskhive_core::types::DbId;
use taskhive_db::models::user::{CreateUser, UserResponse};
use taskhive_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length enforced on registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields default to empty strings so a missing field and an empty one
/// both produce the documented 400 instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Public user info embedded in authentication responses.
#[derive(Debug, Serialize)]
pub struct AuthUserInfo {
    pub id: DbId,
    pub name: String,
    pub username: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user: AuthUserInfo,
}

/// Successful registration response (auto-login).
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub token: String,
    pub role: String,
    pub user: AuthUserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account with the USER role and issue a session token so the
/// client is logged in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    if input.name.is_empty() || input.username.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name, username, and password are required".into(),
        )));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Case-sensitive pre-check; a concurrent registration racing past it
    // is caught by the unique constraint and classified the same way.
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
        role: ROLE_USER.to_string(),
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful",
            token,
            role: user.role,
            user: AuthUserInfo {
                id: user.id,
                name: user.name,
                username: user.username,
            },
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with username + password. The failure message is the same
/// whether the user is unknown or the password is wrong, so usernames
/// cannot be enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username and password are required".into(),
        )));
    }

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Login failed".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized("Login failed".into())));
    }

    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
        user: AuthUserInfo {
            id: user.id,
            name: user.name,
            username: user.username,
        },
    }))
}

/// GET /api/auth/me
///
/// Return the authenticated user's own record, without the password hash.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(user.into()))
}
