//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt`
//! without a TCP listener, so tests exercise the exact middleware stack
//! production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use taskhive_api::auth::jwt::JwtConfig;
use taskhive_api::auth::password::hash_password;
use taskhive_api::config::ServerConfig;
use taskhive_api::router::build_app_router;
use taskhive_api::state::AppState;
use taskhive_db::models::user::{CreateUser, User};
use taskhive_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            token_expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Default plaintext password for seeded test users.
pub const TEST_PASSWORD: &str = "secret1";

/// Create a user directly in the database with the given role.
pub async fn seed_user(pool: &PgPool, username: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateUser {
        name: username.to_string(),
        username: username.to_string(),
        password_hash: hashed,
        role: role.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log a user in via the API and return their session token.
pub async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login must succeed");
    let json = body_json(response).await;
    json["token"].as_str().expect("token must be present").to_string()
}

/// Seed a user with the given role and return `(user, token)`.
pub async fn seed_and_login(app: &Router, pool: &PgPool, username: &str, role: &str) -> (User, String) {
    let user = seed_user(pool, username, role).await;
    let token = login_token(app, username, TEST_PASSWORD).await;
    (user, token)
}
