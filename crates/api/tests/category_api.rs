//! HTTP-level integration tests for the `/categories` resource.
//!
//! Covers creation defaults, per-owner uniqueness, ownership scoping, and
//! the admin list/detail asymmetry.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Creating a category applies the default description and color.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_defaults(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = common::seed_and_login(&app, &pool, "alice", "USER").await;

    let body = serde_json::json!({ "name": "Work" });
    let response = post_json_auth(&app, "/api/categories", &token, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Work");
    assert_eq!(json["description"], "");
    assert_eq!(json["color"], "#3B82F6");
    assert!(json["id"].is_number());
}

/// The name is trimmed; whitespace-only names are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_name_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = common::seed_and_login(&app, &pool, "alice", "USER").await;

    let body = serde_json::json!({ "name": "  Padded  " });
    let response = post_json_auth(&app, "/api/categories", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Padded");

    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(&app, "/api/categories", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Category name is required");
}

/// Duplicate names are rejected per owner but allowed across owners.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_uniqueness_is_per_owner(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_alice, alice_token) = common::seed_and_login(&app, &pool, "alice", "USER").await;
    let (_bob, bob_token) = common::seed_and_login(&app, &pool, "bob", "USER").await;

    let body = serde_json::json!({ "name": "Work" });
    let response = post_json_auth(&app, "/api/categories", &alice_token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same owner: 400 conflict.
    let response = post_json_auth(&app, "/api/categories", &alice_token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "A category with that name already exists");

    // Different owner: allowed.
    let response = post_json_auth(&app, "/api/categories", &bob_token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Users only see their own categories, sorted by name ascending.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_scoped_and_sorted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_alice, alice_token) = common::seed_and_login(&app, &pool, "alice", "USER").await;
    let (_bob, bob_token) = common::seed_and_login(&app, &pool, "bob", "USER").await;

    for name in ["Zebra", "Apple", "Mango"] {
        let body = serde_json::json!({ "name": name });
        post_json_auth(&app, "/api/categories", &alice_token, body).await;
    }
    let body = serde_json::json!({ "name": "BobOnly" });
    post_json_auth(&app, "/api/categories", &bob_token, body).await;

    let response = get_auth(&app, "/api/categories", &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Mango", "Zebra"]);
}

/// Admins see every owner's categories, with the owner attached.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_sees_all_owners(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_alice, alice_token) = common::seed_and_login(&app, &pool, "alice", "USER").await;
    let (_admin, admin_token) = common::seed_and_login(&app, &pool, "root", "ADMIN").await;

    let body = serde_json::json!({ "name": "AliceStuff" });
    post_json_auth(&app, "/api/categories", &alice_token, body).await;

    let response = get_auth(&app, "/api/categories", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "AliceStuff");
    assert_eq!(items[0]["createdBy"]["username"], "alice");
}

// ---------------------------------------------------------------------------
// Get / update / delete scoping
// ---------------------------------------------------------------------------

/// Another user's category id is a 404, indistinguishable from absence --
/// and admins are NOT exempt from this check.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_by_id_is_owner_scoped_even_for_admins(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_alice, alice_token) = common::seed_and_login(&app, &pool, "alice", "USER").await;
    let (_bob, bob_token) = common::seed_and_login(&app, &pool, "bob", "USER").await;
    let (_admin, admin_token) = common::seed_and_login(&app, &pool, "root", "ADMIN").await;

    let body = serde_json::json!({ "name": "Private" });
    let response = post_json_auth(&app, "/api/categories", &alice_token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get_auth(&app, &format!("/api/categories/{id}"), &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, &format!("/api/categories/{id}"), &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Admins get the global view only in list; detail stays owner-scoped.
    let response = get_auth(&app, &format!("/api/categories/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "name": "Renamed" });
    let response = put_json_auth(&app, &format!("/api/categories/{id}"), &admin_token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(&app, &format!("/api/categories/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Update patches only the provided fields and re-validates uniqueness on
/// rename.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = common::seed_and_login(&app, &pool, "alice", "USER").await;

    let body = serde_json::json!({ "name": "Work", "description": "day job" });
    let response = post_json_auth(&app, "/api/categories", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let body = serde_json::json!({ "name": "Home" });
    post_json_auth(&app, "/api/categories", &token, body).await;

    // Patch just the color: other fields stay.
    let body = serde_json::json!({ "color": "#000000" });
    let response = put_json_auth(&app, &format!("/api/categories/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Work");
    assert_eq!(json["description"], "day job");
    assert_eq!(json["color"], "#000000");

    // Renaming onto an existing name is a 400 conflict.
    let body = serde_json::json!({ "name": "Home" });
    let response = put_json_auth(&app, &format!("/api/categories/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Deleting works once, then the id is gone; absent ids are always 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = common::seed_and_login(&app, &pool, "alice", "USER").await;

    let body = serde_json::json!({ "name": "Doomed" });
    let response = post_json_auth(&app, "/api/categories", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(&app, &format!("/api/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category deleted successfully");

    let response = get_auth(&app, &format!("/api/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Structurally valid but absent id.
    let response = delete_auth(&app, "/api/categories/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
