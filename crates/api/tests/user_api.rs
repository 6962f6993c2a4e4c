//! HTTP-level integration tests for the read-only users resource.
//!
//! Users are provisioned out of band (here via `UserRepo`), so these
//! tests seed through the repository and read through the API.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

use seasons_db::models::user::CreateUser;
use seasons_db::repositories::UserRepo;

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            season_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_list_and_retrieve(pool: PgPool) {
    let id = seed_user(&pool, "astrid").await;
    seed_user(&pool, "birgit").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["username"], "astrid");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "astrid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_users_list_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Read-only enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_reject_create(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({"username": "intruder"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_reject_update(pool: PgPool) {
    let id = seed_user(&pool, "astrid").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/users/{id}"),
        serde_json::json!({"username": "renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_reject_delete(pool: PgPool) {
    let id = seed_user(&pool, "astrid").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    // The record survived the attempt.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
