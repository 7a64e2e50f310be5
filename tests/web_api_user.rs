//! Web API User Tests
//!
//! Integration tests for the user service endpoints.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use userboard::web::handlers::UserAppState;
use userboard::web::{create_health_router, create_user_router};
use userboard::{user, Database};

/// Create a test server with an in-memory users database.
async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory(user::MIGRATIONS)
        .await
        .expect("Failed to create test database");
    let router =
        create_user_router(Arc::new(UserAppState::new(db))).merge(create_health_router());
    TestServer::new(router).expect("Failed to create test server")
}

async fn sign_up(server: &TestServer, email: &str, name: &str) {
    server
        .post("/users/sign-up")
        .json(&json!({"email": email, "name": name, "password": "secret"}))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_sign_up_and_get_user() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;

    let response = server.get("/users/1").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"userId": 1, "email": "alice@example.com", "name": "Alice"})
    );
}

#[tokio::test]
async fn test_sign_up_response_has_no_body() {
    let server = create_test_server().await;

    let response = server
        .post("/users/sign-up")
        .json(&json!({"email": "bob@example.com", "name": "Bob", "password": "pw"}))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_sign_up_invalid_email() {
    let server = create_test_server().await;

    let response = server
        .post("/users/sign-up")
        .json(&json!({"email": "not-an-email", "name": "Alice", "password": "pw"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["email"].is_array());
}

#[tokio::test]
async fn test_sign_up_missing_field() {
    let server = create_test_server().await;

    let response = server
        .post("/users/sign-up")
        .json(&json!({"email": "alice@example.com", "password": "pw"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_sign_up_malformed_json() {
    let server = create_test_server().await;

    let response = server
        .post("/users/sign-up")
        .content_type("application/json")
        .text("{\"email\": ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let server = create_test_server().await;

    let response = server.get("/users/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_batch_lookup_partial() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;
    sign_up(&server, "bob@example.com", "Bob").await;
    sign_up(&server, "carol@example.com", "Carol").await;

    let response = server.get("/users").add_query_param("ids", "3,1,99").await;

    response.assert_status_ok();
    let users = response.json::<Vec<Value>>();
    let ids: Vec<i64> = users.iter().map(|u| u["userId"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(users[0]["name"], "Alice");
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_batch_lookup_duplicates_collapse() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;

    let response = server.get("/users").add_query_param("ids", "1,1,1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 1);
}

#[tokio::test]
async fn test_batch_lookup_large_id_set() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;
    sign_up(&server, "bob@example.com", "Bob").await;

    let ids = (1..=35_000)
        .map(|id: i64| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let response = server.get("/users").add_query_param("ids", ids).await;

    response.assert_status_ok();
    let users = response.json::<Vec<Value>>();
    let found: Vec<i64> = users.iter().map(|u| u["userId"].as_i64().unwrap()).collect();
    assert_eq!(found, vec![1, 2]);
}

#[tokio::test]
async fn test_batch_lookup_invalid_id() {
    let server = create_test_server().await;

    let response = server.get("/users").add_query_param("ids", "1,abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_batch_lookup_empty_ids() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;

    let response = server.get("/users").add_query_param("ids", "").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_list_all_users_without_ids() {
    let server = create_test_server().await;
    sign_up(&server, "alice@example.com", "Alice").await;
    sign_up(&server, "bob@example.com", "Bob").await;

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 2);
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
