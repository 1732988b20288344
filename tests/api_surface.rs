//! HTTP API Surface Tests
//!
//! Exercises the six CRUD operations end to end against a scratch
//! SQLite database, driving the router in-process without a socket:
//! - Create echoes input fields and assigns monotone identities
//! - Read-after-create returns the identical body
//! - Missing rows produce the fixed per-kind 404 message
//! - Integrity violations map to 409 / 422

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use shopd::http_server::{HttpServer, HttpServerConfig};
use shopd::store::Store;

// =============================================================================
// Helper Functions
// =============================================================================

async fn setup_router() -> (TempDir, Router) {
    let tmp = TempDir::new().unwrap();
    let store = Store::open(&tmp.path().join("shopd.db")).await.unwrap();
    let server = HttpServer::with_config(HttpServerConfig::default(), Arc::new(store));
    (tmp, server.router())
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Non-JSON bodies (extractor rejections) come back as Null
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn create_user(router: &Router, email: &str) -> Value {
    let (status, body) = post_json(
        router,
        "/users/",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "password": "x"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn create_product(router: &Router) -> Value {
    let (status, body) = post_json(
        router,
        "/products/",
        json!({
            "name": "Analytical Engine",
            "description": "A general-purpose computer",
            "price": 4999
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// User Tests
// =============================================================================

/// Create echoes the input fields, assigns id 1 on a fresh database
/// and withholds the password.
#[tokio::test]
async fn test_create_user_echoes_fields() {
    let (_tmp, router) = setup_router().await;

    let (status, body) = post_json(
        &router,
        "/users/",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "password": "x"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com"
        })
    );
}

/// Reading a just-created user returns the identical body.
#[tokio::test]
async fn test_read_after_create_returns_identical_user() {
    let (_tmp, router) = setup_router().await;

    let created = create_user(&router, "ada@example.com").await;
    let (status, fetched) = get(&router, "/users/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

/// Identities are assigned in order, starting from 1.
#[tokio::test]
async fn test_user_ids_are_monotonic() {
    let (_tmp, router) = setup_router().await;

    for i in 1..=3 {
        let body = create_user(&router, &format!("user{}@example.com", i)).await;
        assert_eq!(body["id"], json!(i));
    }
}

/// Absent users produce the fixed message.
#[tokio::test]
async fn test_missing_user_returns_404() {
    let (_tmp, router) = setup_router().await;

    let (status, body) = get(&router, "/users/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("User not found"));
    assert_eq!(body["code"], json!(404));
}

/// A second user with the same email is rejected with 409.
#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let (_tmp, router) = setup_router().await;

    create_user(&router, "ada@example.com").await;

    let (status, body) = post_json(
        &router,
        "/users/",
        json!({
            "first_name": "Augusta",
            "last_name": "King",
            "email": "ada@example.com",
            "password": "y"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!("Email is already registered"));
}

/// A payload missing a required field is rejected before any write.
#[tokio::test]
async fn test_malformed_user_payload_rejected() {
    let (_tmp, router) = setup_router().await;

    let (status, _body) = post_json(
        &router,
        "/users/",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was persisted
    let (status, _body) = get(&router, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Product Tests
// =============================================================================

/// Create echoes the input fields; all product fields are exposed.
#[tokio::test]
async fn test_create_and_read_product() {
    let (_tmp, router) = setup_router().await;

    let created = create_product(&router).await;
    assert_eq!(
        created,
        json!({
            "id": 1,
            "name": "Analytical Engine",
            "description": "A general-purpose computer",
            "price": 4999
        })
    );

    let (status, fetched) = get(&router, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

/// Absent products produce the fixed message.
#[tokio::test]
async fn test_missing_product_returns_404() {
    let (_tmp, router) = setup_router().await;

    let (status, body) = get(&router, "/products/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Product not found"));
}

/// A wrongly typed field (price as string) is a client error.
#[tokio::test]
async fn test_wrongly_typed_product_payload_rejected() {
    let (_tmp, router) = setup_router().await;

    let (status, _body) = post_json(
        &router,
        "/products/",
        json!({
            "name": "Engine",
            "description": "x",
            "price": "cheap"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Order Tests
// =============================================================================

/// Orders default to pending with a populated order_date; the caller
/// supplies neither.
#[tokio::test]
async fn test_create_order_defaults() {
    let (_tmp, router) = setup_router().await;

    create_user(&router, "ada@example.com").await;
    create_product(&router).await;

    let (status, body) =
        post_json(&router, "/orders/", json!({"user_id": 1, "product_id": 1})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["user_id"], json!(1));
    assert_eq!(body["product_id"], json!(1));
    assert_eq!(body["status"], json!("pending"));
    assert!(body["order_date"].is_string());

    let (status, fetched) = get(&router, "/orders/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

/// Absent orders produce the fixed message.
#[tokio::test]
async fn test_missing_order_returns_404() {
    let (_tmp, router) = setup_router().await;

    let (status, body) = get(&router, "/orders/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Order not found"));
}

/// An order referencing rows that do not exist is rejected with 422
/// and nothing is written.
#[tokio::test]
async fn test_dangling_order_references_rejected() {
    let (_tmp, router) = setup_router().await;

    let (status, body) =
        post_json(&router, "/orders/", json!({"user_id": 42, "product_id": 7})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        json!("Order references a user or product that does not exist")
    );

    // A valid user alone is not enough; the product must resolve too
    create_user(&router, "ada@example.com").await;
    let (status, _body) =
        post_json(&router, "/orders/", json!({"user_id": 1, "product_id": 7})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _body) = get(&router, "/orders/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Back-Reference Tests
// =============================================================================

/// Orders are reachable from their user and product by query.
#[tokio::test]
async fn test_order_listings_per_user_and_product() {
    let (_tmp, router) = setup_router().await;

    create_user(&router, "ada@example.com").await;
    create_user(&router, "grace@example.com").await;
    create_product(&router).await;

    post_json(&router, "/orders/", json!({"user_id": 1, "product_id": 1})).await;
    post_json(&router, "/orders/", json!({"user_id": 1, "product_id": 1})).await;
    post_json(&router, "/orders/", json!({"user_id": 2, "product_id": 1})).await;

    let (status, body) = get(&router, "/users/1/orders").await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o["user_id"] == json!(1)));

    let (status, body) = get(&router, "/products/1/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Listing for an unknown user is a 404, not an empty list
    let (status, body) = get(&router, "/users/999/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("User not found"));
}

// =============================================================================
// Health Check
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (_tmp, router) = setup_router().await;

    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
