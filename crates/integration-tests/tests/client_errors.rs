//! Error taxonomy mapping against a mock fleet API.

#![allow(clippy::expect_used)]

use axum::http::{StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use fleetdesk_admin::api::{ApiError, ErrorKind};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_integration_tests::spawn_mock_fleet;
use serde_json::json;

#[tokio::test]
async fn validation_error_keeps_field_and_message() {
    let router = Router::new().route(
        "/cars",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "year is out of range", "field": "year"})),
            )
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_cars(&mut store, &client)
        .await
        .expect_err("expected a validation error");

    match &err {
        ApiError::Validation { field, message } => {
            assert_eq!(field.as_deref(), Some("year"));
            assert_eq!(message, "year is out of range");
        }
        other => panic!("expected Validation, got {other:?}"),
    }

    // The slice holds the same failure, rendered
    let slice_error = store.cars.error.expect("slice error not set");
    assert_eq!(slice_error.kind, ErrorKind::Validation);
    assert_eq!(slice_error.message, "year is out of range");
    assert!(!store.cars.loading);
}

#[tokio::test]
async fn server_error_detail_is_hidden_from_the_rendered_message() {
    let router = Router::new().route(
        "/cars",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "pg pool exhausted"})),
            )
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_cars(&mut store, &client)
        .await
        .expect_err("expected a server error");

    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    let slice_error = store.cars.error.expect("slice error not set");
    assert_eq!(slice_error.kind, ErrorKind::Server);
    assert!(!slice_error.message.contains("pg pool"));
}

#[tokio::test]
async fn unauthorized_maps_to_its_own_kind() {
    let router = Router::new().route("/customers", get(|| async { StatusCode::UNAUTHORIZED }));
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_customers(&mut store, &client)
        .await
        .expect_err("expected unauthorized");

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(
        store.customers.error.expect("slice error not set").kind,
        ErrorKind::Unauthorized
    );
}

#[tokio::test]
async fn not_found_carries_the_server_message() {
    let router = Router::new().route(
        "/cars/7",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "car 7 does not exist"})),
            )
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_car(&mut store, &client, fleetdesk_core::CarId::new(7))
        .await
        .expect_err("expected not found");

    match err {
        ApiError::NotFound(message) => assert_eq!(message, "car 7 does not exist"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let router = Router::new().route(
        "/staff",
        get(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, "7")],
                Json(json!({})),
            )
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_staff(&mut store, &client, 1)
        .await
        .expect_err("expected rate limit");

    assert!(matches!(
        err,
        ApiError::RateLimited {
            retry_after_secs: 7
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/cars", get(|| async { "not json" }));
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let err = ops::fetch_cars(&mut store, &client)
        .await
        .expect_err("expected a decode error");

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(
        store.cars.error.expect("slice error not set").kind,
        ErrorKind::Decode
    );
}

#[tokio::test]
async fn begin_clears_previous_error_on_retry() {
    let router = Router::new()
        .route(
            "/cars",
            get(|| async { (StatusCode::BAD_REQUEST, Json(json!({"message": "nope"}))) }),
        )
        .route(
            "/customers",
            get(|| async { Json(json!([])) }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let _ = ops::fetch_cars(&mut store, &client).await;
    assert!(store.cars.error.is_some());

    // A new operation on the same slice clears the stale error
    store.cars.begin();
    assert!(store.cars.error.is_none());
    assert!(store.cars.loading);

    // Other slices are untouched by the cars failure
    ops::fetch_customers(&mut store, &client)
        .await
        .expect("customers fetch failed");
    assert!(store.customers.error.is_none());
}
