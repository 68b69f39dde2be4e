//! Bulk messaging flows against a mock fleet API.

#![allow(clippy::expect_used)]

use axum::routing::post;
use axum::{Json, Router};
use fleetdesk_admin::api::types::{BulkMessageRequest, MessageChannel};
use fleetdesk_admin::api::ApiError;
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{CustomerId, MessageCampaignId};
use fleetdesk_integration_tests::spawn_mock_fleet;
use serde_json::json;

#[tokio::test]
async fn email_campaign_dispatch_returns_receipt() {
    let router = Router::new().route(
        "/messages/bulk",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["channel"], "email");
            assert_eq!(body["subject"], "August offers");
            assert_eq!(body["recipient_ids"], json!([1, 2, 3]));
            Json(json!({"campaign_id": 77, "accepted": 3, "rejected": 0}))
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let request = BulkMessageRequest {
        channel: MessageChannel::Email,
        subject: Some("August offers".to_string()),
        body: "Long weekend rates inside.".to_string(),
        recipient_ids: vec![CustomerId::new(1), CustomerId::new(2), CustomerId::new(3)],
        from: None,
    };

    let receipt = ops::send_bulk_message(&mut store, &client, &request)
        .await
        .expect("dispatch failed");

    assert_eq!(receipt.campaign_id, MessageCampaignId::new(77));
    assert_eq!(receipt.accepted, 3);
    assert_eq!(receipt.rejected, 0);
    assert!(!store.customers.loading);
    assert!(store.customers.error.is_none());
}

#[tokio::test]
async fn sms_with_subject_fails_before_any_request() {
    // No route registered: a request reaching the server would 404, and
    // the test asserts it never does by expecting the local validation
    let client = spawn_mock_fleet(Router::new()).await;

    let mut store = Store::new();
    let request = BulkMessageRequest {
        channel: MessageChannel::Sms,
        subject: Some("not allowed".to_string()),
        body: "Service notice".to_string(),
        recipient_ids: vec![CustomerId::new(1)],
        from: None,
    };

    let err = ops::send_bulk_message(&mut store, &client, &request)
        .await
        .expect_err("expected local validation");

    assert!(matches!(err, ApiError::Validation { .. }));
    assert!(store.customers.error.is_some());
}

#[tokio::test]
async fn partial_rejection_is_reported() {
    let router = Router::new().route(
        "/messages/bulk",
        post(|| async { Json(json!({"campaign_id": 78, "accepted": 2, "rejected": 1})) }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let request = BulkMessageRequest {
        channel: MessageChannel::Sms,
        subject: None,
        body: "Pickup reminder".to_string(),
        recipient_ids: vec![CustomerId::new(1), CustomerId::new(2), CustomerId::new(3)],
        from: None,
    };

    let receipt = ops::send_bulk_message(&mut store, &client, &request)
        .await
        .expect("dispatch failed");
    assert_eq!(receipt.accepted, 2);
    assert_eq!(receipt.rejected, 1);
}
