//! End-to-end store flows against a mock fleet API.

#![allow(clippy::expect_used)]

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{BookingId, CarId, CarStatus, StaffId, StaffStatus};
use fleetdesk_integration_tests::{
    booking_json, car_json, dashboard_json, spawn_mock_fleet, staff_json,
};
use serde_json::{Value, json};

#[tokio::test]
async fn paginated_booking_fetch_recomputes_pagination() {
    let results: Vec<Value> = (1..=10)
        .map(|i| booking_json(i, "Amina Njoroge", "active"))
        .collect();
    let router = Router::new().route(
        "/bookings",
        get(move || {
            let results = results.clone();
            async move { Json(json!({"count": 25, "results": results})) }
        }),
    );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_bookings(&mut store, &client, 2)
        .await
        .expect("fetch failed");

    assert_eq!(store.bookings.items.len(), 10);
    assert_eq!(store.bookings.pagination.current_page, 2);
    assert_eq!(store.bookings.pagination.total_items, 25);
    assert_eq!(store.bookings.pagination.total_pages, 3);
    assert_eq!(store.bookings.pagination.items_per_page, 10);
    assert!(!store.bookings.loading);
    assert!(store.bookings.error.is_none());
}

#[tokio::test]
async fn bare_array_car_fetch_and_create_unshift() {
    let router = Router::new()
        .route(
            "/cars",
            get(|| async { Json(json!([car_json(1, "Toyota", "Corolla", "available")])) })
                .post(|| async { Json(car_json(9, "Subaru", "Forester", "available")) }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_cars(&mut store, &client).await.expect("fetch failed");
    assert_eq!(store.cars.items.len(), 1);
    assert!(!store.cars.items.iter().any(|c| c.id == CarId::new(9)));

    let request = fleetdesk_admin::api::types::CarCreateRequest {
        make: "Subaru".to_string(),
        model: "Forester".to_string(),
        year: 2023,
        color: "blue".to_string(),
        registration_number: "KAA 009X".to_string(),
        daily_rate: fleetdesk_core::Money::zero("USD"),
        weekly_rate: fleetdesk_core::Money::zero("USD"),
        monthly_rate: fleetdesk_core::Money::zero("USD"),
    };
    ops::create_car(&mut store, &client, &request, vec![])
        .await
        .expect("create failed");

    assert_eq!(store.cars.items.len(), 2);
    assert_eq!(store.cars.items.first().expect("empty list").id, CarId::new(9));
}

#[tokio::test]
async fn suspend_staff_updates_status_and_metrics() {
    let router = Router::new()
        .route(
            "/staff",
            get(|| async {
                Json(json!({
                    "count": 2,
                    "results": [
                        staff_json(1, "Amina Njoroge", "active"),
                        staff_json(2, "Brian Otieno", "active"),
                    ]
                }))
            }),
        )
        .route(
            "/dashboard/metrics",
            get(|| async { Json(dashboard_json(5, 0)) }),
        )
        .route("/staff/1/suspend", post(|| async { Json(json!({"id": 1})) }));
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_dashboard(&mut store, &client)
        .await
        .expect("dashboard fetch failed");
    ops::fetch_staff(&mut store, &client, 1)
        .await
        .expect("staff fetch failed");

    ops::suspend_staff(&mut store, &client, StaffId::new(1))
        .await
        .expect("suspend failed");

    let target = store
        .staff
        .items
        .iter()
        .find(|s| s.id == StaffId::new(1))
        .expect("staff 1 missing");
    let other = store
        .staff
        .items
        .iter()
        .find(|s| s.id == StaffId::new(2))
        .expect("staff 2 missing");
    assert_eq!(target.status, StaffStatus::Suspended);
    assert_eq!(other.status, StaffStatus::Active);

    let metrics = store.staff.metrics.expect("metrics not seeded");
    assert_eq!(metrics.active_staff, 4);
    assert_eq!(metrics.suspended_staff, 1);
}

#[tokio::test]
async fn delete_car_clears_matching_selection() {
    let router = Router::new()
        .route(
            "/cars",
            get(|| async {
                Json(json!([
                    car_json(1, "Toyota", "Corolla", "available"),
                    car_json(2, "Mazda", "Demio", "rented"),
                ]))
            }),
        )
        .route(
            "/cars/2",
            get(|| async { Json(car_json(2, "Mazda", "Demio", "rented")) })
                .delete(|| async { axum::http::StatusCode::NO_CONTENT }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_cars(&mut store, &client).await.expect("fetch failed");
    ops::fetch_car(&mut store, &client, CarId::new(2))
        .await
        .expect("detail fetch failed");
    assert!(store.cars.selected.is_some());

    ops::delete_car(&mut store, &client, CarId::new(2))
        .await
        .expect("delete failed");

    assert!(!store.cars.items.iter().any(|c| c.id == CarId::new(2)));
    assert!(store.cars.selected.is_none());
}

#[tokio::test]
async fn cancel_booking_touches_only_target() {
    let router = Router::new()
        .route(
            "/bookings",
            get(|| async {
                Json(json!({
                    "count": 2,
                    "results": [
                        booking_json(1, "Amina Njoroge", "active"),
                        booking_json(2, "Brian Otieno", "active"),
                    ]
                }))
            }),
        )
        .route(
            "/bookings/1/cancel",
            post(|| async { Json(json!({"id": 1})) }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_bookings(&mut store, &client, 1)
        .await
        .expect("fetch failed");
    ops::cancel_booking(&mut store, &client, BookingId::new(1))
        .await
        .expect("cancel failed");

    let cancelled = store
        .bookings
        .items
        .iter()
        .find(|b| b.id == BookingId::new(1))
        .expect("booking 1 missing");
    let untouched = store
        .bookings
        .items
        .iter()
        .find(|b| b.id == BookingId::new(2))
        .expect("booking 2 missing");
    assert_eq!(cancelled.status, fleetdesk_core::BookingStatus::Cancelled);
    assert_eq!(untouched.status, fleetdesk_core::BookingStatus::Active);
    assert_eq!(untouched.customer.full_name, "Brian Otieno");
}

#[tokio::test]
async fn car_status_transition_applies_in_place() {
    let router = Router::new()
        .route(
            "/cars",
            get(|| async { Json(json!([car_json(1, "Toyota", "Corolla", "available")])) }),
        )
        .route(
            "/cars/1/status",
            post(|| async { Json(json!({"id": 1})) }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    ops::fetch_cars(&mut store, &client).await.expect("fetch failed");
    ops::set_car_status(&mut store, &client, CarId::new(1), CarStatus::Maintenance)
        .await
        .expect("transition failed");

    assert_eq!(
        store.cars.items.first().expect("empty list").status,
        CarStatus::Maintenance
    );
}

#[tokio::test]
async fn guarantor_and_history_flow() {
    let router = Router::new()
        .route(
            "/customers/8",
            get(|| async {
                Json(fleetdesk_integration_tests::customer_json(
                    8,
                    "Amina Njoroge",
                    "gold",
                ))
            }),
        )
        .route(
            "/customers/8/bookings",
            get(|| async { Json(json!([booking_json(1, "Amina Njoroge", "completed")])) }),
        )
        .route(
            "/customers/8/guarantors",
            post(|| async {
                Json(json!({
                    "id": 4,
                    "full_name": "Grace Wanjiku",
                    "phone": "+254722222222",
                    "email": null,
                    "national_id": "ID-9981",
                    "relationship": "spouse"
                }))
            }),
        )
        .route(
            "/customers/8/guarantors/4",
            delete(|| async { axum::http::StatusCode::NO_CONTENT }),
        );
    let client = spawn_mock_fleet(router).await;

    let mut store = Store::new();
    let id = fleetdesk_core::CustomerId::new(8);
    ops::fetch_customer(&mut store, &client, id)
        .await
        .expect("customer fetch failed");
    ops::fetch_customer_bookings(&mut store, &client, id)
        .await
        .expect("history fetch failed");

    let selected = store.customers.selected.as_ref().expect("no selection");
    assert_eq!(selected.bookings.len(), 1);

    let request = fleetdesk_admin::api::types::GuarantorRequest {
        full_name: "Grace Wanjiku".to_string(),
        phone: "+254722222222".to_string(),
        email: None,
        national_id: "ID-9981".to_string(),
        relationship: Some("spouse".to_string()),
    };
    ops::add_guarantor(&mut store, &client, id, &request)
        .await
        .expect("add guarantor failed");
    assert_eq!(
        store
            .customers
            .selected
            .as_ref()
            .expect("no selection")
            .guarantors
            .len(),
        1
    );

    ops::remove_guarantor(&mut store, &client, id, fleetdesk_core::GuarantorId::new(4))
        .await
        .expect("remove guarantor failed");
    assert!(store
        .customers
        .selected
        .as_ref()
        .expect("no selection")
        .guarantors
        .is_empty());
}
