//! Test support for FleetDesk integration tests.
//!
//! Each test assembles an axum router playing the fleet API, spawns it on
//! an ephemeral port, and drives the real `FleetClient` (and usually the
//! state layer) against it.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test tooling: panicking on setup failure is the point
#![allow(clippy::expect_used)]

use axum::Router;
use fleetdesk_admin::api::FleetClient;
use fleetdesk_admin::config::FleetConfig;
use secrecy::SecretString;
use serde_json::{Value, json};

/// Spawn `router` as a mock fleet API and return a client pointed at it.
///
/// The server task lives until the test's runtime shuts down.
pub async fn spawn_mock_fleet(router: Router) -> FleetClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock fleet listener");
    let addr = listener.local_addr().expect("mock fleet has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock fleet server crashed");
    });

    let api_url: url::Url = format!("http://{addr}")
        .parse()
        .expect("mock fleet addr is not a URL");
    let config = FleetConfig::new(api_url, SecretString::from("integration-test-token"));
    FleetClient::new(&config).expect("failed to build fleet client")
}

/// Money fixture in the wire shape.
#[must_use]
pub fn money_json(amount: &str) -> Value {
    json!({"amount": amount, "currency_code": "USD"})
}

/// Car fixture in the wire shape (list view, no nested collections).
#[must_use]
pub fn car_json(id: i64, make: &str, model: &str, status: &str) -> Value {
    json!({
        "id": id,
        "make": make,
        "model": model,
        "year": 2022,
        "color": "white",
        "registration_number": format!("KAA {id:03}X"),
        "daily_rate": money_json("45.00"),
        "weekly_rate": money_json("280.00"),
        "monthly_rate": money_json("1000.00"),
        "status": status,
        "total_revenue": money_json("0"),
        "total_expenses": money_json("0"),
        "created_at": "2026-01-05T09:00:00Z"
    })
}

/// Booking fixture in the wire shape.
#[must_use]
pub fn booking_json(id: i64, customer_name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer": {
            "id": 100 + id,
            "full_name": customer_name,
            "email": null,
            "phone": null,
            "loyalty_tier": "bronze"
        },
        "car": {
            "id": 200 + id,
            "make": "Toyota",
            "model": "Corolla",
            "year": 2022,
            "registration_number": format!("KBB {id:03}Y"),
            "daily_rate": money_json("45.00")
        },
        "guarantor": null,
        "start_date": "2026-08-01",
        "end_date": "2026-08-05",
        "total_amount": money_json("180.00"),
        "amount_paid": money_json("0"),
        "status": status,
        "payment_status": "unpaid",
        "payment_method": "card",
        "notes": null,
        "created_at": "2026-07-28T12:00:00Z"
    })
}

/// Customer fixture in the wire shape.
#[must_use]
pub fn customer_json(id: i64, full_name: &str, tier: &str) -> Value {
    json!({
        "id": id,
        "full_name": full_name,
        "email": format!("c{id}@example.com"),
        "phone": format!("+2547000000{id:02}"),
        "address": null,
        "national_id": null,
        "driver_license": null,
        "total_bookings": 0,
        "total_spent": money_json("0"),
        "last_booking": null,
        "loyalty_tier": tier,
        "created_at": "2024-02-11T08:00:00Z"
    })
}

/// Staff fixture in the wire shape.
#[must_use]
pub fn staff_json(id: i64, full_name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "full_name": full_name,
        "email": null,
        "phone": null,
        "role": "agent",
        "department": "operations",
        "employment_type": "full_time",
        "shift": "morning",
        "salary": money_json("900.00"),
        "bank_details": null,
        "status": status,
        "hired_on": "2025-03-01"
    })
}

/// Dashboard metrics fixture in the wire shape.
#[must_use]
pub fn dashboard_json(active_staff: u64, suspended_staff: u64) -> Value {
    json!({
        "total_cars": 40,
        "available_cars": 22,
        "rented_cars": 14,
        "maintenance_cars": 4,
        "total_bookings": 510,
        "active_bookings": 14,
        "total_customers": 230,
        "active_staff": active_staff,
        "suspended_staff": suspended_staff,
        "total_revenue": money_json("182000.00")
    })
}
