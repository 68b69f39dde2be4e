//! Car domain types.

use chrono::{DateTime, NaiveDate, Utc};
use fleetdesk_core::{CarId, CarStatus, InsurancePolicyId, MaintenanceRecordId, Money,
                     TimelineEventId};
use serde::{Deserialize, Serialize};

use super::booking::BookingSummary;

// =============================================================================
// Car
// =============================================================================

/// A car in the fleet.
///
/// `total_revenue` and `total_expenses` are rollups maintained by the
/// server and only echoed here. Status transitions are not validated
/// client-side; whatever the server answers is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Car ID.
    pub id: CarId,
    /// Manufacturer (e.g., "Toyota").
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Exterior color.
    pub color: String,
    /// Registration plate number.
    pub registration_number: String,
    /// Rental rate per day.
    pub daily_rate: Money,
    /// Rental rate per week.
    pub weekly_rate: Money,
    /// Rental rate per month.
    pub monthly_rate: Money,
    /// Operational status.
    pub status: CarStatus,
    /// Lifetime rental revenue (server rollup).
    pub total_revenue: Money,
    /// Lifetime maintenance and insurance expenses (server rollup).
    pub total_expenses: Money,
    /// Image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// History of notable events (populated on detail fetch).
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    /// Maintenance history (populated on detail fetch).
    #[serde(default)]
    pub maintenance_records: Vec<MaintenanceRecord>,
    /// Insurance policies (populated on detail fetch).
    #[serde(default)]
    pub insurance_policies: Vec<InsurancePolicy>,
    /// Recent bookings of this car (populated on detail fetch).
    #[serde(default)]
    pub recent_bookings: Vec<BookingSummary>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A dated event in a car's history (acquisition, rental, damage, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Event ID.
    pub id: TimelineEventId,
    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,
    /// Event kind as reported by the server (e.g., "rented", "serviced").
    pub kind: String,
    /// Human-readable description.
    pub description: String,
}

/// A completed maintenance job on a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Record ID.
    pub id: MaintenanceRecordId,
    /// Date the work was performed.
    pub performed_at: NaiveDate,
    /// What was done.
    pub description: String,
    /// Cost of the work.
    pub cost: Money,
    /// Odometer reading at service time, when recorded.
    pub odometer_km: Option<i64>,
    /// Workshop that did the work.
    pub workshop: Option<String>,
}

/// An insurance policy covering a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Policy ID.
    pub id: InsurancePolicyId,
    /// Insurance provider name.
    pub provider: String,
    /// Policy number with the provider.
    pub policy_number: String,
    /// Coverage start date.
    pub starts_on: NaiveDate,
    /// Coverage end date.
    pub expires_on: NaiveDate,
    /// Premium paid.
    pub premium: Money,
}

// =============================================================================
// Requests
// =============================================================================

/// Input for registering a new car.
#[derive(Debug, Clone, Serialize)]
pub struct CarCreateRequest {
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Exterior color.
    pub color: String,
    /// Registration plate number.
    pub registration_number: String,
    /// Rental rate per day.
    pub daily_rate: Money,
    /// Rental rate per week.
    pub weekly_rate: Money,
    /// Rental rate per month.
    pub monthly_rate: Money,
}

/// Input for updating a car. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CarUpdateRequest {
    /// Manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Model year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Exterior color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Registration plate number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    /// Rental rate per day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<Money>,
    /// Rental rate per week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_rate: Option<Money>,
    /// Rental rate per month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rate: Option<Money>,
    /// Operational status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CarStatus>,
}

/// Input for recording a maintenance job.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceRecordRequest {
    /// Date the work was performed.
    pub performed_at: NaiveDate,
    /// What was done.
    pub description: String,
    /// Cost of the work.
    pub cost: Money,
    /// Odometer reading at service time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<i64>,
    /// Workshop that did the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_car_decode_minimal() {
        // Nested collections are optional on list fetches
        let json = r#"{
            "id": 1,
            "make": "Toyota",
            "model": "Corolla",
            "year": 2022,
            "color": "white",
            "registration_number": "KAA 123X",
            "daily_rate": {"amount": "45.00", "currency_code": "USD"},
            "weekly_rate": {"amount": "280.00", "currency_code": "USD"},
            "monthly_rate": {"amount": "1000.00", "currency_code": "USD"},
            "status": "available",
            "total_revenue": {"amount": "0", "currency_code": "USD"},
            "total_expenses": {"amount": "0", "currency_code": "USD"},
            "created_at": "2026-01-05T09:00:00Z"
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, CarId::new(1));
        assert_eq!(car.status, CarStatus::Available);
        assert!(car.timeline.is_empty());
        assert!(car.maintenance_records.is_empty());
    }

    #[test]
    fn test_update_request_skips_untouched_fields() {
        let req = CarUpdateRequest {
            color: Some("silver".to_string()),
            ..CarUpdateRequest::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"color": "silver"}));
    }
}
