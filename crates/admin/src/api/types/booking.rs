//! Booking domain types.

use chrono::{DateTime, NaiveDate, Utc};
use fleetdesk_core::{BookingId, BookingStatus, CarId, CustomerId, Email, GuarantorId,
                     LoyaltyTier, Money, PaymentMethod, PaymentStatus};
use serde::{Deserialize, Serialize};

use super::common::Guarantor;

// =============================================================================
// Embedded snapshots
// =============================================================================

/// Point-in-time copy of the booked car.
///
/// Snapshots are denormalized by the server when the booking is created and
/// never back-patched: editing the car elsewhere does not update copies
/// already embedded in bookings held in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSnapshot {
    /// Car ID (resolvable against the cars slice for the live record).
    pub id: CarId,
    /// Manufacturer at booking time.
    pub make: String,
    /// Model at booking time.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Registration plate at booking time.
    pub registration_number: String,
    /// Daily rate the booking was priced at.
    pub daily_rate: Money,
}

/// Point-in-time copy of the booking customer. Same snapshot semantics as
/// [`CarSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    /// Customer ID.
    pub id: CustomerId,
    /// Full name at booking time.
    pub full_name: String,
    /// Contact email at booking time.
    pub email: Option<Email>,
    /// Contact phone at booking time.
    pub phone: Option<String>,
    /// Loyalty tier at booking time.
    pub loyalty_tier: LoyaltyTier,
}

// =============================================================================
// Booking
// =============================================================================

/// A rental booking.
///
/// Created and priced entirely server-side; `start_date <= end_date` is
/// assumed from the server and not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Customer snapshot.
    pub customer: CustomerSnapshot,
    /// Car snapshot.
    pub car: CarSnapshot,
    /// Guarantor attached at creation, if any.
    pub guarantor: Option<Guarantor>,
    /// First rental day.
    pub start_date: NaiveDate,
    /// Last rental day.
    pub end_date: NaiveDate,
    /// Total priced amount.
    pub total_amount: Money,
    /// Amount received so far.
    pub amount_paid: Money,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Compact booking reference embedded in car and staff detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Booking ID.
    pub id: BookingId,
    /// Customer display name.
    pub customer_name: String,
    /// First rental day.
    pub start_date: NaiveDate,
    /// Last rental day.
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: BookingStatus,
}

// =============================================================================
// Requests
// =============================================================================

/// Input for creating a booking. Pricing happens server-side.
#[derive(Debug, Clone, Serialize)]
pub struct BookingCreateRequest {
    /// Customer making the booking.
    pub customer_id: CustomerId,
    /// Car being booked.
    pub car_id: CarId,
    /// Guarantor to attach, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor_id: Option<GuarantorId>,
    /// First rental day.
    pub start_date: NaiveDate,
    /// Last rental day.
    pub end_date: NaiveDate,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for updating a booking. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingUpdateRequest {
    /// First rental day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last rental day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Amount received so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Money>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query parameters for the paginated booking list.
///
/// Filters are applied server-side so pagination metadata reflects the
/// filtered count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingListParams {
    /// Restrict to one lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    /// Restrict to one payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// Restrict to one customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
    /// Restrict to one car.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<CarId>,
    /// Free-text search forwarded to the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query for checking whether a car is free over a date range.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityQuery {
    /// Car to check.
    pub car: CarId,
    /// First rental day.
    pub start_date: NaiveDate,
    /// Last rental day.
    pub end_date: NaiveDate,
}

/// Server's answer to an availability check.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the car is free over the whole range.
    pub available: bool,
    /// Bookings that overlap the range, when not available.
    #[serde(default)]
    pub conflicting_bookings: Vec<BookingId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_serialize_sparse() {
        let params = BookingListParams {
            status: Some(BookingStatus::Active),
            page: Some(2),
            page_size: Some(10),
            ..BookingListParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "active", "page": 2, "page_size": 10})
        );
    }

    #[test]
    fn test_availability_response_defaults_conflicts() {
        let resp: AvailabilityResponse = serde_json::from_str(r#"{"available": true}"#).unwrap();
        assert!(resp.available);
        assert!(resp.conflicting_bookings.is_empty());
    }
}
