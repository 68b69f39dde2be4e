//! Customer domain types.

use chrono::{DateTime, Utc};
use fleetdesk_core::{CustomerId, Email, LoyaltyTier, Money};
use serde::{Deserialize, Serialize};

use super::booking::Booking;
use super::common::Guarantor;

/// A rental customer.
///
/// `total_bookings`, `total_spent`, `last_booking`, and the loyalty tier
/// are aggregated server-side; the booking history is fetched lazily per
/// customer and stays empty on list fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,
    /// Full legal name.
    pub full_name: String,
    /// Contact email.
    pub email: Option<Email>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Residential address.
    pub address: Option<String>,
    /// National ID or passport number.
    pub national_id: Option<String>,
    /// Driver license number.
    pub driver_license: Option<String>,
    /// Lifetime number of bookings (server aggregate).
    pub total_bookings: u64,
    /// Lifetime amount spent (server aggregate).
    pub total_spent: Money,
    /// Timestamp of the most recent booking.
    pub last_booking: Option<DateTime<Utc>>,
    /// Ordinal loyalty classification (server-maintained).
    pub loyalty_tier: LoyaltyTier,
    /// Guarantors on file.
    #[serde(default)]
    pub guarantors: Vec<Guarantor>,
    /// Booking history (lazily fetched; empty until requested).
    #[serde(default)]
    pub bookings: Vec<Booking>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreateRequest {
    /// Full legal name.
    pub full_name: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Residential address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// National ID or passport number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Driver license number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_license: Option<String>,
}

/// Input for updating a customer. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdateRequest {
    /// Full legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Residential address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// National ID or passport number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Driver license number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_license: Option<String>,
}
