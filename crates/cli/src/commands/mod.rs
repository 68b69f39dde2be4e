//! CLI command implementations.

pub mod bookings;
pub mod cars;
pub mod customers;
pub mod dashboard;
pub mod staff;

use fleetdesk_core::{
    BookingStatus, CarStatus, Department, LoyaltyTier, PaymentStatus, StaffStatus,
};

/// Parse a serde `snake_case` enum value from a CLI argument.
fn parse_wire_enum<T: serde::de::DeserializeOwned>(s: &str, what: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("invalid {what}: {s}"))
}

pub(crate) fn parse_car_status(s: &str) -> Result<CarStatus, String> {
    parse_wire_enum(s, "car status")
}

pub(crate) fn parse_booking_status(s: &str) -> Result<BookingStatus, String> {
    parse_wire_enum(s, "booking status")
}

pub(crate) fn parse_payment_status(s: &str) -> Result<PaymentStatus, String> {
    parse_wire_enum(s, "payment status")
}

pub(crate) fn parse_staff_status(s: &str) -> Result<StaffStatus, String> {
    parse_wire_enum(s, "staff status")
}

pub(crate) fn parse_department(s: &str) -> Result<Department, String> {
    parse_wire_enum(s, "department")
}

pub(crate) fn parse_loyalty_tier(s: &str) -> Result<LoyaltyTier, String> {
    parse_wire_enum(s, "loyalty tier")
}

pub(crate) fn parse_date(s: &str) -> Result<chrono::NaiveDate, String> {
    s.parse().map_err(|_| format!("invalid date (YYYY-MM-DD): {s}"))
}
