//! Staff domain types.

use chrono::NaiveDate;
use fleetdesk_core::{Department, Email, EmploymentType, Money, PaymentMethod, SalaryPaymentId,
                     ShiftKind, StaffId, StaffRole, StaffStatus};
use serde::{Deserialize, Serialize};

use super::booking::BookingSummary;

/// A staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    /// Staff ID.
    pub id: StaffId,
    /// Full legal name.
    pub full_name: String,
    /// Work email.
    pub email: Option<Email>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Role.
    pub role: StaffRole,
    /// Department.
    pub department: Department,
    /// Contract type.
    pub employment_type: EmploymentType,
    /// Assigned shift.
    pub shift: ShiftKind,
    /// Monthly salary.
    pub salary: Money,
    /// Payout bank details, when on file.
    pub bank_details: Option<BankDetails>,
    /// Employment status.
    pub status: StaffStatus,
    /// Hire date.
    pub hired_on: NaiveDate,
    /// Salary payment history (populated on detail fetch).
    #[serde(default)]
    pub salary_payments: Vec<SalaryPayment>,
    /// Booking assignments (drivers only; populated on detail fetch).
    #[serde(default)]
    pub assigned_bookings: Vec<BookingSummary>,
}

/// Bank account used for salary payouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetails {
    /// Bank name.
    pub bank_name: String,
    /// Account holder name.
    pub account_name: String,
    /// Account number.
    pub account_number: String,
}

/// A recorded salary payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryPayment {
    /// Payment ID.
    pub id: SalaryPaymentId,
    /// Date the payout was made.
    pub paid_on: NaiveDate,
    /// Amount paid.
    pub amount: Money,
    /// Pay period label (e.g., "2026-07").
    pub period: String,
    /// How the payout was made.
    pub method: PaymentMethod,
    /// Bank or processor reference.
    pub reference: Option<String>,
}

/// Input for hiring a staff member.
#[derive(Debug, Clone, Serialize)]
pub struct StaffCreateRequest {
    /// Full legal name.
    pub full_name: String,
    /// Work email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role.
    pub role: StaffRole,
    /// Department.
    pub department: Department,
    /// Contract type.
    pub employment_type: EmploymentType,
    /// Assigned shift.
    pub shift: ShiftKind,
    /// Monthly salary.
    pub salary: Money,
    /// Payout bank details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    /// Hire date.
    pub hired_on: NaiveDate,
}

/// Input for updating a staff member. `None` fields are left untouched.
///
/// Status is intentionally absent: lifecycle changes go through the
/// dedicated suspend/terminate/reactivate endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffUpdateRequest {
    /// Full legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Work email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
    /// Department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    /// Contract type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    /// Assigned shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftKind>,
    /// Monthly salary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Money>,
    /// Payout bank details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

/// Query parameters for the paginated staff list.
///
/// Filters are applied server-side so pagination metadata reflects the
/// filtered count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffListParams {
    /// Restrict to one employment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StaffStatus>,
    /// Restrict to one role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
    /// Restrict to one department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
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

/// Input for recording a salary payout.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryPaymentRequest {
    /// Amount to pay.
    pub amount: Money,
    /// Pay period label (e.g., "2026-07").
    pub period: String,
    /// How the payout is made.
    pub method: PaymentMethod,
    /// Bank or processor reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_decode_minimal() {
        let json = r#"{
            "id": 3,
            "full_name": "Brian Otieno",
            "email": null,
            "phone": "+254711111111",
            "role": "driver",
            "department": "operations",
            "employment_type": "full_time",
            "shift": "morning",
            "salary": {"amount": "900.00", "currency_code": "USD"},
            "bank_details": null,
            "status": "active",
            "hired_on": "2025-03-01"
        }"#;
        let staff: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, StaffId::new(3));
        assert_eq!(staff.role, StaffRole::Driver);
        assert_eq!(staff.status, StaffStatus::Active);
        assert!(staff.salary_payments.is_empty());
    }

    #[test]
    fn test_list_params_serialize_sparse() {
        let params = StaffListParams {
            status: Some(StaffStatus::Suspended),
            ..StaffListParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"status": "suspended"}));
    }
}
