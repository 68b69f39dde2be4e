//! Dashboard metric types.

use fleetdesk_core::Money;
use serde::{Deserialize, Serialize};

/// Fleet-wide rollup metrics backing the dashboard charts.
///
/// The authoritative copy lives server-side; the staff and booking slices
/// additionally adjust their own counters optimistically on transitions
/// without waiting for a refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Cars in the fleet.
    pub total_cars: u64,
    /// Cars currently available.
    pub available_cars: u64,
    /// Cars currently rented out.
    pub rented_cars: u64,
    /// Cars in the workshop.
    pub maintenance_cars: u64,
    /// Lifetime bookings.
    pub total_bookings: u64,
    /// Bookings currently active.
    pub active_bookings: u64,
    /// Registered customers.
    pub total_customers: u64,
    /// Staff currently active.
    pub active_staff: u64,
    /// Staff currently suspended.
    pub suspended_staff: u64,
    /// Lifetime rental revenue.
    pub total_revenue: Money,
    /// Revenue per month, oldest first (chart series).
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// One month of the revenue chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, `YYYY-MM`.
    pub month: String,
    /// Revenue booked in that month.
    pub revenue: Money,
    /// Bookings created in that month.
    pub bookings: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_decode_without_series() {
        let json = r#"{
            "total_cars": 40,
            "available_cars": 22,
            "rented_cars": 14,
            "maintenance_cars": 4,
            "total_bookings": 510,
            "active_bookings": 14,
            "total_customers": 230,
            "active_staff": 18,
            "suspended_staff": 1,
            "total_revenue": {"amount": "182000.00", "currency_code": "USD"}
        }"#;
        let metrics: DashboardMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_cars, 40);
        assert!(metrics.monthly_revenue.is_empty());
    }
}
