//! Dashboard metric operations.

use tracing::instrument;

use super::types::DashboardMetrics;
use super::{ApiError, FleetClient};

impl FleetClient {
    /// Get the fleet-wide rollup metrics backing the dashboard charts.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.get("/dashboard/metrics").await
    }
}
