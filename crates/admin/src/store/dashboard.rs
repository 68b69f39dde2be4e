//! Dashboard slice.

use crate::api::ApiError;
use crate::api::types::DashboardMetrics;

use super::SliceError;

/// State container for the dashboard charts.
///
/// Holds the last fetched fleet-wide rollups verbatim; the optimistic
/// per-domain counters live in the staff and booking slices.
#[derive(Debug, Default)]
pub struct DashboardSlice {
    /// Last fetched metrics.
    pub metrics: Option<DashboardMetrics>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last failure, until the next fetch begins.
    pub error: Option<SliceError>,
}

impl DashboardSlice {
    /// A fetch entered flight: raise `loading`, clear the error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch failed.
    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(SliceError::from_api(err));
    }

    /// A fetch fulfilled.
    pub fn apply_metrics(&mut self, metrics: DashboardMetrics) {
        self.loading = false;
        self.metrics = Some(metrics);
    }
}
