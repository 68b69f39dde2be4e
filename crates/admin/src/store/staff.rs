//! Staff slice and selectors.

use fleetdesk_core::{Department, StaffId, StaffRole, StaffStatus};

use crate::api::types::{SalaryPayment, Staff};
use crate::api::{ApiError, ListPayload};

use super::{Pagination, RequestSeq, SliceError};

/// Equality filters for the staff table. `None` means no constraint.
///
/// Like bookings, staff is server-paginated: the filters are forwarded as
/// list query parameters and re-applied over the loaded page by the
/// selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilters {
    /// Restrict to one employment status.
    pub status: Option<StaffStatus>,
    /// Restrict to one role.
    pub role: Option<StaffRole>,
    /// Restrict to one department.
    pub department: Option<Department>,
}

impl StaffFilters {
    fn matches(&self, staff: &Staff) -> bool {
        self.status.is_none_or(|status| staff.status == status)
            && self.role.is_none_or(|role| staff.role == role)
            && self
                .department
                .is_none_or(|department| staff.department == department)
    }
}

/// Compute the staff a table should render from the loaded page.
#[must_use]
pub fn filter_staff<'a>(
    items: &'a [Staff],
    search_term: &str,
    filters: &StaffFilters,
) -> Vec<&'a Staff> {
    let needle = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|staff| matches_search(staff, &needle) && filters.matches(staff))
        .collect()
}

fn matches_search(staff: &Staff, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    staff.full_name.to_lowercase().contains(needle)
        || staff
            .email
            .as_ref()
            .is_some_and(|email| email.as_str().contains(needle))
        || staff
            .phone
            .as_ref()
            .is_some_and(|phone| phone.to_lowercase().contains(needle))
}

/// Optimistically maintained staff headcount counters.
///
/// Seeded from the dashboard metrics fetch; moved by fixed per-transition
/// deltas (suspend: active -1 / suspended +1, and so on) without waiting
/// for a refetch. The authoritative copy is server-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffMetrics {
    /// Staff currently active.
    pub active_staff: u64,
    /// Staff currently suspended.
    pub suspended_staff: u64,
}

/// State container for the staff domain.
#[derive(Debug, Default)]
pub struct StaffSlice {
    /// Staff on the currently loaded page.
    pub items: Vec<Staff>,
    /// Staff member opened in the detail view.
    pub selected: Option<Staff>,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Last failure, until the next operation begins.
    pub error: Option<SliceError>,
    /// Table filters (also sent as list query parameters).
    pub filters: StaffFilters,
    /// Free-text search term (also sent as a list query parameter).
    pub search_term: String,
    /// Server-driven pagination metadata.
    pub pagination: Pagination,
    /// Optimistic headcounts, when seeded.
    pub metrics: Option<StaffMetrics>,
    last_applied_seq: Option<RequestSeq>,
}

impl StaffSlice {
    /// An operation entered flight: raise `loading`, clear the error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// An operation failed.
    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(SliceError::from_api(err));
    }

    /// A list fetch failed. Discarded when a newer fetch already applied.
    pub fn fail_list(&mut self, seq: RequestSeq, err: &ApiError) {
        if self.is_stale(seq) {
            return;
        }
        self.fail(err);
    }

    /// A list fetch fulfilled: replace the page.
    ///
    /// A paginated envelope recomputes the pagination record from its
    /// count and the request's paging arguments; a bare array replaces
    /// the items and leaves pagination untouched.
    pub fn apply_list(&mut self, seq: RequestSeq, payload: ListPayload<Staff>, page: u32, page_size: u32) {
        if self.is_stale(seq) {
            return;
        }
        self.loading = false;
        match payload {
            ListPayload::Paginated(server_page) => {
                self.pagination = Pagination::from_count(server_page.count, page, page_size);
                self.items = server_page.results;
            }
            ListPayload::Plain(items) => {
                self.items = items;
            }
        }
        self.last_applied_seq = Some(seq);
    }

    /// A by-id fetch fulfilled: set the selected staff member.
    pub fn apply_fetched(&mut self, staff: Staff) {
        self.loading = false;
        self.selected = Some(staff);
    }

    /// A create fulfilled: new hires go to the front of the page and the
    /// active headcount moves.
    pub fn apply_created(&mut self, staff: Staff) {
        self.loading = false;
        if staff.status == StaffStatus::Active
            && let Some(metrics) = self.metrics.as_mut()
        {
            metrics.active_staff += 1;
        }
        self.items.insert(0, staff);
    }

    /// An update fulfilled: replace the matching page entry, and the
    /// selected staff member if it is the same record.
    pub fn apply_updated(&mut self, staff: Staff) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|s| s.id == staff.id) {
            *entry = staff.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == staff.id) {
            self.selected = Some(staff);
        }
    }

    /// A delete fulfilled: drop the record, clear a matching selection,
    /// and roll the headcount for its prior status back.
    pub fn apply_deleted(&mut self, id: StaffId) {
        self.loading = false;
        let previous = self.items.iter().find(|s| s.id == id).map(|s| s.status);
        if let Some(metrics) = self.metrics.as_mut() {
            match previous {
                Some(StaffStatus::Active) => {
                    metrics.active_staff = metrics.active_staff.saturating_sub(1);
                }
                Some(StaffStatus::Suspended) => {
                    metrics.suspended_staff = metrics.suspended_staff.saturating_sub(1);
                }
                _ => {}
            }
        }
        self.items.retain(|staff| staff.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    /// A suspend fulfilled: active -1, suspended +1.
    pub fn apply_suspended(&mut self, id: StaffId) {
        self.apply_transition(id, StaffStatus::Suspended);
    }

    /// A terminate fulfilled. Terminal; the headcount for the prior
    /// status drops.
    pub fn apply_terminated(&mut self, id: StaffId) {
        self.apply_transition(id, StaffStatus::Terminated);
    }

    /// A reactivate fulfilled: suspended -1, active +1.
    pub fn apply_reactivated(&mut self, id: StaffId) {
        self.apply_transition(id, StaffStatus::Active);
    }

    /// A salary-history fetch fulfilled for the selected staff member.
    pub fn apply_salary_payments(&mut self, id: StaffId, payments: Vec<SalaryPayment>) {
        self.loading = false;
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.salary_payments = payments;
        }
    }

    /// A salary payout was recorded for the selected staff member.
    pub fn apply_salary_payment_recorded(&mut self, id: StaffId, payment: SalaryPayment) {
        self.loading = false;
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.salary_payments.push(payment);
        }
    }

    /// Seed the optimistic headcounts (from the dashboard metrics fetch).
    pub const fn set_metrics(&mut self, metrics: StaffMetrics) {
        self.metrics = Some(metrics);
    }

    /// The staff the table should currently render.
    #[must_use]
    pub fn visible(&self) -> Vec<&Staff> {
        filter_staff(&self.items, &self.search_term, &self.filters)
    }

    fn apply_transition(&mut self, id: StaffId, status: StaffStatus) {
        self.loading = false;
        let previous = self.items.iter().find(|s| s.id == id).map(|s| s.status);
        if let Some(metrics) = self.metrics.as_mut() {
            match previous {
                Some(StaffStatus::Active) => {
                    metrics.active_staff = metrics.active_staff.saturating_sub(1);
                }
                Some(StaffStatus::Suspended) => {
                    metrics.suspended_staff = metrics.suspended_staff.saturating_sub(1);
                }
                _ => {}
            }
            match status {
                StaffStatus::Active => metrics.active_staff += 1,
                StaffStatus::Suspended => metrics.suspended_staff += 1,
                StaffStatus::Terminated | StaffStatus::Inactive => {}
            }
        }
        if let Some(entry) = self.items.iter_mut().find(|s| s.id == id) {
            entry.status = status;
        }
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.status = status;
        }
    }

    fn is_stale(&self, seq: RequestSeq) -> bool {
        self.last_applied_seq.is_some_and(|last| seq <= last)
    }
}
