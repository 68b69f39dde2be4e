//! Client-side state layer.
//!
//! One slice per domain (cars, bookings, customers, staff, dashboard, ui,
//! auth), each owning its list, selected record, loading/error flags,
//! filter criteria, and - for the server-paginated domains - a pagination
//! record. Slices are synchronized with API call outcomes by the async
//! operations in [`ops`]; the pure filtering selectors live next to each
//! slice.
//!
//! The [`Store`] is an explicitly constructed context object handed to
//! whatever owns the UI loop - never an ambient singleton. Mutation goes
//! through `&mut self`, so reducer application is single-writer by
//! construction; the only reordering hazard left is network responses
//! resolving out of order, which the [`RequestSeq`] tags guard against.
//!
//! Cross-slice references (a booking's embedded car and customer) are
//! point-in-time snapshots, not live links: updating a car does not
//! back-patch copies inside bookings already in memory.

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod customers;
pub mod dashboard;
pub mod drafts;
pub mod ops;
pub mod persistence;
pub mod staff;
pub mod ui;

pub use auth::{AdminIdentity, AuthSlice};
pub use bookings::{BookingFilters, BookingMetrics, BookingsSlice, filter_bookings};
pub use cars::{CarFilters, CarsSlice, filter_cars};
pub use customers::{CustomerFilters, CustomersSlice, filter_customers};
pub use dashboard::DashboardSlice;
pub use drafts::{CarEditDraft, StaffLifecycleAction};
pub use persistence::{PersistedState, PersistenceError, SCHEMA_VERSION};
pub use staff::{StaffFilters, StaffMetrics, StaffSlice, filter_staff};
pub use ui::UiSlice;

use crate::api::{ApiError, ErrorKind};

/// Default page size requested for the server-paginated domains.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Error snapshot a slice holds for the UI to render.
///
/// The structured [`ErrorKind`] survives so screens can branch (e.g. a
/// sign-in redirect on `Unauthorized`); `message` is the one rendered
/// string, produced by [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceError {
    /// Broad failure classification.
    pub kind: ErrorKind,
    /// The rendered, user-facing message.
    pub message: String,
}

impl SliceError {
    /// Snapshot an API error for slice state.
    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

/// Monotonic tag ordering list fetches within one store.
///
/// In-flight requests are never cancelled; a slow earlier fetch can
/// resolve after a faster later one. Each list fetch takes a fresh tag
/// and every slice remembers the tag it last applied, discarding any
/// outcome older than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

/// Pagination metadata for a server-paginated list.
///
/// The server reports only the total `count`; page and page size travel
/// with the request, so this record is recomputed from both on every
/// list application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// 1-based page currently loaded.
    pub current_page: u32,
    /// Total pages (`ceil(total_items / items_per_page)`).
    pub total_pages: u32,
    /// Total matching records across all pages.
    pub total_items: u64,
    /// Requested page size.
    pub items_per_page: u32,
}

impl Pagination {
    /// Recompute from a server count and the request's paging arguments.
    #[must_use]
    pub const fn from_count(count: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            ((count + page_size as u64 - 1) / page_size as u64) as u32
        };
        Self {
            current_page: page,
            total_pages,
            total_items: count,
            items_per_page: page_size,
        }
    }
}

/// The application state context.
///
/// Constructed once and passed (mutably) to the operations in [`ops`];
/// only the `auth` and `ui` slices survive a restart, via
/// [`persistence`].
#[derive(Debug, Default)]
pub struct Store {
    /// Cars slice (fully loaded, client-side filtered).
    pub cars: CarsSlice,
    /// Bookings slice (server-paginated).
    pub bookings: BookingsSlice,
    /// Customers slice (fully loaded, client-side filtered).
    pub customers: CustomersSlice,
    /// Staff slice (server-paginated).
    pub staff: StaffSlice,
    /// Dashboard metrics slice.
    pub dashboard: DashboardSlice,
    /// UI chrome state (theme, sidebar). Persisted.
    pub ui: UiSlice,
    /// Session state. Persisted.
    pub auth: AuthSlice,
    next_seq: u64,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next request sequence tag.
    pub fn next_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        RequestSeq(self.next_seq)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_from_count() {
        let pagination = Pagination::from_count(25, 2, 10);
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_items, 25);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.items_per_page, 10);
    }

    #[test]
    fn test_pagination_exact_fit() {
        assert_eq!(Pagination::from_count(30, 1, 10).total_pages, 3);
        assert_eq!(Pagination::from_count(0, 1, 10).total_pages, 0);
    }

    #[test]
    fn test_request_seq_is_monotonic() {
        let mut store = Store::new();
        let first = store.next_seq();
        let second = store.next_seq();
        assert!(second > first);
    }

    #[test]
    fn test_slice_error_snapshots_kind_and_message() {
        let err = ApiError::Unauthorized;
        let snapshot = SliceError::from_api(&err);
        assert_eq!(snapshot.kind, ErrorKind::Unauthorized);
        assert_eq!(snapshot.message, err.user_message());
    }
}
