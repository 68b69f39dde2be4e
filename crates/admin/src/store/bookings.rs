//! Bookings slice and selectors.

use fleetdesk_core::{BookingId, BookingStatus, PaymentStatus};

use crate::api::types::Booking;
use crate::api::{ApiError, ListPayload};

use super::{Pagination, RequestSeq, SliceError};

/// Equality filters for the bookings table. `None` means no constraint.
///
/// For this server-paginated domain the filters are also forwarded as
/// query parameters on list fetches, so pagination metadata reflects the
/// filtered dataset; applying them again over the loaded page is a no-op
/// that keeps the selector contract uniform across slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilters {
    /// Restrict to one lifecycle status.
    pub status: Option<BookingStatus>,
    /// Restrict to one payment status.
    pub payment_status: Option<PaymentStatus>,
}

impl BookingFilters {
    fn matches(&self, booking: &Booking) -> bool {
        self.status.is_none_or(|status| booking.status == status)
            && self
                .payment_status
                .is_none_or(|status| booking.payment_status == status)
    }
}

/// Compute the bookings a table should render from the loaded page.
#[must_use]
pub fn filter_bookings<'a>(
    items: &'a [Booking],
    search_term: &str,
    filters: &BookingFilters,
) -> Vec<&'a Booking> {
    let needle = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|booking| matches_search(booking, &needle) && filters.matches(booking))
        .collect()
}

fn matches_search(booking: &Booking, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    booking.customer.full_name.to_lowercase().contains(needle)
        || booking.car.make.to_lowercase().contains(needle)
        || booking.car.model.to_lowercase().contains(needle)
        || booking
            .car
            .registration_number
            .to_lowercase()
            .contains(needle)
}

/// Optimistically maintained booking counters.
///
/// Seeded from the dashboard metrics fetch; adjusted by fixed deltas on
/// create/cancel/return/delete without waiting for a refetch. The
/// authoritative copy is server-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingMetrics {
    /// Lifetime bookings.
    pub total_bookings: u64,
    /// Bookings currently active.
    pub active_bookings: u64,
}

/// State container for the bookings domain.
#[derive(Debug, Default)]
pub struct BookingsSlice {
    /// Bookings on the currently loaded page.
    pub items: Vec<Booking>,
    /// Booking opened in the detail view.
    pub selected: Option<Booking>,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Last failure, until the next operation begins.
    pub error: Option<SliceError>,
    /// Table filters (also sent as list query parameters).
    pub filters: BookingFilters,
    /// Free-text search term (also sent as a list query parameter).
    pub search_term: String,
    /// Server-driven pagination metadata.
    pub pagination: Pagination,
    /// Optimistic counters, when seeded.
    pub metrics: Option<BookingMetrics>,
    last_applied_seq: Option<RequestSeq>,
}

impl BookingsSlice {
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
    pub fn apply_list(&mut self, seq: RequestSeq, payload: ListPayload<Booking>, page: u32, page_size: u32) {
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

    /// A by-id fetch fulfilled: set the selected booking.
    pub fn apply_fetched(&mut self, booking: Booking) {
        self.loading = false;
        self.selected = Some(booking);
    }

    /// A create fulfilled: the new booking goes to the front of the page
    /// and the optimistic counters move.
    pub fn apply_created(&mut self, booking: Booking) {
        self.loading = false;
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.total_bookings += 1;
            if booking.status == BookingStatus::Active {
                metrics.active_bookings += 1;
            }
        }
        self.items.insert(0, booking);
    }

    /// An update fulfilled: replace the matching page entry, and the
    /// selected booking if it is the same record.
    pub fn apply_updated(&mut self, booking: Booking) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|b| b.id == booking.id) {
            *entry = booking.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == booking.id) {
            self.selected = Some(booking);
        }
    }

    /// A delete fulfilled: drop the record, clear a matching selection,
    /// and roll the counters back.
    pub fn apply_deleted(&mut self, id: BookingId) {
        self.loading = false;
        let was_active = self
            .items
            .iter()
            .find(|b| b.id == id)
            .is_some_and(|b| b.status == BookingStatus::Active);
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.total_bookings = metrics.total_bookings.saturating_sub(1);
            if was_active {
                metrics.active_bookings = metrics.active_bookings.saturating_sub(1);
            }
        }
        self.items.retain(|booking| booking.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    /// A cancel fulfilled: only the status field of the target moves.
    pub fn apply_cancelled(&mut self, id: BookingId) {
        self.apply_transition(id, BookingStatus::Cancelled);
    }

    /// A return fulfilled: the booking completes.
    pub fn apply_returned(&mut self, id: BookingId) {
        self.apply_transition(id, BookingStatus::Completed);
    }

    /// Seed the optimistic counters (from the dashboard metrics fetch).
    pub const fn set_metrics(&mut self, metrics: BookingMetrics) {
        self.metrics = Some(metrics);
    }

    /// The bookings the table should currently render.
    #[must_use]
    pub fn visible(&self) -> Vec<&Booking> {
        filter_bookings(&self.items, &self.search_term, &self.filters)
    }

    fn apply_transition(&mut self, id: BookingId, status: BookingStatus) {
        self.loading = false;
        let previous = self.items.iter().find(|b| b.id == id).map(|b| b.status);
        if previous == Some(BookingStatus::Active)
            && let Some(metrics) = self.metrics.as_mut()
        {
            metrics.active_bookings = metrics.active_bookings.saturating_sub(1);
        }
        if let Some(entry) = self.items.iter_mut().find(|b| b.id == id) {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::api::Page;
    use crate::api::types::{CarSnapshot, CustomerSnapshot};
    use chrono::{NaiveDate, Utc};
    use fleetdesk_core::{CarId, CustomerId, LoyaltyTier, Money, PaymentMethod};

    pub(crate) fn booking(id: i64, customer_name: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            customer: CustomerSnapshot {
                id: CustomerId::new(100 + id),
                full_name: customer_name.to_string(),
                email: None,
                phone: None,
                loyalty_tier: LoyaltyTier::Bronze,
            },
            car: CarSnapshot {
                id: CarId::new(200 + id),
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2022,
                registration_number: format!("KBB {id:03}Y"),
                daily_rate: Money::zero("USD"),
            },
            guarantor: None,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            total_amount: Money::zero("USD"),
            amount_paid: Money::zero("USD"),
            status,
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Card,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_paginated_list_recomputes_pagination() {
        let mut slice = BookingsSlice::default();
        let page = Page {
            count: 25,
            results: (0..10)
                .map(|i| booking(i, "Renter", BookingStatus::Active))
                .collect(),
        };

        slice.apply_list(RequestSeq(1), ListPayload::Paginated(page), 2, 10);

        assert_eq!(slice.pagination.current_page, 2);
        assert_eq!(slice.pagination.total_items, 25);
        assert_eq!(slice.pagination.total_pages, 3);
        assert_eq!(slice.pagination.items_per_page, 10);
        assert_eq!(slice.items.len(), 10);
    }

    #[test]
    fn test_bare_array_leaves_pagination_untouched() {
        let mut slice = BookingsSlice::default();
        slice.pagination = Pagination::from_count(25, 2, 10);

        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![booking(1, "Renter", BookingStatus::Pending)]),
            1,
            10,
        );

        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.pagination, Pagination::from_count(25, 2, 10));
    }

    #[test]
    fn test_create_bumps_counters() {
        let mut slice = BookingsSlice::default();
        slice.set_metrics(BookingMetrics {
            total_bookings: 510,
            active_bookings: 14,
        });

        slice.apply_created(booking(9, "Renter", BookingStatus::Active));

        let metrics = slice.metrics.unwrap();
        assert_eq!(metrics.total_bookings, 511);
        assert_eq!(metrics.active_bookings, 15);
        assert_eq!(slice.items.first().unwrap().id, BookingId::new(9));
    }

    #[test]
    fn test_cancel_touches_only_target() {
        let mut slice = BookingsSlice::default();
        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![
                booking(1, "Amina", BookingStatus::Active),
                booking(2, "Brian", BookingStatus::Active),
            ]),
            1,
            10,
        );
        slice.set_metrics(BookingMetrics {
            total_bookings: 2,
            active_bookings: 2,
        });

        slice.apply_cancelled(BookingId::new(1));

        let first = slice.items.iter().find(|b| b.id == BookingId::new(1)).unwrap();
        let second = slice.items.iter().find(|b| b.id == BookingId::new(2)).unwrap();
        assert_eq!(first.status, BookingStatus::Cancelled);
        assert_eq!(second.status, BookingStatus::Active);
        assert_eq!(second.customer.full_name, "Brian");
        assert_eq!(slice.metrics.unwrap().active_bookings, 1);
    }

    #[test]
    fn test_return_completes_booking() {
        let mut slice = BookingsSlice::default();
        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![booking(4, "Amina", BookingStatus::Active)]),
            1,
            10,
        );

        slice.apply_returned(BookingId::new(4));
        assert_eq!(
            slice.items.first().unwrap().status,
            BookingStatus::Completed
        );
    }

    #[test]
    fn test_cancel_of_pending_keeps_active_counter() {
        let mut slice = BookingsSlice::default();
        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![booking(3, "Amina", BookingStatus::Pending)]),
            1,
            10,
        );
        slice.set_metrics(BookingMetrics {
            total_bookings: 1,
            active_bookings: 0,
        });

        slice.apply_cancelled(BookingId::new(3));
        assert_eq!(slice.metrics.unwrap().active_bookings, 0);
    }

    #[test]
    fn test_delete_clears_selection_and_counters() {
        let mut slice = BookingsSlice::default();
        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![booking(5, "Amina", BookingStatus::Active)]),
            1,
            10,
        );
        slice.apply_fetched(booking(5, "Amina", BookingStatus::Active));
        slice.set_metrics(BookingMetrics {
            total_bookings: 1,
            active_bookings: 1,
        });

        slice.apply_deleted(BookingId::new(5));

        assert!(slice.items.is_empty());
        assert!(slice.selected.is_none());
        let metrics = slice.metrics.unwrap();
        assert_eq!(metrics.total_bookings, 0);
        assert_eq!(metrics.active_bookings, 0);
    }

    #[test]
    fn test_filter_by_payment_status() {
        let mut paid = booking(1, "Amina", BookingStatus::Completed);
        paid.payment_status = PaymentStatus::Paid;
        let unpaid = booking(2, "Brian", BookingStatus::Completed);

        let items = vec![paid, unpaid];
        let filters = BookingFilters {
            status: None,
            payment_status: Some(PaymentStatus::Paid),
        };
        let visible = filter_bookings(&items, "", &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().unwrap().id, BookingId::new(1));
    }

    #[test]
    fn test_search_matches_customer_and_car() {
        let items = vec![
            booking(1, "Amina Njoroge", BookingStatus::Active),
            booking(2, "Brian Otieno", BookingStatus::Active),
        ];
        let filters = BookingFilters::default();

        assert_eq!(filter_bookings(&items, "amina", &filters).len(), 1);
        // Car make matches every fixture
        assert_eq!(filter_bookings(&items, "toyota", &filters).len(), 2);
        assert_eq!(filter_bookings(&items, "KBB 002", &filters).len(), 1);
    }
}
