//! Customers slice and selectors.

use fleetdesk_core::{CustomerId, GuarantorId, LoyaltyTier};

use crate::api::types::{Booking, Customer, Guarantor};
use crate::api::{ApiError, ListPayload};

use super::{RequestSeq, SliceError};

/// Equality filters for the customers grid. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilters {
    /// Restrict to one loyalty tier.
    pub loyalty_tier: Option<LoyaltyTier>,
    /// Restrict to customers with at least this many bookings.
    pub min_total_bookings: Option<u64>,
}

impl CustomerFilters {
    fn matches(&self, customer: &Customer) -> bool {
        self.loyalty_tier
            .is_none_or(|tier| customer.loyalty_tier == tier)
            && self
                .min_total_bookings
                .is_none_or(|min| customer.total_bookings >= min)
    }
}

/// Compute the customers a grid should render from the loaded list.
#[must_use]
pub fn filter_customers<'a>(
    items: &'a [Customer],
    search_term: &str,
    filters: &CustomerFilters,
) -> Vec<&'a Customer> {
    let needle = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|customer| matches_search(customer, &needle) && filters.matches(customer))
        .collect()
}

fn matches_search(customer: &Customer, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    customer.full_name.to_lowercase().contains(needle)
        || customer
            .email
            .as_ref()
            .is_some_and(|email| email.as_str().contains(needle))
        || customer
            .phone
            .as_ref()
            .is_some_and(|phone| phone.to_lowercase().contains(needle))
        || customer
            .national_id
            .as_ref()
            .is_some_and(|national_id| national_id.to_lowercase().contains(needle))
}

/// State container for the customers domain.
#[derive(Debug, Default)]
pub struct CustomersSlice {
    /// Loaded customers.
    pub items: Vec<Customer>,
    /// Customer opened in the detail view.
    pub selected: Option<Customer>,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Last failure, until the next operation begins.
    pub error: Option<SliceError>,
    /// Grid filters.
    pub filters: CustomerFilters,
    /// Free-text search term.
    pub search_term: String,
    last_applied_seq: Option<RequestSeq>,
}

impl CustomersSlice {
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

    /// A list fetch fulfilled: replace the list.
    pub fn apply_list(&mut self, seq: RequestSeq, payload: ListPayload<Customer>) {
        if self.is_stale(seq) {
            return;
        }
        self.loading = false;
        self.items = payload.into_items();
        self.last_applied_seq = Some(seq);
    }

    /// A by-id fetch fulfilled: set the selected customer.
    pub fn apply_fetched(&mut self, customer: Customer) {
        self.loading = false;
        self.selected = Some(customer);
    }

    /// A create fulfilled: the new customer goes to the front of the list.
    pub fn apply_created(&mut self, customer: Customer) {
        self.loading = false;
        self.items.insert(0, customer);
    }

    /// An update fulfilled: replace the matching list entry, and the
    /// selected customer if it is the same record.
    pub fn apply_updated(&mut self, customer: Customer) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|c| c.id == customer.id) {
            *entry = customer.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == customer.id) {
            self.selected = Some(customer);
        }
    }

    /// A delete fulfilled: drop the record; clear a matching selection.
    pub fn apply_deleted(&mut self, id: CustomerId) {
        self.loading = false;
        self.items.retain(|customer| customer.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    /// A lazy booking-history fetch fulfilled for the selected customer.
    ///
    /// History arriving for a customer that is no longer selected is
    /// dropped (the operator already navigated away).
    pub fn apply_booking_history(&mut self, id: CustomerId, bookings: Vec<Booking>) {
        self.loading = false;
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.bookings = bookings;
        }
    }

    /// A guarantor was attached.
    pub fn apply_guarantor_added(&mut self, id: CustomerId, guarantor: Guarantor) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|c| c.id == id) {
            entry.guarantors.push(guarantor.clone());
        }
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.guarantors.push(guarantor);
        }
    }

    /// A guarantor was removed.
    pub fn apply_guarantor_removed(&mut self, id: CustomerId, guarantor_id: GuarantorId) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|c| c.id == id) {
            entry.guarantors.retain(|g| g.id != guarantor_id);
        }
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.guarantors.retain(|g| g.id != guarantor_id);
        }
    }

    /// A fulfilled operation with nothing to merge (bulk messaging).
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// The customers the grid should currently render.
    #[must_use]
    pub fn visible(&self) -> Vec<&Customer> {
        filter_customers(&self.items, &self.search_term, &self.filters)
    }

    fn is_stale(&self, seq: RequestSeq) -> bool {
        self.last_applied_seq.is_some_and(|last| seq <= last)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use fleetdesk_core::{Email, Money};

    pub(crate) fn customer(id: i64, full_name: &str, tier: LoyaltyTier) -> Customer {
        Customer {
            id: CustomerId::new(id),
            full_name: full_name.to_string(),
            email: Email::parse(&format!("c{id}@example.com")).ok(),
            phone: Some(format!("+2547000000{id:02}")),
            address: None,
            national_id: None,
            driver_license: None,
            total_bookings: 0,
            total_spent: Money::zero("USD"),
            last_booking: None,
            loyalty_tier: tier,
            guarantors: vec![],
            bookings: vec![],
            created_at: Utc::now(),
        }
    }

    fn guarantor(id: i64) -> Guarantor {
        Guarantor {
            id: GuarantorId::new(id),
            full_name: "Grace Wanjiku".to_string(),
            phone: "+254722222222".to_string(),
            email: None,
            national_id: "ID-9981".to_string(),
            relationship: Some("spouse".to_string()),
        }
    }

    #[test]
    fn test_booking_history_attaches_to_selected() {
        let mut slice = CustomersSlice::default();
        slice.apply_fetched(customer(8, "Amina Njoroge", LoyaltyTier::Gold));

        slice.apply_booking_history(
            CustomerId::new(8),
            vec![super::super::bookings::tests::booking(
                1,
                "Amina Njoroge",
                fleetdesk_core::BookingStatus::Completed,
            )],
        );
        assert_eq!(slice.selected.as_ref().unwrap().bookings.len(), 1);
    }

    #[test]
    fn test_booking_history_for_stale_selection_dropped() {
        let mut slice = CustomersSlice::default();
        slice.apply_fetched(customer(9, "Brian Otieno", LoyaltyTier::Bronze));

        // History for customer 8 resolves after the operator moved to 9
        slice.apply_booking_history(CustomerId::new(8), vec![]);
        assert!(slice.selected.as_ref().unwrap().bookings.is_empty());
        assert_eq!(slice.selected.as_ref().unwrap().id, CustomerId::new(9));
    }

    #[test]
    fn test_guarantor_add_and_remove() {
        let mut slice = CustomersSlice::default();
        slice.apply_list(
            RequestSeq(1),
            ListPayload::Plain(vec![customer(8, "Amina Njoroge", LoyaltyTier::Gold)]),
        );
        slice.apply_fetched(customer(8, "Amina Njoroge", LoyaltyTier::Gold));

        slice.apply_guarantor_added(CustomerId::new(8), guarantor(4));
        assert_eq!(slice.selected.as_ref().unwrap().guarantors.len(), 1);
        assert_eq!(slice.items.first().unwrap().guarantors.len(), 1);

        slice.apply_guarantor_removed(CustomerId::new(8), GuarantorId::new(4));
        assert!(slice.selected.as_ref().unwrap().guarantors.is_empty());
        assert!(slice.items.first().unwrap().guarantors.is_empty());
    }

    #[test]
    fn test_filter_by_tier_and_search() {
        let items = vec![
            customer(1, "Amina Njoroge", LoyaltyTier::Gold),
            customer(2, "Brian Otieno", LoyaltyTier::Gold),
            customer(3, "Grace Wanjiku", LoyaltyTier::Bronze),
        ];
        let filters = CustomerFilters {
            loyalty_tier: Some(LoyaltyTier::Gold),
            min_total_bookings: None,
        };

        let visible = filter_customers(&items, "brian", &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().unwrap().id, CustomerId::new(2));
    }

    #[test]
    fn test_min_bookings_filter() {
        let mut frequent = customer(1, "Amina Njoroge", LoyaltyTier::Gold);
        frequent.total_bookings = 12;
        let items = vec![frequent, customer(2, "Brian Otieno", LoyaltyTier::Bronze)];

        let filters = CustomerFilters {
            loyalty_tier: None,
            min_total_bookings: Some(5),
        };
        assert_eq!(filter_customers(&items, "", &filters).len(), 1);
    }
}
