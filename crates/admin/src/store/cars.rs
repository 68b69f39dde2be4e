//! Cars slice and selectors.

use fleetdesk_core::{CarId, CarStatus};

use crate::api::types::{Car, MaintenanceRecord, TimelineEvent};
use crate::api::{ApiError, ListPayload};

use super::{RequestSeq, SliceError};

/// Equality filters for the cars grid. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilters {
    /// Restrict to one operational status.
    pub status: Option<CarStatus>,
    /// Restrict to one manufacturer (case-insensitive).
    pub make: Option<String>,
    /// Restrict to model years at or above this.
    pub min_year: Option<i32>,
}

impl CarFilters {
    fn matches(&self, car: &Car) -> bool {
        self.status.is_none_or(|status| car.status == status)
            && self
                .make
                .as_ref()
                .is_none_or(|make| car.make.eq_ignore_ascii_case(make))
            && self.min_year.is_none_or(|year| car.year >= year)
    }
}

/// Compute the cars a grid should render from the loaded list.
///
/// Pure; conjunctive across the free-text search (case-insensitive
/// substring over make, model, registration number, and color) and the
/// equality filters. Pagination is not applied here - the cars domain is
/// fully loaded.
#[must_use]
pub fn filter_cars<'a>(items: &'a [Car], search_term: &str, filters: &CarFilters) -> Vec<&'a Car> {
    let needle = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|car| matches_search(car, &needle) && filters.matches(car))
        .collect()
}

fn matches_search(car: &Car, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    car.make.to_lowercase().contains(needle)
        || car.model.to_lowercase().contains(needle)
        || car.registration_number.to_lowercase().contains(needle)
        || car.color.to_lowercase().contains(needle)
}

/// State container for the cars domain.
#[derive(Debug, Default)]
pub struct CarsSlice {
    /// Loaded cars.
    pub items: Vec<Car>,
    /// Car opened in the detail view.
    pub selected: Option<Car>,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Last failure, until the next operation begins.
    pub error: Option<SliceError>,
    /// Grid filters.
    pub filters: CarFilters,
    /// Free-text search term.
    pub search_term: String,
    last_applied_seq: Option<RequestSeq>,
}

impl CarsSlice {
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
    ///
    /// Discarded when a newer fetch already applied (out-of-order network
    /// resolution).
    pub fn apply_list(&mut self, seq: RequestSeq, payload: ListPayload<Car>) {
        if self.is_stale(seq) {
            return;
        }
        self.loading = false;
        self.items = payload.into_items();
        self.last_applied_seq = Some(seq);
    }

    /// A by-id fetch fulfilled: set the selected car.
    pub fn apply_fetched(&mut self, car: Car) {
        self.loading = false;
        self.selected = Some(car);
    }

    /// A create fulfilled: the new car goes to the front of the list.
    pub fn apply_created(&mut self, car: Car) {
        self.loading = false;
        self.items.insert(0, car);
    }

    /// An update fulfilled: replace the matching list entry, and the
    /// selected car if it is the same record.
    pub fn apply_updated(&mut self, car: Car) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|c| c.id == car.id) {
            *entry = car.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == car.id) {
            self.selected = Some(car);
        }
    }

    /// A delete fulfilled: drop the record; clear the selection if it
    /// pointed at it.
    pub fn apply_deleted(&mut self, id: CarId) {
        self.loading = false;
        self.items.retain(|car| car.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    /// A status transition fulfilled: mutate only the status field of the
    /// targeted record, in place.
    pub fn apply_status(&mut self, id: CarId, status: CarStatus) {
        self.loading = false;
        if let Some(entry) = self.items.iter_mut().find(|c| c.id == id) {
            entry.status = status;
        }
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.status = status;
        }
    }

    /// A timeline fetch fulfilled for the selected car.
    pub fn apply_timeline(&mut self, id: CarId, timeline: Vec<TimelineEvent>) {
        self.loading = false;
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.timeline = timeline;
        }
    }

    /// A maintenance record landed for the selected car.
    pub fn apply_maintenance_added(&mut self, id: CarId, record: MaintenanceRecord) {
        self.loading = false;
        if let Some(selected) = self.selected.as_mut()
            && selected.id == id
        {
            selected.maintenance_records.push(record);
        }
    }

    /// The cars the grid should currently render.
    #[must_use]
    pub fn visible(&self) -> Vec<&Car> {
        filter_cars(&self.items, &self.search_term, &self.filters)
    }

    fn is_stale(&self, seq: RequestSeq) -> bool {
        self.last_applied_seq.is_some_and(|last| seq <= last)
    }
}
