//! Booking management operations.

use fleetdesk_core::BookingId;
use tracing::instrument;

use super::envelope::ListPayload;
use super::types::{
    AvailabilityQuery, AvailabilityResponse, Booking, BookingCreateRequest, BookingListParams,
    BookingUpdateRequest, TransitionReceipt,
};
use super::{ApiError, FleetClient};

impl FleetClient {
    /// Get a page of bookings.
    ///
    /// Filters in `params` are applied server-side, so the returned count
    /// and pagination metadata reflect the filtered dataset, not just the
    /// loaded page.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self, params))]
    pub async fn list_bookings(
        &self,
        params: &BookingListParams,
    ) -> Result<ListPayload<Booking>, ApiError> {
        self.get_query("/bookings", params).await
    }

    /// Get a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, ApiError> {
        self.get(&format!("/bookings/{id}")).await
    }

    /// Create a booking. Pricing and availability are enforced server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the car is unavailable, the input is rejected,
    /// or the request fails.
    #[instrument(skip(self, request))]
    pub async fn create_booking(&self, request: &BookingCreateRequest) -> Result<Booking, ApiError> {
        self.post("/bookings", request).await
    }

    /// Update a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist, the input is
    /// rejected, or the request fails.
    #[instrument(skip(self, request), fields(booking_id = %id))]
    pub async fn update_booking(
        &self,
        id: BookingId,
        request: &BookingUpdateRequest,
    ) -> Result<Booking, ApiError> {
        self.patch(&format!("/bookings/{id}"), request).await
    }

    /// Delete a booking outright.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn delete_booking(&self, id: BookingId) -> Result<(), ApiError> {
        self.delete(&format!("/bookings/{id}")).await
    }

    /// Cancel a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn cancel_booking(
        &self,
        id: BookingId,
    ) -> Result<TransitionReceipt<BookingId>, ApiError> {
        self.post_empty(&format!("/bookings/{id}/cancel")).await
    }

    /// Mark a booking's car as returned, completing the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn mark_booking_returned(
        &self,
        id: BookingId,
    ) -> Result<TransitionReceipt<BookingId>, ApiError> {
        self.post_empty(&format!("/bookings/{id}/return")).await
    }

    /// Check whether a car is free over a date range.
    ///
    /// Advisory only: the authoritative check happens again inside
    /// [`create_booking`](Self::create_booking).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self, query), fields(car_id = %query.car))]
    pub async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityResponse, ApiError> {
        self.get_query("/bookings/availability", query).await
    }
}
