//! Customer management operations.

use fleetdesk_core::{CustomerId, GuarantorId};
use tracing::instrument;

use super::envelope::ListPayload;
use super::types::{
    Booking, Customer, CustomerCreateRequest, CustomerUpdateRequest, Guarantor, GuarantorRequest,
};
use super::{ApiError, FleetClient};

impl FleetClient {
    /// Get all customers.
    ///
    /// The customers domain is not paginated server-side; the whole list
    /// is loaded and filtered client-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<ListPayload<Customer>, ApiError> {
        self.get("/customers").await
    }

    /// Get a customer by ID.
    ///
    /// The booking history is NOT included; fetch it separately with
    /// [`fetch_customer_bookings`](Self::fetch_customer_bookings).
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or the request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.get(&format!("/customers/{id}")).await
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the input or the request fails.
    #[instrument(skip(self, request))]
    pub async fn create_customer(
        &self,
        request: &CustomerCreateRequest,
    ) -> Result<Customer, ApiError> {
        self.post("/customers", request).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist, the input is
    /// rejected, or the request fails.
    #[instrument(skip(self, request), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        request: &CustomerUpdateRequest,
    ) -> Result<Customer, ApiError> {
        self.patch(&format!("/customers/{id}"), request).await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist, still has active
    /// bookings, or the request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), ApiError> {
        self.delete(&format!("/customers/{id}")).await
    }

    /// Get a customer's booking history (lazy per-customer fetch).
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or the request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn fetch_customer_bookings(&self, id: CustomerId) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("/customers/{id}/bookings")).await
    }

    /// Attach a guarantor to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist, the input is
    /// rejected, or the request fails.
    #[instrument(skip(self, request), fields(customer_id = %id))]
    pub async fn add_guarantor(
        &self,
        id: CustomerId,
        request: &GuarantorRequest,
    ) -> Result<Guarantor, ApiError> {
        self.post(&format!("/customers/{id}/guarantors"), request)
            .await
    }

    /// Remove a guarantor from a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the guarantor does not exist or the request fails.
    #[instrument(skip(self), fields(customer_id = %customer_id, guarantor_id = %guarantor_id))]
    pub async fn remove_guarantor(
        &self,
        customer_id: CustomerId,
        guarantor_id: GuarantorId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/customers/{customer_id}/guarantors/{guarantor_id}"))
            .await
    }
}
