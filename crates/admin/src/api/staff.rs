//! Staff management operations.

use fleetdesk_core::StaffId;
use tracing::instrument;

use super::envelope::ListPayload;
use super::types::{
    SalaryPayment, SalaryPaymentRequest, Staff, StaffCreateRequest, StaffListParams,
    StaffUpdateRequest, TransitionReceipt,
};
use super::{ApiError, FleetClient};

impl FleetClient {
    /// Get a page of staff members.
    ///
    /// Filters in `params` are applied server-side, so the returned count
    /// and pagination metadata reflect the filtered dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self, params))]
    pub async fn list_staff(
        &self,
        params: &StaffListParams,
    ) -> Result<ListPayload<Staff>, ApiError> {
        self.get_query("/staff", params).await
    }

    /// Get a staff member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist or the request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn get_staff(&self, id: StaffId) -> Result<Staff, ApiError> {
        self.get(&format!("/staff/{id}")).await
    }

    /// Hire a new staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the input or the request fails.
    #[instrument(skip(self, request))]
    pub async fn create_staff(&self, request: &StaffCreateRequest) -> Result<Staff, ApiError> {
        self.post("/staff", request).await
    }

    /// Update a staff member's record (not their lifecycle status).
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist, the input is
    /// rejected, or the request fails.
    #[instrument(skip(self, request), fields(staff_id = %id))]
    pub async fn update_staff(
        &self,
        id: StaffId,
        request: &StaffUpdateRequest,
    ) -> Result<Staff, ApiError> {
        self.patch(&format!("/staff/{id}"), request).await
    }

    /// Delete a staff record outright. Available regardless of status.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist or the request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn delete_staff(&self, id: StaffId) -> Result<(), ApiError> {
        self.delete(&format!("/staff/{id}")).await
    }

    /// Suspend an active staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn suspend_staff(&self, id: StaffId) -> Result<TransitionReceipt<StaffId>, ApiError> {
        self.post_empty(&format!("/staff/{id}/suspend")).await
    }

    /// Terminate a staff member. There is no way back from this state.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn terminate_staff(
        &self,
        id: StaffId,
    ) -> Result<TransitionReceipt<StaffId>, ApiError> {
        self.post_empty(&format!("/staff/{id}/terminate")).await
    }

    /// Reactivate a suspended staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn reactivate_staff(
        &self,
        id: StaffId,
    ) -> Result<TransitionReceipt<StaffId>, ApiError> {
        self.post_empty(&format!("/staff/{id}/reactivate")).await
    }

    /// Get a staff member's salary payment history.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist or the request fails.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn fetch_salary_payments(
        &self,
        id: StaffId,
    ) -> Result<Vec<SalaryPayment>, ApiError> {
        self.get(&format!("/staff/{id}/salary-payments")).await
    }

    /// Record a salary payout for a staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist, the input is
    /// rejected, or the request fails.
    #[instrument(skip(self, request), fields(staff_id = %id))]
    pub async fn record_salary_payment(
        &self,
        id: StaffId,
        request: &SalaryPaymentRequest,
    ) -> Result<SalaryPayment, ApiError> {
        self.post(&format!("/staff/{id}/salary-payments"), request)
            .await
    }
}
