//! Async operations binding the API client to the store.
//!
//! Every operation follows the same lifecycle: the owning slice raises
//! `loading` and clears its error, the API call runs, and the outcome is
//! merged back (fulfilled) or recorded (rejected). The error is also
//! returned so callers can branch; the slice keeps the copy the UI
//! renders.
//!
//! There is no retry, no backoff, and no cancellation of in-flight
//! requests. List fetches are tagged with a [`RequestSeq`](super::RequestSeq)
//! so a slow superseded response resolving late is discarded instead of
//! clobbering newer state.

use fleetdesk_core::{BookingId, CarId, CarStatus, CustomerId, GuarantorId, StaffId};

use crate::api::types::{
    AvailabilityQuery, AvailabilityResponse, BookingCreateRequest, BookingListParams,
    BookingUpdateRequest, BulkMessageReceipt, BulkMessageRequest, CarCreateRequest,
    CustomerCreateRequest, CustomerUpdateRequest, GuarantorRequest, ImageUpload,
    MaintenanceRecordRequest, SalaryPaymentRequest, StaffCreateRequest, StaffListParams,
    StaffUpdateRequest,
};
use crate::api::{ApiError, FleetClient};

use super::bookings::BookingMetrics;
use super::drafts::CarEditDraft;
use super::staff::StaffMetrics;
use super::{DEFAULT_PAGE_SIZE, Store};

// =============================================================================
// Cars
// =============================================================================

/// Load the full car list.
pub async fn fetch_cars(store: &mut Store, client: &FleetClient) -> Result<(), ApiError> {
    let seq = store.next_seq();
    store.cars.begin();
    match client.list_cars().await {
        Ok(payload) => {
            store.cars.apply_list(seq, payload);
            Ok(())
        }
        Err(err) => {
            store.cars.fail_list(seq, &err);
            Err(err)
        }
    }
}

/// Load one car into the detail view.
pub async fn fetch_car(store: &mut Store, client: &FleetClient, id: CarId) -> Result<(), ApiError> {
    store.cars.begin();
    match client.get_car(id).await {
        Ok(car) => {
            store.cars.apply_fetched(car);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Register a car, with photos when any are staged.
pub async fn create_car(
    store: &mut Store,
    client: &FleetClient,
    request: &CarCreateRequest,
    images: Vec<ImageUpload>,
) -> Result<(), ApiError> {
    store.cars.begin();
    let result = if images.is_empty() {
        client.create_car(request).await
    } else {
        client.create_car_with_images(request, images).await
    };
    match result {
        Ok(car) => {
            store.cars.apply_created(car);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Submit a staged car edit.
///
/// The draft is only borrowed: on failure it stays intact for the modal
/// to retry, and the slice error is what the modal shows.
pub async fn submit_car_edit(
    store: &mut Store,
    client: &FleetClient,
    draft: &CarEditDraft,
) -> Result<(), ApiError> {
    store.cars.begin();
    let request = draft.to_request();
    let result = if draft.has_image_changes() {
        client
            .update_car_with_images(
                draft.car_id,
                &request,
                &draft.images_to_keep,
                draft.new_images.clone(),
            )
            .await
    } else {
        client.update_car(draft.car_id, &request).await
    };
    match result {
        Ok(car) => {
            store.cars.apply_updated(car);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Delete a car.
pub async fn delete_car(
    store: &mut Store,
    client: &FleetClient,
    id: CarId,
) -> Result<(), ApiError> {
    store.cars.begin();
    match client.delete_car(id).await {
        Ok(()) => {
            store.cars.apply_deleted(id);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Request a car status change.
pub async fn set_car_status(
    store: &mut Store,
    client: &FleetClient,
    id: CarId,
    status: CarStatus,
) -> Result<(), ApiError> {
    store.cars.begin();
    match client.set_car_status(id, status).await {
        Ok(receipt) => {
            store.cars.apply_status(receipt.id, status);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Load the selected car's event timeline.
pub async fn fetch_car_timeline(
    store: &mut Store,
    client: &FleetClient,
    id: CarId,
) -> Result<(), ApiError> {
    store.cars.begin();
    match client.fetch_car_timeline(id).await {
        Ok(timeline) => {
            store.cars.apply_timeline(id, timeline);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

/// Record a maintenance job on the selected car.
pub async fn add_maintenance_record(
    store: &mut Store,
    client: &FleetClient,
    id: CarId,
    request: &MaintenanceRecordRequest,
) -> Result<(), ApiError> {
    store.cars.begin();
    match client.add_maintenance_record(id, request).await {
        Ok(record) => {
            store.cars.apply_maintenance_added(id, record);
            Ok(())
        }
        Err(err) => {
            store.cars.fail(&err);
            Err(err)
        }
    }
}

// =============================================================================
// Bookings
// =============================================================================

/// Load one page of bookings.
///
/// The slice's filters and search term are forwarded as query parameters,
/// so the server filters before paginating and the count reflects the
/// filtered dataset.
pub async fn fetch_bookings(
    store: &mut Store,
    client: &FleetClient,
    page: u32,
) -> Result<(), ApiError> {
    let page_size = if store.bookings.pagination.items_per_page == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        store.bookings.pagination.items_per_page
    };
    let search = store.bookings.search_term.trim();
    let params = BookingListParams {
        status: store.bookings.filters.status,
        payment_status: store.bookings.filters.payment_status,
        customer: None,
        car: None,
        search: (!search.is_empty()).then(|| search.to_string()),
        page: Some(page),
        page_size: Some(page_size),
    };

    let seq = store.next_seq();
    store.bookings.begin();
    match client.list_bookings(&params).await {
        Ok(payload) => {
            store.bookings.apply_list(seq, payload, page, page_size);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail_list(seq, &err);
            Err(err)
        }
    }
}

/// Load one booking into the detail view.
pub async fn fetch_booking(
    store: &mut Store,
    client: &FleetClient,
    id: BookingId,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.get_booking(id).await {
        Ok(booking) => {
            store.bookings.apply_fetched(booking);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Create a booking.
pub async fn create_booking(
    store: &mut Store,
    client: &FleetClient,
    request: &BookingCreateRequest,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.create_booking(request).await {
        Ok(booking) => {
            store.bookings.apply_created(booking);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Update a booking.
pub async fn update_booking(
    store: &mut Store,
    client: &FleetClient,
    id: BookingId,
    request: &BookingUpdateRequest,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.update_booking(id, request).await {
        Ok(booking) => {
            store.bookings.apply_updated(booking);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Delete a booking.
pub async fn delete_booking(
    store: &mut Store,
    client: &FleetClient,
    id: BookingId,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.delete_booking(id).await {
        Ok(()) => {
            store.bookings.apply_deleted(id);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Cancel a booking.
pub async fn cancel_booking(
    store: &mut Store,
    client: &FleetClient,
    id: BookingId,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.cancel_booking(id).await {
        Ok(receipt) => {
            store.bookings.apply_cancelled(receipt.id);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Mark a booking's car as returned.
pub async fn mark_booking_returned(
    store: &mut Store,
    client: &FleetClient,
    id: BookingId,
) -> Result<(), ApiError> {
    store.bookings.begin();
    match client.mark_booking_returned(id).await {
        Ok(receipt) => {
            store.bookings.apply_returned(receipt.id);
            Ok(())
        }
        Err(err) => {
            store.bookings.fail(&err);
            Err(err)
        }
    }
}

/// Check car availability. Advisory; touches no slice state.
pub async fn check_availability(
    client: &FleetClient,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResponse, ApiError> {
    client.check_availability(query).await
}

// =============================================================================
// Customers
// =============================================================================

/// Load the full customer list.
pub async fn fetch_customers(store: &mut Store, client: &FleetClient) -> Result<(), ApiError> {
    let seq = store.next_seq();
    store.customers.begin();
    match client.list_customers().await {
        Ok(payload) => {
            store.customers.apply_list(seq, payload);
            Ok(())
        }
        Err(err) => {
            store.customers.fail_list(seq, &err);
            Err(err)
        }
    }
}

/// Load one customer into the detail view (without booking history).
pub async fn fetch_customer(
    store: &mut Store,
    client: &FleetClient,
    id: CustomerId,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.get_customer(id).await {
        Ok(customer) => {
            store.customers.apply_fetched(customer);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Register a customer.
pub async fn create_customer(
    store: &mut Store,
    client: &FleetClient,
    request: &CustomerCreateRequest,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.create_customer(request).await {
        Ok(customer) => {
            store.customers.apply_created(customer);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Update a customer.
pub async fn update_customer(
    store: &mut Store,
    client: &FleetClient,
    id: CustomerId,
    request: &CustomerUpdateRequest,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.update_customer(id, request).await {
        Ok(customer) => {
            store.customers.apply_updated(customer);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Delete a customer.
pub async fn delete_customer(
    store: &mut Store,
    client: &FleetClient,
    id: CustomerId,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.delete_customer(id).await {
        Ok(()) => {
            store.customers.apply_deleted(id);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Lazily load the selected customer's booking history.
pub async fn fetch_customer_bookings(
    store: &mut Store,
    client: &FleetClient,
    id: CustomerId,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.fetch_customer_bookings(id).await {
        Ok(bookings) => {
            store.customers.apply_booking_history(id, bookings);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Attach a guarantor to a customer.
pub async fn add_guarantor(
    store: &mut Store,
    client: &FleetClient,
    id: CustomerId,
    request: &GuarantorRequest,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.add_guarantor(id, request).await {
        Ok(guarantor) => {
            store.customers.apply_guarantor_added(id, guarantor);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Remove a guarantor from a customer.
pub async fn remove_guarantor(
    store: &mut Store,
    client: &FleetClient,
    customer_id: CustomerId,
    guarantor_id: GuarantorId,
) -> Result<(), ApiError> {
    store.customers.begin();
    match client.remove_guarantor(customer_id, guarantor_id).await {
        Ok(()) => {
            store
                .customers
                .apply_guarantor_removed(customer_id, guarantor_id);
            Ok(())
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

/// Dispatch a bulk message to customers.
pub async fn send_bulk_message(
    store: &mut Store,
    client: &FleetClient,
    request: &BulkMessageRequest,
) -> Result<BulkMessageReceipt, ApiError> {
    store.customers.begin();
    match client.send_bulk_message(request).await {
        Ok(receipt) => {
            store.customers.finish();
            Ok(receipt)
        }
        Err(err) => {
            store.customers.fail(&err);
            Err(err)
        }
    }
}

// =============================================================================
// Staff
// =============================================================================

/// Load one page of staff.
///
/// Filters and search are forwarded as query parameters, same contract as
/// [`fetch_bookings`].
pub async fn fetch_staff(
    store: &mut Store,
    client: &FleetClient,
    page: u32,
) -> Result<(), ApiError> {
    let page_size = if store.staff.pagination.items_per_page == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        store.staff.pagination.items_per_page
    };
    let search = store.staff.search_term.trim();
    let params = StaffListParams {
        status: store.staff.filters.status,
        role: store.staff.filters.role,
        department: store.staff.filters.department,
        search: (!search.is_empty()).then(|| search.to_string()),
        page: Some(page),
        page_size: Some(page_size),
    };

    let seq = store.next_seq();
    store.staff.begin();
    match client.list_staff(&params).await {
        Ok(payload) => {
            store.staff.apply_list(seq, payload, page, page_size);
            Ok(())
        }
        Err(err) => {
            store.staff.fail_list(seq, &err);
            Err(err)
        }
    }
}

/// Load one staff member into the detail view.
pub async fn fetch_staff_member(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.get_staff(id).await {
        Ok(staff) => {
            store.staff.apply_fetched(staff);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Hire a staff member.
pub async fn create_staff(
    store: &mut Store,
    client: &FleetClient,
    request: &StaffCreateRequest,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.create_staff(request).await {
        Ok(staff) => {
            store.staff.apply_created(staff);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Update a staff member's record.
pub async fn update_staff(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
    request: &StaffUpdateRequest,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.update_staff(id, request).await {
        Ok(staff) => {
            store.staff.apply_updated(staff);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Delete a staff record.
pub async fn delete_staff(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.delete_staff(id).await {
        Ok(()) => {
            store.staff.apply_deleted(id);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Suspend a staff member.
pub async fn suspend_staff(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.suspend_staff(id).await {
        Ok(receipt) => {
            store.staff.apply_suspended(receipt.id);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Terminate a staff member.
pub async fn terminate_staff(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.terminate_staff(id).await {
        Ok(receipt) => {
            store.staff.apply_terminated(receipt.id);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Reactivate a suspended staff member.
pub async fn reactivate_staff(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.reactivate_staff(id).await {
        Ok(receipt) => {
            store.staff.apply_reactivated(receipt.id);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Load the selected staff member's salary history.
pub async fn fetch_salary_payments(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.fetch_salary_payments(id).await {
        Ok(payments) => {
            store.staff.apply_salary_payments(id, payments);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

/// Record a salary payout.
pub async fn record_salary_payment(
    store: &mut Store,
    client: &FleetClient,
    id: StaffId,
    request: &SalaryPaymentRequest,
) -> Result<(), ApiError> {
    store.staff.begin();
    match client.record_salary_payment(id, request).await {
        Ok(payment) => {
            store.staff.apply_salary_payment_recorded(id, payment);
            Ok(())
        }
        Err(err) => {
            store.staff.fail(&err);
            Err(err)
        }
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Load the dashboard metrics and seed the optimistic counters in the
/// staff and booking slices from the same fetch.
pub async fn fetch_dashboard(store: &mut Store, client: &FleetClient) -> Result<(), ApiError> {
    store.dashboard.begin();
    match client.fetch_dashboard_metrics().await {
        Ok(metrics) => {
            store.staff.set_metrics(StaffMetrics {
                active_staff: metrics.active_staff,
                suspended_staff: metrics.suspended_staff,
            });
            store.bookings.set_metrics(BookingMetrics {
                total_bookings: metrics.total_bookings,
                active_bookings: metrics.active_bookings,
            });
            store.dashboard.apply_metrics(metrics);
            Ok(())
        }
        Err(err) => {
            store.dashboard.fail(&err);
            Err(err)
        }
    }
}
