//! Car management operations.

use fleetdesk_core::{CarId, CarStatus};
use serde::Serialize;
use tracing::instrument;

use super::envelope::ListPayload;
use super::types::{
    Car, CarCreateRequest, CarUpdateRequest, ImageUpload, MaintenanceRecord,
    MaintenanceRecordRequest, TimelineEvent, TransitionReceipt,
};
use super::{ApiError, FleetClient};

#[derive(Serialize)]
struct SetStatusBody {
    status: CarStatus,
}

impl FleetClient {
    /// Get all cars in the fleet.
    ///
    /// The cars domain is not paginated server-side; the whole list is
    /// loaded and filtered client-side. The payload still arrives in
    /// either list shape (see [`ListPayload`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_cars(&self) -> Result<ListPayload<Car>, ApiError> {
        self.get("/cars").await
    }

    /// Get a car by ID, including its nested collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist or the request fails.
    #[instrument(skip(self), fields(car_id = %id))]
    pub async fn get_car(&self, id: CarId) -> Result<Car, ApiError> {
        self.get(&format!("/cars/{id}")).await
    }

    /// Register a new car.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the input or the request fails.
    #[instrument(skip(self, request))]
    pub async fn create_car(&self, request: &CarCreateRequest) -> Result<Car, ApiError> {
        self.post("/cars", request).await
    }

    /// Register a new car with photos attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the input, a photo has an
    /// invalid MIME type, or the request fails.
    #[instrument(skip(self, request, images), fields(image_count = images.len()))]
    pub async fn create_car_with_images(
        &self,
        request: &CarCreateRequest,
        images: Vec<ImageUpload>,
    ) -> Result<Car, ApiError> {
        let form = build_car_form(request, None, images)?;
        self.post_multipart("/cars", form).await
    }

    /// Update a car.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist, the API rejects the
    /// input, or the request fails.
    #[instrument(skip(self, request), fields(car_id = %id))]
    pub async fn update_car(&self, id: CarId, request: &CarUpdateRequest) -> Result<Car, ApiError> {
        self.patch(&format!("/cars/{id}"), request).await
    }

    /// Update a car together with its photo set.
    ///
    /// `images_to_keep` lists the URLs of existing photos that survive the
    /// edit; any photo not listed is dropped server-side. `new_images` are
    /// uploaded as multipart file parts alongside the JSON-encoded field
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist, the API rejects the
    /// input, or the request fails.
    #[instrument(skip(self, request, new_images), fields(car_id = %id, new_image_count = new_images.len()))]
    pub async fn update_car_with_images(
        &self,
        id: CarId,
        request: &CarUpdateRequest,
        images_to_keep: &[String],
        new_images: Vec<ImageUpload>,
    ) -> Result<Car, ApiError> {
        let form = build_car_form(request, Some(images_to_keep), new_images)?;
        self.patch_multipart(&format!("/cars/{id}"), form).await
    }

    /// Remove a car from the fleet.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist or the request fails.
    #[instrument(skip(self), fields(car_id = %id))]
    pub async fn delete_car(&self, id: CarId) -> Result<(), ApiError> {
        self.delete(&format!("/cars/{id}")).await
    }

    /// Request a status change for a car.
    ///
    /// Transition legality is decided server-side; the client applies
    /// whatever the server acknowledges.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the transition or the
    /// request fails.
    #[instrument(skip(self), fields(car_id = %id, status = ?status))]
    pub async fn set_car_status(
        &self,
        id: CarId,
        status: CarStatus,
    ) -> Result<TransitionReceipt<CarId>, ApiError> {
        self.post(&format!("/cars/{id}/status"), &SetStatusBody { status })
            .await
    }

    /// Get the event timeline for a car.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist or the request fails.
    #[instrument(skip(self), fields(car_id = %id))]
    pub async fn fetch_car_timeline(&self, id: CarId) -> Result<Vec<TimelineEvent>, ApiError> {
        self.get(&format!("/cars/{id}/timeline")).await
    }

    /// Record a maintenance job on a car.
    ///
    /// # Errors
    ///
    /// Returns an error if the car does not exist, the API rejects the
    /// input, or the request fails.
    #[instrument(skip(self, request), fields(car_id = %id))]
    pub async fn add_maintenance_record(
        &self,
        id: CarId,
        request: &MaintenanceRecordRequest,
    ) -> Result<MaintenanceRecord, ApiError> {
        self.post(&format!("/cars/{id}/maintenance"), request).await
    }
}

/// Assemble the multipart form for car create/update with photos.
fn build_car_form(
    request: &impl Serialize,
    images_to_keep: Option<&[String]>,
    new_images: Vec<ImageUpload>,
) -> Result<reqwest::multipart::Form, ApiError> {
    let payload =
        serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut form = reqwest::multipart::Form::new().text("payload", payload);

    if let Some(keep) = images_to_keep {
        let keep_json =
            serde_json::to_string(keep).map_err(|e| ApiError::Decode(e.to_string()))?;
        form = form.text("images_to_keep", keep_json);
    }

    for image in new_images {
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(ApiError::Network)?;
        form = form.part("images", part);
    }

    Ok(form)
}
