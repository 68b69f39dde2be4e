//! Staged mutation drafts.
//!
//! Edit modals hold a draft independent of the store until submit. On
//! success the caller closes the modal and drops the draft; on failure
//! the slice error stays set and the draft survives untouched for retry
//! or cancel - which is why submission borrows the draft instead of
//! consuming it (see [`super::ops::submit_car_edit`]).

use fleetdesk_core::{CarId, CarStatus, Money, StaffStatus};

use crate::api::types::{Car, CarUpdateRequest, ImageUpload};

/// Staged edit of a car, including its photo set.
#[derive(Debug, Clone)]
pub struct CarEditDraft {
    /// Car being edited.
    pub car_id: CarId,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Exterior color.
    pub color: String,
    /// Registration plate number.
    pub registration_number: String,
    /// Rental rate per day.
    pub daily_rate: Money,
    /// Rental rate per week.
    pub weekly_rate: Money,
    /// Rental rate per month.
    pub monthly_rate: Money,
    /// Operational status.
    pub status: CarStatus,
    /// URLs of existing photos that survive the edit.
    pub images_to_keep: Vec<String>,
    /// New photos staged for upload.
    pub new_images: Vec<ImageUpload>,
    original_images: Vec<String>,
}

impl CarEditDraft {
    /// Stage a draft from the car's current values.
    #[must_use]
    pub fn from_car(car: &Car) -> Self {
        Self {
            car_id: car.id,
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year,
            color: car.color.clone(),
            registration_number: car.registration_number.clone(),
            daily_rate: car.daily_rate.clone(),
            weekly_rate: car.weekly_rate.clone(),
            monthly_rate: car.monthly_rate.clone(),
            status: car.status,
            images_to_keep: car.images.clone(),
            new_images: vec![],
            original_images: car.images.clone(),
        }
    }

    /// Drop an existing photo from the kept set.
    pub fn remove_image(&mut self, url: &str) {
        self.images_to_keep.retain(|kept| kept != url);
    }

    /// Stage a new photo for upload.
    pub fn add_image(&mut self, upload: ImageUpload) {
        self.new_images.push(upload);
    }

    /// Whether submitting requires a multipart request (any change to the
    /// photo set) rather than plain JSON.
    #[must_use]
    pub fn has_image_changes(&self) -> bool {
        !self.new_images.is_empty() || self.images_to_keep != self.original_images
    }

    /// Build the update payload. Modal forms submit every field, edited
    /// or not, so all fields are set.
    #[must_use]
    pub fn to_request(&self) -> CarUpdateRequest {
        CarUpdateRequest {
            make: Some(self.make.clone()),
            model: Some(self.model.clone()),
            year: Some(self.year),
            color: Some(self.color.clone()),
            registration_number: Some(self.registration_number.clone()),
            daily_rate: Some(self.daily_rate.clone()),
            weekly_rate: Some(self.weekly_rate.clone()),
            monthly_rate: Some(self.monthly_rate.clone()),
            status: Some(self.status),
        }
    }
}

/// Lifecycle actions offered on a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffLifecycleAction {
    /// Suspend an active staff member.
    Suspend,
    /// Terminate; no way back.
    Terminate,
    /// Reactivate a suspended staff member.
    Reactivate,
    /// Remove the record outright.
    Delete,
}

impl StaffLifecycleAction {
    /// Whether the action's button is enabled for a staff member in the
    /// given status. Mirrors the server's transition rules only far
    /// enough to disable dead buttons; the server remains authoritative.
    #[must_use]
    pub const fn is_allowed(self, status: StaffStatus) -> bool {
        match self {
            Self::Suspend => matches!(status, StaffStatus::Active),
            Self::Terminate => matches!(status, StaffStatus::Active | StaffStatus::Suspended),
            Self::Reactivate => matches!(status, StaffStatus::Suspended),
            Self::Delete => true,
        }
    }
}
