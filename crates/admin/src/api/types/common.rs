//! Common types shared across fleet API domains.

use fleetdesk_core::{Email, GuarantorId};
use serde::{Deserialize, Serialize};

/// A person vouching for a customer's booking.
///
/// Guarantors hang off customers and are embedded into bookings as
/// point-in-time copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guarantor {
    /// Guarantor ID.
    pub id: GuarantorId,
    /// Full legal name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email, when provided.
    pub email: Option<Email>,
    /// National ID or passport number.
    pub national_id: String,
    /// Relationship to the customer (e.g., "spouse", "employer").
    pub relationship: Option<String>,
}

/// Input for attaching a guarantor to a customer.
#[derive(Debug, Clone, Serialize)]
pub struct GuarantorRequest {
    /// Full legal name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// National ID or passport number.
    pub national_id: String,
    /// Relationship to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// An image file staged for upload.
#[derive(Clone)]
pub struct ImageUpload {
    /// File name sent in the multipart part.
    pub file_name: String,
    /// MIME type (e.g., `image/jpeg`).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// Minimal acknowledgement returned by status-transition endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionReceipt<Id> {
    /// ID of the record the transition applied to.
    pub id: Id,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fleetdesk_core::StaffId;

    #[test]
    fn test_transition_receipt_decode() {
        let receipt: TransitionReceipt<StaffId> = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(receipt.id, StaffId::new(3));
    }

    #[test]
    fn test_image_upload_debug_omits_bytes() {
        let upload = ImageUpload {
            file_name: "front.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0; 1024],
        };
        let debug = format!("{upload:?}");
        assert!(debug.contains("1024 bytes"));
        assert!(!debug.contains("[0,"));
    }
}
