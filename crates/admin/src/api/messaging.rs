//! Bulk messaging operations.
//!
//! Campaign assembly and delivery happen inside the fleet service; the
//! client only submits the request and records the receipt.

use tracing::instrument;

use super::types::{BulkMessageReceipt, BulkMessageRequest, MessageChannel};
use super::{ApiError, FleetClient};

impl FleetClient {
    /// Dispatch a bulk message to a set of customers.
    ///
    /// Email messages require a subject; SMS messages must not carry one.
    /// That shape check is the one piece of validation done client-side,
    /// to fail before a campaign is half-created remotely.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a malformed request, otherwise
    /// an error if the API refuses the dispatch or the request fails.
    #[instrument(skip(self, request), fields(channel = request.channel.as_str(), recipients = request.recipient_ids.len()))]
    pub async fn send_bulk_message(
        &self,
        request: &BulkMessageRequest,
    ) -> Result<BulkMessageReceipt, ApiError> {
        match request.channel {
            MessageChannel::Email if request.subject.is_none() => {
                return Err(ApiError::Validation {
                    field: Some("subject".to_string()),
                    message: "email campaigns require a subject".to_string(),
                });
            }
            MessageChannel::Sms if request.subject.is_some() => {
                return Err(ApiError::Validation {
                    field: Some("subject".to_string()),
                    message: "SMS campaigns do not take a subject".to_string(),
                });
            }
            _ => {}
        }

        if request.recipient_ids.is_empty() {
            return Err(ApiError::Validation {
                field: Some("recipient_ids".to_string()),
                message: "at least one recipient is required".to_string(),
            });
        }

        self.post("/messages/bulk", request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::FleetConfig;
    use fleetdesk_core::CustomerId;
    use secrecy::SecretString;

    fn client() -> FleetClient {
        let config = FleetConfig::new(
            "http://localhost:9/api".parse().unwrap(),
            SecretString::from("test-token"),
        );
        FleetClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_email_without_subject_rejected_locally() {
        let request = BulkMessageRequest {
            channel: MessageChannel::Email,
            subject: None,
            body: "hello".to_string(),
            recipient_ids: vec![CustomerId::new(1)],
            from: None,
        };
        let err = client().send_bulk_message(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation { field: Some(f), .. } if f == "subject"
        ));
    }

    #[tokio::test]
    async fn test_empty_recipients_rejected_locally() {
        let request = BulkMessageRequest {
            channel: MessageChannel::Sms,
            subject: None,
            body: "hello".to_string(),
            recipient_ids: vec![],
            from: None,
        };
        let err = client().send_bulk_message(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation { field: Some(f), .. } if f == "recipient_ids"
        ));
    }
}
