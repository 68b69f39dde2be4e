//! Bulk messaging types.

use fleetdesk_core::{CustomerId, MessageCampaignId};
use serde::{Deserialize, Serialize};

/// Delivery channel for a bulk message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageChannel {
    /// Email campaign; requires a subject.
    Email,
    /// SMS campaign; body only (160 chars standard, 70 with emoji).
    Sms,
}

impl MessageChannel {
    /// Wire name of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

/// Input for dispatching a bulk message to customers.
#[derive(Debug, Clone, Serialize)]
pub struct BulkMessageRequest {
    /// Delivery channel.
    pub channel: MessageChannel,
    /// Subject line (email only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body.
    pub body: String,
    /// Customers to deliver to.
    pub recipient_ids: Vec<CustomerId>,
    /// Sender identity override (email only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Server acknowledgement of a dispatched bulk message.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkMessageReceipt {
    /// Campaign created for this dispatch.
    pub campaign_id: MessageCampaignId,
    /// Recipients accepted for delivery.
    pub accepted: u64,
    /// Recipients rejected (missing contact, opted out).
    pub rejected: u64,
}
