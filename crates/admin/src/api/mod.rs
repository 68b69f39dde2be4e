//! Fleet REST API client.
//!
//! All domain mutations go through the remote fleet API; this module owns
//! the HTTP plumbing and the structured error taxonomy. The per-domain
//! operations (cars, bookings, customers, staff, messaging, dashboard
//! metrics) are implemented as [`FleetClient`] methods in sibling files.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleetdesk_admin::{api::FleetClient, config::FleetConfig};
//!
//! let config = FleetConfig::from_env()?;
//! let client = FleetClient::new(&config)?;
//!
//! let cars = client.list_cars().await?;
//! let booking = client.get_booking(BookingId::new(12)).await?;
//! client.suspend_staff(StaffId::new(3)).await?;
//! ```

mod bookings;
mod cars;
mod customers;
mod dashboard;
mod envelope;
mod messaging;
mod staff;
pub mod types;

pub use envelope::{ListPayload, Page};
pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::FleetConfig;

/// Broad classification of an [`ApiError`], safe to store and clone in
/// slice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure (DNS, connect, timeout, TLS).
    Network,
    /// The server rejected the request as invalid (4xx with a body).
    Validation,
    /// The server failed (5xx).
    Server,
    /// Resource not found (404).
    NotFound,
    /// Authentication or authorization failed (401/403).
    Unauthorized,
    /// Rate limited (429).
    RateLimited,
    /// The response body could not be decoded.
    Decode,
}

/// Errors that can occur when interacting with the fleet API.
///
/// Every failure keeps its structure end-to-end; the single user-facing
/// string the UI renders comes from [`ApiError::user_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request (4xx with a validation body).
    #[error("validation error: {}", format_validation(.field, .message))]
    Validation {
        /// Field the server attributed the rejection to, when it said.
        field: Option<String>,
        /// Server-provided message.
        message: String,
    },

    /// The server failed (5xx).
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or the raw body.
        message: String,
    },

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication or authorization failed.
    #[error("unauthorized: invalid or expired API token")]
    Unauthorized,

    /// Rate limited by the fleet API.
    #[error("rate limited, retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds to wait, from the Retry-After header.
        retry_after_secs: u64,
    },

    /// Failed to decode a response body.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

fn format_validation(field: &Option<String>, message: &str) -> String {
    match field {
        Some(field) => format!("{field}: {message}"),
        None => message.to_owned(),
    }
}

impl ApiError {
    /// Classify this error for slice state.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The one string an admin screen shows for this failure.
    ///
    /// Validation messages pass through verbatim (they describe the
    /// operator's input); everything else renders a fixed phrasing so
    /// screens stay consistent.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the fleet service. Check your connection and try again.".to_string(),
            Self::Validation { field, message } => format_validation(field, message),
            Self::Server { .. } => "The fleet service reported an internal error. Try again later.".to_string(),
            Self::NotFound(what) => format!("{what} no longer exists."),
            Self::Unauthorized => "Your session is no longer valid. Sign in again.".to_string(),
            Self::RateLimited { retry_after_secs } => {
                format!("Too many requests. Retry in {retry_after_secs} seconds.")
            }
            Self::Decode(_) => "The fleet service returned an unexpected response.".to_string(),
        }
    }
}

/// Error body shape the fleet API returns for rejected requests.
///
/// Older endpoints use `detail`, newer ones `message`; both are accepted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
    field: Option<String>,
}

/// Fleet API client.
///
/// Cheap to clone; the underlying HTTP client and configuration are
/// shared behind an `Arc`.
#[derive(Clone)]
pub struct FleetClient {
    inner: Arc<FleetClientInner>,
}

struct FleetClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl FleetClient {
    /// Create a new fleet API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the bearer token contains non-header characters
    /// or the HTTP client fails to build.
    pub fn new(config: &FleetConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_token.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| ApiError::Decode(format!("invalid API token format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert("Authorization", auth_header);
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(FleetClientInner {
                client,
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_query<T: serde::de::DeserializeOwned, Q: serde::Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with no body (status transitions).
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with a multipart form (file uploads).
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Execute a PATCH request with a JSON body.
    pub(crate) async fn patch<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.patch(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a PATCH request with a multipart form (file uploads).
    pub(crate) async fn patch_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.patch(&url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Execute a DELETE request, expecting an empty success body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.delete(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(Self::parse_error(response).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| ApiError::Decode(format!("{e} in response body")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Map a non-success response onto the error taxonomy.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 429 {
            let retry_after_secs = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return ApiError::RateLimited { retry_after_secs };
        }

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: Option<ErrorBody> = serde_json::from_str(&body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone().or_else(|| b.detail.clone()));

        if status == 404 {
            return ApiError::NotFound(
                message.unwrap_or_else(|| "The requested resource".to_string()),
            );
        }

        if (400..500).contains(&status) {
            return ApiError::Validation {
                field: parsed.and_then(|b| b.field),
                message: message.unwrap_or_else(|| "The request was rejected".to_string()),
            };
        }

        ApiError::Server {
            status,
            message: message.unwrap_or(body),
        }
    }
}

impl std::fmt::Debug for FleetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
