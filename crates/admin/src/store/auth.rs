//! Auth slice.

use fleetdesk_core::Email;
use serde::{Deserialize, Serialize};

/// The signed-in admin operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: Option<Email>,
}

/// State container for the session.
///
/// Persisted across restarts as part of the whitelisted snapshot (see
/// [`super::persistence`]); the fleet API decides whether a restored
/// token is still valid on the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSlice {
    /// Session token, when signed in.
    pub token: Option<String>,
    /// Signed-in operator, when known.
    pub user: Option<AdminIdentity>,
}

impl AuthSlice {
    /// Record a successful sign-in.
    pub fn sign_in(&mut self, token: String, user: AdminIdentity) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the session.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Whether a session token is held.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}
