//! Status enums for fleet entities.
//!
//! All statuses are owned by the fleet API; the client never validates a
//! transition before requesting it and trusts whatever the server echoes
//! back. The only client-side rule is [`StaffStatus::is_terminal`], which
//! gates which lifecycle actions the UI offers.

use serde::{Deserialize, Serialize};

/// Operational status of a car.
///
/// Statuses are mutually exclusive; transitions are decided server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
    Retired,
}

impl CarStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Rented,
        Self::Maintenance,
        Self::Retired,
    ];
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    PartiallyPaid,
    Paid,
    Refunded,
}

/// How a booking was (or will be) paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    BankTransfer,
    Mobile,
}

/// Employment status of a staff member.
///
/// Client-observed transitions: `active → suspended → active` (reactivate)
/// and `active | suspended → terminated`. Termination is terminal; there is
/// no UI path back from it. Deletion is a separate, unconditional action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    #[default]
    Active,
    Suspended,
    Terminated,
    Inactive,
}

impl StaffStatus {
    /// Whether this status has no further lifecycle transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Manager,
    Agent,
    Driver,
    Mechanic,
    Accountant,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::Agent => write!(f, "agent"),
            Self::Driver => write!(f, "driver"),
            Self::Mechanic => write!(f, "mechanic"),
            Self::Accountant => write!(f, "accountant"),
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "agent" => Ok(Self::Agent),
            "driver" => Ok(Self::Driver),
            "mechanic" => Ok(Self::Mechanic),
            "accountant" => Ok(Self::Accountant),
            _ => Err(format!("invalid staff role: {s}")),
        }
    }
}

/// Department a staff member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Operations,
    Sales,
    Maintenance,
    Finance,
    Administration,
}

/// Employment contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

/// Assigned work shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Morning,
    Evening,
    Night,
    Rotating,
}

/// Ordinal customer loyalty classification.
///
/// Maintained server-side and only displayed client-side. The derive order
/// gives `Bronze < Silver < Gold < Platinum < Diamond`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => write!(f, "bronze"),
            Self::Silver => write!(f, "silver"),
            Self::Gold => write!(f, "gold"),
            Self::Platinum => write!(f, "platinum"),
            Self::Diamond => write!(f, "diamond"),
        }
    }
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme (dark-mode toggle).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
