//! Domain types mirroring the fleet API's resources.
//!
//! These structs are decoded straight off the wire with serde; the server
//! owns validation and all derived values (rates, rollups, loyalty tiers),
//! the client only carries them.

pub mod booking;
pub mod car;
pub mod common;
pub mod customer;
pub mod dashboard;
pub mod message;
pub mod staff;

pub use booking::*;
pub use car::*;
pub use common::*;
pub use customer::*;
pub use dashboard::*;
pub use message::*;
pub use staff::*;
