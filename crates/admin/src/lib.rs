//! FleetDesk Admin library.
//!
//! This crate provides the fleet-management admin functionality as a
//! library: a typed client for the fleet REST API and the client-side
//! state layer (slices, selectors, drafts, persistence) that an admin
//! front end binds to.
//!
//! # Architecture
//!
//! - [`api`] - `FleetClient` and per-domain operations over the fleet
//!   REST API; all validation and business rules live server-side
//! - [`store`] - per-domain state slices synchronized with API call
//!   outcomes, plus pure filtering selectors
//! - [`config`] - environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod store;
