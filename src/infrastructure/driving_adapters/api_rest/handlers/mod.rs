//! API Handlers
//!
//! HTTP handlers for the REST API, grouped by resource.

pub mod auth;
pub mod cars;
pub mod dashboard;
pub mod drivers;
pub mod manufacturers;
