//! Taxi Fleet Registry API
//!
//! A Rust-based service for managing a taxi fleet's manufacturers, cars
//! and drivers, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
