//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod pagination;
pub mod password;
pub mod search;

pub use errors::{ApiError, RepositoryError, UseCaseError};
