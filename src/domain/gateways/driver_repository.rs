//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver persistence.

use async_trait::async_trait;

use crate::domain::models::driver::{CreateDriverData, Driver, DriverId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// All drivers, sorted by ID ascending (their natural order)
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its ID
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Drivers matching any of the given IDs, sorted by ID ascending
    async fn find_by_ids(&self, ids: &[DriverId]) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError>;

    /// Check if a username is taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Check if a license number is taken, optionally excluding a specific driver
    async fn exists_by_license_number(
        &self,
        license_number: &str,
        exclude_id: Option<DriverId>,
    ) -> Result<bool, RepositoryError>;

    /// Create a new driver; the store assigns the ID
    async fn create(&self, data: &CreateDriverData) -> Result<Driver, RepositoryError>;

    /// Replace a driver's license number; `None` when the ID is unknown
    async fn update_license_number(
        &self,
        id: DriverId,
        license_number: &str,
    ) -> Result<Option<Driver>, RepositoryError>;

    /// Total number of drivers
    async fn count(&self) -> Result<u64, RepositoryError>;
}
