//! Manufacturer Repository Gateway
//!
//! Abstract trait defining the contract for manufacturer persistence.

use async_trait::async_trait;

use crate::domain::models::manufacturer::{CreateManufacturerData, Manufacturer, ManufacturerId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Manufacturer persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    /// All manufacturers, sorted by name ascending (their natural order)
    async fn find_all(&self) -> Result<Vec<Manufacturer>, RepositoryError>;

    /// Find a manufacturer by its ID
    async fn find_by_id(&self, id: ManufacturerId)
        -> Result<Option<Manufacturer>, RepositoryError>;

    /// Check if a name is taken, optionally excluding a specific manufacturer
    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<ManufacturerId>,
    ) -> Result<bool, RepositoryError>;

    /// Create a new manufacturer; the store assigns the ID
    async fn create(&self, data: &CreateManufacturerData)
        -> Result<Manufacturer, RepositoryError>;

    /// Update an existing manufacturer; `None` when the ID is unknown
    async fn update(&self, manufacturer: &Manufacturer)
        -> Result<Option<Manufacturer>, RepositoryError>;

    /// Total number of manufacturers
    async fn count(&self) -> Result<u64, RepositoryError>;
}
