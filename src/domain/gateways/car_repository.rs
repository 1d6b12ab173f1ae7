//! Car Repository Gateway
//!
//! Abstract trait defining the contract for car persistence.

use async_trait::async_trait;

use crate::domain::models::car::{Car, CarId, CreateCarData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Car persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All cars, sorted by ID ascending (their natural order)
    async fn find_all(&self) -> Result<Vec<Car>, RepositoryError>;

    /// Find a car by its ID, assigned driver IDs included
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError>;

    /// Create a new car with its driver assignments; the store assigns the ID
    async fn create(&self, data: &CreateCarData) -> Result<Car, RepositoryError>;

    /// Update a car and replace its driver assignments; `None` when the ID is unknown
    async fn update(&self, car: &Car) -> Result<Option<Car>, RepositoryError>;

    /// Total number of cars
    async fn count(&self) -> Result<u64, RepositoryError>;
}
