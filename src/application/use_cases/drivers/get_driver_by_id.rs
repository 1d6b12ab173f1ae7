//! Get Driver By ID Use Case
//!
//! Retrieves a single driver from the fleet records.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a driver by its ID
pub struct GetDriverByIdUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetDriverByIdUseCase {
    /// Create a new GetDriverByIdUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DriverId) -> Result<Driver, UseCaseError> {
        tracing::debug!(driver_id = %id, "Getting driver by id");

        self.driver_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(driver_id = %id, "Driver not found");
                UseCaseError::NotFound {
                    resource: "Driver".to_string(),
                    id: id.to_string(),
                }
            })
    }
}
