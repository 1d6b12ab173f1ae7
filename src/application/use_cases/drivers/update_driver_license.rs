//! Update Driver License Use Case
//!
//! Replaces a driver's license number, leaving every other field alone.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::license::validate_license_number;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for updating a driver's license number
pub struct UpdateDriverLicenseUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateDriverLicenseUseCase {
    /// Create a new UpdateDriverLicenseUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Validation` if the license number is malformed.
    /// Returns `UseCaseError::Conflict` if the license number belongs to another driver.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: DriverId,
        license_number: &str,
    ) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Updating driver license");

        if self.driver_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(driver_id = %id, "Driver not found for license update");
            return Err(UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            });
        }

        validate_license_number(license_number)
            .map_err(|err| UseCaseError::field("license_number", err.to_string()))?;

        // Check license uniqueness against everyone else
        if self
            .driver_repository
            .exists_by_license_number(license_number, Some(id))
            .await?
        {
            tracing::warn!(driver_id = %id, "Cannot update: license number already exists");
            return Err(UseCaseError::Conflict(format!(
                "Driver with license number {license_number} already exists"
            )));
        }

        let result = self
            .driver_repository
            .update_license_number(id, license_number)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(driver_id = %id, "Driver license updated successfully");
        Ok(result)
    }
}
