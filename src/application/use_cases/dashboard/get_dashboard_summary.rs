//! Get Dashboard Summary Use Case
//!
//! Collects the record counts shown on the home page.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::shared::errors::UseCaseError;

/// Counts of every record kind in the fleet
#[derive(Debug, Clone, Copy)]
pub struct DashboardSummary {
    pub num_drivers: u64,
    pub num_cars: u64,
    pub num_manufacturers: u64,
}

/// Use case for collecting the dashboard summary
pub struct GetDashboardSummaryUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    car_repository: Arc<dyn CarRepository>,
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
}

impl GetDashboardSummaryUseCase {
    /// Create a new GetDashboardSummaryUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        car_repository: Arc<dyn CarRepository>,
        manufacturer_repository: Arc<dyn ManufacturerRepository>,
    ) -> Self {
        Self {
            driver_repository,
            car_repository,
            manufacturer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<DashboardSummary, UseCaseError> {
        tracing::debug!("Collecting dashboard summary");

        let num_drivers = self.driver_repository.count().await?;
        let num_cars = self.car_repository.count().await?;
        let num_manufacturers = self.manufacturer_repository.count().await?;

        Ok(DashboardSummary {
            num_drivers,
            num_cars,
            num_manufacturers,
        })
    }
}
