//! Update Car Use Case
//!
//! Replaces the model, manufacturer, and driver assignments of a car.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::domain::models::car::{Car, CarId, CreateCarData};
use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

/// Use case for updating a car
pub struct UpdateCarUseCase {
    car_repository: Arc<dyn CarRepository>,
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateCarUseCase {
    /// Create a new UpdateCarUseCase
    #[must_use]
    pub fn new(
        car_repository: Arc<dyn CarRepository>,
        manufacturer_repository: Arc<dyn ManufacturerRepository>,
        driver_repository: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            car_repository,
            manufacturer_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car doesn't exist.
    /// Returns `UseCaseError::Validation` if the manufacturer or any driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CarId, data: CreateCarData) -> Result<Car, UseCaseError> {
        tracing::info!(car_id = %id, "Updating car");

        let existing = self
            .car_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(car_id = %id, "Car not found for update");
                UseCaseError::NotFound {
                    resource: "Car".to_string(),
                    id: id.to_string(),
                }
            })?;

        // The referenced manufacturer must exist
        if self
            .manufacturer_repository
            .find_by_id(data.manufacturer_id)
            .await?
            .is_none()
        {
            tracing::warn!(
                car_id = %id,
                manufacturer_id = %data.manufacturer_id,
                "Cannot update car: manufacturer does not exist"
            );
            return Err(UseCaseError::field(
                "manufacturer",
                "Selected manufacturer does not exist",
            ));
        }

        let driver_ids = self.checked_driver_ids(data.driver_ids).await?;

        let updated = existing.with_details(data.model, data.manufacturer_id, driver_ids);

        let result = self
            .car_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(car_id = %id, "Car updated successfully");
        Ok(result)
    }

    /// Dedupe the requested driver IDs and check that each one exists
    async fn checked_driver_ids(
        &self,
        driver_ids: Vec<DriverId>,
    ) -> Result<Vec<DriverId>, UseCaseError> {
        let mut ids = driver_ids;
        ids.sort_unstable();
        ids.dedup();

        if !ids.is_empty() {
            let found = self.driver_repository.find_by_ids(&ids).await?;
            if found.len() != ids.len() {
                tracing::warn!("Cannot update car: one or more drivers do not exist");
                return Err(UseCaseError::field(
                    "drivers",
                    "One or more selected drivers do not exist",
                ));
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::car_repository::MockCarRepository;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::gateways::manufacturer_repository::MockManufacturerRepository;
    use crate::domain::models::manufacturer::{Manufacturer, ManufacturerId};

    fn existing_car() -> Car {
        Car::restore(
            CarId::new(4),
            "Celica".to_string(),
            ManufacturerId::new(2),
            vec![],
        )
    }

    fn update_data() -> CreateCarData {
        CreateCarData {
            model: "Supra".to_string(),
            manufacturer_id: ManufacturerId::new(2),
            driver_ids: vec![],
        }
    }

    #[tokio::test]
    async fn should_update_car() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(|_| Ok(Some(existing_car())));
        cars.expect_update().returning(|car| Ok(Some(car.clone())));
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers.expect_find_by_id().returning(|_| {
            Ok(Some(Manufacturer::restore(
                ManufacturerId::new(2),
                "Toyota".to_string(),
                "Japan".to_string(),
            )))
        });

        let use_case = UpdateCarUseCase::new(
            Arc::new(cars),
            Arc::new(manufacturers),
            Arc::new(MockDriverRepository::new()),
        );
        let result = use_case.execute(CarId::new(4), update_data()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().model(), "Supra");
    }

    #[tokio::test]
    async fn should_return_not_found_when_car_does_not_exist() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id().returning(|_| Ok(None));

        let use_case = UpdateCarUseCase::new(
            Arc::new(cars),
            Arc::new(MockManufacturerRepository::new()),
            Arc::new(MockDriverRepository::new()),
        );
        let result = use_case.execute(CarId::new(99), update_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_reject_unknown_manufacturer() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(|_| Ok(Some(existing_car())));
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers.expect_find_by_id().returning(|_| Ok(None));

        let use_case = UpdateCarUseCase::new(
            Arc::new(cars),
            Arc::new(manufacturers),
            Arc::new(MockDriverRepository::new()),
        );
        let result = use_case.execute(CarId::new(4), update_data()).await;

        match result.unwrap_err() {
            UseCaseError::Validation(errors) => assert_eq!(errors[0].field, "manufacturer"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
