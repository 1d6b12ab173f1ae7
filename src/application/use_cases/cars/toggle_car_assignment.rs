//! Toggle Car Assignment Use Case
//!
//! Assigns a driver to a car, or removes the assignment if it already exists.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository};
use crate::domain::models::car::{Car, CarId};
use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

/// Use case for toggling a driver's assignment to a car
pub struct ToggleCarAssignmentUseCase {
    car_repository: Arc<dyn CarRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl ToggleCarAssignmentUseCase {
    /// Create a new ToggleCarAssignmentUseCase
    #[must_use]
    pub fn new(
        car_repository: Arc<dyn CarRepository>,
        driver_repository: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            car_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car or the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, car_id: CarId, driver_id: DriverId) -> Result<Car, UseCaseError> {
        tracing::info!(car_id = %car_id, driver_id = %driver_id, "Toggling car assignment");

        let car = self
            .car_repository
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: car_id.to_string(),
            })?;

        if self.driver_repository.find_by_id(driver_id).await?.is_none() {
            return Err(UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: driver_id.to_string(),
            });
        }

        let toggled = car.with_driver_toggled(driver_id);

        let result = self
            .car_repository
            .update(&toggled)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: car_id.to_string(),
            })?;

        tracing::info!(
            car_id = %car_id,
            driver_id = %driver_id,
            assigned = result.has_driver(driver_id),
            "Car assignment toggled"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::car_repository::MockCarRepository;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::Driver;
    use crate::domain::models::manufacturer::ManufacturerId;

    fn car_with_drivers(driver_ids: Vec<DriverId>) -> Car {
        Car::restore(
            CarId::new(1),
            "Rs6".to_string(),
            ManufacturerId::new(1),
            driver_ids,
        )
    }

    fn existing_driver() -> Option<Driver> {
        Some(Driver::restore(
            DriverId::new(5),
            "max".to_string(),
            "Max".to_string(),
            "Verstappen".to_string(),
            "irrelevant".to_string(),
            None,
        ))
    }

    #[tokio::test]
    async fn should_assign_driver_when_not_assigned() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(|_| Ok(Some(car_with_drivers(vec![]))));
        cars.expect_update().returning(|car| Ok(Some(car.clone())));
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_id().returning(|_| Ok(existing_driver()));

        let use_case = ToggleCarAssignmentUseCase::new(Arc::new(cars), Arc::new(drivers));
        let result = use_case
            .execute(CarId::new(1), DriverId::new(5))
            .await
            .unwrap();

        assert!(result.has_driver(DriverId::new(5)));
    }

    #[tokio::test]
    async fn should_unassign_driver_when_already_assigned() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(|_| Ok(Some(car_with_drivers(vec![DriverId::new(5)]))));
        cars.expect_update().returning(|car| Ok(Some(car.clone())));
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_id().returning(|_| Ok(existing_driver()));

        let use_case = ToggleCarAssignmentUseCase::new(Arc::new(cars), Arc::new(drivers));
        let result = use_case
            .execute(CarId::new(1), DriverId::new(5))
            .await
            .unwrap();

        assert!(!result.has_driver(DriverId::new(5)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_car_does_not_exist() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id().returning(|_| Ok(None));

        let use_case =
            ToggleCarAssignmentUseCase::new(Arc::new(cars), Arc::new(MockDriverRepository::new()));
        let result = use_case.execute(CarId::new(99), DriverId::new(5)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_return_not_found_when_driver_does_not_exist() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(|_| Ok(Some(car_with_drivers(vec![]))));
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_id().returning(|_| Ok(None));

        let use_case = ToggleCarAssignmentUseCase::new(Arc::new(cars), Arc::new(drivers));
        let result = use_case.execute(CarId::new(1), DriverId::new(99)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
