//! Get Car By ID Use Case
//!
//! Retrieves a single car together with its manufacturer and assigned drivers.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::domain::models::car::{Car, CarId};
use crate::domain::models::driver::Driver;
use crate::domain::models::manufacturer::Manufacturer;
use crate::shared::errors::UseCaseError;

/// A car with its manufacturer and assigned drivers resolved
#[derive(Debug, Clone)]
pub struct CarDetails {
    pub car: Car,
    pub manufacturer: Manufacturer,
    pub drivers: Vec<Driver>,
}

/// Use case for getting a car by its ID
pub struct GetCarByIdUseCase {
    car_repository: Arc<dyn CarRepository>,
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetCarByIdUseCase {
    /// Create a new GetCarByIdUseCase
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
    /// Returns `UseCaseError::NotFound` if the car (or its manufacturer) doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CarId) -> Result<CarDetails, UseCaseError> {
        tracing::debug!(car_id = %id, "Getting car by id");

        let car = self
            .car_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            })?;

        let manufacturer = self
            .manufacturer_repository
            .find_by_id(car.manufacturer_id())
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Manufacturer".to_string(),
                id: car.manufacturer_id().to_string(),
            })?;

        let drivers = self.driver_repository.find_by_ids(car.driver_ids()).await?;

        Ok(CarDetails {
            car,
            manufacturer,
            drivers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::car_repository::MockCarRepository;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::gateways::manufacturer_repository::MockManufacturerRepository;
    use crate::domain::models::driver::DriverId;
    use crate::domain::models::manufacturer::ManufacturerId;

    fn test_car() -> Car {
        Car::restore(
            CarId::new(3),
            "Rs6".to_string(),
            ManufacturerId::new(1),
            vec![DriverId::new(5)],
        )
    }

    fn test_driver() -> Driver {
        Driver::restore(
            DriverId::new(5),
            "max".to_string(),
            "Max".to_string(),
            "Verstappen".to_string(),
            "irrelevant".to_string(),
            Some("NMK45908".to_string()),
        )
    }

    #[tokio::test]
    async fn should_resolve_manufacturer_and_drivers() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id().returning(|_| Ok(Some(test_car())));
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers.expect_find_by_id().returning(|_| {
            Ok(Some(Manufacturer::restore(
                ManufacturerId::new(1),
                "Audi".to_string(),
                "Germany".to_string(),
            )))
        });
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_find_by_ids()
            .returning(|_| Ok(vec![test_driver()]));

        let use_case = GetCarByIdUseCase::new(
            Arc::new(cars),
            Arc::new(manufacturers),
            Arc::new(drivers),
        );
        let details = use_case.execute(CarId::new(3)).await.unwrap();

        assert_eq!(details.car.model(), "Rs6");
        assert_eq!(details.manufacturer.name(), "Audi");
        assert_eq!(details.drivers.len(), 1);
        assert_eq!(details.drivers[0].username(), "max");
    }

    #[tokio::test]
    async fn should_return_not_found_when_car_does_not_exist() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCarByIdUseCase::new(
            Arc::new(cars),
            Arc::new(MockManufacturerRepository::new()),
            Arc::new(MockDriverRepository::new()),
        );
        let result = use_case.execute(CarId::new(99)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
