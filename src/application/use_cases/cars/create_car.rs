//! Create Car Use Case
//!
//! Registers a new car, checking that its manufacturer and drivers exist.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::domain::models::car::{Car, CreateCarData};
use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

/// Use case for creating a new car
pub struct CreateCarUseCase {
    car_repository: Arc<dyn CarRepository>,
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateCarUseCase {
    /// Create a new CreateCarUseCase
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
    /// Duplicate driver references are collapsed before anything is stored.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the manufacturer or any driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateCarData) -> Result<Car, UseCaseError> {
        tracing::info!(model = %data.model, "Creating new car");

        // The referenced manufacturer must exist
        if self
            .manufacturer_repository
            .find_by_id(data.manufacturer_id)
            .await?
            .is_none()
        {
            tracing::warn!(
                manufacturer_id = %data.manufacturer_id,
                "Cannot create car: manufacturer does not exist"
            );
            return Err(UseCaseError::field(
                "manufacturer",
                "Selected manufacturer does not exist",
            ));
        }

        let driver_ids = self.checked_driver_ids(data.driver_ids).await?;

        let data = CreateCarData {
            model: data.model,
            manufacturer_id: data.manufacturer_id,
            driver_ids,
        };
        let created = self.car_repository.create(&data).await?;

        tracing::info!(
            car_id = %created.id(),
            model = %created.model(),
            "Car created successfully"
        );

        Ok(created)
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
                tracing::warn!("Cannot create car: one or more drivers do not exist");
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
    use crate::domain::models::car::CarId;
    use crate::domain::models::driver::Driver;
    use crate::domain::models::manufacturer::{Manufacturer, ManufacturerId};

    fn existing_manufacturer() -> Option<Manufacturer> {
        Some(Manufacturer::restore(
            ManufacturerId::new(1),
            "Audi".to_string(),
            "Germany".to_string(),
        ))
    }

    fn driver(id: i64) -> Driver {
        Driver::restore(
            DriverId::new(id),
            format!("driver{id}"),
            "Test".to_string(),
            "Driver".to_string(),
            "irrelevant".to_string(),
            None,
        )
    }

    fn create_test_data(driver_ids: Vec<DriverId>) -> CreateCarData {
        CreateCarData {
            model: "Rs6".to_string(),
            manufacturer_id: ManufacturerId::new(1),
            driver_ids,
        }
    }

    #[tokio::test]
    async fn should_create_car_with_deduplicated_drivers() {
        let mut cars = MockCarRepository::new();
        cars.expect_create()
            .withf(|data| data.driver_ids == [DriverId::new(3), DriverId::new(5)])
            .returning(|data| {
                Ok(Car::restore(
                    CarId::new(1),
                    data.model.clone(),
                    data.manufacturer_id,
                    data.driver_ids.clone(),
                ))
            });
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_find_by_id()
            .returning(|_| Ok(existing_manufacturer()));
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_find_by_ids()
            .returning(|_| Ok(vec![driver(3), driver(5)]));

        let use_case = CreateCarUseCase::new(
            Arc::new(cars),
            Arc::new(manufacturers),
            Arc::new(drivers),
        );
        let data = create_test_data(vec![DriverId::new(5), DriverId::new(5), DriverId::new(3)]);
        let result = use_case.execute(data).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().driver_ids().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_manufacturer() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers.expect_find_by_id().returning(|_| Ok(None));

        let use_case = CreateCarUseCase::new(
            Arc::new(MockCarRepository::new()),
            Arc::new(manufacturers),
            Arc::new(MockDriverRepository::new()),
        );
        let result = use_case.execute(create_test_data(vec![])).await;

        match result.unwrap_err() {
            UseCaseError::Validation(errors) => assert_eq!(errors[0].field, "manufacturer"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_driver() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_find_by_id()
            .returning(|_| Ok(existing_manufacturer()));
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_ids().returning(|_| Ok(vec![]));

        let use_case = CreateCarUseCase::new(
            Arc::new(MockCarRepository::new()),
            Arc::new(manufacturers),
            Arc::new(drivers),
        );
        let result = use_case
            .execute(create_test_data(vec![DriverId::new(42)]))
            .await;

        match result.unwrap_err() {
            UseCaseError::Validation(errors) => assert_eq!(errors[0].field, "drivers"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
