//! Create Driver Use Case
//!
//! Registers a new driver with a hashed password and a validated license.
//! Nothing is persisted when any check fails.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::license::validate_license_number;
use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::shared::errors::UseCaseError;
use crate::shared::password::hash_password;

/// Input for registering a driver, password still in the clear
#[derive(Clone)]
pub struct RegisterDriverData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub license_number: String,
}

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the license number is malformed.
    /// Returns `UseCaseError::Conflict` if the username or license number is already taken.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: RegisterDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(username = %data.username, "Creating new driver");

        validate_license_number(&data.license_number)
            .map_err(|err| UseCaseError::field("license_number", err.to_string()))?;

        if self
            .driver_repository
            .exists_by_username(&data.username)
            .await?
        {
            tracing::warn!(username = %data.username, "Driver username already exists");
            return Err(UseCaseError::Conflict(format!(
                "Driver with username {} already exists",
                data.username
            )));
        }

        if self
            .driver_repository
            .exists_by_license_number(&data.license_number, None)
            .await?
        {
            tracing::warn!(
                license_number = %data.license_number,
                "Driver license number already exists"
            );
            return Err(UseCaseError::Conflict(format!(
                "Driver with license number {} already exists",
                data.license_number
            )));
        }

        let create = CreateDriverData {
            username: data.username,
            first_name: data.first_name,
            last_name: data.last_name,
            password_hash: hash_password(&data.password),
            license_number: data.license_number,
        };
        let created = self.driver_repository.create(&create).await?;

        tracing::info!(
            driver_id = %created.id(),
            username = %created.username(),
            "Driver created successfully"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::DriverId;
    use crate::shared::password::verify_password;

    fn register_data() -> RegisterDriverData {
        RegisterDriverData {
            username: "new_user".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "1234s#$SSf".to_string(),
            license_number: "NMK45908".to_string(),
        }
    }

    #[tokio::test]
    async fn should_store_hashed_password_never_the_clear_one() {
        let mut repo = MockDriverRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_license_number()
            .returning(|_, _| Ok(false));
        repo.expect_create()
            .withf(|data| {
                data.password_hash != "1234s#$SSf"
                    && verify_password("1234s#$SSf", &data.password_hash)
            })
            .returning(|data| {
                Ok(Driver::restore(
                    DriverId::new(1),
                    data.username.clone(),
                    data.first_name.clone(),
                    data.last_name.clone(),
                    data.password_hash.clone(),
                    Some(data.license_number.clone()),
                ))
            });

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let result = use_case.execute(register_data()).await;

        assert!(result.is_ok());
        let driver = result.unwrap();
        assert_eq!(driver.username(), "new_user");
        assert_eq!(driver.license_number(), Some("NMK45908"));
    }

    #[tokio::test]
    async fn should_reject_malformed_license_before_touching_the_store() {
        // No expectations set: any repository call would panic the test
        let repo = MockDriverRepository::new();

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let mut data = register_data();
        data.license_number = "N45908".to_string();
        let result = use_case.execute(data).await;

        match result.unwrap_err() {
            UseCaseError::Validation(errors) => {
                assert_eq!(errors[0].field, "license_number");
                assert_eq!(
                    errors[0].message,
                    "License number should consist of 8 characters"
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_return_conflict_when_username_taken() {
        let mut repo = MockDriverRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(true));

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let result = use_case.execute(register_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn should_return_conflict_when_license_number_taken() {
        let mut repo = MockDriverRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_license_number()
            .returning(|_, _| Ok(true));

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let result = use_case.execute(register_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }
}
