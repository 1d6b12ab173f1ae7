//! Create Manufacturer Use Case
//!
//! Registers a new manufacturer in the fleet records.

use std::sync::Arc;

use crate::domain::gateways::ManufacturerRepository;
use crate::domain::models::manufacturer::{CreateManufacturerData, Manufacturer};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new manufacturer
pub struct CreateManufacturerUseCase {
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
}

impl CreateManufacturerUseCase {
    /// Create a new CreateManufacturerUseCase
    #[must_use]
    pub fn new(manufacturer_repository: Arc<dyn ManufacturerRepository>) -> Self {
        Self {
            manufacturer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a manufacturer with the same name already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateManufacturerData) -> Result<Manufacturer, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new manufacturer");

        // Check if the name is already taken
        if self
            .manufacturer_repository
            .exists_by_name(&data.name, None)
            .await?
        {
            tracing::warn!(name = %data.name, "Manufacturer name already exists");
            return Err(UseCaseError::Conflict(format!(
                "Manufacturer with name {} already exists",
                data.name
            )));
        }

        let created = self.manufacturer_repository.create(&data).await?;

        tracing::info!(
            manufacturer_id = %created.id(),
            name = %created.name(),
            "Manufacturer created successfully"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::manufacturer_repository::MockManufacturerRepository;
    use crate::domain::models::manufacturer::ManufacturerId;

    fn create_test_data() -> CreateManufacturerData {
        CreateManufacturerData {
            name: "Audi".to_string(),
            country: "Germany".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_manufacturer_when_name_is_free() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_exists_by_name().returning(|_, _| Ok(false));
        repo.expect_create().returning(|data| {
            Ok(Manufacturer::restore(
                ManufacturerId::new(1),
                data.name.clone(),
                data.country.clone(),
            ))
        });

        let use_case = CreateManufacturerUseCase::new(Arc::new(repo));
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_ok());
        let manufacturer = result.unwrap();
        assert_eq!(manufacturer.name(), "Audi");
        assert_eq!(manufacturer.country(), "Germany");
    }

    #[tokio::test]
    async fn should_return_conflict_when_name_exists() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_exists_by_name().returning(|_, _| Ok(true));

        let use_case = CreateManufacturerUseCase::new(Arc::new(repo));
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }
}
