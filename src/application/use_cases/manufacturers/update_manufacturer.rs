//! Update Manufacturer Use Case
//!
//! Replaces the name and country of an existing manufacturer.

use std::sync::Arc;

use crate::domain::gateways::ManufacturerRepository;
use crate::domain::models::manufacturer::{CreateManufacturerData, Manufacturer, ManufacturerId};
use crate::shared::errors::UseCaseError;

/// Use case for updating a manufacturer
pub struct UpdateManufacturerUseCase {
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
}

impl UpdateManufacturerUseCase {
    /// Create a new UpdateManufacturerUseCase
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
    /// Returns `UseCaseError::NotFound` if the manufacturer doesn't exist.
    /// Returns `UseCaseError::Conflict` if the new name is already taken.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: ManufacturerId,
        data: CreateManufacturerData,
    ) -> Result<Manufacturer, UseCaseError> {
        tracing::info!(manufacturer_id = %id, "Updating manufacturer");

        let existing = self
            .manufacturer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(manufacturer_id = %id, "Manufacturer not found for update");
                UseCaseError::NotFound {
                    resource: "Manufacturer".to_string(),
                    id: id.to_string(),
                }
            })?;

        // Check name uniqueness against everyone else
        if self
            .manufacturer_repository
            .exists_by_name(&data.name, Some(id))
            .await?
        {
            tracing::warn!(
                manufacturer_id = %id,
                name = %data.name,
                "Cannot update: manufacturer name already exists"
            );
            return Err(UseCaseError::Conflict(format!(
                "Manufacturer with name {} already exists",
                data.name
            )));
        }

        let updated = existing.with_details(data.name, data.country);

        let result = self
            .manufacturer_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Manufacturer".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(manufacturer_id = %id, "Manufacturer updated successfully");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::manufacturer_repository::MockManufacturerRepository;

    fn existing_manufacturer() -> Manufacturer {
        Manufacturer::restore(
            ManufacturerId::new(7),
            "Toyota".to_string(),
            "Japan".to_string(),
        )
    }

    #[tokio::test]
    async fn should_update_manufacturer() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(existing_manufacturer())));
        repo.expect_exists_by_name().returning(|_, _| Ok(false));
        repo.expect_update().returning(|m| Ok(Some(m.clone())));

        let use_case = UpdateManufacturerUseCase::new(Arc::new(repo));
        let data = CreateManufacturerData {
            name: "Toyota Motor".to_string(),
            country: "Japan".to_string(),
        };
        let result = use_case.execute(ManufacturerId::new(7), data).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name(), "Toyota Motor");
    }

    #[tokio::test]
    async fn should_return_not_found_when_manufacturer_does_not_exist() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = UpdateManufacturerUseCase::new(Arc::new(repo));
        let data = CreateManufacturerData {
            name: "Toyota".to_string(),
            country: "Japan".to_string(),
        };
        let result = use_case.execute(ManufacturerId::new(99), data).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_return_conflict_when_renaming_to_taken_name() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(existing_manufacturer())));
        repo.expect_exists_by_name().returning(|_, _| Ok(true));

        let use_case = UpdateManufacturerUseCase::new(Arc::new(repo));
        let data = CreateManufacturerData {
            name: "Audi".to_string(),
            country: "Germany".to_string(),
        };
        let result = use_case.execute(ManufacturerId::new(7), data).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }
}
