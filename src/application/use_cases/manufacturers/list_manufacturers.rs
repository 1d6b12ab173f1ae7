//! List Manufacturers Use Case
//!
//! Retrieves manufacturers filtered by name and split into fixed-size pages.

use std::sync::Arc;

use crate::domain::gateways::ManufacturerRepository;
use crate::domain::models::manufacturer::Manufacturer;
use crate::shared::errors::UseCaseError;
use crate::shared::pagination::{Page, Paginator, LIST_PAGE_SIZE};
use crate::shared::search::filter_by_field;

/// Use case for listing manufacturers
pub struct ListManufacturersUseCase {
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
}

impl ListManufacturersUseCase {
    /// Create a new ListManufacturersUseCase
    #[must_use]
    pub fn new(manufacturer_repository: Arc<dyn ManufacturerRepository>) -> Self {
        Self {
            manufacturer_repository,
        }
    }

    /// Execute the use case
    ///
    /// The name filter is a case-insensitive substring match; a blank filter
    /// keeps the whole collection. Out-of-range page requests are clamped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        name: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<Manufacturer>, UseCaseError> {
        tracing::debug!(name = ?name, page = ?page, "Listing manufacturers");

        let manufacturers = self.manufacturer_repository.find_all().await?;
        let filtered = filter_by_field(manufacturers, name, Manufacturer::name);
        let page = Paginator::new(LIST_PAGE_SIZE).paginate(filtered, page.unwrap_or(1));

        tracing::debug!(
            total = page.total_items(),
            num_pages = page.num_pages(),
            "Found manufacturers"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::manufacturer_repository::MockManufacturerRepository;
    use crate::domain::models::manufacturer::ManufacturerId;

    fn manufacturer(id: i64, name: &str, country: &str) -> Manufacturer {
        Manufacturer::restore(
            ManufacturerId::new(id),
            name.to_string(),
            country.to_string(),
        )
    }

    fn fixtures() -> Vec<Manufacturer> {
        vec![
            manufacturer(1, "Audi", "Germany"),
            manufacturer(2, "BMW", "Germany"),
            manufacturer(3, "Toyota", "Japan"),
        ]
    }

    #[tokio::test]
    async fn should_return_everything_without_filter() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListManufacturersUseCase::new(Arc::new(repo));
        let page = use_case.execute(None, None).await.unwrap();

        assert_eq!(page.items().len(), 3);
        assert!(!page.is_paginated());
    }

    #[tokio::test]
    async fn should_filter_by_name_ignoring_case() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListManufacturersUseCase::new(Arc::new(repo));
        let page = use_case.execute(Some("audi"), None).await.unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].name(), "Audi");
    }

    #[tokio::test]
    async fn should_split_seven_manufacturers_across_two_pages() {
        let mut repo = MockManufacturerRepository::new();
        repo.expect_find_all().returning(|| {
            Ok((1..=7)
                .map(|n| manufacturer(n, &format!("Maker {n}"), "Nowhere"))
                .collect())
        });

        let use_case = ListManufacturersUseCase::new(Arc::new(repo));
        let second = use_case.execute(None, Some(2)).await.unwrap();

        assert_eq!(second.items().len(), 2);
        assert_eq!(second.total_items(), 7);
        assert!(second.is_paginated());
    }
}
