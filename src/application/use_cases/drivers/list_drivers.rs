//! List Drivers Use Case
//!
//! Retrieves drivers filtered by username and split into fixed-size pages.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;
use crate::shared::pagination::{Page, Paginator, LIST_PAGE_SIZE};
use crate::shared::search::filter_by_field;

/// Use case for listing drivers
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListDriversUseCase {
    /// Create a new ListDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// The username filter is a case-insensitive substring match; a blank
    /// filter keeps the whole collection. Out-of-range page requests are
    /// clamped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        username: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<Driver>, UseCaseError> {
        tracing::debug!(username = ?username, page = ?page, "Listing drivers");

        let drivers = self.driver_repository.find_all().await?;
        let filtered = filter_by_field(drivers, username, Driver::username);
        let page = Paginator::new(LIST_PAGE_SIZE).paginate(filtered, page.unwrap_or(1));

        tracing::debug!(
            total = page.total_items(),
            num_pages = page.num_pages(),
            "Found drivers"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::DriverId;

    fn driver(id: i64, username: &str) -> Driver {
        Driver::restore(
            DriverId::new(id),
            username.to_string(),
            "Test".to_string(),
            "Driver".to_string(),
            "irrelevant".to_string(),
            None,
        )
    }

    fn fixtures() -> Vec<Driver> {
        vec![driver(1, "max"), driver(2, "serg"), driver(3, "jan")]
    }

    #[tokio::test]
    async fn should_return_everything_without_filter() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListDriversUseCase::new(Arc::new(repo));
        let page = use_case.execute(None, None).await.unwrap();

        assert_eq!(page.items().len(), 3);
        assert!(!page.is_paginated());
    }

    #[tokio::test]
    async fn should_filter_by_username_substring() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListDriversUseCase::new(Arc::new(repo));
        let page = use_case.execute(Some("ma"), None).await.unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].username(), "max");
    }

    #[tokio::test]
    async fn should_return_empty_page_when_nothing_matches() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListDriversUseCase::new(Arc::new(repo));
        let page = use_case.execute(Some("ksafas"), None).await.unwrap();

        assert!(page.items().is_empty());
    }
}
