//! List Cars Use Case
//!
//! Retrieves cars filtered by model and split into fixed-size pages.

use std::sync::Arc;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::Car;
use crate::shared::errors::UseCaseError;
use crate::shared::pagination::{Page, Paginator, LIST_PAGE_SIZE};
use crate::shared::search::filter_by_field;

/// Use case for listing cars
pub struct ListCarsUseCase {
    car_repository: Arc<dyn CarRepository>,
}

impl ListCarsUseCase {
    /// Create a new ListCarsUseCase
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }

    /// Execute the use case
    ///
    /// The model filter is a case-insensitive substring match; a blank filter
    /// keeps the whole collection. Out-of-range page requests are clamped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        model: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<Car>, UseCaseError> {
        tracing::debug!(model = ?model, page = ?page, "Listing cars");

        let cars = self.car_repository.find_all().await?;
        let filtered = filter_by_field(cars, model, Car::model);
        let page = Paginator::new(LIST_PAGE_SIZE).paginate(filtered, page.unwrap_or(1));

        tracing::debug!(
            total = page.total_items(),
            num_pages = page.num_pages(),
            "Found cars"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::car_repository::MockCarRepository;
    use crate::domain::models::car::CarId;
    use crate::domain::models::manufacturer::ManufacturerId;

    fn car(id: i64, model: &str) -> Car {
        Car::restore(
            CarId::new(id),
            model.to_string(),
            ManufacturerId::new(1),
            vec![],
        )
    }

    fn fixtures() -> Vec<Car> {
        vec![car(1, "Rs6"), car(2, "M3"), car(3, "Celica")]
    }

    #[tokio::test]
    async fn should_return_everything_without_filter() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListCarsUseCase::new(Arc::new(repo));
        let page = use_case.execute(None, None).await.unwrap();

        assert_eq!(page.items().len(), 3);
    }

    #[tokio::test]
    async fn should_filter_by_model_substring() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListCarsUseCase::new(Arc::new(repo));
        let page = use_case.execute(Some("Rs"), None).await.unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].model(), "Rs6");
    }

    #[tokio::test]
    async fn should_return_empty_page_when_nothing_matches() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_all().returning(|| Ok(fixtures()));

        let use_case = ListCarsUseCase::new(Arc::new(repo));
        let page = use_case.execute(Some("ksafas"), None).await.unwrap();

        assert!(page.items().is_empty());
        assert_eq!(page.total_items(), 0);
    }
}
