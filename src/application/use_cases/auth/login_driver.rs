//! Login Driver Use Case
//!
//! Checks a driver's credentials against the stored password hash.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;
use crate::shared::password::verify_password;

/// Use case for authenticating a driver by username and password
pub struct LoginDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl LoginDriverUseCase {
    /// Create a new LoginDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// Unknown usernames and wrong passwords produce the same error, so the
    /// response never reveals which one was at fault.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the credentials don't match.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str, password: &str) -> Result<Driver, UseCaseError> {
        tracing::info!(username = %username, "Driver login attempt");

        let Some(driver) = self.driver_repository.find_by_username(username).await? else {
            tracing::warn!(username = %username, "Login failed: unknown username");
            return Err(UseCaseError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        };

        if !verify_password(password, driver.password_hash()) {
            tracing::warn!(username = %username, "Login failed: wrong password");
            return Err(UseCaseError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        tracing::info!(driver_id = %driver.id(), "Driver logged in");
        Ok(driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::DriverId;
    use crate::shared::password::hash_password;

    fn driver_with_password(password: &str) -> Driver {
        Driver::restore(
            DriverId::new(5),
            "max".to_string(),
            "Max".to_string(),
            "Verstappen".to_string(),
            hash_password(password),
            Some("NMK45908".to_string()),
        )
    }

    #[tokio::test]
    async fn should_log_in_with_correct_credentials() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(driver_with_password("1234s#$SSf"))));

        let use_case = LoginDriverUseCase::new(Arc::new(repo));
        let driver = use_case.execute("max", "1234s#$SSf").await.unwrap();

        assert_eq!(driver.username(), "max");
    }

    #[tokio::test]
    async fn should_reject_unknown_username() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let use_case = LoginDriverUseCase::new(Arc::new(repo));
        let result = use_case.execute("ghost", "whatever").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn should_reject_wrong_password_with_identical_message() {
        let mut unknown = MockDriverRepository::new();
        unknown.expect_find_by_username().returning(|_| Ok(None));
        let mut wrong = MockDriverRepository::new();
        wrong
            .expect_find_by_username()
            .returning(|_| Ok(Some(driver_with_password("1234s#$SSf"))));

        let unknown_err = LoginDriverUseCase::new(Arc::new(unknown))
            .execute("ghost", "whatever")
            .await
            .unwrap_err();
        let wrong_err = LoginDriverUseCase::new(Arc::new(wrong))
            .execute("max", "not-the-password")
            .await
            .unwrap_err();

        assert_eq!(unknown_err.to_string(), wrong_err.to_string());
    }
}
