//! Driver DTOs
//!
//! Request and response shapes for the driver endpoints, including the
//! registration form with its paired password fields.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::drivers::RegisterDriverData;
use crate::domain::license::validate_license_number;
use crate::domain::models::driver::Driver;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").expect("valid username regex");
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_REGEX.is_match(username) {
        Ok(())
    } else {
        let mut error = ValidationError::new("username");
        error.message = Some(
            "username may contain only letters, numbers, and @/./+/-/_ characters".into(),
        );
        Err(error)
    }
}

fn validate_license(license_number: &str) -> Result<(), ValidationError> {
    validate_license_number(license_number).map_err(|rule| {
        let mut error = ValidationError::new("license_number");
        error.message = Some(rule.to_string().into());
        error
    })?;
    Ok(())
}

/// DTO for registering a new driver
///
/// Password fields are zeroized when the DTO is dropped.
#[derive(Clone, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverDto {
    #[validate(length(
        min = 1,
        max = 150,
        message = "username must be between 1 and 150 characters"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "first_name must be at most 150 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "last_name must be at most 150 characters"))]
    pub last_name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password1: String,

    #[validate(must_match(other = "password1", message = "The two password fields didn't match"))]
    pub password2: String,

    #[validate(custom(function = "validate_license"))]
    pub license_number: String,
}

/// DTO for replacing a driver's license number
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverLicenseDto {
    #[validate(custom(function = "validate_license"))]
    pub license_number: String,
}

/// Driver response DTO
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponseDto {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: Option<String>,
}

impl From<&CreateDriverDto> for RegisterDriverData {
    fn from(dto: &CreateDriverDto) -> Self {
        Self {
            username: dto.username.clone(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            password: dto.password1.clone(),
            license_number: dto.license_number.clone(),
        }
    }
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        Self::from(&driver)
    }
}

impl From<&Driver> for DriverResponseDto {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().as_i64(),
            username: driver.username().to_string(),
            first_name: driver.first_name().to_string(),
            last_name: driver.last_name().to_string(),
            license_number: driver.license_number().map(ToString::to_string),
        }
    }
}
