//! Manufacturer DTOs
//!
//! Request and response shapes for the manufacturer endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::manufacturer::{CreateManufacturerData, Manufacturer};

/// DTO for creating a new manufacturer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateManufacturerDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "country must be between 1 and 255 characters"
    ))]
    pub country: String,
}

/// DTO for replacing an existing manufacturer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManufacturerDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "country must be between 1 and 255 characters"
    ))]
    pub country: String,
}

/// Manufacturer response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerResponseDto {
    pub id: i64,
    pub name: String,
    pub country: String,
}

impl From<CreateManufacturerDto> for CreateManufacturerData {
    fn from(dto: CreateManufacturerDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
        }
    }
}

impl From<UpdateManufacturerDto> for CreateManufacturerData {
    fn from(dto: UpdateManufacturerDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
        }
    }
}

impl From<Manufacturer> for ManufacturerResponseDto {
    fn from(manufacturer: Manufacturer) -> Self {
        Self {
            id: manufacturer.id().as_i64(),
            name: manufacturer.name().to_string(),
            country: manufacturer.country().to_string(),
        }
    }
}

impl From<&Manufacturer> for ManufacturerResponseDto {
    fn from(manufacturer: &Manufacturer) -> Self {
        Self {
            id: manufacturer.id().as_i64(),
            name: manufacturer.name().to_string(),
            country: manufacturer.country().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_manufacturer() {
        let dto = CreateManufacturerDto {
            name: "Toyota".to_string(),
            country: "Japan".to_string(),
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_name() {
        let dto = CreateManufacturerDto {
            name: String::new(),
            country: "Japan".to_string(),
        };

        let errors = dto.validate().expect_err("empty name should fail");
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn rejects_an_empty_country() {
        let dto = UpdateManufacturerDto {
            name: "Toyota".to_string(),
            country: String::new(),
        };

        let errors = dto.validate().expect_err("empty country should fail");
        assert!(errors.field_errors().contains_key("country"));
    }
}
