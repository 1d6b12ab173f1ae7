//! Car DTOs
//!
//! Request and response shapes for the car endpoints. The detail response
//! embeds the manufacturer and the assigned drivers instead of bare ids.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::cars::CarDetails;
use crate::domain::models::car::{Car, CreateCarData};
use crate::domain::models::driver::DriverId;
use crate::domain::models::manufacturer::ManufacturerId;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::DriverResponseDto;
use crate::infrastructure::driving_adapters::api_rest::dto::manufacturer::ManufacturerResponseDto;

/// DTO for creating a new car
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "model must be between 1 and 255 characters"
    ))]
    pub model: String,
    pub manufacturer: i64,
    #[serde(default)]
    pub drivers: Vec<i64>,
}

/// DTO for replacing an existing car
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "model must be between 1 and 255 characters"
    ))]
    pub model: String,
    pub manufacturer: i64,
    #[serde(default)]
    pub drivers: Vec<i64>,
}

/// Car response DTO with bare references
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponseDto {
    pub id: i64,
    pub model: String,
    pub manufacturer_id: i64,
    pub driver_ids: Vec<i64>,
}

/// Car detail response DTO with the referenced records embedded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailResponseDto {
    pub id: i64,
    pub model: String,
    pub manufacturer: ManufacturerResponseDto,
    pub drivers: Vec<DriverResponseDto>,
}

impl From<CreateCarDto> for CreateCarData {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            model: dto.model,
            manufacturer_id: ManufacturerId::from(dto.manufacturer),
            driver_ids: dto.drivers.into_iter().map(DriverId::from).collect(),
        }
    }
}

impl From<UpdateCarDto> for CreateCarData {
    fn from(dto: UpdateCarDto) -> Self {
        Self {
            model: dto.model,
            manufacturer_id: ManufacturerId::from(dto.manufacturer),
            driver_ids: dto.drivers.into_iter().map(DriverId::from).collect(),
        }
    }
}

impl From<Car> for CarResponseDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id().as_i64(),
            model: car.model().to_string(),
            manufacturer_id: car.manufacturer_id().as_i64(),
            driver_ids: car.driver_ids().iter().map(|id| id.as_i64()).collect(),
        }
    }
}

impl From<CarDetails> for CarDetailResponseDto {
    fn from(details: CarDetails) -> Self {
        Self {
            id: details.car.id().as_i64(),
            model: details.car.model().to_string(),
            manufacturer: ManufacturerResponseDto::from(details.manufacturer),
            drivers: details
                .drivers
                .iter()
                .map(DriverResponseDto::from)
                .collect(),
        }
    }
}
