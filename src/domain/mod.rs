//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod license;
pub mod models;

pub use gateways::{CarRepository, DriverRepository, ManufacturerRepository};
pub use license::{validate_license_number, LicenseNumberError};
pub use models::{
    Car, CarId, CreateCarData, CreateDriverData, CreateManufacturerData, Driver, DriverId,
    Manufacturer, ManufacturerId,
};
