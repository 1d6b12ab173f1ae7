//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod auth;
pub mod car;
pub mod dashboard;
pub mod driver;
pub mod manufacturer;
pub mod page;

pub use auth::LoginDto;
pub use car::{CarDetailResponseDto, CarResponseDto, CreateCarDto, UpdateCarDto};
pub use dashboard::DashboardResponseDto;
pub use driver::{CreateDriverDto, DriverResponseDto, UpdateDriverLicenseDto};
pub use manufacturer::{CreateManufacturerDto, ManufacturerResponseDto, UpdateManufacturerDto};
pub use page::PageDto;
