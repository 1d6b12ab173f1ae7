//! Driver Use Cases

pub mod create_driver;
pub mod get_driver_by_id;
pub mod list_drivers;
pub mod update_driver_license;

pub use create_driver::{CreateDriverUseCase, RegisterDriverData};
pub use get_driver_by_id::GetDriverByIdUseCase;
pub use list_drivers::ListDriversUseCase;
pub use update_driver_license::UpdateDriverLicenseUseCase;
