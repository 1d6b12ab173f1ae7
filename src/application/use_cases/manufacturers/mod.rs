//! Manufacturer Use Cases

pub mod create_manufacturer;
pub mod list_manufacturers;
pub mod update_manufacturer;

pub use create_manufacturer::CreateManufacturerUseCase;
pub use list_manufacturers::ListManufacturersUseCase;
pub use update_manufacturer::UpdateManufacturerUseCase;
