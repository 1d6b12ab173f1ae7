//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod car;
pub mod driver;
pub mod manufacturer;

pub use car::{Car, CarId, CreateCarData};
pub use driver::{CreateDriverData, Driver, DriverId};
pub use manufacturer::{CreateManufacturerData, Manufacturer, ManufacturerId};
