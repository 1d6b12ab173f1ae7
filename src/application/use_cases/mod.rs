//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod auth;
pub mod cars;
pub mod dashboard;
pub mod drivers;
pub mod manufacturers;

pub use auth::LoginDriverUseCase;
pub use cars::{
    CarDetails, CreateCarUseCase, GetCarByIdUseCase, ListCarsUseCase, ToggleCarAssignmentUseCase,
    UpdateCarUseCase,
};
pub use dashboard::{DashboardSummary, GetDashboardSummaryUseCase};
pub use drivers::{
    CreateDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase, RegisterDriverData,
    UpdateDriverLicenseUseCase,
};
pub use manufacturers::{
    CreateManufacturerUseCase, ListManufacturersUseCase, UpdateManufacturerUseCase,
};
