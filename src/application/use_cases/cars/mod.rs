//! Car Use Cases

pub mod create_car;
pub mod get_car_by_id;
pub mod list_cars;
pub mod toggle_car_assignment;
pub mod update_car;

pub use create_car::CreateCarUseCase;
pub use get_car_by_id::{CarDetails, GetCarByIdUseCase};
pub use list_cars::ListCarsUseCase;
pub use toggle_car_assignment::ToggleCarAssignmentUseCase;
pub use update_car::UpdateCarUseCase;
