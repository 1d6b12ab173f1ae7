//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::auth::LoginDriverUseCase;
use crate::application::use_cases::cars::{
    CreateCarUseCase, GetCarByIdUseCase, ListCarsUseCase, ToggleCarAssignmentUseCase,
    UpdateCarUseCase,
};
use crate::application::use_cases::dashboard::GetDashboardSummaryUseCase;
use crate::application::use_cases::drivers::{
    CreateDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase, UpdateDriverLicenseUseCase,
};
use crate::application::use_cases::manufacturers::{
    CreateManufacturerUseCase, ListManufacturersUseCase, UpdateManufacturerUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::session_store::SessionManager;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionManager>,
    pub login_driver_use_case: Arc<LoginDriverUseCase>,
    pub get_dashboard_summary_use_case: Arc<GetDashboardSummaryUseCase>,
    pub list_manufacturers_use_case: Arc<ListManufacturersUseCase>,
    pub create_manufacturer_use_case: Arc<CreateManufacturerUseCase>,
    pub update_manufacturer_use_case: Arc<UpdateManufacturerUseCase>,
    pub list_cars_use_case: Arc<ListCarsUseCase>,
    pub get_car_by_id_use_case: Arc<GetCarByIdUseCase>,
    pub create_car_use_case: Arc<CreateCarUseCase>,
    pub update_car_use_case: Arc<UpdateCarUseCase>,
    pub toggle_car_assignment_use_case: Arc<ToggleCarAssignmentUseCase>,
    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub update_driver_license_use_case: Arc<UpdateDriverLicenseUseCase>,
}
