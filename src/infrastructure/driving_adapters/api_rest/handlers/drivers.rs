//! Driver Handlers
//!
//! HTTP handlers for driver listing, detail, registration and license
//! replacement. All endpoints require a session.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::application::use_cases::drivers::RegisterDriverData;
use crate::domain::models::driver::DriverId;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{
    CreateDriverDto, DriverResponseDto, UpdateDriverLicenseDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::page::PageDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::session::SessionAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Query parameters for the driver listing
#[derive(Debug, Deserialize)]
struct ListDriversParams {
    username: Option<String>,
    page: Option<usize>,
}

/// Create the router for driver endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers))
        .route("/", post(create_driver))
        .route("/{id}", get(get_driver_by_id))
        .route("/{id}/license", put(update_driver_license))
}

/// GET /drivers - List drivers page by page
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - One page of drivers, optionally narrowed to usernames
///   containing `username`, with the query echoed back
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn list_drivers(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Query(params): Query<ListDriversParams>,
) -> Result<Json<PageDto<DriverResponseDto>>, ApiError> {
    // Execute use case
    let page = state
        .list_drivers_use_case
        .execute(params.username.as_deref(), params.page)
        .await?;

    // Return response
    Ok(Json(PageDto::from_page(
        page,
        params.username,
        DriverResponseDto::from,
    )))
}

/// GET /drivers/:id - Get a driver by ID
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn get_driver_by_id(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    // Execute use case
    let driver = state
        .get_driver_by_id_use_case
        .execute(DriverId::from(id))
        .await?;

    // Return response
    Ok(Json(DriverResponseDto::from(driver)))
}

/// POST /drivers - Register a new driver
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 201 Created - Driver registered successfully
/// * 400 Bad Request - Validation error; nothing is persisted
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 409 Conflict - Username or license number already taken
#[axum::debug_handler]
async fn create_driver(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Json(dto): Json<CreateDriverDto>,
) -> Result<(StatusCode, Json<DriverResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let driver = state
        .create_driver_use_case
        .execute(RegisterDriverData::from(&dto))
        .await?;

    // Return response
    Ok((StatusCode::CREATED, Json(DriverResponseDto::from(driver))))
}

/// PUT /drivers/:id/license - Replace a driver's license number
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - License number replaced
/// * 400 Bad Request - License number has the wrong format
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Driver does not exist
/// * 409 Conflict - License number already belongs to another driver
#[axum::debug_handler]
async fn update_driver_license(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateDriverLicenseDto>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let driver = state
        .update_driver_license_use_case
        .execute(DriverId::from(id), &dto.license_number)
        .await?;

    // Return response
    Ok(Json(DriverResponseDto::from(driver)))
}
