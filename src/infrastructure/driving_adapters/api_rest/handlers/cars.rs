//! Car Handlers
//!
//! HTTP handlers for car listing, detail, creation, update and the
//! toggle of the caller's own assignment. All endpoints require a session.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::car::CarId;
use crate::infrastructure::driving_adapters::api_rest::dto::car::{
    CarDetailResponseDto, CarResponseDto, CreateCarDto, UpdateCarDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::page::PageDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::session::SessionAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Query parameters for the car listing
#[derive(Debug, Deserialize)]
struct ListCarsParams {
    model: Option<String>,
    page: Option<usize>,
}

/// Create the router for car endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/", post(create_car))
        .route("/{id}", get(get_car_by_id))
        .route("/{id}", put(update_car))
        .route("/{id}/toggle-assign", post(toggle_assignment))
}

/// GET /cars - List cars page by page
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - One page of cars, optionally narrowed to models containing
///   `model`, with the query echoed back
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn list_cars(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Query(params): Query<ListCarsParams>,
) -> Result<Json<PageDto<CarResponseDto>>, ApiError> {
    // Execute use case
    let page = state
        .list_cars_use_case
        .execute(params.model.as_deref(), params.page)
        .await?;

    // Return response
    Ok(Json(PageDto::from_page(
        page,
        params.model,
        CarResponseDto::from,
    )))
}

/// GET /cars/:id - Get a car with its manufacturer and drivers embedded
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Car found
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Car does not exist
#[axum::debug_handler]
async fn get_car_by_id(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CarDetailResponseDto>, ApiError> {
    // Execute use case
    let details = state.get_car_by_id_use_case.execute(CarId::from(id)).await?;

    // Return response
    Ok(Json(CarDetailResponseDto::from(details)))
}

/// POST /cars - Create a new car
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 201 Created - Car created successfully
/// * 400 Bad Request - Validation error, or a referenced manufacturer or
///   driver does not exist
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn create_car(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Json(dto): Json<CreateCarDto>,
) -> Result<(StatusCode, Json<CarResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let car = state.create_car_use_case.execute(dto.into()).await?;

    // Return response
    Ok((StatusCode::CREATED, Json(CarResponseDto::from(car))))
}

/// PUT /cars/:id - Full update of a car
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Car updated successfully
/// * 400 Bad Request - Validation error, or a referenced manufacturer or
///   driver does not exist
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Car does not exist
#[axum::debug_handler]
async fn update_car(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateCarDto>,
) -> Result<Json<CarResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let car = state
        .update_car_use_case
        .execute(CarId::from(id), dto.into())
        .await?;

    // Return response
    Ok(Json(CarResponseDto::from(car)))
}

/// POST /cars/:id/toggle-assign - Assign or release the session's driver
///
/// Assigns the logged-in driver to the car, or removes them when they are
/// already assigned.
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Assignment toggled, updated car returned
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Car or the session's driver does not exist
#[axum::debug_handler]
async fn toggle_assignment(
    auth: SessionAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CarResponseDto>, ApiError> {
    // Execute use case
    let car = state
        .toggle_car_assignment_use_case
        .execute(CarId::from(id), auth.session.driver_id)
        .await?;

    // Return response
    Ok(Json(CarResponseDto::from(car)))
}
