//! Manufacturer Handlers
//!
//! HTTP handlers for manufacturer listing, creation and update.
//! All endpoints require a session.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::manufacturer::ManufacturerId;
use crate::infrastructure::driving_adapters::api_rest::dto::manufacturer::{
    CreateManufacturerDto, ManufacturerResponseDto, UpdateManufacturerDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::page::PageDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::session::SessionAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Query parameters for the manufacturer listing
#[derive(Debug, Deserialize)]
struct ListManufacturersParams {
    name: Option<String>,
    page: Option<usize>,
}

/// Create the router for manufacturer endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_manufacturers))
        .route("/", post(create_manufacturer))
        .route("/{id}", put(update_manufacturer))
}

/// GET /manufacturers - List manufacturers page by page
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - One page of manufacturers (sorted by name), optionally
///   narrowed to names containing `name`, with the query echoed back
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn list_manufacturers(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Query(params): Query<ListManufacturersParams>,
) -> Result<Json<PageDto<ManufacturerResponseDto>>, ApiError> {
    // Execute use case
    let page = state
        .list_manufacturers_use_case
        .execute(params.name.as_deref(), params.page)
        .await?;

    // Return response
    Ok(Json(PageDto::from_page(
        page,
        params.name,
        ManufacturerResponseDto::from,
    )))
}

/// POST /manufacturers - Create a new manufacturer
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 201 Created - Manufacturer created successfully
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 409 Conflict - Manufacturer with the same name already exists
#[axum::debug_handler]
async fn create_manufacturer(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Json(dto): Json<CreateManufacturerDto>,
) -> Result<(StatusCode, Json<ManufacturerResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let manufacturer = state.create_manufacturer_use_case.execute(dto.into()).await?;

    // Return response
    Ok((
        StatusCode::CREATED,
        Json(ManufacturerResponseDto::from(manufacturer)),
    ))
}

/// PUT /manufacturers/:id - Full update of a manufacturer
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Manufacturer updated successfully
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid session cookie
/// * 404 Not Found - Manufacturer does not exist
/// * 409 Conflict - New name already belongs to another manufacturer
#[axum::debug_handler]
async fn update_manufacturer(
    _auth: SessionAuth, // Require authentication
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateManufacturerDto>,
) -> Result<Json<ManufacturerResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let manufacturer = state
        .update_manufacturer_use_case
        .execute(ManufacturerId::from(id), dto.into())
        .await?;

    // Return response
    Ok(Json(ManufacturerResponseDto::from(manufacturer)))
}
