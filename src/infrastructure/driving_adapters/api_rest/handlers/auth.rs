//! Authentication Handlers
//!
//! Login and logout endpoints that open and close driver sessions.

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::auth::LoginDto;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::DriverResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::session::SessionAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for account endpoints
///
/// Login is the only route that does not require a session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /accounts/login - Log a driver in and open a session
///
/// # Responses
///
/// * 200 OK - Credentials accepted, session cookie set
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Unknown username or wrong password
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<([(HeaderName, String); 1], Json<DriverResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let driver = state
        .login_driver_use_case
        .execute(&dto.username, &dto.password)
        .await?;

    // Open the session and hand its cookie back
    let token = state.sessions.create(driver.id(), driver.username());
    let cookie = state.sessions.login_cookie(token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(DriverResponseDto::from(driver)),
    ))
}

/// POST /accounts/logout - Close the current session
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 204 No Content - Session closed, cookie cleared
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn logout(
    auth: SessionAuth,
    State(state): State<AppState>,
) -> (StatusCode, [(HeaderName, String); 1]) {
    state.sessions.destroy(auth.token);

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, state.sessions.logout_cookie())],
    )
}
