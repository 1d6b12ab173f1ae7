//! Dashboard Handler
//!
//! Landing view with the fleet counters and the per-session visit count.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::dashboard::DashboardResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::session::SessionAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for the dashboard endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET / - Fleet counters plus this session's visit count
///
/// # Authentication
///
/// Requires a valid session cookie.
///
/// # Responses
///
/// * 200 OK - Counters for drivers, cars and manufacturers, and the number
///   of times this session has viewed the dashboard (first view counts as 1)
/// * 401 Unauthorized - Missing or invalid session cookie
#[axum::debug_handler]
async fn get_dashboard(
    auth: SessionAuth,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponseDto>, ApiError> {
    // Execute use case
    let summary = state.get_dashboard_summary_use_case.execute().await?;

    // Count this view against the session
    let num_visits = state.sessions.record_visit(auth.token).unwrap_or(1);

    // Return response
    Ok(Json(DashboardResponseDto::new(summary, num_visits)))
}
