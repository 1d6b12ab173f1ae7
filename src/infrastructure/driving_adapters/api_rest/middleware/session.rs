//! Session Authentication Middleware
//!
//! Resolves the session cookie on incoming requests.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, State},
    http::{header::COOKIE, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::infrastructure::driven_adapters::session_store::{Session, SessionManager};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorDetail, ErrorResponse};

/// Session authentication extractor
///
/// Handlers take this as an argument to require a logged-in driver.
pub struct SessionAuth {
    pub session: Session,
    pub token: Uuid,
}

/// Error type for authentication failures
pub struct AuthError {
    message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "UNAUTHORIZED".to_string(),
                message: self.message,
                details: None,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for SessionAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session store from request extensions
        let sessions = parts
            .extensions
            .get::<Arc<SessionManager>>()
            .ok_or_else(|| AuthError {
                message: "Session store not available".to_string(),
            })?
            .clone();

        // Extract the session cookie
        let cookie_header = parts
            .headers
            .get(COOKIE)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError {
                message: "Missing session cookie".to_string(),
            })?;

        let token = sessions
            .token_from_cookie_header(cookie_header)
            .ok_or_else(|| AuthError {
                message: "Missing session cookie".to_string(),
            })?;

        // Don't expose whether the token was unknown or expired
        let session = sessions.resolve(token).ok_or_else(|| AuthError {
            message: "Invalid or expired session".to_string(),
        })?;

        Ok(SessionAuth { session, token })
    }
}

/// Middleware layer that adds the session store to request extensions
pub async fn add_session_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.sessions.clone());
    next.run(request).await
}
