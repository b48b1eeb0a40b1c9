//! # Error Handling Middleware
//!
//! Maps [`ScheduleError`] to HTTP status codes and a JSON body of the form
//! `{"error": "..."}`. Handlers return `Result<_, AppError>` and use `?` on
//! anything producing a `ScheduleError`.

use axum::{
    http::{header::ALLOW, HeaderValue, StatusCode},
    BoxError,
    response::{IntoResponse, Response},
    Json,
};
use schedule_core::{errors::ScheduleError, models::schedule::ErrorResponse};
use tracing::{error, warn};

use super::cors::ALLOWED_METHODS;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use schedule_api::middleware::error_handling::AppError;
/// use schedule_core::errors::ScheduleError;
///
/// async fn handler() -> Result<Json<String>, AppError> {
///     Err(AppError(ScheduleError::UpstreamStatus(503)))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ScheduleError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            ScheduleError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ScheduleError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ScheduleError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.0 {
            ScheduleError::MethodNotAllowed(method) => warn!(%method, "Rejected unsupported method"),
            err if status.is_server_error() => error!(error = %err, %status, "Request failed"),
            err => warn!(error = %err, %status, "Request failed"),
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        let mut response = (status, body).into_response();

        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }

        response
    }
}

/// Allows `?` on `ScheduleResult` inside handlers.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Internal(err))
    }
}

/// Turns errors from the tower middleware stack into JSON responses.
///
/// The only layer that can fail is the request timeout; anything else is
/// reported as an internal error.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError(ScheduleError::RequestTimeout)
    } else {
        AppError(ScheduleError::Internal(eyre::eyre!("Unhandled middleware error: {}", err)))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
