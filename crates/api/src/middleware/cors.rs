//! # CORS Middleware
//!
//! Browsers call the schedule API cross-origin. Every response carries
//! `Access-Control-Allow-Origin: *` (added by a header layer in the router),
//! and `OPTIONS` requests on any path are answered here without reaching a
//! handler.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";
/// Preflight results may be cached for a day
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// Empty 200 response advertising what cross-origin callers may do.
pub fn preflight_response() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE),
        ],
    )
        .into_response()
}

/// Short-circuits `OPTIONS` requests with [`preflight_response`].
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        debug!(path = %request.uri().path(), "Answering CORS preflight");
        return preflight_response();
    }

    next.run(request).await
}
