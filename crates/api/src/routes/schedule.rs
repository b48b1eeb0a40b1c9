use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/",
            get(handlers::schedule::get_schedule)
                .fallback(handlers::schedule::method_not_allowed),
        )
        .route(
            "/api/schedule",
            get(handlers::schedule::get_schedule)
                .fallback(handlers::schedule::method_not_allowed),
        )
}
