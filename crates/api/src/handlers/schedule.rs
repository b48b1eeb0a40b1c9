use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use schedule_core::{
    errors::ScheduleError,
    models::schedule::{ScheduleQuery, ScheduleResponse},
};
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// Fetches the page, scans it and returns the week.
///
/// `group` narrows the lectures but never the group catalog. Unknown groups
/// are not rejected; they simply match no lectures. The college's own endpoint
/// accepted `group` and ignored it; filtering is an addition of this service.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    info!(group = ?query.group, "Schedule requested");

    let mut response =
        schedule_scraper::scrape_schedule(state.fetcher.as_ref(), &state.scanner).await?;

    if let Some(group) = query.group.as_deref() {
        response.retain_group(group);
    }

    Ok(Json(response))
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError(ScheduleError::MethodNotAllowed(method.to_string()))
}

/// Catch-all for paths without a route: GET serves the schedule, anything else is 405.
pub async fn dispatch(
    method: Method,
    state: State<Arc<ApiState>>,
    query: Query<ScheduleQuery>,
) -> Response {
    if method == Method::GET {
        get_schedule(state, query).await.into_response()
    } else {
        method_not_allowed(method).await.into_response()
    }
}
