use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    Router,
};
use schedule_api::middleware::{
    cors,
    error_handling::{handle_middleware_error, map_error},
};
use schedule_core::errors::ScheduleError;
use tower::ServiceExt;

#[tokio::test]
async fn test_error_handling_fetch() {
    let response = map_error(ScheduleError::Fetch("connection refused".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_error_handling_upstream_status() {
    let response = map_error(ScheduleError::UpstreamStatus(404));

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_error_handling_timeout() {
    let response = map_error(ScheduleError::Timeout("deadline".to_string()));

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_error_handling_method_not_allowed() {
    let response = map_error(ScheduleError::MethodNotAllowed("DELETE".to_string()));

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET, OPTIONS");
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], br#"{"error":"Method not allowed"}"#);
}

#[tokio::test]
async fn test_error_handling_request_timeout() {
    let response = map_error(ScheduleError::RequestTimeout);

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_middleware_error_from_elapsed_timeout() {
    let err: axum::BoxError = Box::new(tower::timeout::error::Elapsed::new());

    let response = handle_middleware_error(err).await.into_response();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_middleware_error_other_is_internal() {
    let err: axum::BoxError = "layer exploded".into();

    let response = handle_middleware_error(err).await.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let response = map_error(ScheduleError::Internal(eyre::eyre!("broken")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_preflight_response_headers() {
    let response = cors::preflight_response();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], cors::ALLOWED_METHODS);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], cors::ALLOWED_HEADERS);
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], cors::PREFLIGHT_MAX_AGE);
}

#[tokio::test]
async fn test_preflight_middleware_passes_other_methods() {
    let app = Router::new()
        .route("/", axum::routing::get(|| async { "hello" }))
        .layer(axum::middleware::from_fn(cors::preflight));

    let get = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(get.status(), StatusCode::OK);
    assert!(get.headers().get(header::ACCESS_CONTROL_MAX_AGE).is_none());

    let options = app
        .oneshot(
            Request::options("/not-routed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(options.status(), StatusCode::OK);
    assert_eq!(options.headers()[header::ACCESS_CONTROL_MAX_AGE], "86400");
}
