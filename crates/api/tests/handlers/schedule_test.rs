use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schedule_core::{
    errors::ScheduleError,
    models::{
        catalog,
        schedule::{ScheduleResponse, Weekday},
    },
};
use serde_json::Value;
use std::time::Duration;

use crate::test_utils::{slow_server, TestContext, WEEK_PAGE};

#[tokio::test]
async fn test_get_schedule_from_page() {
    let server = TestContext::serving(WEEK_PAGE).server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let body: ScheduleResponse = response.json();
    let days: Vec<Weekday> = body.schedule.iter().map(|b| b.day).collect();
    assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    assert_eq!(body.schedule[0].date, "10.11");
    assert_eq!(body.schedule[0].lectures.len(), 2);
    assert_eq!(body.schedule[0].lectures[1].name, "Физика");
    assert_eq!(body.schedule[0].lectures[1].group, "1 ТС-2");
    assert_eq!(body.groups, catalog::groups());
    assert_eq!(body.period, "с 10.11.2025 по 16.11.2025");
}

#[tokio::test]
async fn test_api_path_serves_the_same_schedule() {
    let server = TestContext::serving(WEEK_PAGE).server();

    let root: ScheduleResponse = server.get("/").await.json();
    let api: ScheduleResponse = server.get("/api/schedule").await.json();

    assert_eq!(root, api);
}

#[tokio::test]
async fn test_cyrillic_is_not_escaped() {
    let server = TestContext::serving(WEEK_PAGE).server();

    let text = server.get("/").await.text();

    assert!(text.contains("\"Понедельник\""));
    assert!(text.contains("Классный час"));
    assert!(!text.contains("\\u04"));
}

#[rstest]
#[case(None)]
#[case(Some("1 ТС-1"))]
#[case(Some("4 ТС-2"))]
#[case(Some("не группа"))]
#[tokio::test]
async fn test_groups_catalog_ignores_query(#[case] group: Option<&str>) {
    let server = TestContext::serving(WEEK_PAGE).server();

    let mut request = server.get("/");
    if let Some(group) = group {
        request = request.add_query_param("group", group);
    }
    let body: ScheduleResponse = request.await.json();

    assert_eq!(body.groups, catalog::groups());
    assert_eq!(body.groups.len(), 9);
}

#[tokio::test]
async fn test_group_query_filters_lectures() {
    let server = TestContext::serving(WEEK_PAGE).server();

    let body: ScheduleResponse = server
        .get("/")
        .add_query_param("group", "1 ТС-2")
        .await
        .json();

    let monday = &body.schedule[0];
    assert_eq!(monday.lectures.len(), 1);
    assert_eq!(monday.lectures[0].name, "Физика");
    assert!(body.schedule[1].lectures.is_empty());
}

#[tokio::test]
async fn test_page_without_cells_gives_empty_schedule() {
    let server = TestContext::serving("<html><body><p>Сайт на обслуживании</p></body></html>").server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ScheduleResponse = response.json();
    assert!(body.schedule.is_empty());
    assert_eq!(body.groups.len(), 9);
}

#[rstest]
#[case(|| Err(ScheduleError::Fetch("dns error".to_string())), StatusCode::BAD_GATEWAY)]
#[case(|| Err(ScheduleError::UpstreamStatus(500)), StatusCode::BAD_GATEWAY)]
#[case(|| Err(ScheduleError::Timeout("deadline".to_string())), StatusCode::GATEWAY_TIMEOUT)]
#[tokio::test]
async fn test_fetch_failures_become_json_errors(
    #[case] make_error: fn() -> schedule_core::errors::ScheduleResult<String>,
    #[case] expected: StatusCode,
) {
    let server = TestContext::failing(make_error).server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), expected);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[rstest]
#[case(Method::POST, "/")]
#[case(Method::PUT, "/")]
#[case(Method::DELETE, "/api/schedule")]
#[case(Method::PATCH, "/anything")]
#[case(Method::POST, "/health")]
#[tokio::test]
async fn test_unsupported_methods_are_rejected(#[case] method: Method, #[case] path: &str) {
    let mut ctx = TestContext::new();
    ctx.fetcher.expect_fetch_page().never();
    let server = ctx.server();

    let response = server.method(method, path).await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
}

#[rstest]
#[case("/")]
#[case("/api/schedule")]
#[case("/health")]
#[case("/some/other/path")]
#[tokio::test]
async fn test_preflight_on_any_path(#[case] path: &str) {
    let mut ctx = TestContext::new();
    ctx.fetcher.expect_fetch_page().never();
    let server = ctx.server();

    let response = server.method(Method::OPTIONS, path).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "");
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_unknown_path_get_serves_schedule() {
    let server = TestContext::serving(WEEK_PAGE).server();

    let response = server.get("/schedule-parser").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ScheduleResponse = response.json();
    assert_eq!(body.schedule.len(), 2);
}

#[tokio::test]
async fn test_health_and_version() {
    let mut ctx = TestContext::new();
    ctx.fetcher.expect_fetch_page().never();
    let server = ctx.server();

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["status"], "ok");

    let version: Value = server.get("/version").await.json();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_request_timeout_is_json() {
    let server = slow_server(Duration::from_secs(2), Duration::from_millis(100));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Request timed out" }));
}

#[tokio::test]
async fn test_fetch_within_timeout_succeeds() {
    let server = slow_server(Duration::from_millis(10), Duration::from_secs(5));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ScheduleResponse = response.json();
    assert!(body.schedule.is_empty());
}
