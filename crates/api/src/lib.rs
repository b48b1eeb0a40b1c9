//! # Schedule API
//!
//! Web server exposing the college timetable as JSON.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Fetch and scan the schedule page per request
//! - **Middleware**: CORS preflight and error-to-JSON mapping
//! - **Config**: Environment driven server and scraper settings
//!
//! The API uses Axum as the web framework. Nothing is cached between
//! requests: every GET fetches the upstream page once.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for CORS and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    Router,
};
use eyre::Result;
use schedule_scraper::{
    config::ScannerConfig,
    fetcher::{HttpFetcher, PageFetcher},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds no per-request data; scan state is created inside each handler call.
pub struct ApiState {
    /// Source of the schedule markup
    pub fetcher: Arc<dyn PageFetcher>,
    /// Table heuristics applied to the fetched page
    pub scanner: ScannerConfig,
}

impl ApiState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, scanner: ScannerConfig) -> Self {
        Self { fetcher, scanner }
    }
}

/// Builds the application router with every route and layer attached.
///
/// Paths without a route behave like the schedule endpoint, so OPTIONS,
/// GET and the 405 answer are the same everywhere.
pub fn app(state: Arc<ApiState>, request_timeout: Duration) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Schedule endpoints
        .merge(routes::schedule::routes())
        .fallback(handlers::schedule::dispatch)
        .with_state(state)
        // Add request timeout middleware
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(
                    middleware::error_handling::handle_middleware_error,
                ))
                .timeout(request_timeout),
        )
        .layer(axum::middleware::from_fn(middleware::cors::preflight))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(middleware::cors::ALLOW_ORIGIN),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, builds the HTTP fetcher, and serves until the
/// listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = schedule_api::config::ApiConfig::from_env()?;
/// schedule_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let fetcher = HttpFetcher::new(&config.fetch)?;
    info!(url = %fetcher.url(), "Schedule source configured");

    let state = Arc::new(ApiState::new(Arc::new(fetcher), config.scanner.clone()));
    let app = app(state, config.request_timeout());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
