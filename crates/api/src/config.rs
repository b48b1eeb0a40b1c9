//! # API Configuration Module
//!
//! Loads the server and scraper settings from environment variables, falling
//! back to defaults that match the published schedule page.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Upper bound for a whole request (default: 30)
//! - `SCHEDULE_URL`: Page to scrape (default: the college's energy department page)
//! - `SCHEDULE_USER_AGENT`: User agent sent upstream (default: "Mozilla/5.0")
//! - `FETCH_TIMEOUT_SECONDS`: Timeout for the upstream GET (default: 10)
//! - `FETCH_MAX_REDIRECTS`: Redirects followed before giving up (default: 5)
//! - `SCANNER_HEADER_BGCOLOR`: Background colour of day header cells (default: "green")
//! - `SCANNER_HEADER_MIN_COLSPAN`: Header cells span more than this many columns (default: 10)

use eyre::{Result, WrapErr};
use schedule_scraper::config::{FetchConfig, ScannerConfig};
use std::{env, str::FromStr, time::Duration};
use tracing::Level;

/// Configuration for the schedule API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use schedule_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Where and how to fetch the schedule page
    pub fetch: FetchConfig,

    /// Cell classification rules for the schedule table
    pub scanner: ScannerConfig,
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is set but is not a valid u16.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = parse_or(lookup("API_REQUEST_TIMEOUT_SECONDS"), 30);

        // Upstream page
        let defaults = FetchConfig::default();
        let fetch = FetchConfig {
            url: lookup("SCHEDULE_URL").unwrap_or(defaults.url),
            user_agent: lookup("SCHEDULE_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout: lookup("FETCH_TIMEOUT_SECONDS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_redirects: parse_or(lookup("FETCH_MAX_REDIRECTS"), defaults.max_redirects),
        };

        // Table heuristics
        let defaults = ScannerConfig::default();
        let scanner = ScannerConfig {
            header_bgcolor: lookup("SCANNER_HEADER_BGCOLOR").unwrap_or(defaults.header_bgcolor.clone()),
            header_min_colspan: parse_or(
                lookup("SCANNER_HEADER_MIN_COLSPAN"),
                defaults.header_min_colspan,
            ),
            ..defaults
        };

        Ok(Self {
            host,
            port,
            log_level,
            request_timeout,
            fetch,
            scanner,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
