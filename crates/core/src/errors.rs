use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to fetch schedule page: {0}")]
    Fetch(String),

    #[error("Schedule page returned status {0}")]
    UpstreamStatus(u16),

    #[error("Timed out fetching schedule page: {0}")]
    Timeout(String),

    /// The whole request ran past the server's time budget.
    #[error("Request timed out")]
    RequestTimeout,

    /// Unsupported HTTP verb. The method is kept for logging only.
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
