//! Error types for the calendar core.

/// Alias for `Result<T, AlmanacError>`.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// Errors that can occur when driving or persisting the calendar.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// A caller-supplied argument was rejected (negative delta, unknown season, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A session snapshot did not have the expected shape or held out-of-range values.
    #[error("invalid session format: {0}")]
    InvalidSessionFormat(String),

    /// Encoding a snapshot as JSON failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a snapshot file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
