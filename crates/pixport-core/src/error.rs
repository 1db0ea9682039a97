//! Error types module
//!
//! The unified `AppError` enum covers everything a request can fail with:
//! client mistakes (bad format, missing or oversized file) and server-side
//! conversion failures. Each variant self-describes its HTTP status, client
//! message, and log level so the API layer stays a thin mapping.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return.
    ///
    /// Oversized uploads answer 400, not 413: the client contract treats the
    /// size cap as a validation rule like any other.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => 400,
            AppError::Conversion(_) | AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message (may differ from internal error message)
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Conversion(detail) => format!("Conversion failed: {}", detail),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::Conversion(_) => LogLevel::Warn,
            AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
