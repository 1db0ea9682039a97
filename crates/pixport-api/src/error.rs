//! HTTP error response conversion
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<HttpAppError>`) for errors and `?`
//! so they render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pixport_core::{AppError, LogLevel};
use pixport_processing::{ConversionError, IntakeError, ValidationError};

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from pixport-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

impl From<IntakeError> for HttpAppError {
    fn from(err: IntakeError) -> Self {
        let app_error = match err {
            IntakeError::Validation(ValidationError::FileTooLarge { .. }) => {
                AppError::PayloadTooLarge(err.to_string())
            }
            IntakeError::Validation(_) => AppError::InvalidInput(err.to_string()),
            IntakeError::Persist(e) => AppError::Internal(e.to_string()),
        };
        HttpAppError(app_error)
    }
}

impl From<ConversionError> for HttpAppError {
    fn from(err: ConversionError) -> Self {
        HttpAppError(AppError::Conversion(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Plain-text body; the browser client displays the message verbatim.
        (status, app_error.client_message()).into_response()
    }
}
