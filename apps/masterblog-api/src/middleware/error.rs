//! Error handling - maps domain failures to `{error}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use masterblog_core::DomainError;
use masterblog_shared::ErrorBody;
use std::fmt;

/// Application-level error type the handlers return.
///
/// The message carried by `NotFound` and `BadRequest` goes onto the wire
/// verbatim as the `{error}` payload; `Internal` details stay in the logs.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::BadRequest(msg) => write!(f, "{}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(message) => ErrorBody::new(message.clone()),
            AppError::BadRequest(message) => ErrorBody::new(message.clone()),
            AppError::Internal(message) => {
                // Log internal errors, keep details off the wire
                tracing::error!("Internal error: {}", message);
                ErrorBody::new("Internal server error.")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::NotFound(_) => AppError::NotFound(message),
            DomainError::Validation(_) => AppError::BadRequest(message),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
