pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type rendered as a plain-text HTTP response.
///
/// The `Display` text carries a class prefix for logs; the response body is the
/// bare message so clients see exactly what the handler produced:
///
/// ```rust
/// use axum_helpers::AppError;
///
/// let err = AppError::InternalServerError("Error fetching events: timeout".into());
/// assert_eq!(err.message(), "Error fetching events: timeout");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Io(_) | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Io(_) => ErrorCode::IoError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// Response body text.
    pub fn message(&self) -> String {
        match self {
            AppError::Io(e) => format!("I/O error: {e}"),
            AppError::NotFound(msg) | AppError::InternalServerError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), error = %self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
        }

        text_response(status, self.message())
    }
}

/// Plain-text response with an explicit `text/plain; charset=utf-8` content type.
pub fn text_response(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.into(),
    )
        .into_response()
}
