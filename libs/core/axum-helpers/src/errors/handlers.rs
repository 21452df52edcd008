use axum::{http::StatusCode, response::Response};

use super::text_response;

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    text_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    text_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
