//! Event domain error types

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Body text for a lookup of an unknown id
pub const NOT_FOUND_MESSAGE: &str = "Event not found";

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {id}")]
    NotFound { id: String },

    #[error("Event validation failed: {0}")]
    Validation(String),

    #[error("Invalid event id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Image upload failed: {0}")]
    MediaUpload(String),

    #[error("Malformed request body: {0}")]
    Multipart(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EventError {
    /// HTTP error for a failed operation.
    ///
    /// Not-found becomes a bare 404; everything else is a 500 whose body is
    /// `"<context>: <error>"`.
    pub fn into_app_error(self, context: &str) -> AppError {
        match self {
            EventError::NotFound { .. } => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            other => AppError::InternalServerError(format!("{context}: {other}")),
        }
    }
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for EventError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        Self::InvalidId(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for EventError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Database(format!("BSON serialization error: {err}"))
    }
}

impl From<mongodb::bson::de::Error> for EventError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        Self::Database(format!("BSON deserialization error: {err}"))
    }
}

impl From<ValidationErrors> for EventError {
    fn from(err: ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join(", "))
    }
}

impl From<reqwest::Error> for EventError {
    fn from(err: reqwest::Error) -> Self {
        Self::MediaUpload(err.to_string())
    }
}

impl From<MultipartError> for EventError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err.body_text())
    }
}

impl From<MultipartRejection> for EventError {
    fn from(err: MultipartRejection) -> Self {
        Self::Multipart(err.body_text())
    }
}

impl From<JsonRejection> for EventError {
    fn from(err: JsonRejection) -> Self {
        Self::Multipart(err.body_text())
    }
}

impl From<FormRejection> for EventError {
    fn from(err: FormRejection) -> Self {
        Self::Multipart(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use validator::Validate;

    #[test]
    fn test_not_found_maps_to_bare_404() {
        let err = EventError::NotFound {
            id: "665f1c2ab4d3e9a1f0c12345".into(),
        }
        .into_app_error("Error fetching event");

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Event not found");
    }

    #[test]
    fn test_other_errors_map_to_500_with_context() {
        let err = EventError::InvalidId("abc".into()).into_app_error("Error fetching event");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Error fetching event: Invalid event id: abc");
    }

    #[test]
    fn test_validation_errors_use_field_messages() {
        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "title is required"))]
            title: String,
        }

        let err: EventError = Probe {
            title: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();

        assert_eq!(err.to_string(), "Event validation failed: title is required");
    }

    #[test]
    fn test_malformed_object_id_is_invalid_id() {
        let err: EventError = mongodb::bson::oid::ObjectId::parse_str("nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, EventError::InvalidId(_)));
    }
}
