//! API error types and responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use folio_core::ValidationError;

use crate::contacts::ContactError;

/// Message returned for storage faults when no operation-specific one is set.
const GENERIC_FAILURE: &str = "An internal error occurred";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submission failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// The request body could not be read as the expected JSON.
    #[error("invalid body ({status}): {detail}")]
    InvalidBody {
        /// Status reported by the body extractor.
        status: StatusCode,
        /// Extractor message, logged only.
        detail: String,
    },

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error. `detail` is logged, `message` is returned.
    #[error("internal error: {detail}")]
    Internal {
        /// Caller-facing message.
        message: &'static str,
        /// Full cause, never sent to the caller.
        detail: String,
    },
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Validation(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),
            Self::InvalidBody { status, detail } => {
                tracing::debug!(%status, error = %detail, "Rejected request body");
                let (status, code, message) = body_rejection(status);
                (status, code, message.to_string())
            }
            Self::NotFound(what) => {
                tracing::debug!(id = %what, "Contact not found");
                (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    "Contact not found".to_string(),
                )
            }
            Self::Internal { message, detail } => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    message.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(err) => Self::Validation(err),
            ContactError::NotFound(id) => Self::NotFound(id),
            ContactError::Storage(err) => Self::Internal {
                message: GENERIC_FAILURE,
                detail: err.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

/// Status, code and message for a body the JSON extractor refused.
///
/// Oversized and non-JSON bodies keep their own status; anything else the
/// caller sent is a plain bad request.
fn body_rejection(status: StatusCode) -> (StatusCode, &'static str, &'static str) {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        (status, "payload_too_large", "Request body is too large")
    } else if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        (
            status,
            "unsupported_media_type",
            "Request body must be sent as application/json",
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            "invalid_body",
            "Request body must be a JSON object of strings",
        )
    }
}

/// Choose the caller-facing message for a storage fault.
pub trait StorageFailure<T> {
    /// Convert the error, replacing the generic storage message with `message`.
    fn on_storage_failure(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> StorageFailure<T> for Result<T, ContactError> {
    fn on_storage_failure(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| match ApiError::from(err) {
            ApiError::Internal { detail, .. } => ApiError::Internal { message, detail },
            other => other,
        })
    }
}
