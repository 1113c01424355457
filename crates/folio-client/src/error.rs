//! Client error types.

use folio_core::ValidationError;

/// Errors that can occur when using the folio client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The submission was rejected, locally or by the server.
    #[error("validation error: {0}")]
    Validation(ValidationError),

    /// The requested contact does not exist.
    #[error("contact not found")]
    NotFound,

    /// Server returned any other error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
