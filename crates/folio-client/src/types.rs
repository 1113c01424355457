//! Request and response types for the folio API.

use folio_core::{ContactId, ContactRecord};
use serde::{Deserialize, Serialize};

/// Response to a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Message to show the sender.
    pub message: String,
    /// Id of the stored record.
    pub id: ContactId,
}

/// Response to a list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListResponse {
    /// Contacts, newest first.
    pub contacts: Vec<ContactRecord>,
}

/// Response to a single-contact request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    /// The requested contact.
    pub contact: ContactRecord,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status (`"ok"`).
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// Service version, if reported.
    #[serde(default)]
    pub version: Option<String>,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code.
    #[serde(default)]
    pub code: Option<String>,
}
