//! Contact form handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use folio_core::{ContactId, ContactRecord, ContactSubmission};

use crate::contacts::{ContactError, ContactService};
use crate::error::{ApiError, StorageFailure};
use crate::state::AppState;

const SUBMIT_SUCCEEDED: &str = "Message sent successfully!";
const SUBMIT_FAILED: &str = "Failed to save message. Please try again later.";
const LIST_FAILED: &str = "Failed to retrieve contacts";
const GET_FAILED: &str = "Failed to retrieve contact";

/// Submit contact response.
#[derive(Debug, Serialize)]
pub struct SubmitContactResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Message to show the sender.
    pub message: String,
    /// Id of the stored record.
    pub id: ContactId,
}

/// List contacts response.
#[derive(Debug, Serialize)]
pub struct ListContactsResponse {
    /// Contacts (newest first).
    pub contacts: Vec<ContactRecord>,
}

/// Get contact response.
#[derive(Debug, Serialize)]
pub struct GetContactResponse {
    /// The requested contact.
    pub contact: ContactRecord,
}

/// Validate and store a contact form submission.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitContactResponse>), ApiError> {
    let Json(submission) = body?;

    let record = with_contacts(&state, SUBMIT_FAILED, move |contacts| {
        contacts.submit(submission)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            success: true,
            message: SUBMIT_SUCCEEDED.to_string(),
            id: record.id,
        }),
    ))
}

/// List every stored contact message.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListContactsResponse>, ApiError> {
    let contacts = with_contacts(&state, LIST_FAILED, ContactService::list_all).await?;

    Ok(Json(ListContactsResponse { contacts }))
}

/// Get one contact message by id.
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GetContactResponse>, ApiError> {
    let contact =
        with_contacts(&state, GET_FAILED, move |contacts| contacts.get_by_id(&id)).await?;

    Ok(Json(GetContactResponse { contact }))
}

/// Run a store-backed operation on the blocking pool.
///
/// Store calls may wait on disk syncs and must not stall the async workers.
/// `failure` is the caller-facing message for storage faults.
async fn with_contacts<T, F>(
    state: &AppState,
    failure: &'static str,
    operation: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&ContactService) -> Result<T, ContactError> + Send + 'static,
    T: Send + 'static,
{
    let contacts = state.contacts.clone();

    tokio::task::spawn_blocking(move || operation(&contacts))
        .await
        .map_err(|e| ApiError::Internal {
            message: failure,
            detail: format!("contact task failed: {e}"),
        })?
        .on_storage_failure(failure)
}
