//! Contact message service.
//!
//! `ContactService` is the whole request lifecycle minus HTTP: it validates a
//! submission completely before touching storage, writes accepted records, and
//! answers read-back queries.

use std::sync::Arc;

use folio_core::{ContactId, ContactRecord, ContactSubmission, NewContact, ValidationError};
use folio_store::{Store, StoreError};

/// Errors returned by [`ContactService`].
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The submission was rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record has the requested id.
    #[error("contact not found: {0}")]
    NotFound(String),

    /// The store could not complete the operation.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Validates, stores and retrieves contact messages.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn Store>,
}

impl ContactService {
    /// Create the service, preparing the store schema once.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created or is incompatible.
    pub fn new(store: Arc<dyn Store>) -> Result<Self, StoreError> {
        store.ensure_schema()?;
        Ok(Self { store })
    }

    /// Validate and store a submission.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if the submission is incomplete or the
    ///   email is malformed. No record is created.
    /// - `ContactError::Storage` if the write fails.
    pub fn submit(&self, submission: ContactSubmission) -> Result<ContactRecord, ContactError> {
        let contact = match NewContact::parse(submission) {
            Ok(contact) => contact,
            Err(err) => {
                tracing::debug!(code = err.code(), "Contact submission rejected");
                return Err(err.into());
            }
        };

        let record = self.store.insert_contact(&contact)?;
        tracing::info!(contact_id = %record.id, "Contact message stored");

        Ok(record)
    }

    /// List every stored message, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Storage` if the store cannot be read.
    pub fn list_all(&self) -> Result<Vec<ContactRecord>, ContactError> {
        Ok(self.store.list_contacts()?)
    }

    /// Fetch one message by its raw identifier.
    ///
    /// Identifiers that are not positive integers cannot match any record and
    /// are reported as not found.
    ///
    /// # Errors
    ///
    /// - `ContactError::NotFound` if no record has that id.
    /// - `ContactError::Storage` if the store cannot be read.
    pub fn get_by_id(&self, raw_id: &str) -> Result<ContactRecord, ContactError> {
        let Ok(id) = raw_id.parse::<ContactId>() else {
            tracing::debug!(raw_id, "Malformed contact id");
            return Err(ContactError::NotFound(raw_id.to_string()));
        };

        self.store
            .get_contact(id)?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }
}
