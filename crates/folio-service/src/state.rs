//! Application state.

use std::sync::Arc;

use folio_store::{Store, StoreError};

use crate::config::ServiceConfig;
use crate::contacts::ContactService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Contact validation and persistence.
    pub contacts: ContactService,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state around an already opened store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store schema cannot be prepared.
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Result<Self, StoreError> {
        let contacts = ContactService::new(store)?;
        tracing::debug!("Contact service ready");

        Ok(Self { contacts, config })
    }
}
