//! Error types for folio storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The store was written with an incompatible schema.
    #[error("schema version mismatch: found={found}, expected={expected}")]
    SchemaMismatch {
        /// Version recorded in the store.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
}

impl From<folio_core::IdError> for StoreError {
    fn from(err: folio_core::IdError) -> Self {
        Self::Database(err.to_string())
    }
}
