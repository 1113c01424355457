//! Storage layer for folio.
//!
//! This crate provides persistent storage for contact records behind the
//! [`Store`] trait, so the service owns an injected storage client instead of
//! a global database handle.
//!
//! # Backends
//!
//! - [`RocksStore`]: durable, file-backed `RocksDB` storage (feature
//!   `rocksdb-backend`, enabled by default).
//! - [`MemoryStore`]: in-process storage for tests and tooling.
//!
//! # Example
//!
//! ```no_run
//! use folio_core::{ContactSubmission, NewContact};
//! use folio_store::{RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/folio-db").unwrap();
//! store.ensure_schema().unwrap();
//!
//! let contact = NewContact::parse(ContactSubmission::new(
//!     "Ada",
//!     "ada@example.com",
//!     "Hi",
//!     "Hello",
//! ))
//! .unwrap();
//! let record = store.insert_contact(&contact).unwrap();
//! assert_eq!(store.get_contact(record.id).unwrap(), Some(record));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
#[cfg(feature = "rocksdb-backend")]
pub mod rocks;
#[cfg(feature = "rocksdb-backend")]
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksStore;

use chrono::{DateTime, Utc};
use folio_core::{ContactId, ContactRecord, NewContact};

/// The storage trait defining all database operations.
///
/// Implementations must serialize writes internally: concurrent callers may
/// insert at the same time and each must get a distinct, strictly increasing
/// id. An insert is applied entirely or not at all.
pub trait Store: Send + Sync {
    /// Prepare the backing store for use.
    ///
    /// Idempotent. Called once when the service starts, never per request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SchemaMismatch` if the store was written by an
    /// incompatible version, or a database error.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a validated contact, assigning its id and creation time.
    ///
    /// `created_at` is the insertion time, clamped so it is never earlier
    /// than the previous record's if the wall clock has gone backwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be completed.
    fn insert_contact(&self, contact: &NewContact) -> Result<ContactRecord>;

    /// List every contact, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_contacts(&self) -> Result<Vec<ContactRecord>>;

    /// Get a contact by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_contact(&self, id: ContactId) -> Result<Option<ContactRecord>>;
}

/// Writer-side bookkeeping shared by the backends.
///
/// Tracks the last issued id and timestamp so that ids never repeat and
/// `created_at` never runs backwards relative to id order, even if the wall
/// clock does.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Sequence {
    last_id: Option<ContactId>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Sequence {
    #[cfg_attr(not(feature = "rocksdb-backend"), allow(dead_code))]
    pub(crate) fn resume(
        last_id: Option<ContactId>,
        last_created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            last_id,
            last_created_at,
        }
    }

    /// The id and timestamp the next insert should use. Nothing is consumed
    /// until [`Sequence::commit`] is called.
    pub(crate) fn next(&self, now: DateTime<Utc>) -> Result<(ContactId, DateTime<Utc>)> {
        let id = match self.last_id {
            Some(last) => last.next()?,
            None => ContactId::new(1),
        };
        let created_at = self.last_created_at.map_or(now, |last| now.max(last));
        Ok((id, created_at))
    }

    pub(crate) fn commit(&mut self, record: &ContactRecord) {
        self.last_id = Some(record.id);
        self.last_created_at = Some(record.created_at);
    }
}

/// Sort records newest first, breaking timestamp ties by the higher id.
pub(crate) fn sort_newest_first(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
