//! In-memory storage implementation.
//!
//! Nothing is persisted; use it for tests and for tooling that needs a
//! `Store` without touching the filesystem.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use folio_core::{ContactId, ContactRecord, NewContact};

use crate::error::{Result, StoreError};
use crate::{sort_newest_first, Sequence, Store};

#[derive(Debug, Default)]
struct Inner {
    sequence: Sequence,
    contacts: BTreeMap<ContactId, ContactRecord>,
}

/// A `Store` held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Database("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Database("memory store lock poisoned".into()))
    }
}

impl Store for MemoryStore {
    fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    fn insert_contact(&self, contact: &NewContact) -> Result<ContactRecord> {
        let mut inner = self.write()?;
        let (id, created_at) = inner.sequence.next(Utc::now())?;
        let record = ContactRecord::new(id, contact.clone(), created_at);

        inner.contacts.insert(id, record.clone());
        inner.sequence.commit(&record);
        Ok(record)
    }

    fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        let mut records: Vec<_> = self.read()?.contacts.values().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn get_contact(&self, id: ContactId) -> Result<Option<ContactRecord>> {
        Ok(self.read()?.contacts.get(&id).cloned())
    }
}
