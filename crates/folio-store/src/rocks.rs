//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch, WriteOptions,
};

use folio_core::{ContactId, ContactRecord, NewContact};

use crate::error::{Result, StoreError};
use crate::schema::{all_column_families, cf, meta, SCHEMA_VERSION};
use crate::{sort_newest_first, Sequence, Store};

type Db = DBWithThreadMode<MultiThreaded>;

/// RocksDB-backed storage implementation.
///
/// Writes are serialized through an internal lock that owns the id sequence.
/// Reads go straight to `RocksDB` and never see a partially applied insert,
/// because each insert is a single `WriteBatch`.
pub struct RocksStore {
    db: Arc<Db>,
    writer: Mutex<Sequence>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// The id sequence is resumed from disk, so ids keep increasing across
    /// restarts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path.as_ref(), cf_descriptors)
            .map_err(db_error)?;

        let sequence = Self::load_sequence(&db)?;
        tracing::debug!(path = %path.as_ref().display(), ?sequence, "RocksDB store opened");

        Ok(Self {
            db: Arc::new(db),
            writer: Mutex::new(sequence),
        })
    }

    /// Recover the last issued id and timestamp.
    ///
    /// The persisted sequence is authoritative; the newest record only
    /// contributes its timestamp.
    fn load_sequence(db: &Db) -> Result<Sequence> {
        let cf_meta = column_family(db, cf::META)?;
        let cf_contacts = column_family(db, cf::CONTACTS)?;

        let persisted = db
            .get_cf(&cf_meta, meta::CONTACT_SEQ)
            .map_err(db_error)?
            .map(|bytes| ContactId::from_bytes(&bytes))
            .transpose()?;

        let newest: Option<ContactRecord> = db
            .iterator_cf(&cf_contacts, IteratorMode::End)
            .next()
            .transpose()
            .map_err(db_error)?
            .map(|(_, value)| Self::deserialize(&value))
            .transpose()?;

        let last_id = persisted.max(newest.as_ref().map(|record| record.id));
        Ok(Sequence::resume(
            last_id,
            newest.map(|record| record.created_at),
        ))
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        column_family(&self.db, name)
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, Sequence>> {
        self.writer
            .lock()
            .map_err(|_| StoreError::Database("writer lock poisoned".into()))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

fn column_family<'a>(db: &'a Db, name: &str) -> Result<Arc<BoundColumnFamily<'a>>> {
    db.cf_handle(name)
        .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
}

#[allow(clippy::needless_pass_by_value)]
fn db_error(err: rocksdb::Error) -> StoreError {
    StoreError::Database(err.to_string())
}

fn decode_version(bytes: &[u8]) -> Result<u32> {
    let bytes: [u8; 4] = bytes
        .try_into()
        .map_err(|_| StoreError::Serialization("malformed schema version".into()))?;
    Ok(u32::from_be_bytes(bytes))
}

impl Store for RocksStore {
    fn ensure_schema(&self) -> Result<()> {
        // Hold the writer lock so two callers cannot both initialize.
        let _writer = self.lock_writer()?;
        let cf_meta = self.cf(cf::META)?;

        match self
            .db
            .get_cf(&cf_meta, meta::SCHEMA_VERSION)
            .map_err(db_error)?
        {
            Some(bytes) => {
                let found = decode_version(&bytes)?;
                if found != SCHEMA_VERSION {
                    return Err(StoreError::SchemaMismatch {
                        found,
                        expected: SCHEMA_VERSION,
                    });
                }
                tracing::debug!(version = found, "Contact store schema up to date");
            }
            None => {
                let mut opts = WriteOptions::default();
                opts.set_sync(true);
                self.db
                    .put_cf_opt(
                        &cf_meta,
                        meta::SCHEMA_VERSION,
                        SCHEMA_VERSION.to_be_bytes(),
                        &opts,
                    )
                    .map_err(db_error)?;
                tracing::info!(version = SCHEMA_VERSION, "Contact store schema initialized");
            }
        }

        Ok(())
    }

    fn insert_contact(&self, contact: &NewContact) -> Result<ContactRecord> {
        let mut writer = self.lock_writer()?;
        let (id, created_at) = writer.next(Utc::now())?;
        let record = ContactRecord::new(id, contact.clone(), created_at);

        let cf_contacts = self.cf(cf::CONTACTS)?;
        let cf_meta = self.cf(cf::META)?;
        let value = Self::serialize(&record)?;

        // Record and sequence land together or not at all
        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_contacts, id.to_bytes(), &value);
        batch.put_cf(&cf_meta, meta::CONTACT_SEQ, id.to_bytes());

        let mut opts = WriteOptions::default();
        opts.set_sync(true);
        self.db.write_opt(batch, &opts).map_err(db_error)?;

        writer.commit(&record);
        Ok(record)
    }

    fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        let cf = self.cf(cf::CONTACTS)?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::End) {
            let (_, value) = item.map_err(db_error)?;
            records.push(Self::deserialize::<ContactRecord>(&value)?);
        }

        sort_newest_first(&mut records);
        Ok(records)
    }

    fn get_contact(&self, id: ContactId) -> Result<Option<ContactRecord>> {
        let cf = self.cf(cf::CONTACTS)?;

        self.db
            .get_cf(&cf, id.to_bytes())
            .map_err(db_error)?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}
