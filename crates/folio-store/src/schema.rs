//! Database schema definitions and column families.
//!
//! This module defines the column families and metadata keys used in
//! `RocksDB` storage.

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Contact records, keyed by big-endian `ContactId`.
    pub const CONTACTS: &str = "contacts";

    /// Store metadata (schema version, id sequence).
    pub const META: &str = "meta";
}

/// Keys in the [`cf::META`] column family.
pub mod meta {
    /// Big-endian `u32` schema version.
    pub const SCHEMA_VERSION: &[u8] = b"schema_version";

    /// Big-endian `u64` of the last issued contact id.
    pub const CONTACT_SEQ: &[u8] = b"contact_seq";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::CONTACTS, cf::META]
}
