//! Identifier types for folio.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact record identifier.
///
/// Identifiers are assigned by the store, start at 1 and strictly increase
/// over the lifetime of a store. They serialize as plain JSON numbers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Create a `ContactId` from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Exhausted` if the id space is used up.
    pub fn next(self) -> Result<Self, IdError> {
        self.0.checked_add(1).map(Self).ok_or(IdError::Exhausted)
    }

    /// Big-endian bytes, so byte order matches numeric order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Create a `ContactId` from big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Invalid` if the slice is not exactly 8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdError> {
        let bytes: [u8; 8] = bytes.try_into().map_err(|_| IdError::Invalid)?;
        Ok(Self(u64::from_be_bytes(bytes)))
    }
}

impl FromStr for ContactId {
    type Err = IdError;

    /// Only plain decimal digits naming a positive integer are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::Invalid);
        }
        match s.parse::<u64>() {
            Ok(0) | Err(_) => Err(IdError::Invalid),
            Ok(value) => Ok(Self(value)),
        }
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({})", self.0)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContactId> for u64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

/// Errors that can occur when parsing or allocating identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a positive decimal integer.
    #[error("invalid contact id")]
    Invalid,

    /// No identifiers are left to allocate.
    #[error("contact id space exhausted")]
    Exhausted,
}
