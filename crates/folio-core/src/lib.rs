//! Core types for the folio contact service.
//!
//! This crate provides the domain types shared by the store, the HTTP service
//! and the client SDK:
//!
//! - **Identifiers**: `ContactId`
//! - **Submissions**: `ContactSubmission` (untrusted input) and `NewContact`
//!   (input that passed validation)
//! - **Records**: `ContactRecord`, the durable form of an accepted submission
//!
//! A `NewContact` can only be obtained through [`NewContact::parse`], so every
//! record that reaches a store has already been validated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contact;
pub mod ids;
pub mod validation;

pub use contact::{ContactRecord, ContactSubmission, NewContact};
pub use ids::{ContactId, IdError};
pub use validation::{is_valid_email, ValidationError};
