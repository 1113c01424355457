//! Folio Client SDK.
//!
//! This crate provides a client library for the folio contact API, used by
//! the contact form backend glue and by admin tooling that reads messages.
//!
//! # Example
//!
//! ```no_run
//! use folio_client::FolioClient;
//! use folio_core::ContactSubmission;
//!
//! # async fn example() -> Result<(), folio_client::ClientError> {
//! let client = FolioClient::new("http://localhost:3000")?;
//!
//! let response = client
//!     .submit_contact(ContactSubmission::new(
//!         "Ada",
//!         "ada@example.com",
//!         "Hi",
//!         "Hello",
//!     ))
//!     .await?;
//!
//! println!("Stored as #{}", response.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, FolioClient};
pub use error::ClientError;
pub use types::*;
