//! Folio contact HTTP API service.
//!
//! This crate provides the backend for the portfolio contact form:
//!
//! - `POST /api/contact` - validate and store a submission
//! - `GET /api/contacts` - list stored messages, newest first
//! - `GET /api/contacts/:id` - fetch one message
//! - `GET /api/health` - liveness check
//!
//! The request handlers are thin; validation and persistence live in
//! [`ContactService`], which owns an injected [`folio_store::Store`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for Axum even when the store is not

pub mod config;
pub mod contacts;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use contacts::{ContactError, ContactService};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
