//! API handlers.

pub mod contacts;
pub mod health;
