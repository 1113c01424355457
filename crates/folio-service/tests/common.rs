//! Common test utilities for folio integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use folio_core::{ContactId, ContactRecord, NewContact};
use folio_service::{create_router, AppState, ServiceConfig};
use folio_store::{MemoryStore, RocksStore, Store, StoreError};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for an on-disk store (kept alive for test duration).
    pub temp_dir: Option<TempDir>,
}

impl TestHarness {
    /// Create a harness backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a harness backed by a fresh `RocksDB` store in a temp directory.
    pub fn with_rocks() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut harness = Self::with_rocks_at(temp_dir.path());
        harness.temp_dir = Some(temp_dir);
        harness
    }

    /// Create a harness over an existing `RocksDB` directory.
    pub fn with_rocks_at(path: &Path) -> Self {
        let store = RocksStore::open(path).expect("Failed to open store");
        Self::with_store(Arc::new(store))
    }

    /// Create a harness around any store.
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: String::new(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 10,
        };

        let state = AppState::new(store, config).expect("Failed to build state");
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            temp_dir: None,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A store whose every data operation fails, for exercising 500 paths.
pub struct FailingStore;

impl FailingStore {
    pub const DETAIL: &'static str = "simulated disk failure on /var/lib/folio";

    fn fail<T>() -> folio_store::Result<T> {
        Err(StoreError::Database(Self::DETAIL.into()))
    }
}

impl Store for FailingStore {
    fn ensure_schema(&self) -> folio_store::Result<()> {
        Ok(())
    }

    fn insert_contact(&self, _contact: &NewContact) -> folio_store::Result<ContactRecord> {
        Self::fail()
    }

    fn list_contacts(&self) -> folio_store::Result<Vec<ContactRecord>> {
        Self::fail()
    }

    fn get_contact(&self, _id: ContactId) -> folio_store::Result<Option<ContactRecord>> {
        Self::fail()
    }
}
