use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document storage seam. Production: `FsDocumentStore`; tests swap in an
    /// in-memory fake.
    pub store: Arc<dyn DocumentStore>,
    /// Serializes the contact log's read-modify-write cycle so concurrent
    /// submissions cannot overwrite each other's whole-file rewrite.
    pub contact_write_lock: Arc<Mutex<()>>,
    /// Process start, for the health endpoint's uptime field.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            contact_write_lock: Arc::new(Mutex::new(())),
            started_at: Instant::now(),
        }
    }
}
