//! Application state - shared across all handlers.

use std::sync::Arc;

use masterblog_core::ports::PostStore;
use masterblog_infra::InMemoryPostStore;

/// Shared application state.
///
/// Holds the one store handle; the store owns the live collection and hands
/// out snapshots, so handlers never touch shared mutable data directly.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// State backed by the fixed seed collection the server boots with.
    pub fn seeded() -> Self {
        tracing::info!("Post store initialized with seed data");
        Self {
            posts: Arc::new(InMemoryPostStore::seeded()),
        }
    }
}
