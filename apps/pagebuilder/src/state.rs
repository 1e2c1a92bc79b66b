use std::sync::Arc;

use crate::config::Config;
use crate::saves::{InMemorySaveStore, SaveStore};
use crate::sessions::{create_session_store, SessionStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable save backend. Default: InMemorySaveStore.
    pub saves: Arc<dyn SaveStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: create_session_store(),
            saves: Arc::new(InMemorySaveStore::new()),
            config,
        }
    }
}
