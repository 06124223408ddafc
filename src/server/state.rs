//! State shared by all request handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::data::SuiteStore;
use crate::random::{IndexPicker, ThreadRngPicker};

/// Shared state handed to handlers through axum's `State` extractor.
pub type SharedState = Arc<AppState>;

/// Read-only dependencies of the request handlers. Nothing in here changes
/// after startup.
pub struct AppState {
    pub store: SuiteStore,
    pub picker: Arc<dyn IndexPicker>,
}

impl AppState {
    pub fn new(store: SuiteStore, picker: Arc<dyn IndexPicker>) -> Self {
        Self { store, picker }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            SuiteStore::new(config.content_dir.clone()),
            Arc::new(ThreadRngPicker),
        )
    }
}
