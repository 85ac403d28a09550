//! Application state for the stamp reporting API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReportingConfig;
use crate::store::StampStore;

/// Shared application state.
///
/// Holds the stamp store reports are computed from and the reporting
/// configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn StampStore>,
    config: Arc<ReportingConfig>,
}

impl AppState {
    /// Creates a new application state over `store`.
    pub fn new<S: StampStore + 'static>(store: S, config: ReportingConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns the stamp store.
    pub fn store(&self) -> &dyn StampStore {
        self.store.as_ref()
    }

    /// Returns the reporting configuration.
    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }
}
