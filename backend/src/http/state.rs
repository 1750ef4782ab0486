//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for catalog, roster, load and plan storage
    pub repository: Arc<dyn FullRepository>,
    /// Planner and scoring defaults
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and default configuration.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self::with_config(repository, AppConfig::default())
    }

    pub fn with_config(repository: Arc<dyn FullRepository>, config: AppConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
