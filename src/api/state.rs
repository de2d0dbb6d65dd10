use std::sync::Arc;

use crate::config::Config;
use crate::services::{CatalogProvider, TmdbProvider};

/// Shared application state
///
/// Immutable after startup; requests share nothing but the provider client.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Builds the state backed by TMDB
    pub fn from_config(config: &Config) -> Self {
        let provider = TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
        );
        Self::new(Arc::new(provider))
    }
}
