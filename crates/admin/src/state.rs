//! Application state shared across handlers.

use std::sync::Arc;

use marigold_client::AdminApi;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheap to clone; all clones share one inner allocation. The state holds
/// no session data - the per-admin API session lives in the
/// tower-session and is passed explicitly to every client call.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: AdminApi,
}

impl AppState {
    /// Build the application state.
    #[must_use]
    pub fn new(config: AdminConfig, api: AdminApi) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The Marigold API client.
    #[must_use]
    pub fn api(&self) -> &AdminApi {
        &self.inner.api
    }
}
