//! Server state and configuration.

use std::sync::Arc;

use crate::store::SessionStore;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Injected session repository; constructed at process start.
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: Arc<dyn SessionStore>) -> Self {
        Self { config, store }
    }
}
