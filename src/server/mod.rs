//! # HTTP Server for Booth Sessions
//!
//! Serves the session CRUD API, photo upload, and layout rendering.
//!
//! ## Usage
//!
//! ```bash
//! pawtobooth serve --listen 0.0.0.0:8080
//! ```

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::error::PawtoboothError;
use crate::store::SessionStore;

/// Photo uploads are bounded well above any real webcam frame.
const UPLOAD_LIMIT_BYTES: usize = 20 * 1024 * 1024;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use pawtobooth::server::{ServerConfig, serve};
/// use pawtobooth::store::MemStore;
///
/// # async fn example() -> Result<(), pawtobooth::error::PawtoboothError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
/// serve(config, Arc::new(MemStore::new())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(
    config: ServerConfig,
    store: Arc<dyn SessionStore>,
) -> Result<(), PawtoboothError> {
    let app_state = Arc::new(AppState::new(config.clone(), store));

    let app = Router::new()
        .route("/api/photo-sessions", post(handlers::sessions::create))
        .route(
            "/api/photo-sessions/:session_id",
            get(handlers::sessions::show)
                .patch(handlers::sessions::update)
                .delete(handlers::sessions::destroy),
        )
        .route(
            "/api/photo-sessions/:session_id/photos",
            post(handlers::photos::upload).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/photo-sessions/:session_id/layout",
            get(handlers::layout::render),
        )
        .with_state(app_state);

    println!("Pawtobooth HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            PawtoboothError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PawtoboothError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
