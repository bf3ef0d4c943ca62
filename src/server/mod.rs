//! # HTTP Server for Ticket Previews
//!
//! Exposes the preview renderer and the image encoder to the ticket
//! template editor.
//!
//! ## Usage
//!
//! ```bash
//! ticketpress serve --listen 0.0.0.0:8080 --paper 58mm
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/placeholders` | | `[{ token, sample }]` |
//! | POST | `/api/preview` | `{ template, paperType?, printer?, samples? }` | `{ html, columns }` |
//! | POST | `/api/images/encode` | multipart `image`, `paperType?`, `printer?` | `{ fragment, width, height }` |

pub mod handlers;
mod state;

pub use state::{AppState, DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::TicketError;

/// Build the application router.
///
/// Split from [`serve`] so tests can drive it without a socket.
pub fn router(config: ServerConfig) -> Router {
    let upload_limit = config.upload_body_limit();
    let app_state = Arc::new(AppState::new(config));

    Router::new()
        .route("/api/placeholders", get(handlers::placeholders::list))
        .route("/api/preview", post(handlers::preview::render))
        .route(
            "/api/images/encode",
            post(handlers::images::encode).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use ticketpress::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), ticketpress::error::TicketError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TicketError> {
    let listen_addr = config.listen_addr.clone();
    info!(
        listen = %listen_addr,
        max_image_bytes = config.max_image_bytes,
        default_paper = %config.default_paper,
        "ticketpress HTTP server starting"
    );

    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| TicketError::Server(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    info!("listening on http://{}", listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| TicketError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
