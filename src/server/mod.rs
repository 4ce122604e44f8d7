//! HTTP server for keepsake.
//!
//! Six JSON endpoints, list and create for each entity, mounted on the
//! paths declared in [`crate::api`]:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET / POST | `/api/memories` | 200 array / 201 object |
//! | GET / POST | `/api/love-notes` | 200 array / 201 object |
//! | GET / POST | `/api/timeline` | 200 array / 201 object |
//!
//! Invalid input yields 400 `{"message":"Invalid input"}`, storage failures
//! 500 `{"message":"Internal server error"}`.

mod error;
mod routes;
pub mod seed;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::storage::Storage;

pub use error::ApiError;
pub use routes::{AppState, build_router};
pub use seed::{SeedReport, seed_if_empty};

/// Builds the router, seeds an empty store and serves until Ctrl-C.
///
/// Seeding finishes before the listener is bound, so no request can observe
/// a half-seeded store.
pub async fn run_server(storage: Arc<dyn Storage>, settings: &ServerSettings) -> Result<()> {
    let app = build_router(storage.clone());

    if settings.seed {
        seed_if_empty(storage.as_ref()).await?;
    }

    let listener = TcpListener::bind(settings.bind_address()).await?;
    serve(listener, app).await
}

/// Serves `app` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
