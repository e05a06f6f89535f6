//! Live GPS map server.
//!
//! Devices report fixes with `POST /api/gps`; the page served at `/` polls
//! `GET /api/gps` and draws the track. Everything lives in memory.
//!
//! Run the server with
//! ```not_rust
//! HOST=127.0.0.1 PORT=8000 cargo run
//! ```
//!
//! and report a position with
//! ```not_rust
//! curl -X POST localhost:8000/api/gps -H 'content-type: application/json' -d '{"lat":40.41,"lon":-3.70}'
//! ```

mod config;
mod handlers;
mod models;
mod store;

use axum::Server;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::store::CoordinateStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gps_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let app = handlers::router(CoordinateStore::shared());

    let addr = config.addr();
    info!("listening on {}", addr);

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Unable to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
