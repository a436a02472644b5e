//! HMAC Signing Service
//!
//! An HTTP service that computes and verifies keyed-hash signatures over a
//! single statically configured shared secret, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                HMAC SERVER                    │
//!                      │                                               │
//!     POST /sign       │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!     POST /verify     │  │  http   │──▶│ routing  │──▶│ pipeline │   │
//!     ─────────────────┼─▶│ server  │   │  table   │   │  gates   │   │
//!                      │  └─────────┘   └──────────┘   └────┬─────┘   │
//!                      │                                     │         │
//!                      │                                     ▼         │
//!     200 / 4xx / 5xx  │  ┌─────────┐              ┌──────────────┐   │
//!     ◀────────────────┼──│  error  │◀─────────────│ hmac engine  │   │
//!                      │  │ mapping │              │ sign/verify  │   │
//!                      │  └─────────┘              └──────────────┘   │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │  config: load once, validate, freeze     │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hmac_server::config::loader::DEFAULT_CONFIG_PATH;
use hmac_server::config::store;
use hmac_server::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hmac_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hmac-server v0.1.0 starting");

    // Load once from the fixed resource path; any failure is startup-fatal.
    let config = store::load_once(Path::new(DEFAULT_CONFIG_PATH))?;

    tracing::info!(
        listen_port = config.listen_port,
        max_msg_size_bytes = config.max_msg_size_bytes,
        algorithm = %config.hmac_alg,
        "Configuration loaded"
    );

    let server = HttpServer::new(&config)?;

    let port = u16::try_from(config.listen_port).map_err(|_| "listenPort out of range")?;
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
