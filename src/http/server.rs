//! HTTP server setup and wiring.
//!
//! # Responsibilities
//! - Construct and initialize the signing engine from loaded configuration
//! - Build the axum Router from the fixed route table
//! - Wire up middleware (tracing) and shared state
//! - Serve connections with graceful shutdown
//!
//! # Design Decisions
//! - Explicit dependency wiring at startup: the engine is built directly
//!   here, initialized once, and passed through shared state; no runtime
//!   type inspection
//! - Routes register with `any()` so the pipeline owns method validation
//!   (405 with a message, not the framework default)

use std::sync::Arc;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::crypto::{CryptoError, HmacEngine};
use crate::http::pipeline::dispatch;
use crate::routing::RouteTable;

/// Shared state injected into the dispatch handler. All members are
/// write-once at startup, read-only per request.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub engine: Arc<HmacEngine>,
    pub max_body_bytes: usize,
}

/// HTTP server for the signing service.
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Wire the signing engine and route table into an axum router.
    /// Engine initialization failure here aborts startup.
    pub fn new(config: &AppConfig) -> Result<Self, CryptoError> {
        let mut engine = HmacEngine::new();
        engine.init(&config.secret, &config.hmac_alg)?;
        tracing::info!(
            algorithm = engine.mac_name().unwrap_or(""),
            "Signing engine initialized"
        );

        let routes = Arc::new(RouteTable::new());
        let state = AppState {
            routes: routes.clone(),
            engine: Arc::new(engine),
            max_body_bytes: config.max_body_bytes(),
        };

        let mut router = Router::new();
        for route in routes.routes() {
            tracing::info!(path = route.path, "Registering route");
            router = router.route(route.path, any(dispatch));
        }
        let router = router.with_state(state).layer(TraceLayer::new_for_http());

        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
