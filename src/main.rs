//! routegate: a path-routed HTTP gateway.
//!
//! The first path segment of an inbound request selects a backend origin
//! from a hot-reloadable routing table; the request is relayed verbatim,
//! with chunked and event-stream responses streamed through incrementally.
//!
//! ```text
//! client ──▶ listener ──▶ extractor (decompose + resolve) ──▶ /api surface
//!                              │                               (reserved)
//!                              └──▶ forwarding engine ──▶ origin
//!                                        ▲
//!                    route store (atomic snapshot) ◀── routes.json watcher
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;

use routegate::config::{load_routes, GatewayConfig, ReservedSet, RouteWatcher};
use routegate::http::HttpServer;
use routegate::lifecycle::Shutdown;
use routegate::observability::logging;
use routegate::routing::RouteStore;

#[tokio::main]
async fn main() -> ExitCode {
    let config = GatewayConfig::from_env();
    logging::init(&config.log_filter);

    tracing::info!(
        port = config.port,
        routes_file = %config.routes_file.display(),
        "routegate starting"
    );

    // The initial table load is fatal: the gateway must not serve without
    // one. Reload failures later on only log.
    let initial = match load_routes(&config.routes_file) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to load routes config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(routes = initial.routes.len(), "Routes table loaded");
    let store = Arc::new(RouteStore::new(initial));

    let watch = match RouteWatcher::new(&config.routes_file, store.clone()).run() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("Failed to start routes watcher: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(port = config.port, "Failed to bind listener: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server = match HttpServer::new(store, ReservedSet::standard()) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to build HTTP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move { shutdown.trigger_on_ctrl_c().await });

    let result = server.run(listener, server_shutdown).await;
    watch.stop();

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
