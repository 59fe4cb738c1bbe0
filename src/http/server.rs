//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: reserved `/api` surface + proxy fallback
//! - Wire up middleware (panic recovery, CORS, access log, route extractor)
//! - Build the shared upstream client
//! - Serve until the shutdown signal fires

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ReservedSet;
use crate::http::{api, middleware, proxy};
use crate::routing::RouteStore;

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RouteStore>,
    pub reserved: ReservedSet,
    pub client: proxy::UpstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given route store and reserved set.
    pub fn new(store: Arc<RouteStore>, reserved: ReservedSet) -> std::io::Result<Self> {
        let state = AppState {
            store,
            reserved,
            client: proxy::upstream_client()?,
        };
        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order matters: the extractor is innermost so every handler
    /// sees a request context; catch-panic sits outside the access log so
    /// even a panicking request still produces a summary line and a JSON
    /// error.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(api::home))
            .nest("/api", api::router())
            .fallback(proxy::forward_handler)
            .layer(from_fn_with_state(state.clone(), middleware::extract_route))
            .layer(from_fn(middleware::access_log))
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(middleware::recover))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections until shutdown fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
