//! Request middleware: route extraction, access logging, panic recovery.

use std::any::Any;
use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::{generate_request_id, RequestContext};
use crate::http::response::ErrorResponse;
use crate::http::server::AppState;
use crate::routing::{path, resolver, Decision};

/// Decompose the path, resolve it against one snapshot and stash the
/// per-request context.
///
/// Unresolved top segments are rejected here, before the forwarder ever
/// runs. The snapshot is fetched exactly once; a concurrent reload does not
/// retarget a request already in flight.
pub async fn extract_route(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (top, subpath) = path::decompose(request.uri().path());
    let mut ctx = RequestContext {
        id: generate_request_id(),
        top: top.to_string(),
        subpath: subpath.to_string(),
        origin: None,
    };

    let snapshot = state.store.current();
    let mut response = if ctx.top.is_empty() {
        // The bare root belongs to the gateway's own surface.
        request.extensions_mut().insert(ctx.clone());
        next.run(request).await
    } else {
        match resolver::resolve(&ctx.top, &snapshot, &state.reserved) {
            Decision::Unresolved => {
                tracing::warn!(request_id = %ctx.id, top = %ctx.top, "Route not found");
                ErrorResponse::route_not_found(Some(&ctx))
            }
            decision => {
                if let Decision::Resolved(target) = decision {
                    ctx.origin = Some(target);
                }
                request.extensions_mut().insert(ctx.clone());
                next.run(request).await
            }
        }
    };

    // The access log reads the context off the response on the way out.
    response.extensions_mut().insert(ctx);
    response
}

/// One summary line per request: id, status, method, path, target, latency
/// and client address.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();
    if let Some(ctx) = response.extensions().get::<RequestContext>() {
        let target = ctx.origin.as_deref().unwrap_or("-");
        tracing::info!(
            "{} | {} | {} | {} -> {} | {:?} | {}",
            ctx.id,
            status,
            method,
            ctx.subpath,
            target,
            latency,
            client
        );
    }
    response
}

/// Convert a recovered panic into the internal-error JSON.
///
/// A fault in one request must never take the serving process down.
pub fn recover(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Recovered from panic while handling request");
    ErrorResponse::internal_error(None)
}
