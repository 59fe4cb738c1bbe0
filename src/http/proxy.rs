//! The forwarding engine.
//!
//! Builds the outbound request, executes it on the shared pooled client and
//! relays status, headers and body back to the caller. Chunked and
//! event-stream responses are relayed chunk by chunk as they arrive;
//! everything else passes through in one copy.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Uri};
use axum::response::Response;
use futures_util::stream;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::http::request::RequestContext;
use crate::http::response::ErrorResponse;
use crate::http::server::AppState;

/// Shared outbound HTTP client. HTTPS-capable, with idle connections pooled
/// and capped per origin.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Idle connections kept alive per origin.
const MAX_IDLE_PER_ORIGIN: usize = 50;

/// Ceiling on the size of a single relayed stream chunk.
const STREAM_CHUNK_BYTES: usize = 4096;

/// Build the shared upstream client.
///
/// No request timeout is configured: an outbound call lives exactly as long
/// as the inbound request driving it, so a caller disconnect cancels it.
/// The transport adds no Accept-Encoding of its own, which keeps stream
/// bytes relayable without decoding.
pub fn upstream_client() -> std::io::Result<UpstreamClient> {
    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();

    Ok(Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(MAX_IDLE_PER_ORIGIN)
        .build(https))
}

/// Proxy fallback handler: every path the gateway does not own lands here.
pub async fn forward_handler(State(state): State<AppState>, request: Request) -> Response {
    let Some(ctx) = request.extensions().get::<RequestContext>().cloned() else {
        tracing::error!("Proxy handler reached without a request context");
        return ErrorResponse::internal_error(None);
    };
    forward(&state, &ctx, request).await
}

/// Relay one request to its resolved origin.
pub async fn forward(state: &AppState, ctx: &RequestContext, request: Request) -> Response {
    // The extractor only routes resolved requests here; re-check anyway so
    // a reserved or unmatched segment can never be dispatched outbound.
    if state.reserved.contains(&ctx.top) {
        tracing::warn!(request_id = %ctx.id, top = %ctx.top, "404 Not Found");
        return ErrorResponse::system_route_not_found(Some(ctx));
    }
    let Some(origin) = ctx.origin.as_deref() else {
        tracing::warn!(request_id = %ctx.id, top = %ctx.top, "No resolved origin");
        return ErrorResponse::route_not_found(Some(ctx));
    };

    let target_url = format!("{}{}", origin, ctx.subpath);
    let uri: Uri = match target_url.parse() {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(request_id = %ctx.id, error = %e, "Failed to build target URL");
            return ErrorResponse::internal_error(Some(ctx));
        }
    };

    let (parts, body) = request.into_parts();

    let mut builder = axum::http::Request::builder().method(parts.method).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        // Verbatim pass-through: auth headers forwarded, nothing stripped,
        // no host rewrite.
        for (name, value) in parts.headers.iter() {
            headers.append(name.clone(), value.clone());
        }
    }

    // The inbound body is streamed through, not buffered.
    let outbound = match builder.body(body) {
        Ok(outbound) => outbound,
        Err(e) => {
            tracing::error!(request_id = %ctx.id, error = %e, "Failed to build outbound request");
            return ErrorResponse::internal_error(Some(ctx));
        }
    };

    // One attempt, no retry: a dispatch failure is reported as-is.
    let upstream = match state.client.request(outbound).await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!(request_id = %ctx.id, target = %target_url, error = %e, "Upstream request failed");
            return ErrorResponse::internal_error(Some(ctx));
        }
    };

    relay_response(upstream)
}

/// Copy status and headers verbatim, then transfer the body with a strategy
/// chosen once per response.
fn relay_response(upstream: Response<Incoming>) -> Response {
    let (parts, body) = upstream.into_parts();

    let body = if is_streaming(&parts.headers) {
        relay_streaming(body)
    } else {
        // Bulk: hand the upstream body straight through, one copy.
        Body::new(body)
    };

    Response::from_parts(parts, body)
}

/// Streamability is decided from two response headers only.
fn is_streaming(headers: &HeaderMap) -> bool {
    let header_contains = |name: header::HeaderName, needle: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(needle))
    };

    header_contains(header::TRANSFER_ENCODING, "chunked")
        || header_contains(header::CONTENT_TYPE, "text/event-stream")
}

/// Chunk-by-chunk relay for chunked and event-stream bodies.
///
/// Each non-empty data frame is forwarded as soon as it arrives, split into
/// chunks of at most [`STREAM_CHUNK_BYTES`], so the caller observes stream
/// data incrementally instead of at end of response. The relay is pull
/// driven: when the caller disconnects the returned body is dropped, the
/// upstream body goes with it and the outbound call is canceled. No error
/// surfaces; the status is long committed.
fn relay_streaming(upstream: Incoming) -> Body {
    let chunks = stream::unfold(Some((upstream, Bytes::new())), |state| async move {
        let (mut body, mut pending) = state?;
        loop {
            if !pending.is_empty() {
                let take = pending.len().min(STREAM_CHUNK_BYTES);
                let chunk = pending.split_to(take);
                return Some((Ok(chunk), Some((body, pending))));
            }
            match body.frame().await {
                Some(Ok(frame)) => {
                    // Trailer frames are dropped; only data is relayed.
                    if let Ok(data) = frame.into_data() {
                        pending = data;
                    }
                }
                Some(Err(e)) => return Some((Err(e), None)),
                None => return None,
            }
        }
    });

    Body::from_stream(chunks)
}
