//! The gateway's own informational endpoints, served under the reserved
//! `/api` surface.

use std::collections::HashMap;

use axum::extract::{OriginalUri, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;

use crate::http::request::RequestContext;
use crate::http::response::ErrorResponse;
use crate::http::server::AppState;

/// Router for everything under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_path))
        .route("/ping", get(ping))
        .route("/routes", get(list_routes))
        .route("/param", get(show_params))
        .fallback(not_found)
}

/// Welcome message at the root of the gateway.
pub async fn home() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to Routegate!" }))
}

async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}

/// Echo the request path as the gateway saw it.
async fn show_path(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    Json(json!({ "path": uri.path() }))
}

/// Echo the query parameters.
async fn show_params(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    Json(json!({ "params": params }))
}

/// The current routing table snapshot.
async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.current();
    Json(json!({ "data": &snapshot.routes }))
}

/// Anything else under `/api` does not exist and is never proxied.
async fn not_found(ctx: Option<Extension<RequestContext>>) -> Response {
    ErrorResponse::system_route_not_found(ctx.as_ref().map(|Extension(c)| c))
}
