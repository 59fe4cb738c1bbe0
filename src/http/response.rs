//! Structured JSON error bodies.
//!
//! The envelope matches what callers of the proxied LLM APIs already
//! handle: a single `error` object with message, type, source and optional
//! per-request details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::request::RequestContext;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub message: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}

impl ErrorResponse {
    fn build(
        status: StatusCode,
        message: &str,
        kind: &str,
        note: &str,
        ctx: Option<&RequestContext>,
    ) -> Response {
        let body = ErrorResponse {
            error: ErrorInfo {
                message: message.to_string(),
                kind: kind.to_string(),
                source: "routegate".to_string(),
                details: Some(ErrorDetail {
                    request_id: ctx.map(|c| c.id.clone()),
                    note: Some(note.to_string()),
                }),
            },
        };
        (status, Json(body)).into_response()
    }

    /// 404 for a top segment with no binding in the current table.
    pub fn route_not_found(ctx: Option<&RequestContext>) -> Response {
        Self::build(
            StatusCode::NOT_FOUND,
            "Route not found",
            "invalid_request_error",
            "no route is configured for this path",
            ctx,
        )
    }

    /// 404 for an unmatched path on the gateway's own surface.
    pub fn system_route_not_found(ctx: Option<&RequestContext>) -> Response {
        Self::build(
            StatusCode::NOT_FOUND,
            "Not found",
            "invalid_request_error",
            "this path does not exist on the gateway",
            ctx,
        )
    }

    /// 500 for dispatch failures and recovered faults.
    pub fn internal_error(ctx: Option<&RequestContext>) -> Response {
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "internal_error",
            "the gateway failed to complete the request",
            ctx,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext {
            id: "1700000000123456".to_string(),
            top: "unknown".to_string(),
            subpath: "/x".to_string(),
            origin: None,
        }
    }

    #[test]
    fn route_not_found_is_404() {
        let response = ErrorResponse::route_not_found(Some(&ctx()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn envelope_shape() {
        let body = ErrorResponse {
            error: ErrorInfo {
                message: "Route not found".to_string(),
                kind: "invalid_request_error".to_string(),
                source: "routegate".to_string(),
                details: Some(ErrorDetail {
                    request_id: Some("1".to_string()),
                    note: None,
                }),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["source"], "routegate");
        assert_eq!(json["error"]["details"]["request_id"], "1");
        assert!(json["error"]["details"].get("note").is_none());
    }
}
