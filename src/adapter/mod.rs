//! Adapter module - hosting environment entry points.
//!
//! Each adapter wraps [`Skill::dispatch`](crate::Skill::dispatch)
//! with the conventions of one environment:
//!
//! - [`http`] - axum handler; JSON body in, JSON envelope out, status codes for failures
//! - [`firebase`] - the same contract for a Cloud Functions for Firebase HTTPS trigger
//! - [`lambda`] - direct call with the payload; errors are returned, not translated

pub mod firebase;
pub mod http;
pub mod lambda;

pub use lambda::LambdaHandler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::Result;
use crate::protocol::ResponseEnvelope;
use crate::skill::Skill;

/// Decode a request body and dispatch it.
pub(crate) async fn dispatch_body(skill: &Skill, body: &[u8]) -> Result<ResponseEnvelope> {
    let payload = serde_json::from_slice(body)?;
    skill.dispatch(payload).await
}

/// Turn a dispatch outcome into an HTTP response.
///
/// Failures are logged; the body of a failure response is empty.
pub(crate) fn into_http_response(result: Result<ResponseEnvelope>, adapter: &'static str) -> Response {
    match result {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) if e.is_client_error() => {
            tracing::warn!(adapter, "Rejected request: {}", e);
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(e) => {
            tracing::error!(adapter, "{}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
