//! Cloud Functions for Firebase adapter.
//!
//! HTTPS-triggered functions receive the same request/response pair as a
//! plain HTTP server, so the contract matches [`super::http`]. Failures are
//! logged with `adapter = "firebase"` so they can be told apart in the
//! function logs.

use axum::body::Bytes;
use axum::routing::{any, MethodRouter};

use super::{dispatch_body, into_http_response};
use crate::skill::Skill;

pub(crate) fn method_router<S>(skill: Skill) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move |body: Bytes| async move {
        into_http_response(dispatch_body(&skill, &body).await, "firebase")
    })
}
