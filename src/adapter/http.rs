//! Generic HTTP adapter.
//!
//! The handler accepts any method, so it can be mounted wherever the host
//! application routes the platform's requests.

use axum::body::Bytes;
use axum::routing::{any, MethodRouter};

use super::{dispatch_body, into_http_response};
use crate::skill::Skill;

pub(crate) fn method_router<S>(skill: Skill) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move |body: Bytes| async move {
        into_http_response(dispatch_body(&skill, &body).await, "http")
    })
}

#[cfg(test)]
mod tests {
    use crate::handler::Context;
    use crate::SkillConfigurator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_mounted_on_any_method() {
        let app: Router = Router::new().route(
            "/hooks/clova",
            SkillConfigurator::new()
                .on_launch_request(|ctx: Context| async move {
                    ctx.end_session(true);
                    Ok(())
                })
                .handle(),
        );

        let resp = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/hooks/clova")
                    .body(Body::from(r#"{"request":{"type":"LaunchRequest"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let app: Router = Router::new().route("/clova", SkillConfigurator::new().handle());

        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/clova")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
