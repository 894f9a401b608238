//! Function adapter for AWS Lambda style invocation.
//!
//! The platform hands the function the decoded payload and takes back the
//! response value, so there is no HTTP layer: errors are returned to the
//! caller unchanged and status translation is left to the hosting platform.
//!
//! # Example
//!
//! ```ignore
//! use clova_skill::SkillConfigurator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     SkillConfigurator::new()
//!         .on_launch_request(|ctx| async move {
//!             ctx.set_simple_speech(ctx.speech().create_speech_text("こんにちは", None));
//!             Ok(())
//!         })
//!         .lambda()
//!         .run()
//!         .await
//! }
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::protocol::{RequestPayload, ResponseEnvelope};
use crate::skill::Skill;

/// Function handler produced by
/// [`SkillConfigurator::lambda`](crate::SkillConfigurator::lambda).
#[derive(Clone)]
pub struct LambdaHandler {
    skill: Skill,
}

impl LambdaHandler {
    pub(crate) fn new(skill: Skill) -> Self {
        Self { skill }
    }

    /// Handle one invocation.
    pub async fn call(&self, payload: Value) -> Result<ResponseEnvelope> {
        self.skill.dispatch(payload).await
    }

    /// Handle one invocation with an already parsed payload.
    pub async fn call_request(&self, request: RequestPayload) -> Result<ResponseEnvelope> {
        self.skill.dispatch_request(request).await
    }

    /// Serve invocations from the Lambda runtime API until the process exits.
    #[cfg(feature = "lambda")]
    pub async fn run(self) -> std::result::Result<(), lambda_runtime::Error> {
        use lambda_runtime::{service_fn, LambdaEvent};

        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let handler = self.clone();
            async move {
                tracing::debug!(request_id = %event.context.request_id, "Lambda invocation");
                handler
                    .call(event.payload)
                    .await
                    .map_err(lambda_runtime::Error::from)
            }
        }))
        .await
    }
}
