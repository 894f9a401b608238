//! # clova-skill
//!
//! Request handlers for Clova Extension Kit skills.
//!
//! This crate lets a skill register one async handler per request type and
//! serve them from an HTTP server, a Cloud Functions for Firebase HTTPS
//! trigger, or an AWS Lambda function.
//!
//! ## Architecture
//!
//! - **Configurator**: fluent registration of handlers by request type
//! - **Dispatcher**: looks up the handler for `request.type`, runs it with a
//!   fresh [`Context`] and returns the response it built
//! - **Adapters**: translate each hosting environment's invocation into a dispatch
//!
//! ## Example
//!
//! ```ignore
//! use clova_skill::configure_skill;
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = axum::Router::new().route(
//!         "/clova",
//!         configure_skill()
//!             .on_launch_request(|ctx| async move {
//!                 ctx.set_simple_speech(ctx.speech().create_speech_text("こんにちは", None));
//!                 Ok(())
//!             })
//!             .handle(),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod speech;

mod skill;

pub use adapter::LambdaHandler;
pub use config::SkillConfig;
pub use error::ClovaError;
pub use handler::{Context, HandlerResult, Registration};
pub use skill::{Skill, SkillConfigurator};
pub use speech::{SpeechBuilder, SpeechInfo, SpeechLang};

/// Start configuring a skill with default settings.
pub fn configure_skill() -> SkillConfigurator {
    SkillConfigurator::new()
}
