//! Launch Skill - minimal skill served over HTTP.
//!
//! This example demonstrates:
//! - Registering handlers with the fluent configurator
//! - Reading intent slots and keeping session attributes
//! - Mounting the skill on an axum route
//!
//! # Trying it out
//!
//! ```sh
//! RUST_LOG=clova_skill=debug cargo run --example launch
//! curl -s localhost:3000/clova -d '{"request":{"type":"LaunchRequest"}}'
//! ```

use axum::Router;
use clova_skill::speech::VerboseSpeech;
use clova_skill::{configure_skill, Context, SpeechLang};
use serde_json::{json, Map};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; the skill itself never installs a subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let skill = configure_skill()
        .default_lang(SpeechLang::Ja)
        .on_launch_request(|ctx: Context| async move {
            ctx.set_simple_speech(ctx.speech().create_speech_text("こんにちは", None));
            ctx.set_reprompt(clova_skill::speech::OutputSpeech::SimpleSpeech {
                values: ctx.speech().create_speech_text("天気を聞いてください", None),
            });
            Ok(())
        })
        .on_intent_request(|ctx: Context| async move {
            let city = ctx.slot("city").unwrap_or("東京").to_string();

            let mut attributes = Map::new();
            attributes.insert("lastCity".to_string(), json!(city));
            ctx.set_session_attributes(attributes);

            let speech = ctx.speech();
            ctx.set_speech_set(
                speech.create_speech_text(format!("{city}は晴れ"), None),
                VerboseSpeech::SpeechList {
                    values: vec![
                        speech.create_speech_url("https://example.com/chime.mp3"),
                        speech.create_speech_text(format!("{city}は一日中晴れるでしょう"), None),
                    ],
                },
            );
            ctx.end_session(true);
            Ok(())
        })
        .on_session_ended_request(|_ctx: Context| async { Ok(()) });

    let app = Router::new().route("/clova", skill.handle());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
