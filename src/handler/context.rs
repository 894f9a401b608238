//! Request context for handlers.
//!
//! Gives handlers read access to the request and collects the response:
//! - `set_simple_speech` / `set_speech_list` / `set_speech_set` - output speech
//! - `set_reprompt` - speech played when the user stays silent
//! - `set_card` / `add_directive` - display content
//! - `set_session_attributes` / `end_session` - session state
//!
//! # Example
//!
//! ```ignore
//! async fn launch(ctx: Context) -> HandlerResult {
//!     let speech = ctx.speech().create_speech_text("こんにちは", None);
//!     ctx.set_simple_speech(speech);
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

use crate::config::SkillConfig;
use crate::protocol::{Event, RequestPayload, Reprompt, ResponseEnvelope, Slot};
use crate::speech::{OutputSpeech, SpeechBuilder, SpeechInfo, VerboseSpeech};

/// Context passed to request handlers.
///
/// One context is created per request. Setters overwrite the previous value
/// of their field, so the last call wins.
///
/// # Thread Safety
///
/// `Context` is `Clone` and can be moved across async tasks. All clones of a
/// context share the same response, which is how the dispatcher reads back
/// what the handler set.
#[derive(Clone)]
pub struct Context {
    /// The request being handled.
    request: Arc<RequestPayload>,
    /// Speech builder with the skill's default language.
    speech: SpeechBuilder,
    /// Response under construction.
    response: Arc<Mutex<ResponseEnvelope>>,
}

impl Context {
    /// Create a context with the default skill configuration.
    pub fn new(request: RequestPayload) -> Self {
        Self::with_config(request, &SkillConfig::default())
    }

    /// Create a context for a skill configured with `config`.
    ///
    /// The response starts as the skeleton. Inbound session attributes are
    /// not echoed back unless the handler passes them to
    /// [`set_session_attributes`](Self::set_session_attributes).
    pub fn with_config(request: RequestPayload, config: &SkillConfig) -> Self {
        let envelope = ResponseEnvelope::skeleton(config.response_version.clone());

        Self {
            request: Arc::new(request),
            speech: config.speech_builder(),
            response: Arc::new(Mutex::new(envelope)),
        }
    }

    /// The whole request payload.
    #[inline]
    pub fn request(&self) -> &RequestPayload {
        &self.request
    }

    /// Discriminator of the request, e.g. `LaunchRequest`.
    #[inline]
    pub fn request_type(&self) -> &str {
        self.request.request_type()
    }

    /// Speech builder carrying the skill's default language.
    #[inline]
    pub fn speech(&self) -> &SpeechBuilder {
        &self.speech
    }

    /// Id of the current session.
    pub fn session_id(&self) -> Option<&str> {
        self.request.session.as_ref().map(|s| s.session_id.as_str())
    }

    /// Attributes the previous response stored in the session.
    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.request
            .session
            .as_ref()
            .and_then(|s| s.session_attributes.as_ref())
    }

    /// Whether this request opened the session.
    pub fn is_new_session(&self) -> bool {
        self.request.session.as_ref().is_some_and(|s| s.new)
    }

    /// Id of the user talking to the skill.
    pub fn user_id(&self) -> Option<&str> {
        self.request
            .session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .map(|u| u.user_id.as_str())
    }

    /// Access token of an account-linked user.
    pub fn access_token(&self) -> Option<&str> {
        self.request
            .session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .and_then(|u| u.access_token.as_deref())
    }

    /// Extension id the request was addressed to.
    pub fn application_id(&self) -> Option<&str> {
        self.request
            .context
            .as_ref()
            .and_then(|c| c.system.application.as_ref())
            .map(|a| a.application_id.as_str())
    }

    /// Id of the client device.
    pub fn device_id(&self) -> Option<&str> {
        self.request
            .context
            .as_ref()
            .and_then(|c| c.system.device.as_ref())
            .map(|d| d.device_id.as_str())
    }

    /// Intent name of an `IntentRequest`.
    pub fn intent_name(&self) -> Option<&str> {
        self.request.request.intent.as_ref().map(|i| i.name.as_str())
    }

    /// Slots of an `IntentRequest`.
    pub fn slots(&self) -> Option<&HashMap<String, Slot>> {
        self.request
            .request
            .intent
            .as_ref()
            .and_then(|i| i.slots.as_ref())
    }

    /// Value of one slot.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots()
            .and_then(|slots| slots.get(name))
            .map(|s| s.value.as_str())
    }

    /// Event of an `EventRequest`.
    pub fn event(&self) -> Option<&Event> {
        self.request.request.event.as_ref()
    }

    /// Set `response.outputSpeech`.
    pub fn set_output_speech(&self, speech: OutputSpeech) {
        self.lock().response.output_speech = Some(speech);
    }

    /// Set a single speech as the output.
    pub fn set_simple_speech(&self, speech: SpeechInfo) {
        self.set_output_speech(OutputSpeech::SimpleSpeech { values: speech });
    }

    /// Set speeches played one after another.
    pub fn set_speech_list(&self, speeches: Vec<SpeechInfo>) {
        self.set_output_speech(OutputSpeech::SpeechList { values: speeches });
    }

    /// Set brief and verbose speeches for devices with and without a screen.
    pub fn set_speech_set(&self, brief: SpeechInfo, verbose: VerboseSpeech) {
        self.set_output_speech(OutputSpeech::SpeechSet { brief, verbose });
    }

    /// Speech played when the user does not answer.
    pub fn set_reprompt(&self, speech: OutputSpeech) {
        self.lock().response.reprompt = Some(Reprompt {
            output_speech: speech,
        });
    }

    /// Set the display card.
    pub fn set_card(&self, card: Map<String, Value>) {
        self.lock().response.card = card;
    }

    /// Append a directive. Directives accumulate instead of overwriting.
    pub fn add_directive(&self, directive: Value) {
        self.lock().response.directives.push(directive);
    }

    /// Attributes stored in the session for the next request.
    pub fn set_session_attributes(&self, attributes: Map<String, Value>) {
        self.lock().session_attributes = attributes;
    }

    /// Set `response.shouldEndSession`.
    pub fn end_session(&self, end: bool) {
        self.lock().response.should_end_session = end;
    }

    /// Snapshot of the response built so far.
    pub fn response(&self) -> ResponseEnvelope {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ResponseEnvelope> {
        // A handler panicking mid-update leaves plain data behind, still usable.
        self.response.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("request_type", &self.request_type())
            .field("default_lang", &self.speech.default_lang())
            .finish()
    }
}
