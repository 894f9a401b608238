//! Skill configurator and request dispatch.
//!
//! The [`SkillConfigurator`] provides a fluent API for registering handlers
//! and producing adapters. Every adapter holds a [`Skill`], which dispatches
//! one request at a time:
//! 1. Read `request.type` from the payload
//! 2. Look up the handler for that type
//! 3. Build a fresh [`Context`] and run the handler to completion
//! 4. Return the response the handler left in the context
//!
//! # Example
//!
//! ```ignore
//! use clova_skill::SkillConfigurator;
//!
//! let router = axum::Router::new().route(
//!     "/clova",
//!     SkillConfigurator::new()
//!         .on_launch_request(|ctx| async move {
//!             let speech = ctx.speech().create_speech_text("こんにちは", None);
//!             ctx.set_simple_speech(speech);
//!             Ok(())
//!         })
//!         .handle(),
//! );
//! ```

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::adapter::{firebase, http, LambdaHandler};
use crate::config::SkillConfig;
use crate::error::{ClovaError, Result};
use crate::handler::{Context, Handler, HandlerResult, HandlerTable, Registration};
use crate::protocol::{RequestPayload, RequestType, ResponseEnvelope};
use crate::speech::SpeechLang;

struct SkillInner {
    table: RwLock<HandlerTable>,
    config: RwLock<SkillConfig>,
}

/// Shared handle to a skill's handler table and settings.
///
/// Cloning is cheap. Clones observe the same table, so handlers registered
/// after an adapter was produced are still dispatched to.
#[derive(Clone)]
pub struct Skill {
    inner: Arc<SkillInner>,
}

impl Skill {
    fn new(config: SkillConfig) -> Self {
        Self {
            inner: Arc::new(SkillInner {
                table: RwLock::new(HandlerTable::new()),
                config: RwLock::new(config),
            }),
        }
    }

    fn table(&self) -> RwLockReadGuard<'_, HandlerTable> {
        self.inner.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn table_mut(&self) -> RwLockWriteGuard<'_, HandlerTable> {
        self.inner.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn config_mut(&self) -> RwLockWriteGuard<'_, SkillConfig> {
        self.inner.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current settings.
    pub fn config(&self) -> SkillConfig {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the handler registered for a request type.
    pub fn handler(&self, request_type: &str) -> Option<Arc<dyn Handler>> {
        self.table().get(request_type)
    }

    /// Dispatch a raw JSON payload.
    ///
    /// Fails with [`ClovaError::HandlerNotFound`] before parsing the rest of
    /// the payload if no handler matches `request.type`.
    pub async fn dispatch(&self, payload: Value) -> Result<ResponseEnvelope> {
        let request_type = RequestPayload::peek_type(&payload)?.to_string();
        let handler = self
            .handler(&request_type)
            .ok_or_else(|| ClovaError::HandlerNotFound(request_type.clone()))?;

        let request = RequestPayload::from_value(payload)?;
        self.run(handler, request).await
    }

    /// Dispatch an already parsed payload.
    pub async fn dispatch_request(&self, request: RequestPayload) -> Result<ResponseEnvelope> {
        let handler = self
            .handler(request.request_type())
            .ok_or_else(|| ClovaError::HandlerNotFound(request.request_type().to_string()))?;

        self.run(handler, request).await
    }

    async fn run(
        &self,
        handler: Arc<dyn Handler>,
        request: RequestPayload,
    ) -> Result<ResponseEnvelope> {
        let ctx = Context::with_config(request, &self.config());
        let request_type = ctx.request_type().to_string();

        tracing::debug!(
            request_type = %request_type,
            session_id = ctx.session_id().unwrap_or_default(),
            "Dispatching request"
        );

        handler
            .call(ctx.clone())
            .await
            .map_err(|source| ClovaError::HandlerExecution {
                request_type,
                source,
            })?;

        Ok(ctx.response())
    }
}

/// Builder for registering handlers and producing adapters.
///
/// Registration keeps the first handler for each request type. The fluent
/// `on*` methods ignore duplicates (with a warning); use
/// [`register`](Self::register) to observe the outcome.
pub struct SkillConfigurator {
    skill: Skill,
}

impl SkillConfigurator {
    /// Create a configurator with default settings.
    pub fn new() -> Self {
        Self::with_config(SkillConfig::default())
    }

    /// Create a configurator with explicit settings.
    pub fn with_config(config: SkillConfig) -> Self {
        Self {
            skill: Skill::new(config),
        }
    }

    /// Register a handler and report whether it was kept.
    pub fn register<F, Fut>(&self, request_type: &str, handler: F) -> Registration
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let mut table = self.skill.table_mut();
        let outcome = table.register(request_type, handler);
        match outcome {
            Registration::Registered => {
                tracing::debug!(request_type, handlers = table.len(), "Handler registered");
            }
            Registration::AlreadyRegistered => {
                tracing::warn!(
                    request_type,
                    "Handler already registered, keeping the first one"
                );
            }
        }
        outcome
    }

    /// Register a handler for any request type.
    pub fn on<F, Fut>(self, request_type: &str, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let _ = self.register(request_type, handler);
        self
    }

    /// Register the `LaunchRequest` handler.
    pub fn on_launch_request<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(RequestType::Launch.as_str(), handler)
    }

    /// Register the `IntentRequest` handler.
    pub fn on_intent_request<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(RequestType::Intent.as_str(), handler)
    }

    /// Register the `SessionEndedRequest` handler.
    pub fn on_session_ended_request<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(RequestType::SessionEnded.as_str(), handler)
    }

    /// Register the `EventRequest` handler.
    pub fn on_event_request<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.on(RequestType::Event.as_str(), handler)
    }

    /// Set the language of plain text speech created without one.
    ///
    /// Default: `ja`
    pub fn default_lang(self, lang: SpeechLang) -> Self {
        self.skill.config_mut().default_lang = lang;
        self
    }

    /// Set the `version` field written to responses.
    ///
    /// Default: `1.0`
    pub fn response_version(self, version: impl Into<String>) -> Self {
        self.skill.config_mut().response_version = version.into();
        self
    }

    /// Whether a handler exists for `request_type`.
    pub fn is_registered(&self, request_type: &str) -> bool {
        self.skill.table().contains(request_type)
    }

    /// Get the handler registered for a request type.
    pub fn handler(&self, request_type: &str) -> Option<Arc<dyn Handler>> {
        self.skill.handler(request_type)
    }

    /// Registered request types, sorted.
    pub fn registered_types(&self) -> Vec<String> {
        let table = self.skill.table();
        if table.is_empty() {
            return Vec::new();
        }
        table.request_types()
    }

    /// Shared handle used by the adapters.
    pub fn skill(&self) -> Skill {
        self.skill.clone()
    }

    /// HTTP handler, mountable on any axum route.
    pub fn handle<S>(&self) -> axum::routing::MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        http::method_router(self.skill())
    }

    /// HTTP handler for a Cloud Functions for Firebase HTTPS trigger.
    pub fn firebase<S>(&self) -> axum::routing::MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        firebase::method_router(self.skill())
    }

    /// Function handler taking the payload directly.
    pub fn lambda(&self) -> LambdaHandler {
        LambdaHandler::new(self.skill())
    }
}

impl Default for SkillConfigurator {
    fn default() -> Self {
        Self::new()
    }
}
