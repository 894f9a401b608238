//! Handler table for dispatching requests by request type.
//!
//! The table maps request type names (`LaunchRequest`, `IntentRequest`, ...)
//! to handlers. The first handler registered for a type is kept; later
//! registrations for the same type are refused and reported as
//! [`Registration::AlreadyRegistered`].
//!
//! # Example
//!
//! ```ignore
//! use clova_skill::handler::{HandlerTable, Registration};
//!
//! let mut table = HandlerTable::new();
//!
//! let first = table.register("LaunchRequest", |ctx| async move {
//!     ctx.end_session(false);
//!     Ok(())
//! });
//! assert_eq!(first, Registration::Registered);
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use super::Context;
use crate::error::BoxError;

/// Result type for handler functions.
pub type HandlerResult = std::result::Result<(), BoxError>;

/// Boxed future for handler results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for request handlers.
pub trait Handler: Send + Sync + 'static {
    /// Handle one request, writing the response into `ctx`.
    fn call(&self, ctx: Context) -> BoxFuture<'static, HandlerResult>;
}

/// Adapts an async closure to [`Handler`].
pub struct FnHandler<F, Fut>
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    handler: F,
    _phantom: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FnHandler<F, Fut>
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    /// Wrap `handler`.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut> Handler for FnHandler<F, Fut>
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, ctx: Context) -> BoxFuture<'static, HandlerResult> {
        Box::pin((self.handler)(ctx))
    }
}

/// Outcome of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Registration {
    /// The handler is now the one used for its request type.
    Registered,
    /// A handler was already registered; the new one was dropped.
    AlreadyRegistered,
}

impl Registration {
    /// Whether the handler was kept.
    pub fn is_registered(&self) -> bool {
        matches!(self, Registration::Registered)
    }
}

/// Table mapping request types to handlers.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an async closure for `request_type`.
    pub fn register<F, Fut>(&mut self, request_type: &str, handler: F) -> Registration
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_handler(request_type, Arc::new(FnHandler::new(handler)))
    }

    /// Register a handler object for `request_type`.
    pub fn register_handler(
        &mut self,
        request_type: &str,
        handler: Arc<dyn Handler>,
    ) -> Registration {
        if self.handlers.contains_key(request_type) {
            return Registration::AlreadyRegistered;
        }
        self.handlers.insert(request_type.to_string(), handler);
        Registration::Registered
    }

    /// Get the handler for a request type.
    pub fn get(&self, request_type: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(request_type).cloned()
    }

    /// Whether a handler exists for `request_type`.
    pub fn contains(&self, request_type: &str) -> bool {
        self.handlers.contains_key(request_type)
    }

    /// Registered request types, sorted.
    pub fn request_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.handlers.keys().cloned().collect();
        types.sort();
        types
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_handler() {
        let mut table = HandlerTable::new();
        assert!(table.get("LaunchRequest").is_none());

        let result = table.register("LaunchRequest", |_ctx| async { Ok(()) });

        assert_eq!(result, Registration::Registered);
        assert!(table.contains("LaunchRequest"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut table = HandlerTable::new();
        let first: Arc<dyn Handler> = Arc::new(FnHandler::new(|_ctx| async { Ok(()) }));
        let second: Arc<dyn Handler> = Arc::new(FnHandler::new(|_ctx| async { Ok(()) }));

        assert!(table
            .register_handler("LaunchRequest", first.clone())
            .is_registered());
        assert_eq!(
            table.register_handler("LaunchRequest", second.clone()),
            Registration::AlreadyRegistered
        );

        let kept = table.get("LaunchRequest").unwrap();
        assert!(Arc::ptr_eq(&kept, &first));
        assert!(!Arc::ptr_eq(&kept, &second));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_request_types_sorted() {
        let mut table = HandlerTable::new();
        let _ = table.register("SessionEndedRequest", |_ctx| async { Ok(()) });
        let _ = table.register("IntentRequest", |_ctx| async { Ok(()) });
        let _ = table.register("LaunchRequest", |_ctx| async { Ok(()) });

        assert_eq!(
            table.request_types(),
            vec!["IntentRequest", "LaunchRequest", "SessionEndedRequest"]
        );
    }

    #[test]
    fn test_handler_not_found() {
        let table = HandlerTable::new();

        assert!(table.is_empty());
        assert!(table.get("nonexistent").is_none());
    }

    #[tokio::test]
    async fn test_call_handler() {
        use crate::protocol::RequestPayload;
        use serde_json::json;

        let mut table = HandlerTable::new();
        let _ = table.register("LaunchRequest", |ctx: Context| async move {
            ctx.end_session(true);
            Ok(())
        });

        let payload =
            RequestPayload::from_value(json!({ "request": { "type": "LaunchRequest" } })).unwrap();
        let ctx = Context::new(payload);
        let handler = table.get("LaunchRequest").unwrap();

        handler.call(ctx.clone()).await.unwrap();
        assert!(ctx.response().response.should_end_session);
    }
}
