//! Handler module - request handling and dispatch.
//!
//! Provides:
//! - [`HandlerTable`] - maps request types to handlers
//! - [`Context`] - lets handlers read the request and build the response
//!
//! # Example
//!
//! ```ignore
//! use clova_skill::handler::{Context, HandlerTable};
//!
//! let mut table = HandlerTable::new();
//!
//! let _ = table.register("LaunchRequest", |ctx: Context| async move {
//!     let speech = ctx.speech().create_speech_text("こんにちは", None);
//!     ctx.set_simple_speech(speech);
//!     Ok(())
//! });
//! ```

mod context;
mod registry;

pub use context::Context;
pub use registry::{BoxFuture, FnHandler, Handler, HandlerResult, HandlerTable, Registration};
