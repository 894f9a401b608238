//! Protocol module - the JSON documents exchanged with the platform.
//!
//! - [`RequestPayload`] - inbound request, discriminated by `request.type`
//! - [`ResponseEnvelope`] - outbound response built from a handler's context

mod request;
mod response;

pub use request::{
    Application, Device, Event, Intent, RequestBody, RequestContextInfo, RequestPayload,
    RequestType, Session, Slot, System, User,
};
pub use response::{Reprompt, ResponseBody, ResponseEnvelope};
