//! Inbound CEK request payload.
//!
//! Only the fields the skill reads are modelled; anything else in the payload
//! is ignored on deserialization. Apart from `request.type`, every field is
//! optional or defaulted so a sparse payload still reaches its handler.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClovaError, Result};

/// Request types defined by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Launch,
    Intent,
    SessionEnded,
    Event,
}

impl RequestType {
    /// Discriminator value of `request.type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Launch => "LaunchRequest",
            RequestType::Intent => "IntentRequest",
            RequestType::SessionEnded => "SessionEndedRequest",
            RequestType::Event => "EventRequest",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete request as posted by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<RequestContextInfo>,
    pub request: RequestBody,
}

impl RequestPayload {
    /// Read `request.type` without parsing the rest of the payload.
    pub fn peek_type(value: &Value) -> Result<&str> {
        value
            .get("request")
            .and_then(|r| r.get("type"))
            .and_then(Value::as_str)
            .ok_or_else(|| ClovaError::InvalidRequest("missing request.type".to_string()))
    }

    /// Parse a payload from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ClovaError::InvalidRequest(e.to_string()))
    }

    /// Value of `request.type`.
    #[inline]
    pub fn request_type(&self) -> &str {
        &self.request.request_type
    }
}

/// The `session` object of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: String,
    /// Attributes set by the previous response of this session. May be `null`.
    #[serde(default)]
    pub session_attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// User talking to the skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// The `context` object of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContextInfo {
    #[serde(rename = "System", default)]
    pub system: System,
}

/// `context.System`: application, device and user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub device: Option<Device>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Extension the request is addressed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

/// Client device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Value>,
}

/// The `request` object: discriminator plus type specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    /// Why the session ended (`SessionEndedRequest`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Intent of an `IntentRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    /// Filled slots. The platform sends `null` when there are none.
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

/// One filled slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Event of an `EventRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intent_json() -> Value {
        json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionAttributes": null,
                "sessionId": "a29cfead-c5ba-474d-8745-6c1a6625f0c5",
                "user": { "userId": "V0qe", "accessToken": "XHapQasdfsdfFsdfasdflQQ7" }
            },
            "context": {
                "System": {
                    "application": { "applicationId": "com.example.extension.pizzabot" },
                    "device": { "deviceId": "096e6b27-1717-33e9-b0a7-510a48658a9b", "display": { "size": "l100" } },
                    "user": { "userId": "V0qe" }
                }
            },
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "OrderPizza",
                    "slots": { "pizzaType": { "name": "pizzaType", "value": "pepperoni" } }
                }
            }
        })
    }

    #[test]
    fn test_peek_type() {
        let value = intent_json();
        assert_eq!(RequestPayload::peek_type(&value).unwrap(), "IntentRequest");
    }

    #[test]
    fn test_peek_type_missing() {
        let value = json!({ "request": {} });
        assert!(matches!(
            RequestPayload::peek_type(&value),
            Err(ClovaError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_parse_intent_request() {
        let payload = RequestPayload::from_value(intent_json()).unwrap();

        assert_eq!(payload.request_type(), RequestType::Intent.as_str());
        let session = payload.session.as_ref().unwrap();
        assert!(session.session_attributes.is_none());
        assert_eq!(session.user.as_ref().unwrap().user_id, "V0qe");

        let intent = payload.request.intent.as_ref().unwrap();
        assert_eq!(intent.name, "OrderPizza");
        assert_eq!(intent.slots.as_ref().unwrap()["pizzaType"].value, "pepperoni");

        let system = &payload.context.as_ref().unwrap().system;
        assert_eq!(
            system.application.as_ref().unwrap().application_id,
            "com.example.extension.pizzabot"
        );
    }

    #[test]
    fn test_parse_event_request() {
        let payload = RequestPayload::from_value(json!({
            "request": {
                "type": "EventRequest",
                "event": { "namespace": "ClovaSkill", "name": "SkillEnabled", "payload": null }
            }
        }))
        .unwrap();

        let event = payload.request.event.unwrap();
        assert_eq!(event.namespace, "ClovaSkill");
        assert_eq!(event.name, "SkillEnabled");
        assert!(payload.session.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = RequestPayload::from_value(json!({
            "request": { "type": "LaunchRequest", "extra": 1 },
            "unknown": true
        }))
        .unwrap();
        assert_eq!(payload.request_type(), "LaunchRequest");
    }

    #[test]
    fn test_sparse_payload_parses() {
        let payload = RequestPayload::from_value(json!({
            "session": { "user": {} },
            "context": { "System": { "application": {}, "device": {} } },
            "request": {
                "type": "IntentRequest",
                "intent": { "slots": { "city": { "value": "v" } } },
                "event": {}
            }
        }))
        .unwrap();

        let session = payload.session.as_ref().unwrap();
        assert_eq!(session.user.as_ref().unwrap().user_id, "");
        let intent = payload.request.intent.as_ref().unwrap();
        assert_eq!(intent.name, "");
        assert_eq!(intent.slots.as_ref().unwrap()["city"].value, "v");
        assert_eq!(payload.request.event.as_ref().unwrap().name, "");

        let no_system = RequestPayload::from_value(json!({
            "context": {},
            "request": { "type": "LaunchRequest" }
        }))
        .unwrap();
        assert_eq!(no_system.context.unwrap().system, System::default());
    }

    #[test]
    fn test_request_type_names() {
        assert_eq!(RequestType::Launch.to_string(), "LaunchRequest");
        assert_eq!(RequestType::SessionEnded.as_str(), "SessionEndedRequest");
        assert_eq!(RequestType::Event.as_str(), "EventRequest");
    }
}
