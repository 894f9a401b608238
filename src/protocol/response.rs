//! Outbound response envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEFAULT_RESPONSE_VERSION;
use crate::speech::OutputSpeech;

/// A complete response as returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default)]
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// The response produced when a handler sets nothing.
    pub fn skeleton(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            session_attributes: Map::new(),
            response: ResponseBody::default(),
        }
    }
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::skeleton(DEFAULT_RESPONSE_VERSION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default)]
    pub card: Map<String, Value>,
    #[serde(default)]
    pub directives: Vec<Value>,
    #[serde(default)]
    pub should_end_session: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
}

/// Speech played when the user stays silent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SpeechBuilder;
    use serde_json::json;

    #[test]
    fn test_skeleton_shape() {
        let envelope = ResponseEnvelope::default();

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "card": {},
                    "directives": [],
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_reprompt_shape() {
        let mut envelope = ResponseEnvelope::skeleton("1.0");
        envelope.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::SimpleSpeech {
                values: SpeechBuilder::default().create_speech_text("もしもし", None),
            },
        });

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["response"]["reprompt"]["outputSpeech"]["type"], "SimpleSpeech");
        assert_eq!(
            value["response"]["reprompt"]["outputSpeech"]["values"]["value"],
            "もしもし"
        );
    }

    #[test]
    fn test_deserialize_minimal() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "response": {}
        }))
        .unwrap();
        assert_eq!(envelope, ResponseEnvelope::default());
    }
}
