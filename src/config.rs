//! Skill-level settings shared by every request.

use serde::Deserialize;

use crate::speech::{SpeechBuilder, SpeechLang, DEFAULT_SPEECH_LANG};

/// Protocol version written to every response.
pub const DEFAULT_RESPONSE_VERSION: &str = "1.0";

/// Settings for a skill.
///
/// Set through the configurator's fluent methods, or deserialized from the
/// host application's own configuration:
///
/// ```
/// use clova_skill::config::SkillConfig;
/// use clova_skill::speech::SpeechLang;
///
/// let config: SkillConfig = serde_json::from_str(r#"{ "default_lang": "en" }"#).unwrap();
/// assert_eq!(config.default_lang, SpeechLang::En);
/// assert_eq!(config.response_version, "1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Language for plain text speech created without one.
    pub default_lang: SpeechLang,
    /// Value of the `version` field of responses.
    pub response_version: String,
}

impl SkillConfig {
    /// Speech builder honouring `default_lang`.
    pub fn speech_builder(&self) -> SpeechBuilder {
        SpeechBuilder::new(self.default_lang)
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_SPEECH_LANG,
            response_version: DEFAULT_RESPONSE_VERSION.to_string(),
        }
    }
}
