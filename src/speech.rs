//! Speech values for the `outputSpeech` part of a response.
//!
//! [`SpeechBuilder`] creates [`SpeechInfo`] values. The language used for
//! plain text speech when none is given is a field of the builder, so every
//! skill carries its own default instead of sharing a global one.
//!
//! # Example
//!
//! ```
//! use clova_skill::speech::{SpeechBuilder, SpeechLang};
//!
//! let builder = SpeechBuilder::default();
//! let hello = builder.create_speech_text("こんにちは", None);
//! assert_eq!(hello.lang(), SpeechLang::Ja);
//!
//! let chime = builder.create_speech_url("https://example.com/chime.mp3");
//! assert_eq!(chime.lang(), SpeechLang::Unspecified);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClovaError;

/// Language of a speech value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeechLang {
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "en")]
    En,
    /// Empty language code, used by URL speech.
    #[serde(rename = "")]
    Unspecified,
}

impl SpeechLang {
    /// Language code as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechLang::Ja => "ja",
            SpeechLang::Ko => "ko",
            SpeechLang::En => "en",
            SpeechLang::Unspecified => "",
        }
    }
}

impl fmt::Display for SpeechLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeechLang {
    type Err = ClovaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" => Ok(SpeechLang::Ja),
            "ko" => Ok(SpeechLang::Ko),
            "en" => Ok(SpeechLang::En),
            "" => Ok(SpeechLang::Unspecified),
            _ => Err(ClovaError::InvalidLanguage(s.to_string())),
        }
    }
}

/// A single piece of speech: text to synthesize or an audio URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpeechInfo {
    PlainText { lang: SpeechLang, value: String },
    #[serde(rename = "URL")]
    Url { lang: SpeechLang, value: String },
}

impl SpeechInfo {
    /// Language of the speech.
    pub fn lang(&self) -> SpeechLang {
        match self {
            SpeechInfo::PlainText { lang, .. } | SpeechInfo::Url { lang, .. } => *lang,
        }
    }

    /// Text to read, or the URL to play.
    pub fn value(&self) -> &str {
        match self {
            SpeechInfo::PlainText { value, .. } | SpeechInfo::Url { value, .. } => value,
        }
    }
}

/// Detailed speech of a [`OutputSpeech::SpeechSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VerboseSpeech {
    SimpleSpeech { values: SpeechInfo },
    SpeechList { values: Vec<SpeechInfo> },
}

/// The `outputSpeech` object of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// One speech value.
    SimpleSpeech { values: SpeechInfo },
    /// Several speech values played in order.
    SpeechList { values: Vec<SpeechInfo> },
    /// A brief speech for screen devices plus the full speech.
    SpeechSet {
        brief: SpeechInfo,
        verbose: VerboseSpeech,
    },
}

/// Default language of [`SpeechBuilder::default`].
pub const DEFAULT_SPEECH_LANG: SpeechLang = SpeechLang::Ja;

/// Creates [`SpeechInfo`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechBuilder {
    default_lang: SpeechLang,
}

impl SpeechBuilder {
    /// Builder whose plain text speech defaults to `default_lang`.
    pub fn new(default_lang: SpeechLang) -> Self {
        Self { default_lang }
    }

    /// Plain text speech in `lang`, or in the default language if `None`.
    pub fn create_speech_text(&self, value: impl Into<String>, lang: Option<SpeechLang>) -> SpeechInfo {
        SpeechInfo::PlainText {
            lang: lang.unwrap_or(self.default_lang),
            value: value.into(),
        }
    }

    /// URL speech. The language is always empty.
    pub fn create_speech_url(&self, value: impl Into<String>) -> SpeechInfo {
        SpeechInfo::Url {
            lang: SpeechLang::Unspecified,
            value: value.into(),
        }
    }

    /// Language used when none is given.
    #[inline]
    pub fn default_lang(&self) -> SpeechLang {
        self.default_lang
    }

    /// Change the language used when none is given.
    pub fn set_default_lang(&mut self, lang: SpeechLang) {
        self.default_lang = lang;
    }
}

impl Default for SpeechBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SPEECH_LANG)
    }
}
