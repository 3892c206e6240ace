//! Language codes understood by the translator
//!
//! Besides the ordinary languages offered in the UI there are two stylized
//! pseudo-codes, `hinglish` and `hyderabadi`. They denote a register or
//! dialect rather than a language and are handled by the chat-completion
//! provider instead of plain machine translation.

use std::fmt;
use std::str::FromStr;

use icu_locale::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Target language of a translation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageCode {
    English,
    Hindi,
    Urdu,
    Telugu,
    Tamil,
    Malayalam,
    Marathi,
    Bengali,
    Gujarati,
    Kannada,
    /// Casual Hindi written in Roman script, mixed with English
    Hinglish,
    /// English in the Hyderabadi regional register
    Hyderabadi,
    /// Any other well-formed language tag, passed through to the MT endpoint
    Other(String),
}

impl LanguageCode {
    /// Codes offered in the language pickers, in display order
    pub const SUPPORTED: [LanguageCode; 12] = [
        LanguageCode::English,
        LanguageCode::Hindi,
        LanguageCode::Urdu,
        LanguageCode::Telugu,
        LanguageCode::Tamil,
        LanguageCode::Malayalam,
        LanguageCode::Marathi,
        LanguageCode::Bengali,
        LanguageCode::Gujarati,
        LanguageCode::Kannada,
        LanguageCode::Hinglish,
        LanguageCode::Hyderabadi,
    ];

    /// Parse a user supplied code
    ///
    /// Accepts the stylized names, the known ISO 639-1 codes (a region or
    /// script subtag is dropped, so `hi-IN` is Hindi), and any other
    /// well-formed BCP 47 tag as [`LanguageCode::Other`].
    pub fn parse(code: &str) -> Result<Self, RequestError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(RequestError::InvalidLanguage(String::new()));
        }
        match code.to_ascii_lowercase().as_str() {
            "hinglish" => return Ok(LanguageCode::Hinglish),
            "hyderabadi" => return Ok(LanguageCode::Hyderabadi),
            _ => {}
        }

        let langid = LanguageIdentifier::from_str(code)
            .map_err(|_| RequestError::InvalidLanguage(code.to_string()))?;
        let language = langid.language.as_str();
        if language == "und" {
            return Err(RequestError::InvalidLanguage(code.to_string()));
        }

        Ok(Self::from_iso(language).unwrap_or_else(|| LanguageCode::Other(langid.to_string())))
    }

    fn from_iso(language: &str) -> Option<Self> {
        let code = match language {
            "en" => LanguageCode::English,
            "hi" => LanguageCode::Hindi,
            "ur" => LanguageCode::Urdu,
            "te" => LanguageCode::Telugu,
            "ta" => LanguageCode::Tamil,
            "ml" => LanguageCode::Malayalam,
            "mr" => LanguageCode::Marathi,
            "bn" => LanguageCode::Bengali,
            "gu" => LanguageCode::Gujarati,
            "kn" => LanguageCode::Kannada,
            _ => return None,
        };
        Some(code)
    }

    pub fn as_str(&self) -> &str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Hindi => "hi",
            LanguageCode::Urdu => "ur",
            LanguageCode::Telugu => "te",
            LanguageCode::Tamil => "ta",
            LanguageCode::Malayalam => "ml",
            LanguageCode::Marathi => "mr",
            LanguageCode::Bengali => "bn",
            LanguageCode::Gujarati => "gu",
            LanguageCode::Kannada => "kn",
            LanguageCode::Hinglish => "hinglish",
            LanguageCode::Hyderabadi => "hyderabadi",
            LanguageCode::Other(tag) => tag,
        }
    }

    /// Display name, `None` for tags outside the supported list
    pub fn label(&self) -> Option<&'static str> {
        let label = match self {
            LanguageCode::English => "English",
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Urdu => "Urdu",
            LanguageCode::Telugu => "Telugu",
            LanguageCode::Tamil => "Tamil",
            LanguageCode::Malayalam => "Malayalam",
            LanguageCode::Marathi => "Marathi",
            LanguageCode::Bengali => "Bengali",
            LanguageCode::Gujarati => "Gujarati",
            LanguageCode::Kannada => "Kannada",
            LanguageCode::Hinglish => "Hinglish",
            LanguageCode::Hyderabadi => "Hyderabadi English",
            LanguageCode::Other(_) => return None,
        };
        Some(label)
    }

    /// True for the register/dialect pseudo-codes
    pub fn is_stylized(&self) -> bool {
        matches!(self, LanguageCode::Hinglish | LanguageCode::Hyderabadi)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.as_str().to_string()
    }
}

/// Source side of a language pair: a concrete language or auto-detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceLanguage {
    Auto,
    Code(LanguageCode),
}

impl SourceLanguage {
    pub fn parse(code: &str) -> Result<Self, RequestError> {
        if code.trim().eq_ignore_ascii_case("auto") {
            Ok(SourceLanguage::Auto)
        } else {
            LanguageCode::parse(code).map(SourceLanguage::Code)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceLanguage::Auto => "auto",
            SourceLanguage::Code(code) => code.as_str(),
        }
    }

    pub fn code(&self) -> Option<&LanguageCode> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Code(code) => Some(code),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceLanguage {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SourceLanguage {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SourceLanguage> for String {
    fn from(source: SourceLanguage) -> Self {
        source.as_str().to_string()
    }
}

impl From<LanguageCode> for SourceLanguage {
    fn from(code: LanguageCode) -> Self {
        SourceLanguage::Code(code)
    }
}
