//! Prompt templates for the chat-completion provider

use crate::language::LanguageCode;

/// System message sent with every chat-completion request
pub const SYSTEM_TONE_CONVERSION: &str = "You are a helpful tone conversion assistant.";

/// Hinglish: romanized Hindi mixed with English, informal
pub const TONE_HINGLISH: &str =
    "Hinglish (informal colloquial register: Hindi written in Roman script, freely mixed with English)";

/// Hyderabadi: English in the Hyderabadi regional register
pub const TONE_HYDERABADI: &str =
    "Hyderabadi English (regionally accented English register with Hyderabadi Dakhini expressions)";

/// Register or dialect the chat model is asked to render text in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDirective(String);

impl StyleDirective {
    /// Directive for a stylized target, `None` for ordinary languages
    pub fn for_target(target: &LanguageCode) -> Option<Self> {
        match target {
            LanguageCode::Hinglish => Some(Self(TONE_HINGLISH.to_string())),
            LanguageCode::Hyderabadi => Some(Self(TONE_HYDERABADI.to_string())),
            _ => None,
        }
    }

    /// Plain translation directive, used when a non-stylized target reaches the chat model
    pub fn plain(target: &LanguageCode) -> Self {
        let name = target.label().unwrap_or(target.as_str());
        Self(format!("{} (translate the meaning faithfully)", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build the user message for a tone conversion
pub fn build_prompt(text: &str, style: &StyleDirective) -> String {
    format!(
        "Convert the following sentence to a {} tone:\n\"{}\"",
        style.as_str(),
        text
    )
}
