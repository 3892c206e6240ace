//! Request, result and history types shared by the orchestrator and session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::language::{LanguageCode, SourceLanguage};

/// One translation to perform
///
/// Fields are private so a request can only come from [`TranslationRequest::new`],
/// which rejects blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    input_text: String,
    source: SourceLanguage,
    target: LanguageCode,
}

impl TranslationRequest {
    pub fn new(
        input_text: impl Into<String>,
        source: impl Into<SourceLanguage>,
        target: LanguageCode,
    ) -> Result<Self, RequestError> {
        let input_text = input_text.into();
        if input_text.trim().is_empty() {
            return Err(RequestError::EmptyInput);
        }
        Ok(Self {
            input_text,
            source: source.into(),
            target,
        })
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn source(&self) -> &SourceLanguage {
        &self.source
    }

    pub fn target(&self) -> &LanguageCode {
        &self.target
    }
}

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderUsed {
    GenericMt,
    ChatCompletion,
    Fallback,
}

impl ProviderUsed {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderUsed::GenericMt => "generic-mt",
            ProviderUsed::ChatCompletion => "chat-completion",
            ProviderUsed::Fallback => "fallback",
        }
    }
}

/// Normalized outcome of an orchestration call that produced text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub output_text: String,
    pub provider_used: ProviderUsed,
    pub succeeded: bool,
}

impl TranslationResult {
    pub fn live(output_text: String, provider_used: ProviderUsed) -> Self {
        Self {
            output_text,
            provider_used,
            succeeded: true,
        }
    }

    pub fn fallback(output_text: String) -> Self {
        Self {
            output_text,
            provider_used: ProviderUsed::Fallback,
            succeeded: false,
        }
    }
}

/// A translation shown to the user during the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            timestamp: Utc::now(),
        }
    }
}
