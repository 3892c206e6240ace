//! Per-session translator state
//!
//! The UI edits the input text and the language pickers directly. The
//! output, the last result and the history only change when an
//! orchestration result is applied (see
//! [`Orchestrator::translate_session`](crate::orchestrator::Orchestrator::translate_session))
//! or through [`SessionState::swap`].

use crate::data::{HistoryEntry, TranslationRequest, TranslationResult};
use crate::error::RequestError;
use crate::language::{LanguageCode, SourceLanguage};

/// Target chosen when a swap would otherwise make `auto` the target
pub const DEFAULT_TARGET: LanguageCode = LanguageCode::English;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    source: SourceLanguage,
    target: LanguageCode,
    input_text: String,
    output_text: String,
    last_result: Option<TranslationResult>,
    history: Vec<HistoryEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SourceLanguage::Auto, DEFAULT_TARGET)
    }
}

impl SessionState {
    pub fn new(source: impl Into<SourceLanguage>, target: LanguageCode) -> Self {
        Self {
            source: source.into(),
            target,
            input_text: String::new(),
            output_text: String::new(),
            last_result: None,
            history: Vec::new(),
        }
    }

    pub fn source(&self) -> &SourceLanguage {
        &self.source
    }

    pub fn target(&self) -> &LanguageCode {
        &self.target
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    /// Translations shown so far, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_source(&mut self, source: impl Into<SourceLanguage>) {
        self.source = source.into();
    }

    pub fn set_target(&mut self, target: LanguageCode) {
        self.target = target;
    }

    /// Request for the current input and language pair
    pub fn request(&self) -> Result<TranslationRequest, RequestError> {
        TranslationRequest::new(
            self.input_text.clone(),
            self.source.clone(),
            self.target.clone(),
        )
    }

    /// Record a result that was shown to the user
    pub(crate) fn apply_result(&mut self, request: &TranslationRequest, result: &TranslationResult) {
        self.output_text = result.output_text.clone();
        self.last_result = Some(result.clone());
        self.history
            .push(HistoryEntry::new(request.input_text(), &result.output_text));
    }

    /// Exchange the language pair and move the output into the input
    ///
    /// Text only moves forward: swapping twice restores the languages but
    /// leaves an empty input, since the first swap cleared the output.
    /// History is untouched. An `auto` source cannot become a target, so in
    /// that case the new target is [`DEFAULT_TARGET`].
    pub fn swap(self) -> Self {
        let new_target = match self.source {
            SourceLanguage::Auto => DEFAULT_TARGET,
            SourceLanguage::Code(code) => code,
        };
        Self {
            source: SourceLanguage::Code(self.target),
            target: new_target,
            input_text: self.output_text,
            output_text: String::new(),
            last_result: self.last_result,
            history: self.history,
        }
    }
}
