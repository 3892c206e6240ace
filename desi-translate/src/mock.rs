//! Scripted translation provider
//!
//! Stands in for either HTTP adapter when there is no network or API key:
//! in tests, and behind the CLI's `--mock` flag.
//!
//! # Example
//!
//! ```ignore
//! use desi_translate::{MockMode, MockProvider, TranslationProvider};
//!
//! let mock = MockProvider::new(MockMode::Suffix);
//! let result = mock.call(&request, None).await?; // "hello_hi"
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::data::TranslationRequest;
use crate::error::{ProviderError, ProviderResult};
use crate::prompts::StyleDirective;
use crate::translator::TranslationProvider;

/// How the mock answers
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_hi"
    Suffix,

    /// Always answer with the same text
    Reply(String),

    /// (lowercased text, target code) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with this error
    Fail(ProviderError),
}

impl MockMode {
    /// A handful of common phrases with real translations, suffix for the rest
    pub fn phrasebook() -> Self {
        let entries = [
            ("good morning", "hi", "शुभ प्रभात"),
            ("good morning", "te", "శుభోదయం"),
            ("good morning", "ta", "காலை வணக்கம்"),
            ("thank you", "hi", "धन्यवाद"),
            ("how are you?", "hinglish", "Kaise ho?"),
            ("how are you?", "hyderabadi", "Kaisa hai miyan?"),
        ];
        MockMode::Mappings(
            entries
                .into_iter()
                .map(|(text, target, out)| ((text.to_string(), target.to_string()), out.to_string()))
                .collect(),
        )
    }
}

/// Mock provider with a shared call counter
///
/// Clones share the counter, so a test can keep a handle after moving the
/// provider into an orchestrator.
#[derive(Debug, Clone)]
pub struct MockProvider {
    mode: MockMode,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn apply(&self, text: &str, target: &str) -> ProviderResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Reply(reply) => Ok(reply.clone()),
            MockMode::Mappings(map) => {
                let key = (text.trim().to_lowercase(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Fail(error) => Err(error.clone()),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn call(
        &self,
        request: &TranslationRequest,
        _style: Option<&StyleDirective>,
    ) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply(request.input_text(), request.target().as_str())
    }

    fn provider_name(&self) -> &str {
        "Mock Provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageCode, SourceLanguage};

    fn request(text: &str) -> TranslationRequest {
        TranslationRequest::new(text, SourceLanguage::Auto, LanguageCode::Hindi).unwrap()
    }

    #[tokio::test]
    async fn test_suffix() {
        let mock = MockProvider::new(MockMode::Suffix);
        assert_eq!(mock.call(&request("hello"), None).await.unwrap(), "hello_hi");
    }

    #[tokio::test]
    async fn test_reply() {
        let mock = MockProvider::new(MockMode::Reply("नमस्ते".to_string()));
        assert_eq!(mock.call(&request("hello"), None).await.unwrap(), "नमस्ते");
    }

    #[tokio::test]
    async fn test_mappings_with_suffix_fallback() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "hi".to_string()),
            "namaste".to_string(),
        );
        let mock = MockProvider::new(MockMode::Mappings(map));
        assert_eq!(mock.call(&request("hello"), None).await.unwrap(), "namaste");
        assert_eq!(mock.call(&request("bye"), None).await.unwrap(), "bye_hi");
    }

    #[tokio::test]
    async fn test_fail() {
        let mock = MockProvider::new(MockMode::Fail(ProviderError::Transport(
            "connection refused".to_string(),
        )));
        let result = mock.call(&request("hello"), None).await;
        assert_eq!(
            result,
            Err(ProviderError::Transport("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_phrasebook() {
        let mock = MockProvider::new(MockMode::phrasebook());
        assert_eq!(
            mock.call(&request("good morning"), None).await.unwrap(),
            "शुभ प्रभात"
        );
        assert_eq!(mock.call(&request("see you"), None).await.unwrap(), "see you_hi");

        let hinglish =
            TranslationRequest::new("How are you?", SourceLanguage::Auto, LanguageCode::Hinglish)
                .unwrap();
        assert_eq!(mock.call(&hinglish, None).await.unwrap(), "Kaise ho?");
    }

    #[tokio::test]
    async fn test_counter_shared_between_clones() {
        let mock = MockProvider::new(MockMode::Suffix);
        let handle = mock.clone();
        mock.call(&request("a"), None).await.unwrap();
        mock.call(&request("b"), None).await.unwrap();
        assert_eq!(handle.calls(), 2);
    }
}
