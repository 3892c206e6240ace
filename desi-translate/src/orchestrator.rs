//! Translation orchestration
//!
//! Picks the provider for a request, runs it once, and turns the outcome
//! into either a [`TranslationResult`] or an [`ErrorInfo`]:
//!
//! - success: the provider's text, `succeeded = true`
//! - `NetworkError` / `Unknown`: a [`fallback`] placeholder, `succeeded = false`
//! - `AuthError` / `RateLimited`: the classified error, no text
//!
//! The orchestrator holds no per-call state. Callers run one call at a time
//! per session.

use tracing::{debug, info, warn};

use crate::chat_completion::ChatCompletionProvider;
use crate::classifier;
use crate::config::Config;
use crate::data::{TranslationRequest, TranslationResult};
use crate::error::{ErrorInfo, ProviderResult, SessionError};
use crate::fallback;
use crate::libretranslate::LibreTranslateProvider;
use crate::prompts::StyleDirective;
use crate::session::SessionState;
use crate::translator::{Route, TranslationProvider, route};

pub struct Orchestrator {
    generic_mt: Box<dyn TranslationProvider>,
    chat_completion: Box<dyn TranslationProvider>,
}

impl Orchestrator {
    pub fn new(
        generic_mt: impl TranslationProvider + 'static,
        chat_completion: impl TranslationProvider + 'static,
    ) -> Self {
        Self {
            generic_mt: Box::new(generic_mt),
            chat_completion: Box::new(chat_completion),
        }
    }

    /// Orchestrator over the LibreTranslate and chat-completion HTTP providers
    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        Ok(Self::new(
            LibreTranslateProvider::from_config(config)?,
            ChatCompletionProvider::from_config(config)?,
        ))
    }

    fn provider(&self, route: Route) -> &dyn TranslationProvider {
        match route {
            Route::GenericMt => self.generic_mt.as_ref(),
            Route::ChatCompletion => self.chat_completion.as_ref(),
        }
    }

    /// Translate one request
    ///
    /// Never panics; every failure ends in a fallback result or an `ErrorInfo`.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ErrorInfo> {
        let route = route(request.target());
        let style = match route {
            Route::ChatCompletion => StyleDirective::for_target(request.target()),
            Route::GenericMt => None,
        };
        let provider = self.provider(route);

        debug!(
            provider = provider.provider_name(),
            source = %request.source(),
            target = %request.target(),
            "dispatching translation"
        );

        match provider.call(request, style.as_ref()).await {
            Ok(text) => {
                info!(provider = provider.provider_name(), "translation succeeded");
                Ok(TranslationResult::live(text, route.provider_used()))
            }
            Err(error) => {
                let info = classifier::describe(&error);
                if info.kind.is_fallback_eligible() {
                    warn!(
                        provider = provider.provider_name(),
                        kind = %info.kind,
                        error = %error,
                        "provider failed, using mock fallback"
                    );
                    Ok(TranslationResult::fallback(fallback::generate(request)))
                } else {
                    warn!(
                        provider = provider.provider_name(),
                        kind = %info.kind,
                        error = %error,
                        "provider failed, surfacing error"
                    );
                    Err(info)
                }
            }
        }
    }

    /// Translate the session's current input and record the outcome
    ///
    /// A result (live or fallback) becomes the session's output and adds one
    /// history entry. A surfaced error leaves the session untouched so the
    /// caller can retry with the same input.
    pub async fn translate_session(
        &self,
        session: &mut SessionState,
    ) -> Result<TranslationResult, SessionError> {
        let request = session.request()?;
        let result = self.translate(&request).await?;
        session.apply_result(&request, &result);
        Ok(result)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("generic_mt", &self.generic_mt.provider_name())
            .field("chat_completion", &self.chat_completion.provider_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProviderUsed;
    use crate::error::{ErrorKind, ProviderError, RequestError};
    use crate::language::{LanguageCode, SourceLanguage};
    use crate::mock::{MockMode, MockProvider};

    fn status(code: u16) -> ProviderError {
        ProviderError::Status {
            status: code,
            body: String::new(),
        }
    }

    fn request(text: &str, target: LanguageCode) -> TranslationRequest {
        TranslationRequest::new(text, LanguageCode::English, target).unwrap()
    }

    #[tokio::test]
    async fn test_routes_plain_targets_to_generic_mt() {
        let generic = MockProvider::new(MockMode::Suffix);
        let chat = MockProvider::new(MockMode::Suffix);
        let orchestrator = Orchestrator::new(generic.clone(), chat.clone());

        for code in LanguageCode::SUPPORTED.iter().filter(|c| !c.is_stylized()) {
            let result = orchestrator.translate(&request("hello", code.clone())).await.unwrap();
            assert_eq!(result.provider_used, ProviderUsed::GenericMt);
        }
        assert_eq!(generic.calls(), 10);
        assert_eq!(chat.calls(), 0);
    }

    #[tokio::test]
    async fn test_routes_stylized_targets_to_chat_completion() {
        let generic = MockProvider::new(MockMode::Suffix);
        let chat = MockProvider::new(MockMode::Reply("Kya haal hai?".to_string()));
        let orchestrator = Orchestrator::new(generic.clone(), chat.clone());

        let result = orchestrator
            .translate(&request("How are you?", LanguageCode::Hinglish))
            .await
            .unwrap();
        assert_eq!(result.output_text, "Kya haal hai?");
        assert_eq!(result.provider_used, ProviderUsed::ChatCompletion);
        assert!(result.succeeded);

        orchestrator
            .translate(&request("How are you?", LanguageCode::Hyderabadi))
            .await
            .unwrap();
        assert_eq!(chat.calls(), 2);
        assert_eq!(generic.calls(), 0);
    }

    #[tokio::test]
    async fn test_network_error_falls_back() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Fail(ProviderError::Transport("refused".into()))),
            MockProvider::new(MockMode::Suffix),
        );
        let req = request("good morning", LanguageCode::Hindi);
        let result = orchestrator.translate(&req).await.unwrap();

        assert_eq!(result.provider_used, ProviderUsed::Fallback);
        assert!(!result.succeeded);
        assert_eq!(result.output_text, fallback::generate(&req));
        assert!(!result.output_text.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_error_falls_back() {
        for error in [
            status(500),
            ProviderError::MalformedResponse("no translatedText".into()),
        ] {
            let orchestrator = Orchestrator::new(
                MockProvider::new(MockMode::Fail(error)),
                MockProvider::new(MockMode::Suffix),
            );
            let result = orchestrator
                .translate(&request("hello", LanguageCode::Tamil))
                .await
                .unwrap();
            assert_eq!(result.provider_used, ProviderUsed::Fallback);
            assert_eq!(result.output_text, "[mock:ta] hello");
        }
    }

    #[tokio::test]
    async fn test_auth_error_surfaces() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Fail(status(401))),
            MockProvider::new(MockMode::Suffix),
        );
        let info = orchestrator
            .translate(&request("hello", LanguageCode::Hindi))
            .await
            .unwrap_err();
        assert_eq!(info.kind, ErrorKind::AuthError);
        assert!(!info.retryable);
    }

    #[tokio::test]
    async fn test_rate_limit_surfaces() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Suffix),
            MockProvider::new(MockMode::Fail(status(429))),
        );
        let info = orchestrator
            .translate(&request("hello", LanguageCode::Hinglish))
            .await
            .unwrap_err();
        assert_eq!(info.kind, ErrorKind::RateLimited);
        assert!(info.retryable);
    }

    #[tokio::test]
    async fn test_missing_credential_surfaces_as_auth_error() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Suffix),
            MockProvider::new(MockMode::Fail(ProviderError::MissingCredential(
                "OPENAI_API_KEY is not configured".into(),
            ))),
        );
        let info = orchestrator
            .translate(&request("hello", LanguageCode::Hyderabadi))
            .await
            .unwrap_err();
        assert_eq!(info.kind, ErrorKind::AuthError);
    }

    #[tokio::test]
    async fn test_session_auth_error_records_nothing() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Fail(status(401))),
            MockProvider::new(MockMode::Suffix),
        );
        let mut session = SessionState::new(LanguageCode::English, LanguageCode::Hindi);
        session.set_input_text("hello");

        let err = orchestrator.translate_session(&mut session).await.unwrap_err();
        match err {
            SessionError::Translation(info) => assert_eq!(info.kind, ErrorKind::AuthError),
            other => panic!("Expected Translation error, got {:?}", other),
        }
        assert!(session.history().is_empty());
        assert_eq!(session.input_text(), "hello");
        assert_eq!(session.output_text(), "");
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn test_session_fallback_records_entry() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Fail(ProviderError::Transport("timeout".into()))),
            MockProvider::new(MockMode::Suffix),
        );
        let mut session = SessionState::new(SourceLanguage::Auto, LanguageCode::Hindi);
        session.set_input_text("hello");

        let result = orchestrator.translate_session(&mut session).await.unwrap();
        assert_eq!(result.provider_used, ProviderUsed::Fallback);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].output, "[mock:hi] hello");
        assert_eq!(session.output_text(), "[mock:hi] hello");
    }

    #[tokio::test]
    async fn test_session_empty_input_is_not_dispatched() {
        let generic = MockProvider::new(MockMode::Suffix);
        let orchestrator = Orchestrator::new(generic.clone(), MockProvider::new(MockMode::Suffix));
        let mut session = SessionState::default();
        session.set_input_text("   ");

        let err = orchestrator.translate_session(&mut session).await.unwrap_err();
        assert_eq!(err, SessionError::Request(RequestError::EmptyInput));
        assert_eq!(generic.calls(), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_history_counts_completed_calls_across_swaps() {
        let orchestrator = Orchestrator::new(
            MockProvider::new(MockMode::Suffix),
            MockProvider::new(MockMode::Fail(ProviderError::Transport("down".into()))),
        );
        let mut session = SessionState::new(LanguageCode::English, LanguageCode::Hindi);
        session.set_input_text("one");

        for n in 1..=5 {
            if session.input_text().trim().is_empty() {
                session.set_input_text(format!("text {}", n));
            }
            orchestrator.translate_session(&mut session).await.unwrap();
            assert_eq!(session.history().len(), n);
            session = session.swap();
        }

        session.set_target(LanguageCode::Hinglish);
        session.set_input_text("six");
        let result = orchestrator.translate_session(&mut session).await.unwrap();
        assert_eq!(result.provider_used, ProviderUsed::Fallback);
        assert_eq!(session.history().len(), 6);
    }
}
