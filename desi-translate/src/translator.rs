//! Provider trait and routing
//!
//! Both HTTP adapters (and the scripted [`MockProvider`](crate::mock::MockProvider))
//! implement [`TranslationProvider`]. Which one a request goes to is decided
//! by [`route`], a pure function of the target language.
//!
//! # Example
//!
//! ```ignore
//! use desi_translate::{LanguageCode, Route, route};
//!
//! assert_eq!(route(&LanguageCode::Hindi), Route::GenericMt);
//! assert_eq!(route(&LanguageCode::Hinglish), Route::ChatCompletion);
//! ```

use async_trait::async_trait;

use crate::data::{ProviderUsed, TranslationRequest};
use crate::error::ProviderResult;
use crate::language::LanguageCode;
use crate::prompts::StyleDirective;

/// Generic trait for translation providers
///
/// Implementations are stateless per call and never retry; a failed call
/// returns the raw [`ProviderError`](crate::error::ProviderError) for the
/// orchestrator to classify.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate one request
    ///
    /// # Arguments
    ///
    /// * `request` - The validated request
    /// * `style` - Register/dialect directive for stylized targets, ignored by
    ///   plain machine translation
    async fn call(
        &self,
        request: &TranslationRequest,
        style: Option<&StyleDirective>,
    ) -> ProviderResult<String>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

/// The adapter a request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    GenericMt,
    ChatCompletion,
}

impl Route {
    pub fn provider_used(self) -> ProviderUsed {
        match self {
            Route::GenericMt => ProviderUsed::GenericMt,
            Route::ChatCompletion => ProviderUsed::ChatCompletion,
        }
    }
}

/// Pick the adapter for a target language
pub fn route(target: &LanguageCode) -> Route {
    if target.is_stylized() {
        Route::ChatCompletion
    } else {
        Route::GenericMt
    }
}
