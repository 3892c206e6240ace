//! Translation orchestration for Desi Translate
//!
//! This crate decides which provider handles a translation, shapes the
//! request for it, classifies failures, and substitutes a deterministic
//! placeholder when a provider cannot be reached.
//!
//! # Overview
//!
//! 1. **Providers** - a LibreTranslate-style machine translation endpoint for
//!    ordinary languages, and a chat-completion endpoint for the stylized
//!    targets (Hinglish, Hyderabadi English)
//! 2. **Classifier** - maps HTTP status / transport failures to an [`ErrorKind`]
//! 3. **Fallback** - pure placeholder generator used for network and unknown failures
//! 4. **Orchestrator** - routing, the single provider call, and the fallback policy
//! 5. **Session** - language pair, current text, last result and history
//!
//! # Example
//!
//! ```ignore
//! use desi_translate::{Config, LanguageCode, Orchestrator, SessionState, SourceLanguage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_config(&Config::from_env())?;
//!
//!     let mut session = SessionState::new(SourceLanguage::Auto, LanguageCode::Hindi);
//!     session.set_input_text("good morning");
//!     let result = orchestrator.translate_session(&mut session).await?;
//!
//!     println!("{} ({})", result.output_text, result.provider_used.as_str());
//!     Ok(())
//! }
//! ```

pub mod chat_completion;
pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod fallback;
pub mod language;
pub mod libretranslate;
pub mod mock;
pub mod orchestrator;
pub mod prompts;
pub mod session;
pub mod translator;


pub use chat_completion::ChatCompletionProvider;
pub use classifier::{classify, describe};
pub use config::Config;
pub use data::{HistoryEntry, ProviderUsed, TranslationRequest, TranslationResult};
pub use error::{
    ErrorInfo, ErrorKind, ProviderError, ProviderResult, RequestError, SessionError,
};
pub use fallback::generate;
pub use language::{LanguageCode, SourceLanguage};
pub use libretranslate::LibreTranslateProvider;
pub use mock::{MockMode, MockProvider};
pub use orchestrator::Orchestrator;
pub use prompts::StyleDirective;
pub use session::SessionState;
pub use translator::{Route, TranslationProvider, route};
