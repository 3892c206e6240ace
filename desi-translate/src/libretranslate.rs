//! Generic machine translation provider (LibreTranslate API)
//!
//! Sends `{ q, source, target, format: "text" }` and expects a single
//! `translatedText` field back. Any public or self-hosted LibreTranslate
//! instance works; keyed instances take an optional `api_key`.
//!
//! # Example
//!
//! ```ignore
//! use desi_translate::{Config, LibreTranslateProvider, TranslationProvider, TranslationRequest};
//!
//! let provider = LibreTranslateProvider::from_config(&Config::from_env())?;
//! let request = TranslationRequest::new("good morning", LanguageCode::English, LanguageCode::Hindi)?;
//! let text = provider.call(&request, None).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::data::TranslationRequest;
use crate::error::{ProviderError, ProviderResult};
use crate::language::SourceLanguage;
use crate::prompts::StyleDirective;
use crate::translator::TranslationProvider;

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// LibreTranslate provider
#[derive(Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    /// Create a provider for the given `/translate` endpoint
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: std::time::Duration,
    ) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        Self::new(
            config.libretranslate_url.clone(),
            config.libretranslate_api_key.clone(),
            config.timeout(),
        )
    }

    /// Source code as sent on the wire
    ///
    /// Stylized codes are not languages the MT engine knows, so they are
    /// sent as `auto`.
    fn wire_source(source: &SourceLanguage) -> &str {
        match source.code() {
            Some(code) if code.is_stylized() => "auto",
            _ => source.as_str(),
        }
    }

    /// Pull the translated text out of a response body
    fn parse_body(body: &[u8]) -> ProviderResult<String> {
        serde_json::from_slice::<TranslateResponse>(body)
            .map(|r| r.translated_text)
            .map_err(|e| {
                ProviderError::MalformedResponse(format!(
                    "expected a 'translatedText' field: {}",
                    e
                ))
            })
    }
}

impl std::fmt::Debug for LibreTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslateProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    async fn call(
        &self,
        request: &TranslationRequest,
        _style: Option<&StyleDirective>,
    ) -> ProviderResult<String> {
        let body = TranslateBody {
            q: request.input_text(),
            source: Self::wire_source(request.source()),
            target: request.target().as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!(
            endpoint = %self.endpoint,
            source = body.source,
            target = body.target,
            "sending machine translation request"
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        // The body shape is checked by parse_body; failing to read it at all is transport.
        let bytes = response.bytes().await.map_err(|e| {
            ProviderError::Transport(format!("failed to read response body: {}", e))
        })?;
        Self::parse_body(&bytes)
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}
