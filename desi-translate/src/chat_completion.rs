//! Chat-completion provider for stylized targets
//!
//! Renders text into a register such as Hinglish by asking an OpenAI-style
//! `/chat/completions` endpoint, then returns the first choice's message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::data::TranslationRequest;
use crate::error::{ProviderError, ProviderResult};
use crate::prompts::{self, StyleDirective};
use crate::translator::TranslationProvider;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

pub struct ChatCompletionProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: Option<String>,
}

impl ChatCompletionProvider {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
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
            model: model.into(),
            max_tokens,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        Self::new(
            config.chat_url.clone(),
            config.chat_model.clone(),
            config.chat_max_tokens,
            config.chat_api_key.clone(),
            config.timeout(),
        )
    }

    fn build_request(&self, text: &str, style: &StyleDirective) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompts::SYSTEM_TONE_CONVERSION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompts::build_prompt(text, style),
                },
            ],
            max_tokens: self.max_tokens,
        }
    }

    /// Text of the first choice, trimmed
    fn parse_body(body: &[u8]) -> ProviderResult<String> {
        let response: ChatResponse = serde_json::from_slice(body)
            .map_err(|e| ProviderError::MalformedResponse(format!("Response parse error: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| ProviderError::MalformedResponse("response has no choices".to_string()))
    }
}

impl std::fmt::Debug for ChatCompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionProvider")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for ChatCompletionProvider {
    async fn call(
        &self,
        request: &TranslationRequest,
        style: Option<&StyleDirective>,
    ) -> ProviderResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::MissingCredential("OPENAI_API_KEY is not configured".to_string())
        })?;

        let style = style
            .cloned()
            .unwrap_or_else(|| StyleDirective::plain(request.target()));

        let body = self.build_request(request.input_text(), &style);
        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            target = %request.target(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
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
        "Chat Completion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageCode, SourceLanguage};
    use std::time::Duration;

    fn provider(api_key: Option<&str>) -> ChatCompletionProvider {
        ChatCompletionProvider::new(
            "http://127.0.0.1:9/v1/chat/completions",
            "gpt-3.5-turbo",
            100,
            api_key.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_build_request_shape() {
        let style = StyleDirective::for_target(&LanguageCode::Hinglish).unwrap();
        let body = provider(Some("k")).build_request("How are you?", &style);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(
            json["messages"][0]["content"],
            prompts::SYSTEM_TONE_CONVERSION
        );
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(
            json["messages"][1]["content"],
            prompts::build_prompt("How are you?", &style)
        );
    }

    #[test]
    fn test_parse_body_first_choice_trimmed() {
        let body = br#"{"choices":[
            {"message":{"role":"assistant","content":"  Kaise ho?\n"}},
            {"message":{"role":"assistant","content":"second"}}
        ]}"#;
        assert_eq!(ChatCompletionProvider::parse_body(body).unwrap(), "Kaise ho?");
    }

    #[test]
    fn test_parse_body_without_choices() {
        let result = ChatCompletionProvider::parse_body(br#"{"choices":[]}"#);
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));

        let result = ChatCompletionProvider::parse_body(br#"{"id":"x"}"#);
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_missing_credential_detected_before_dispatch() {
        let request = TranslationRequest::new(
            "How are you?",
            SourceLanguage::Auto,
            LanguageCode::Hinglish,
        )
        .unwrap();
        let style = StyleDirective::for_target(request.target());
        let result = provider(None).call(&request, style.as_ref()).await;
        assert!(matches!(result, Err(ProviderError::MissingCredential(_))));
    }

    #[test]
    fn test_debug_output() {
        let debug_str = format!("{:?}", provider(Some("sk-secret")));
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("sk-secret"));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(provider(None).provider_name(), "Chat Completion");
    }
}
