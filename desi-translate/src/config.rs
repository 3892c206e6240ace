//! Provider configuration read from the environment

use std::env;
use std::time::Duration;

fn default_libretranslate_url() -> String {
    "https://libretranslate.de/translate".to_string()
}

fn default_chat_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone)]
pub struct Config {
    pub libretranslate_url: String,
    pub libretranslate_api_key: Option<String>,
    pub chat_url: String,
    pub chat_model: String,
    /// Bearer credential for the chat-completion endpoint
    pub chat_api_key: Option<String>,
    pub chat_max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            libretranslate_url: default_libretranslate_url(),
            libretranslate_api_key: None,
            chat_url: default_chat_url(),
            chat_model: default_chat_model(),
            chat_api_key: None,
            chat_max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, defaulting anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            libretranslate_url: non_empty("LIBRETRANSLATE_URL")
                .unwrap_or_else(default_libretranslate_url),
            libretranslate_api_key: non_empty("LIBRETRANSLATE_API_KEY"),
            chat_url: non_empty("OPENAI_BASE_URL").unwrap_or_else(default_chat_url),
            chat_model: non_empty("OPENAI_MODEL").unwrap_or_else(default_chat_model),
            chat_api_key: non_empty("OPENAI_API_KEY"),
            chat_max_tokens: non_empty("CHAT_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_tokens),
            timeout_secs: non_empty("TRANSLATE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "***");
        f.debug_struct("Config")
            .field("libretranslate_url", &self.libretranslate_url)
            .field("libretranslate_api_key", &mask(&self.libretranslate_api_key))
            .field("chat_url", &self.chat_url)
            .field("chat_model", &self.chat_model)
            .field("chat_api_key", &mask(&self.chat_api_key))
            .field("chat_max_tokens", &self.chat_max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
