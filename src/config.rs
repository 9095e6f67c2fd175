use crate::i18n::Language;
use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// OpenRouter API key.
    pub openrouter_api_key: Option<String>,
    /// Gemini API key.
    pub gemini_api_key: Option<String>,
    /// Default number of candles per timeframe in a dataset.
    pub default_candle_count: usize,
    /// Timeout for LLM completion requests (seconds).
    pub llm_timeout_secs: u64,
    /// Language used when a request does not specify one.
    pub default_language: Language,
}

/// Hard cap on candles per timeframe; prompts get unwieldy past this.
pub const MAX_CANDLE_COUNT: usize = 500;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        let default_candle_count = env::var("CANDLE_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50)
            .clamp(1, MAX_CANDLE_COUNT);

        let default_language = env::var("DEFAULT_LANGUAGE")
            .ok()
            .and_then(|v| Language::from_code(&v))
            .unwrap_or(Language::En);

        Self {
            host,
            port,
            openrouter_api_key: env::var("OPENROUTER_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            default_candle_count,
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            default_language,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
