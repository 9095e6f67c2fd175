//! OpenRouter chat-completions client.

use crate::error::{AppError, Result};
use crate::llm::EMPTY_COMPLETION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "openai/gpt-4o";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.1;

const SYSTEM_PROMPT: &str = "You are an expert trading analyst. Provide clear, actionable trading recommendations based on the candlestick data provided. Include confidence level, signal type (buy/sell/hold), and reasoning. Always respond in the language requested by the user.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// OpenRouter REST client.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
}

impl OpenRouterClient {
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Augur/1.0 (Trading Signal Service)")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// One chat completion, awaited to completion. No streaming, no retry.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::MissingApiKey("OpenRouter"))?;

        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        info!("Requesting OpenRouter completion ({} byte prompt)", prompt.len());

        let response = self
            .client
            .post(OPENROUTER_URL)
            .bearer_auth(api_key)
            .header("X-Title", "AI Trading Signals")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| extract_error_message(&v))
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(AppError::ExternalApi(format!(
                "OpenRouter API error ({}): {}",
                status.as_u16(),
                detail
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION.to_string());

        debug!("OpenRouter completion: {} bytes", content.len());
        Ok(content)
    }
}

/// Pull `error.message` out of a provider error body.
pub(crate) fn extract_error_message(body: &Value) -> Option<String> {
    match body.get("error").and_then(|e| e.get("message")) {
        Some(Value::String(message)) => Some(message.clone()),
        _ => Some(body.to_string()),
    }
}
