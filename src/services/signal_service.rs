//! Signal generation orchestration: prompt → provider → extraction.

use crate::config::Config;
use crate::error::Result;
use crate::llm::{GeminiClient, OpenRouterClient};
use crate::services::{extractor, prompt};
use crate::types::{AiProvider, TradingAnalysisRequest, TradingSignal};
use tracing::info;

/// A completed generation: the raw analysis text and the structured signal
/// recovered from it.
#[derive(Debug, Clone)]
pub struct SignalOutcome {
    pub analysis: String,
    pub signal: TradingSignal,
}

/// Owns one client per provider and runs the generation pipeline.
#[derive(Clone)]
pub struct SignalService {
    openrouter: OpenRouterClient,
    gemini: GeminiClient,
}

impl SignalService {
    pub fn new(config: &Config) -> Self {
        Self {
            openrouter: OpenRouterClient::new(
                config.openrouter_api_key.clone(),
                config.llm_timeout_secs,
            ),
            gemini: GeminiClient::new(config.gemini_api_key.clone(), config.llm_timeout_secs),
        }
    }

    /// Generate one signal. The provider call is the only step that can
    /// fail; extraction always yields a signal.
    pub async fn generate_signal(&self, request: &TradingAnalysisRequest) -> Result<SignalOutcome> {
        let prompt = prompt::create_trading_prompt(
            &request.school_prompt,
            &request.symbol,
            &request.market_data,
            request.language,
        )?;

        info!(
            "Generating signal for {} via {} ({})",
            request.symbol,
            request.provider.name(),
            request.language.code()
        );

        let analysis = match request.provider {
            AiProvider::OpenRouter => self.openrouter.complete(&prompt).await?,
            AiProvider::Gemini => self.gemini.complete(&prompt).await?,
        };

        let signal = extractor::extract_signal_data(&analysis, &request.symbol, request.language);
        info!(
            "Signal for {}: {} (probability {:?})",
            request.symbol,
            signal.signal_type.label(),
            signal.probability
        );

        Ok(SignalOutcome { analysis, signal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::types::MultiTimeframeDataset;

    fn request(provider: AiProvider) -> TradingAnalysisRequest {
        TradingAnalysisRequest {
            symbol: "XAUUSD".to_string(),
            market_data: MultiTimeframeDataset::new("XAUUSD"),
            school_prompt: "demand zones only".to_string(),
            provider,
            language: Language::En,
        }
    }

    fn keyless_service() -> SignalService {
        let config = Config {
            openrouter_api_key: None,
            gemini_api_key: None,
            ..Config::from_env()
        };
        SignalService::new(&config)
    }

    #[tokio::test]
    async fn test_missing_openrouter_key_propagates() {
        let err = keyless_service()
            .generate_signal(&request(AiProvider::OpenRouter))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("OpenRouter"));
    }

    #[tokio::test]
    async fn test_missing_gemini_key_propagates() {
        let err = keyless_service()
            .generate_signal(&request(AiProvider::Gemini))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Gemini"));
    }
}
