use crate::i18n::Language;
use crate::types::MultiTimeframeDataset;
use serde::{Deserialize, Serialize};

/// Direction of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl SignalType {
    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalType::Buy => "Buy",
            SignalType::Sell => "Sell",
            SignalType::Hold => "Hold",
        }
    }
}

/// Hosted LLM provider used for a signal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenRouter,
    Gemini,
}

impl AiProvider {
    pub fn name(&self) -> &'static str {
        match self {
            AiProvider::OpenRouter => "OpenRouter",
            AiProvider::Gemini => "Gemini",
        }
    }
}

/// Structured trading signal recovered from the model's free-text reply.
///
/// Any field except the pair and direction may be missing; extraction
/// degrades to `hold` with null prices instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    pub pair: String,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub entry: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit1: Option<f64>,
    pub take_profit2: Option<f64>,
    pub probability: Option<f64>,
}

impl TradingSignal {
    /// The degraded signal returned when nothing could be recovered.
    pub fn hold(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            signal_type: SignalType::Hold,
            entry: None,
            stop_loss: None,
            take_profit1: None,
            take_profit2: None,
            probability: None,
        }
    }
}

/// Input to prompt construction and signal generation.
#[derive(Debug, Clone)]
pub struct TradingAnalysisRequest {
    pub symbol: String,
    pub market_data: MultiTimeframeDataset,
    pub school_prompt: String,
    pub provider: AiProvider,
    pub language: Language,
}
