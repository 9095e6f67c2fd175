use crate::error::{AppError, Result};
use crate::i18n::Language;
use crate::services::markdown::{self, Block};
use crate::sources::WidgetSession;
use crate::types::{AiProvider, MultiTimeframeDataset, TradingAnalysisRequest, TradingSignal};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Body of POST /api/signal/generate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSignalRequest {
    pub symbol: String,
    /// Trading-school methodology text embedded verbatim in the prompt.
    pub school_prompt: String,
    #[serde(default)]
    pub provider: AiProvider,
    /// ISO 639-1 code; unknown or absent falls back to the server default.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub candle_count: Option<usize>,
    #[serde(default)]
    pub session: WidgetSession,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSignalResponse {
    pub signal: TradingSignal,
    /// Raw analysis text as the model produced it.
    pub analysis: String,
    /// The same text rendered to display blocks.
    pub blocks: Vec<Block>,
    /// The dataset the model was shown.
    pub market_data: MultiTimeframeDataset,
    pub demo: bool,
    pub provider: AiProvider,
    pub language: &'static str,
    pub timestamp: i64,
}

/// POST /api/signal/generate
async fn generate_signal(
    State(state): State<AppState>,
    Json(request): Json<GenerateSignalRequest>,
) -> Result<Json<GenerateSignalResponse>> {
    let symbol = request.symbol.trim().to_string();
    if symbol.is_empty() {
        return Err(AppError::BadRequest("symbol must not be empty".to_string()));
    }
    if request.school_prompt.trim().is_empty() {
        return Err(AppError::BadRequest(
            "schoolPrompt must not be empty".to_string(),
        ));
    }

    let language = request
        .language
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or(state.config.default_language);
    let candle_count = request
        .candle_count
        .unwrap_or(state.config.default_candle_count);

    let outcome =
        state
            .market_data
            .convert_to_multi_timeframe_data(&symbol, candle_count, &request.session);

    let analysis_request = TradingAnalysisRequest {
        symbol: symbol.clone(),
        market_data: outcome.dataset.clone(),
        school_prompt: request.school_prompt,
        provider: request.provider,
        language,
    };

    let generated = state.signal_service.generate_signal(&analysis_request).await?;
    let blocks = markdown::render(&generated.analysis);

    Ok(Json(GenerateSignalResponse {
        signal: generated.signal,
        analysis: generated.analysis,
        blocks,
        market_data: outcome.dataset,
        demo: outcome.demo,
        provider: request.provider,
        language: language.code(),
        timestamp: chrono::Utc::now().timestamp(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_signal))
}
