use crate::error::{AppError, Result};
use crate::sources::WidgetSession;
use crate::types::MultiTimeframeDataset;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Body of POST /api/market-data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataRequest {
    pub symbol: String,
    #[serde(default)]
    pub candle_count: Option<usize>,
    /// Whatever the client captured from its chart widget; empty means
    /// every timeframe is generated synthetically.
    #[serde(default)]
    pub session: WidgetSession,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataResponse {
    pub data: MultiTimeframeDataset,
    /// True when any timeframe fell through to synthetic data.
    pub demo: bool,
    pub timestamp: i64,
}

/// POST /api/market-data
async fn fetch_market_data(
    State(state): State<AppState>,
    Json(request): Json<MarketDataRequest>,
) -> Result<Json<MarketDataResponse>> {
    let symbol = request.symbol.trim();
    if symbol.is_empty() {
        return Err(AppError::BadRequest("symbol must not be empty".to_string()));
    }

    let candle_count = request
        .candle_count
        .unwrap_or(state.config.default_candle_count);
    let outcome =
        state
            .market_data
            .convert_to_multi_timeframe_data(symbol, candle_count, &request.session);

    Ok(Json(MarketDataResponse {
        data: outcome.dataset,
        demo: outcome.demo,
        timestamp: chrono::Utc::now().timestamp(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/market-data", post(fetch_market_data))
}
