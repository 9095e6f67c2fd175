use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    providers: ProviderStatus,
}

/// Which LLM providers have keys configured. The dashboard uses this for
/// its connected/disconnected indicator.
#[derive(Serialize)]
struct ProviderStatus {
    openrouter: bool,
    gemini: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        providers: ProviderStatus {
            openrouter: state.config.openrouter_api_key.is_some(),
            gemini: state.config.gemini_api_key.is_some(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
