use crate::error::Result;
use crate::i18n::Language;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Merged string table for one language.
#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    pub language: &'static str,
    pub rtl: bool,
    pub strings: HashMap<&'static str, &'static str>,
}

/// Single-string lookup result.
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub language: &'static str,
    pub key: String,
    pub value: String,
}

/// Unknown codes fall back to English rather than erroring; the client
/// can tell from the `language` field in the response.
fn resolve_language(code: &str) -> Language {
    Language::from_code(code).unwrap_or_else(|| {
        warn!("Unknown language code {:?}, serving English", code);
        Language::En
    })
}

/// GET /api/locale/:lang
async fn get_locale(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<LocaleResponse>> {
    let language = resolve_language(&lang);

    Ok(Json(LocaleResponse {
        language: language.code(),
        rtl: language.is_rtl(),
        strings: state.locales.table(language),
    }))
}

/// GET /api/locale/:lang/:key
async fn get_translation(
    State(state): State<AppState>,
    Path((lang, key)): Path<(String, String)>,
) -> Result<Json<TranslationResponse>> {
    let language = resolve_language(&lang);
    let value = state.locales.translate(language, &key);

    Ok(Json(TranslationResponse {
        language: language.code(),
        key,
        value,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:lang", get(get_locale))
        .route("/:lang/:key", get(get_translation))
}
