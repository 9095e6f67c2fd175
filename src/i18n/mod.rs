mod locales;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Fr,
    Es,
    De,
    It,
    Hi,
}

/// All supported languages.
pub const LANGUAGES: [Language; 7] = [
    Language::En,
    Language::Ar,
    Language::Fr,
    Language::Es,
    Language::De,
    Language::It,
    Language::Hi,
];

impl Language {
    /// Parse an ISO 639-1 code; unknown codes yield `None` so callers can
    /// apply their own English fallback.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            "fr" => Some(Language::Fr),
            "es" => Some(Language::Es),
            "de" => Some(Language::De),
            "it" => Some(Language::It),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::It => "it",
            Language::Hi => "hi",
        }
    }

    /// Arabic is the only right-to-left language we ship.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// In-memory locale dictionaries, built once at startup and read-only after.
pub struct LocaleStore {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl LocaleStore {
    pub fn new() -> Self {
        let mut tables = HashMap::with_capacity(LANGUAGES.len());
        for lang in LANGUAGES {
            tables.insert(lang, locales::table(lang).iter().copied().collect());
        }
        Self { tables }
    }

    /// Look up a UI string: current language, then English, then the key
    /// itself. Missing keys log a warning, never an error.
    pub fn translate(&self, lang: Language, key: &str) -> String {
        if let Some(value) = self.tables.get(&lang).and_then(|t| t.get(key)) {
            return (*value).to_string();
        }

        if lang != Language::En {
            if let Some(value) = self.tables.get(&Language::En).and_then(|t| t.get(key)) {
                return (*value).to_string();
            }
        }

        warn!("Translation not found for key: {} in language: {}", key, lang.code());
        key.to_string()
    }

    /// Full table for one language, with English filling any gaps.
    pub fn table(&self, lang: Language) -> HashMap<&'static str, &'static str> {
        let mut merged: HashMap<&'static str, &'static str> = self
            .tables
            .get(&Language::En)
            .cloned()
            .unwrap_or_default();
        if let Some(table) = self.tables.get(&lang) {
            for (k, v) in table {
                merged.insert(k, v);
            }
        }
        merged
    }

    /// Log keys that drifted between English and the other dictionaries.
    /// Drift is tolerated at runtime via the fallback chain.
    pub fn validate(&self) {
        let english = &self.tables[&Language::En];
        for lang in LANGUAGES {
            if lang == Language::En {
                continue;
            }
            let table = &self.tables[&lang];
            for key in english.keys() {
                if !table.contains_key(key) {
                    warn!("Locale {} is missing key: {}", lang.code(), key);
                }
            }
            for key in table.keys() {
                if !english.contains_key(key) {
                    warn!("Locale {} has key absent from English: {}", lang.code(), key);
                }
            }
        }
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("AR"), Some(Language::Ar));
        assert_eq!(Language::from_code("hi"), Some(Language::Hi));
        assert_eq!(Language::from_code("pt"), None);
    }

    #[test]
    fn test_language_rtl() {
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
        assert!(!Language::Hi.is_rtl());
    }

    #[test]
    fn test_translate_hit() {
        let store = LocaleStore::new();
        assert_eq!(store.translate(Language::En, "nav.dashboard"), "Dashboard");
        assert_eq!(store.translate(Language::Ar, "nav.dashboard"), "لوحة التحكم");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        let store = LocaleStore::new();
        assert_eq!(
            store.translate(Language::Ar, "nav.doesNotExist"),
            "nav.doesNotExist"
        );
    }

    #[test]
    fn test_every_language_covers_english_keys() {
        let store = LocaleStore::new();
        let english = &store.tables[&Language::En];
        for lang in LANGUAGES {
            let table = &store.tables[&lang];
            for key in english.keys() {
                assert!(
                    table.contains_key(key),
                    "locale {} missing key {}",
                    lang.code(),
                    key
                );
            }
        }
    }
}
