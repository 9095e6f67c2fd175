//! Locale table integration tests.

use augur::i18n::{Language, LocaleStore, LANGUAGES};

#[test]
fn test_translate_fallback_chain() {
    let store = LocaleStore::new();

    // Direct hit.
    assert_eq!(store.translate(Language::Fr, "nav.signals"), "Signaux");
    // Unknown key falls through to the key itself.
    assert_eq!(store.translate(Language::Fr, "made.up.key"), "made.up.key");
    assert_eq!(store.translate(Language::En, "made.up.key"), "made.up.key");
}

#[test]
fn test_merged_table_is_complete_for_every_language() {
    let store = LocaleStore::new();
    let english = store.table(Language::En);

    for lang in LANGUAGES {
        let table = store.table(lang);
        assert_eq!(
            table.len(),
            english.len(),
            "merged table size mismatch for {}",
            lang.code()
        );
        for key in english.keys() {
            assert!(table.contains_key(key), "{} missing {}", lang.code(), key);
        }
    }
}

#[test]
fn test_rtl_flag() {
    assert!(Language::Ar.is_rtl());
    for lang in LANGUAGES {
        if lang != Language::Ar {
            assert!(!lang.is_rtl(), "{} should be ltr", lang.code());
        }
    }
}

#[test]
fn test_language_codes_round_trip() {
    for lang in LANGUAGES {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code("pt"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn test_language_serde_codes() {
    for lang in LANGUAGES {
        let json = serde_json::to_string(&lang).unwrap();
        assert_eq!(json, format!("\"{}\"", lang.code()));
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lang);
    }
}

#[test]
fn test_key_dashboard_strings_localized() {
    let store = LocaleStore::new();

    assert_eq!(store.translate(Language::En, "signal.generateSignal"), "Generate Signal");
    assert_eq!(store.translate(Language::Ar, "signal.generateSignal"), "توليد الإشارة");
    assert_eq!(store.translate(Language::De, "signal.generateSignal"), "Signal Generieren");
    assert_eq!(store.translate(Language::Hi, "stats.demo"), "डेमो");
}
