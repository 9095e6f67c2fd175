//! Structured signal extraction from free-text model replies.
//!
//! Extraction never fails: a reply with no recognizable summary block
//! degrades to a keyword scan, and a reply with nothing recognizable at all
//! degrades to `hold` with null prices.

use crate::i18n::Language;
use crate::types::{SignalType, TradingSignal};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Keyword sets for direction normalization, shared by all languages.
///
/// The buy set is checked before the sell set, and matching is plain
/// substring search: "kauf" also occurs inside "verkauf", so German KAUF
/// wording decides the direction when both would match.
const BUY_KEYWORDS: &[&str] = &[
    "buy", "long", "شراء", "achat", "compra", "kauf", "acquisto", "खरीदना",
];
const SELL_KEYWORDS: &[&str] = &[
    "sell", "short", "بيع", "vente", "venta", "verkauf", "vendita", "बेचना",
];

/// Per-language patterns for the summary block and its fields.
struct SignalPatterns {
    summary: Regex,
    pair: Regex,
    signal_type: Regex,
    entry: Regex,
    stop_loss: Regex,
    take_profit1: Regex,
    take_profit2: Regex,
    probability: Regex,
}

impl SignalPatterns {
    fn new(
        summary_header: &str,
        pair: &str,
        signal_type: &str,
        entry: &str,
        stop_loss: &str,
        take_profit1: &str,
        take_profit2: &str,
        probability: &str,
    ) -> Self {
        let field =
            |label: &str| Regex::new(&format!(r"(?i){}:\s*([^\n]+)", label)).unwrap();

        Self {
            // Lazy match up to the first blank line or end of input.
            summary: Regex::new(&format!(r"(?is){}:(.*?)(?:\n\n|$)", summary_header))
                .unwrap(),
            pair: field(pair),
            signal_type: field(signal_type),
            entry: field(entry),
            stop_loss: field(stop_loss),
            take_profit1: field(take_profit1),
            take_profit2: field(take_profit2),
            probability: field(probability),
        }
    }
}

static PATTERNS: LazyLock<HashMap<Language, SignalPatterns>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Language::En,
        SignalPatterns::new(
            "SIGNAL SUMMARY",
            "(?:Pair|Symbol)",
            "Type",
            "Entry",
            "Stop Loss",
            "Take Profit 1",
            "Take Profit 2",
            "Probability",
        ),
    );
    map.insert(
        Language::Ar,
        SignalPatterns::new(
            "ملخص الإشارة",
            "(?:الزوج|الرمز)",
            "النوع",
            "الدخول",
            "وقف الخسارة",
            "جني الأرباح 1",
            "جني الأرباح 2",
            "الاحتمالية",
        ),
    );
    map.insert(
        Language::Fr,
        SignalPatterns::new(
            "RÉSUMÉ DU SIGNAL",
            "(?:Paire|Symbole)",
            "Type",
            "Entrée",
            "Stop Loss",
            "Take Profit 1",
            "Take Profit 2",
            "Probabilité",
        ),
    );
    map.insert(
        Language::Es,
        SignalPatterns::new(
            "RESUMEN DE SEÑAL",
            "(?:Par|Símbolo)",
            "Tipo",
            "Entrada",
            "Stop Loss",
            "Take Profit 1",
            "Take Profit 2",
            "Probabilidad",
        ),
    );
    map.insert(
        Language::De,
        SignalPatterns::new(
            "SIGNAL ZUSAMMENFASSUNG",
            "(?:Paar|Symbol)",
            "Typ",
            "Einstieg",
            "Stop Loss",
            "Take Profit 1",
            "Take Profit 2",
            "Wahrscheinlichkeit",
        ),
    );
    map.insert(
        Language::It,
        SignalPatterns::new(
            "RIASSUNTO SEGNALE",
            "(?:Coppia|Simbolo)",
            "Tipo",
            "Entrata",
            "Stop Loss",
            "Take Profit 1",
            "Take Profit 2",
            "Probabilità",
        ),
    );
    map.insert(
        Language::Hi,
        SignalPatterns::new(
            "सिग्नल सारांश",
            "(?:जोड़ी|प्रतीक)",
            "प्रकार",
            "प्रवेश",
            "स्टॉप लॉस",
            "टेक प्रॉफिट 1",
            "टेक प्रॉफिट 2",
            "संभावना",
        ),
    );
    map
});

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+\.?\d*").unwrap());
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Normalize a free-form direction string to buy/sell/hold.
fn normalize_signal_type(value: Option<&str>) -> SignalType {
    let Some(value) = value else {
        return SignalType::Hold;
    };
    scan_keywords(&value.to_lowercase())
}

fn scan_keywords(lower: &str) -> SignalType {
    if BUY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        SignalType::Buy
    } else if SELL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        SignalType::Sell
    } else {
        SignalType::Hold
    }
}

/// First numeric token of a field value, commas stripped.
fn extract_price(value: Option<&str>) -> Option<f64> {
    let value = value?;
    let token = PRICE_RE.find(value)?.as_str().replace(',', "");
    token.parse().ok()
}

/// First percentage-shaped token of a field value.
fn extract_percentage(value: Option<&str>) -> Option<f64> {
    let value = value?;
    PERCENT_RE.find(value)?.as_str().parse().ok()
}

fn extract_field<'a>(pattern: &Regex, summary: &'a str) -> Option<&'a str> {
    pattern
        .captures(summary)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Recover a structured signal from a model reply. Never fails.
///
/// Unknown or mismatched languages fall back to the English patterns; a
/// reply without a summary block falls back to a whole-text keyword scan
/// with all numeric fields null.
pub fn extract_signal_data(response: &str, symbol: &str, lang: Language) -> TradingSignal {
    let patterns = PATTERNS.get(&lang).unwrap_or(&PATTERNS[&Language::En]);

    let Some(summary) = patterns
        .summary
        .captures(response)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    else {
        debug!("No summary block in reply, falling back to keyword scan");
        let mut signal = TradingSignal::hold(symbol);
        signal.signal_type = scan_keywords(&response.to_lowercase());
        return signal;
    };

    let pair = extract_field(&patterns.pair, summary)
        .filter(|p| !p.is_empty())
        .unwrap_or(symbol);

    TradingSignal {
        pair: pair.to_string(),
        signal_type: normalize_signal_type(extract_field(&patterns.signal_type, summary)),
        entry: extract_price(extract_field(&patterns.entry, summary)),
        stop_loss: extract_price(extract_field(&patterns.stop_loss, summary)),
        take_profit1: extract_price(extract_field(&patterns.take_profit1, summary)),
        take_profit2: extract_price(extract_field(&patterns.take_profit2, summary)),
        probability: extract_percentage(extract_field(&patterns.probability, summary)),
    }
}
