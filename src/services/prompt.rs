//! Prompt construction for the hosted LLM providers.
//!
//! The analysis template is fixed; only the language directive, the localized
//! summary format, the school methodology text, the symbol and the dataset
//! vary per request. The summary format emitted here is what the extractor's
//! per-language patterns match against.

use crate::error::Result;
use crate::i18n::Language;
use crate::types::MultiTimeframeDataset;

/// Directive telling the model which language to answer in.
pub fn language_instruction(lang: Language) -> &'static str {
    match lang {
        Language::En => "Please respond in English with professional trading terminology.",
        Language::Ar => "يرجى الرد باللغة العربية باستخدام المصطلحات المهنية للتداول. استخدم المصطلحات المالية الصحيحة والواضحة.",
        Language::Fr => "Veuillez répondre en français en utilisant une terminologie de trading professionnelle.",
        Language::Es => "Por favor responde en español usando terminología profesional de trading.",
        Language::De => "Bitte antworten Sie auf Deutsch mit professioneller Trading-Terminologie.",
        Language::It => "Si prega di rispondere in italiano utilizzando terminologia professionale di trading.",
        Language::Hi => "कृपया व्यावसायिक ट्रेडिंग शब्दावली का उपयोग करते हुए हिंदी में उत्तर दें।",
    }
}

/// Localized structured-summary template the model is asked to end with.
pub fn signal_summary_format(lang: Language) -> &'static str {
    match lang {
        Language::En => {
            "SIGNAL SUMMARY:\n\
             Pair: [SYMBOL]\n\
             Type: [BUY/SELL/HOLD]\n\
             Entry: [price or \"Wait for confirmation\"]\n\
             Stop Loss: [price]\n\
             Take Profit 1: [price]\n\
             Take Profit 2: [price]\n\
             Probability: [percentage]%"
        }
        Language::Ar => {
            "ملخص الإشارة:\n\
             الزوج: [SYMBOL]\n\
             النوع: [شراء/بيع/انتظار]\n\
             الدخول: [السعر أو \"انتظار التأكيد\"]\n\
             وقف الخسارة: [السعر]\n\
             جني الأرباح 1: [السعر]\n\
             جني الأرباح 2: [السعر]\n\
             الاحتمالية: [النسبة المئوية]%"
        }
        Language::Fr => {
            "RÉSUMÉ DU SIGNAL:\n\
             Paire: [SYMBOL]\n\
             Type: [ACHAT/VENTE/ATTENDRE]\n\
             Entrée: [prix ou \"Attendre confirmation\"]\n\
             Stop Loss: [prix]\n\
             Take Profit 1: [prix]\n\
             Take Profit 2: [prix]\n\
             Probabilité: [pourcentage]%"
        }
        Language::Es => {
            "RESUMEN DE SEÑAL:\n\
             Par: [SYMBOL]\n\
             Tipo: [COMPRA/VENTA/ESPERAR]\n\
             Entrada: [precio o \"Esperar confirmación\"]\n\
             Stop Loss: [precio]\n\
             Take Profit 1: [precio]\n\
             Take Profit 2: [precio]\n\
             Probabilidad: [porcentaje]%"
        }
        Language::De => {
            "SIGNAL ZUSAMMENFASSUNG:\n\
             Paar: [SYMBOL]\n\
             Typ: [KAUF/VERKAUF/WARTEN]\n\
             Einstieg: [Preis oder \"Auf Bestätigung warten\"]\n\
             Stop Loss: [Preis]\n\
             Take Profit 1: [Preis]\n\
             Take Profit 2: [Preis]\n\
             Wahrscheinlichkeit: [Prozent]%"
        }
        Language::It => {
            "RIASSUNTO SEGNALE:\n\
             Coppia: [SYMBOL]\n\
             Tipo: [ACQUISTO/VENDITA/ATTESA]\n\
             Entrata: [prezzo o \"Attendere conferma\"]\n\
             Stop Loss: [prezzo]\n\
             Take Profit 1: [prezzo]\n\
             Take Profit 2: [prezzo]\n\
             Probabilità: [percentuale]%"
        }
        Language::Hi => {
            "सिग्नल सारांश:\n\
             जोड़ी: [SYMBOL]\n\
             प्रकार: [खरीदना/बेचना/प्रतीक्षा]\n\
             प्रवेश: [मूल्य या \"पुष्टि की प्रतीक्षा\"]\n\
             स्टॉप लॉस: [मूल्य]\n\
             टेक प्रॉफिट 1: [मूल्य]\n\
             टेक प्रॉफिट 2: [मूल्य]\n\
             संभावना: [प्रतिशत]%"
        }
    }
}

const ANALYST_ROLE: &str = "You are an elite-level financial market analyst and trading assistant, specialized in short-term technical analysis of assets like Gold (XAU/USD), indices, and currencies.

Your task is to generate highly detailed, actionable trade recommendations based on raw candlestick data (OHLC), focusing on the 5-minute and 15-minute timeframes, while considering the context of the 1-hour and 4-hour charts.

The recommendations are for intraday scalping or short-term swings, valid for a few hours unless market structure shifts significantly.

You are allowed to use only ONE indicator: *ATR (Average True Range)* (14-period, on 15m or 5m), strictly for:
- Dynamic stop-loss placement (e.g., 1.5x ATR below demand zone)
- Assessing market volatility (avoid trades in low or extremely high volatility)
- Adjusting risk-to-reward calculations

━━━━━━━━━━━━━━━━━━━━━━
📌 *Strict Trading Rules:*
✅ Only trade setups based on *strong Supply & Demand zones*
✅ Do *NOT* enter immediately — wait for *clear confirmation* like:
- Bullish/Bearish Engulfing candle
- CHoCH (Change of Character) on 5m
- Internal liquidity sweep or FVG mitigation

🚫 Ignore weak zones or already-mitigated zones.

━━━━━━━━━━━━━━━━━━━━━━
🔶 Definition of a \"Strong Zone\":
- Fresh and untouched (unmitigated)
- Originated from an aggressive move away (impulsive)
- Clearly visible on 1H or 4H charts
- Contains FVG or internal/external liquidity sweep
- Aligned with higher timeframe market structure

━━━━━━━━━━━━━━━━━━━━━━
📊 1. Multi-Timeframe Context (4H & 1H)
- What is the overall market structure and trend?
- Are we approaching any strong institutional Supply/Demand zones?
- Is there unmitigated imbalance or liquidity above/below?
- What is the current ATR value and what does it imply?

━━━━━━━━━━━━━━━━━━━━━━
📈 2. Execution Timeframes (15M & 5M)
- Detect CHoCH / BOS / liquidity traps
- Look for price action confirmations: Engulfing candle, FVG tap, etc.
- Check if ATR conditions support a clean entry
- Validate that the zone has not been touched

━━━━━━━━━━━━━━━━━━━━━━
🎯 3. Trade Setup Recommendation
- Direction: Buy / Sell / No Trade
- Entry Price: After confirmation only
- Stop Loss: Below/above structure or zone using 1.5x ATR
- TP1 & TP2: Defined profit targets
- Risk-to-Reward Ratio: To TP1 and TP2
- Trade Type: Momentum / Reversal / Liquidity Sweep
- ATR Notes: Include value and how it influenced SL or trade filtering

━━━━━━━━━━━━━━━━━━━━━━
🧠 4. Justification & Reasoning
- Why this zone specifically?
- What confirmation was used?
- How does this align with higher timeframe context?
- How did ATR and structure support this setup?

━━━━━━━━━━━━━━━━━━━━━━
⚠ 5. Invalidation / No-Trade Criteria
- Zone has already been touched or broken
- ATR is too high or too low (causing poor RR)
- No valid confirmation appears near the zone
- Sudden market structure shift or BOS in the opposite direction";

/// Build the full analysis prompt for one request.
///
/// Deterministic for a given input; the only fallible step is serializing
/// the dataset to JSON.
pub fn create_trading_prompt(
    school_prompt: &str,
    symbol: &str,
    market_data: &MultiTimeframeDataset,
    lang: Language,
) -> Result<String> {
    let json_data = serde_json::to_string_pretty(market_data)?;

    Ok(format!(
        "{instruction}\n\n{role}\n\nIMPORTANT: At the end of your analysis, provide a structured summary in this exact format:\n\n{format}\n\n📝 Format your analysis like a professional trader's briefing note — clean, structured, and concise — as if you're advising a prop trading firm.\nBe as brief as possible in your answer and give me only the important points such as the recommendation, the reason for entering and its success rate.\n\nTRADING SCHOOL METHODOLOGY:\n{school}\n\nSYMBOL: {symbol}\n\nHere is the multi-timeframe candlestick data:\n\n{data}",
        instruction = language_instruction(lang),
        role = ANALYST_ROLE,
        format = signal_summary_format(lang),
        school = school_prompt,
        symbol = symbol,
        data = json_data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LANGUAGES;

    #[test]
    fn test_prompt_embeds_symbol_and_school_text() {
        let data = MultiTimeframeDataset::new("XAUUSD");
        let prompt =
            create_trading_prompt("Trade only fresh demand zones.", "XAUUSD", &data, Language::En)
                .unwrap();

        assert!(prompt.contains("SYMBOL: XAUUSD"));
        assert!(prompt.contains("Trade only fresh demand zones."));
        assert!(prompt.contains("\"symbol\": \"XAUUSD\""));
    }

    #[test]
    fn test_prompt_contains_localized_summary_format() {
        let data = MultiTimeframeDataset::new("EURUSD");
        for lang in LANGUAGES {
            let prompt = create_trading_prompt("method", "EURUSD", &data, lang).unwrap();
            assert!(
                prompt.contains(signal_summary_format(lang)),
                "summary format missing for {}",
                lang.code()
            );
            assert!(prompt.starts_with(language_instruction(lang)));
        }
    }

    #[test]
    fn test_summary_formats_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for lang in LANGUAGES {
            assert!(seen.insert(signal_summary_format(lang)));
        }
    }
}
