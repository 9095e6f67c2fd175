//! End-to-end extraction tests: realistic model replies in.

use augur::i18n::Language;
use augur::services::extractor::extract_signal_data;
use augur::types::SignalType;

#[test]
fn test_full_english_briefing() {
    let reply = "### Multi-Timeframe Context\n\
                 4H structure is bullish with an unmitigated demand zone at 2005-2008.\n\
                 ATR(14) on 15m is 3.2, volatility is acceptable.\n\n\
                 ### Trade Setup\n\
                 - Wait for a bullish engulfing on 5m inside the zone\n\
                 - Stop below the zone using 1.5x ATR\n\n\
                 SIGNAL SUMMARY:\n\
                 Pair: XAUUSD\n\
                 Type: BUY\n\
                 Entry: 2006.50\n\
                 Stop Loss: 2001.70\n\
                 Take Profit 1: 2014.00\n\
                 Take Profit 2: 2022.50\n\
                 Probability: 72%\n\n\
                 Invalidation: a 5m close below 2000 cancels the setup.";

    let signal = extract_signal_data(reply, "XAUUSD", Language::En);
    assert_eq!(signal.pair, "XAUUSD");
    assert_eq!(signal.signal_type, SignalType::Buy);
    assert_eq!(signal.entry, Some(2006.5));
    assert_eq!(signal.stop_loss, Some(2001.7));
    assert_eq!(signal.take_profit1, Some(2014.0));
    assert_eq!(signal.take_profit2, Some(2022.5));
    assert_eq!(signal.probability, Some(72.0));
}

#[test]
fn test_french_reply_with_thousands_separator() {
    let reply = "Analyse du marché terminée.\n\n\
                 RÉSUMÉ DU SIGNAL:\n\
                 Paire: XAUUSD\n\
                 Type: VENTE\n\
                 Entrée: 2,015.00\n\
                 Stop Loss: 2,020.50\n\
                 Take Profit 1: 2,005.00\n\
                 Take Profit 2: 1,995.00\n\
                 Probabilité: 65.5%";

    let signal = extract_signal_data(reply, "XAUUSD", Language::Fr);
    assert_eq!(signal.signal_type, SignalType::Sell);
    assert_eq!(signal.entry, Some(2015.0));
    assert_eq!(signal.stop_loss, Some(2020.5));
    assert_eq!(signal.probability, Some(65.5));
}

#[test]
fn test_hindi_summary() {
    let reply = "सिग्नल सारांश:\n\
                 जोड़ी: EURUSD\n\
                 प्रकार: बेचना\n\
                 प्रवेश: 1.0850\n\
                 स्टॉप लॉस: 1.0890\n\
                 टेक प्रॉफिट 1: 1.0800\n\
                 टेक प्रॉफिट 2: 1.0750\n\
                 संभावना: 60%";

    let signal = extract_signal_data(reply, "EURUSD", Language::Hi);
    assert_eq!(signal.signal_type, SignalType::Sell);
    assert_eq!(signal.entry, Some(1.085));
}

#[test]
fn test_language_mismatch_falls_back_to_keywords() {
    // Reply came back in English but the request asked for Arabic: no Arabic
    // summary header, so only the keyword scan applies.
    let reply = "SIGNAL SUMMARY:\nPair: XAUUSD\nType: BUY\nEntry: 2010.00";

    let signal = extract_signal_data(reply, "XAUUSD", Language::Ar);
    assert_eq!(signal.signal_type, SignalType::Buy);
    assert_eq!(signal.entry, None);
    assert_eq!(signal.pair, "XAUUSD");
}

#[test]
fn test_no_trade_reply() {
    let reply = "The zone has already been mitigated and ATR is elevated. \
                 No clean setup is available; stay flat and re-evaluate after London open.";

    let signal = extract_signal_data(reply, "XAUUSD", Language::En);
    assert_eq!(signal.signal_type, SignalType::Hold);
    assert!(signal.entry.is_none());
    assert!(signal.probability.is_none());
}

#[test]
fn test_partial_summary_keeps_what_parses() {
    let reply = "SIGNAL SUMMARY:\n\
                 Pair: GBPUSD\n\
                 Type: SELL\n\
                 Entry: Wait for confirmation\n\
                 Stop Loss: 1.2750\n\
                 Probability: high";

    let signal = extract_signal_data(reply, "GBPUSD", Language::En);
    assert_eq!(signal.pair, "GBPUSD");
    assert_eq!(signal.signal_type, SignalType::Sell);
    assert_eq!(signal.entry, None);
    assert_eq!(signal.stop_loss, Some(1.275));
    assert_eq!(signal.take_profit1, None);
    assert_eq!(signal.probability, None);
}
