//! Integration tests for the tiered market-data pipeline.

use augur::services::MarketDataService;
use augur::sources::WidgetSession;
use augur::types::{Timeframe, TIMEFRAMES};
use serde_json::json;

fn export_payload(rows: usize, base: f64) -> serde_json::Value {
    let data: Vec<_> = (0..rows)
        .map(|i| {
            json!({
                "time": 1_700_000_000_000_i64 + i as i64 * 300_000,
                "open": base + i as f64,
                "high": base + i as f64 + 2.0,
                "low": base + i as f64 - 2.0,
                "close": base + i as f64 + 1.0,
                "volume": 1200.0
            })
        })
        .collect();
    json!({ "data": data })
}

#[test]
fn test_mixed_tiers_in_one_dataset() {
    let mut session = WidgetSession {
        ready: true,
        ..Default::default()
    };
    // 5min from the widget export, 15min from legend text, 1h/4h synthetic.
    session
        .exports
        .insert(Timeframe::FiveMin, export_payload(60, 2000.0));
    session.legend_lines.insert(
        Timeframe::FifteenMin,
        vec![
            "O: 2001.00 H: 2003.50 L: 1999.00 C: 2002.25".to_string(),
            "O: 2002.25 H: 2005.00 L: 2001.50 C: 2004.00".to_string(),
        ],
    );

    let outcome =
        MarketDataService::new().convert_to_multi_timeframe_data("XAUUSD", 50, &session);

    assert!(outcome.demo);
    assert_eq!(outcome.dataset.len(Timeframe::FiveMin), 50);
    assert_eq!(outcome.dataset.len(Timeframe::FifteenMin), 2);
    assert_eq!(outcome.dataset.len(Timeframe::OneHour), 50);
    assert_eq!(outcome.dataset.len(Timeframe::FourHours), 50);

    // Export tier kept the most recent rows.
    let five = &outcome.dataset.timeframes[&Timeframe::FiveMin];
    assert_eq!(five[0].open, 2010.0);
    // Legend tier carried the parsed prices through.
    let fifteen = &outcome.dataset.timeframes[&Timeframe::FifteenMin];
    assert_eq!(fifteen[1].close, 2004.0);
}

#[test]
fn test_unready_session_ignores_captured_data() {
    let mut session = WidgetSession::default();
    session
        .exports
        .insert(Timeframe::FiveMin, export_payload(10, 500.0));

    let outcome = MarketDataService::new().convert_to_multi_timeframe_data("XAUUSD", 20, &session);

    // Widget data is untrusted before ready, so everything is synthetic.
    assert!(outcome.demo);
    let five = &outcome.dataset.timeframes[&Timeframe::FiveMin];
    assert_eq!(five.len(), 20);
    assert!(five.iter().all(|c| c.open > 1000.0), "synthetic walk starts at 2000");
}

#[test]
fn test_dataset_serialization_shape() {
    let outcome = MarketDataService::new().convert_to_multi_timeframe_data(
        "xauusd",
        5,
        &WidgetSession::default(),
    );

    let json = serde_json::to_value(&outcome.dataset).unwrap();
    assert_eq!(json["symbol"], "xauusd");
    for timeframe in TIMEFRAMES {
        let series = &json["timeframes"][timeframe.label()];
        assert!(series.is_array(), "missing series for {}", timeframe.label());
        assert_eq!(series.as_array().unwrap().len(), 5);
        let candle = &series[0];
        for field in ["time", "open", "high", "low", "close", "volume"] {
            assert!(!candle[field].is_null(), "missing {}", field);
        }
    }
}

#[test]
fn test_synthetic_times_are_ordered() {
    let outcome = MarketDataService::new().convert_to_multi_timeframe_data(
        "XAUUSD",
        30,
        &WidgetSession::default(),
    );

    for timeframe in TIMEFRAMES {
        let series = &outcome.dataset.timeframes[&timeframe];
        for pair in series.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }
}
