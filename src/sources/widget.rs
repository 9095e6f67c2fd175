//! First-tier candle source: the widget's native export payload.

use crate::types::Candle;
use serde::Deserialize;
use serde_json::Value;

/// Shape of the widget's `exportData` result.
#[derive(Debug, Deserialize)]
struct ExportPayload {
    data: Vec<ExportRow>,
}

#[derive(Debug, Deserialize)]
struct ExportRow {
    /// Unix milliseconds.
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: Option<f64>,
}

/// Parser for widget export payloads.
pub struct WidgetExportSource;

impl WidgetExportSource {
    /// Parse an export payload, keeping the most recent `count` rows.
    ///
    /// An unparseable or empty payload is an error so the caller can fall
    /// through to the next tier.
    pub fn candles(payload: &Value, count: usize) -> anyhow::Result<Vec<Candle>> {
        let payload: ExportPayload = serde_json::from_value(payload.clone())?;
        if payload.data.is_empty() {
            anyhow::bail!("export payload contained no rows");
        }

        let skip = payload.data.len().saturating_sub(count);
        let candles = payload
            .data
            .into_iter()
            .skip(skip)
            .map(|row| Candle {
                time: row.time,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            })
            .collect();

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(rows: usize) -> Value {
        let data: Vec<Value> = (0..rows)
            .map(|i| {
                json!({
                    "time": 1_700_000_000_000_i64 + i as i64 * 300_000,
                    "open": 2000.0 + i as f64,
                    "high": 2005.0 + i as f64,
                    "low": 1995.0 + i as f64,
                    "close": 2002.0 + i as f64,
                    "volume": 1500.0
                })
            })
            .collect();
        json!({ "data": data })
    }

    #[test]
    fn test_keeps_most_recent_rows() {
        let candles = WidgetExportSource::candles(&payload(10), 3).unwrap();
        assert_eq!(candles.len(), 3);
        // Last three rows of the payload, oldest first.
        assert_eq!(candles[0].open, 2007.0);
        assert_eq!(candles[2].open, 2009.0);
    }

    #[test]
    fn test_short_payload_returned_whole() {
        let candles = WidgetExportSource::candles(&payload(2), 50).unwrap();
        assert_eq!(candles.len(), 2);
    }

    #[test]
    fn test_missing_volume_allowed() {
        let payload = json!({
            "data": [{"time": 1, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5}]
        });
        let candles = WidgetExportSource::candles(&payload, 10).unwrap();
        assert_eq!(candles[0].volume, None);
    }

    #[test]
    fn test_empty_and_malformed_payloads_error() {
        assert!(WidgetExportSource::candles(&json!({ "data": [] }), 10).is_err());
        assert!(WidgetExportSource::candles(&json!({ "rows": [] }), 10).is_err());
        assert!(WidgetExportSource::candles(&json!("not an object"), 10).is_err());
    }
}
