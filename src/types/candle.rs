use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart timeframe for a candle series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5min")]
    FiveMin,
    #[serde(rename = "15min")]
    FifteenMin,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
}

/// All timeframes a dataset covers, in extraction order.
pub const TIMEFRAMES: [Timeframe; 4] = [
    Timeframe::FiveMin,
    Timeframe::FifteenMin,
    Timeframe::OneHour,
    Timeframe::FourHours,
];

impl Timeframe {
    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Timeframe::FiveMin => 300,
            Timeframe::FifteenMin => 900,
            Timeframe::OneHour => 3600,
            Timeframe::FourHours => 14400,
        }
    }

    /// Key used in serialized datasets ("5min", "15min", "1h", "4h").
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::FiveMin => "5min",
            Timeframe::FifteenMin => "15min",
            Timeframe::OneHour => "1h",
            Timeframe::FourHours => "4h",
        }
    }
}

/// OHLC (Open, High, Low, Close) data point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open time, unix milliseconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Candle series per timeframe for one symbol, built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiTimeframeDataset {
    pub symbol: String,
    pub timeframes: BTreeMap<Timeframe, Vec<Candle>>,
}

impl MultiTimeframeDataset {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timeframes: BTreeMap::new(),
        }
    }

    /// Candle count for one timeframe (0 when absent).
    pub fn len(&self, timeframe: Timeframe) -> usize {
        self.timeframes.get(&timeframe).map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.timeframes.values().all(|c| c.is_empty())
    }
}
