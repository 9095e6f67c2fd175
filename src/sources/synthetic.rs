//! Last-tier candle source: a bounded random walk. Never fails.

use crate::types::{Candle, Timeframe};
use rand::Rng;

const BASE_PRICE: f64 = 2000.0;
/// Open-to-close move is at most half of this, either direction.
const MAX_CHANGE: f64 = 20.0;
const MAX_WICK: f64 = 10.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Random-walk candle generator used when every real source failed.
pub struct SyntheticSource;

impl SyntheticSource {
    /// Generate exactly `count` candles ending at now, spaced at the
    /// timeframe's interval.
    pub fn candles(timeframe: Timeframe, count: usize) -> Vec<Candle> {
        let now = chrono::Utc::now().timestamp_millis();
        let step_ms = timeframe.seconds() * 1000;
        let mut rng = rand::thread_rng();
        let mut price = BASE_PRICE;
        let mut candles = Vec::with_capacity(count);

        for i in 0..count {
            let change = (rng.gen::<f64>() - 0.5) * MAX_CHANGE;
            let open = price;
            let close = price + change;
            let high = open.max(close) + rng.gen::<f64>() * MAX_WICK;
            let low = open.min(close) - rng.gen::<f64>() * MAX_WICK;

            candles.push(Candle {
                time: now - (count as i64 - i as i64) * step_ms,
                open: round2(open),
                high: round2(high),
                low: round2(low),
                close: round2(close),
                volume: Some(rng.gen_range(1000..11000) as f64),
            });

            price = close;
        }

        candles
    }
}
