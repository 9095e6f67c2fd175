//! Second-tier candle source: OHLC values scraped from legend text.

use crate::types::{Candle, Timeframe};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

// Legend line format: "O: 1.2345 H: 1.2350 L: 1.2340 C: 1.2348".
static OHLC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"O:\s*([\d.]+).*H:\s*([\d.]+).*L:\s*([\d.]+).*C:\s*([\d.]+)")
        .unwrap()
});

/// Parser for captured legend text lines.
pub struct LegendScrapeSource;

impl LegendScrapeSource {
    /// Parse up to `count` legend lines into candles.
    ///
    /// The legend carries no timestamps or volume, so times are synthesized
    /// backwards from now at the timeframe's interval and volumes are random.
    pub fn candles(
        lines: &[String],
        timeframe: Timeframe,
        count: usize,
    ) -> anyhow::Result<Vec<Candle>> {
        let now = chrono::Utc::now().timestamp_millis();
        let step_ms = timeframe.seconds() * 1000;
        let mut rng = rand::thread_rng();
        let mut candles = Vec::new();

        for (i, line) in lines.iter().take(count).enumerate() {
            let Some(caps) = OHLC_RE.captures(line) else {
                continue;
            };
            let parse = |idx: usize| caps[idx].parse::<f64>().ok();
            let (Some(open), Some(high), Some(low), Some(close)) =
                (parse(1), parse(2), parse(3), parse(4))
            else {
                continue;
            };

            candles.push(Candle {
                time: now - (count as i64 - i as i64) * step_ms,
                open,
                high,
                low,
                close,
                volume: Some(rng.gen_range(1000..11000) as f64),
            });
        }

        if candles.is_empty() {
            anyhow::bail!("no parseable OHLC lines in legend text");
        }
        Ok(candles)
    }
}
