//! Multi-timeframe dataset assembly with tiered fallback.

use crate::config::MAX_CANDLE_COUNT;
use crate::sources::{LegendScrapeSource, SyntheticSource, WidgetExportSource, WidgetSession};
use crate::types::{Candle, MultiTimeframeDataset, Timeframe, TIMEFRAMES};
use tracing::{debug, info, warn};

/// Where a timeframe's candles ultimately came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    WidgetExport,
    LegendScrape,
    Synthetic,
}

/// Assembled dataset plus whether any timeframe fell through to the
/// synthetic generator ("demo data" in the dashboard).
#[derive(Debug, Clone)]
pub struct MarketDataOutcome {
    pub dataset: MultiTimeframeDataset,
    pub demo: bool,
}

/// Builds per-request datasets. Stateless; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct MarketDataService;

impl MarketDataService {
    pub fn new() -> Self {
        Self
    }

    /// Build a dataset for all four timeframes. Cannot fail: each timeframe
    /// tries widget export, then legend scrape, then the synthetic walk.
    pub fn convert_to_multi_timeframe_data(
        &self,
        symbol: &str,
        candle_count: usize,
        session: &WidgetSession,
    ) -> MarketDataOutcome {
        let candle_count = candle_count.clamp(1, MAX_CANDLE_COUNT);
        info!("Extracting chart data for {} ({} candles)", symbol, candle_count);

        let mut dataset = MultiTimeframeDataset::new(symbol);
        let mut demo = false;

        for timeframe in TIMEFRAMES {
            let (candles, tier) = self.fetch_timeframe(session, timeframe, candle_count);
            debug!(
                "{}: {} candles for {} via {:?}",
                symbol,
                candles.len(),
                timeframe.label(),
                tier
            );
            demo |= tier == Tier::Synthetic;
            dataset.timeframes.insert(timeframe, candles);
        }

        info!(
            "Chart data extraction completed for {}{}",
            symbol,
            if demo { " (with synthetic data)" } else { "" }
        );

        MarketDataOutcome { dataset, demo }
    }

    fn fetch_timeframe(
        &self,
        session: &WidgetSession,
        timeframe: Timeframe,
        count: usize,
    ) -> (Vec<Candle>, Tier) {
        if !session.is_available() {
            return (SyntheticSource::candles(timeframe, count), Tier::Synthetic);
        }

        if let Some(payload) = session.export(timeframe) {
            match WidgetExportSource::candles(payload, count) {
                Ok(candles) => return (candles, Tier::WidgetExport),
                Err(e) => warn!("Widget export failed for {}: {}", timeframe.label(), e),
            }
        }

        if let Some(lines) = session.legend(timeframe) {
            match LegendScrapeSource::candles(lines, timeframe, count) {
                Ok(candles) => return (candles, Tier::LegendScrape),
                Err(e) => warn!("Legend scrape failed for {}: {}", timeframe.label(), e),
            }
        }

        (SyntheticSource::candles(timeframe, count), Tier::Synthetic)
    }
}
