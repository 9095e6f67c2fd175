pub mod extractor;
pub mod market_data;
pub mod markdown;
pub mod prompt;
pub mod signal_service;

pub use market_data::{MarketDataOutcome, MarketDataService};
pub use signal_service::{SignalOutcome, SignalService};
