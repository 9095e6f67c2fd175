//! Augur - AI-assisted trading signal generation server

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod llm;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use i18n::LocaleStore;
use services::{MarketDataService, SignalService};
use std::sync::Arc;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signal_service: Arc<SignalService>,
    pub market_data: Arc<MarketDataService>,
    pub locales: Arc<LocaleStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let signal_service = Arc::new(SignalService::new(&config));
        Self {
            config: Arc::new(config),
            signal_service,
            market_data: Arc::new(MarketDataService::new()),
            locales: Arc::new(LocaleStore::new()),
        }
    }
}
