//! Runtime configuration for the dashboard binary.
//!
//! Indicator parameters are fixed constants in `indicators`; only the
//! collaborator-facing knobs (ticker, lookback, interval, endpoint) are
//! configurable, via `STOCKDASH_*` environment variables.

use crate::models::Interval;

pub const DEFAULT_TICKER: &str = "SPY";
pub const SUPPORTED_TICKERS: [&str; 6] = ["SPY", "NVO", "AMD", "GLD", "TSLA", "INTC"];
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

#[derive(Debug, Clone)]
pub struct Config {
    pub ticker: String,
    pub lookback_days: i64,
    pub interval: Interval,
    pub endpoint: Option<String>,
}

impl Config {
    /// Build a config from the environment, falling back to the defaults.
    /// Unparseable values are ignored rather than fatal.
    pub fn from_env() -> Self {
        let ticker = std::env::var("STOCKDASH_TICKER").unwrap_or_else(|_| DEFAULT_TICKER.to_string());
        let lookback_days = std::env::var("STOCKDASH_LOOKBACK_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|days: &i64| *days > 0)
            .unwrap_or(DEFAULT_LOOKBACK_DAYS);
        let interval = std::env::var("STOCKDASH_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Interval::Daily);
        let endpoint = std::env::var("STOCKDASH_ENDPOINT").ok();

        Self {
            ticker,
            lookback_days,
            interval,
            endpoint,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            interval: Interval::Daily,
            endpoint: None,
        }
    }
}

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    std::env::var("STOCKDASH_ENV").unwrap_or_else(|_| "development".to_string())
}
