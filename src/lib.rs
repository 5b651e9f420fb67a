//! # stockdash — stock indicator and signal engine
//!
//! Pipeline: a raw OHLCV [`PriceSeries`] flows through the indicator
//! engine into an [`EnrichedSeries`] carrying SMA 20/50/200, MACD, Signal,
//! Histogram, and RSI columns; the signal generator then reads the last
//! two rows and emits two [`SignalRecord`]s summarizing momentum. Both
//! stages are pure and stateless; fetching prices and rendering output
//! live at the edges.
//!
//! [`PriceSeries`]: models::PriceSeries
//! [`EnrichedSeries`]: models::EnrichedSeries
//! [`SignalRecord`]: models::SignalRecord

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::FetchError;
pub use indicators::build_indicators;
pub use signals::generate_trading_signals;
