//! Trading signal generation from enriched price data.

pub mod generator;

pub use generator::{generate_trading_signals, RSI_OVERBOUGHT, RSI_OVERSOLD};
