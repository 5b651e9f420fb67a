//! Technical indicator calculations.
//!
//! Every function here is a pure transformation over optional-valued
//! columns: an absent cell (`None`) propagates through sums, differences,
//! and ratios instead of leaking zeros or NaN into downstream math.

pub mod macd;
pub mod rsi;
pub mod sma;

mod ema;

pub use ema::ema;
pub use macd::add_macd;
pub use rsi::add_rsi;
pub use sma::add_sma;

use crate::models::{EnrichedSeries, PriceSeries};

/// Trailing windows for the simple moving average columns.
pub const SMA_WINDOWS: [usize; 3] = [20, 50, 200];

/// MACD exponential spans: fast, slow, signal.
pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// RSI lookback period.
pub const RSI_PERIOD: usize = 14;

pub const COL_MACD: &str = "MACD";
pub const COL_SIGNAL: &str = "Signal";
pub const COL_HISTOGRAM: &str = "Histogram";
pub const COL_RSI: &str = "RSI";

/// Column name for an SMA window, e.g. `SMA 20`.
pub fn sma_column_name(window: usize) -> String {
    format!("SMA {window}")
}

/// Add all supported technical indicators to the series.
///
/// The result carries the input candles untouched plus seven appended
/// columns (`SMA 20`, `SMA 50`, `SMA 200`, `MACD`, `Signal`, `Histogram`,
/// `RSI`), each index-aligned 1:1 with the input. An empty series yields an
/// empty enriched series with the same column set; a series with no close
/// data yields all-empty columns. Neither case is an error.
pub fn build_indicators(series: &PriceSeries) -> EnrichedSeries {
    let mut enriched = EnrichedSeries::new(series.candles().to_vec());
    add_sma(&mut enriched, &SMA_WINDOWS);
    add_macd(&mut enriched);
    add_rsi(&mut enriched, RSI_PERIOD);
    enriched
}

/// Elementwise difference of two optional-valued columns. Any absent
/// operand yields an absent result.
pub(crate) fn sub_columns(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect()
}

pub(crate) fn closes(series: &EnrichedSeries) -> Vec<Option<f64>> {
    series.candles().iter().map(|c| c.close).collect()
}
