//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(12) - EMA(26)
//! Signal = EMA(9) of MACD
//! Histogram = MACD - Signal

use crate::models::EnrichedSeries;

use super::{
    closes, ema, sub_columns, COL_HISTOGRAM, COL_MACD, COL_SIGNAL, MACD_FAST_SPAN,
    MACD_SIGNAL_SPAN, MACD_SLOW_SPAN,
};

/// Compute the MACD line, signal line, and histogram for a close column.
pub fn macd(close: &[Option<f64>]) -> (Vec<Option<f64>>, Vec<Option<f64>>, Vec<Option<f64>>) {
    let fast = ema(close, MACD_FAST_SPAN);
    let slow = ema(close, MACD_SLOW_SPAN);
    let macd_line = sub_columns(&fast, &slow);
    let signal_line = ema(&macd_line, MACD_SIGNAL_SPAN);
    let histogram = sub_columns(&macd_line, &signal_line);
    (macd_line, signal_line, histogram)
}

/// Append the `MACD`, `Signal`, and `Histogram` columns.
pub fn add_macd(series: &mut EnrichedSeries) {
    let close = closes(series);
    let (macd_line, signal_line, histogram) = macd(&close);
    series.push_column(COL_MACD, macd_line);
    series.push_column(COL_SIGNAL, signal_line);
    series.push_column(COL_HISTOGRAM, histogram);
}
