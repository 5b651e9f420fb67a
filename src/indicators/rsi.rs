//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

use crate::models::EnrichedSeries;

use super::{closes, COL_RSI};

/// Relative strength index over a close column.
///
/// Deltas are undefined at row 0 and wherever a close is absent; the
/// gain/loss averages are trailing simple means over exactly `period`
/// deltas and require every delta in the window to be present, so the
/// first `period` rows carry no value. When the average loss is exactly
/// zero the ratio is never formed: the cell is pinned at 100 rather than
/// dividing by zero.
pub fn rsi(close: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let deltas: Vec<Option<f64>> = (0..close.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            match (close[i], close[i - 1]) {
                (Some(curr), Some(prev)) => Some(curr - prev),
                _ => None,
            }
        })
        .collect();

    (0..close.len())
        .map(|i| {
            if i < period {
                return None;
            }
            let window = &deltas[i + 1 - period..=i];
            if window.iter().any(|d| d.is_none()) {
                return None;
            }
            let mut gain_sum = 0.0;
            let mut loss_sum = 0.0;
            for delta in window.iter().flatten() {
                gain_sum += delta.max(0.0);
                loss_sum += (-delta).max(0.0);
            }
            let avg_gain = gain_sum / period as f64;
            let avg_loss = loss_sum / period as f64;

            if avg_loss == 0.0 {
                return Some(100.0);
            }
            let rs = avg_gain / avg_loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        })
        .collect()
}

/// Append the `RSI` column.
pub fn add_rsi(series: &mut EnrichedSeries, period: usize) {
    let close = closes(series);
    series.push_column(COL_RSI, rsi(&close, period));
}
