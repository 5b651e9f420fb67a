//! SMA (Simple Moving Average) indicator

use crate::models::EnrichedSeries;

use super::{closes, sma_column_name};

/// Trailing simple moving average with a minimum of one observation.
///
/// At row i the cell is the arithmetic mean of the present closes in the
/// window of size `window` ending at i. Before the window fills, the mean
/// runs over the rows seen so far, so row 0 simply echoes close 0. A window
/// with no present close at all yields an absent cell.
pub fn sma(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let present: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
            if present.is_empty() {
                None
            } else {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            }
        })
        .collect()
}

/// Append one `SMA {w}` column per requested window.
pub fn add_sma(series: &mut EnrichedSeries, windows: &[usize]) {
    let close = closes(series);
    for &window in windows {
        series.push_column(sma_column_name(window), sma(&close, window));
    }
}
