//! Turns the latest indicator rows into short human-readable signals.

use crate::indicators::{COL_MACD, COL_RSI, COL_SIGNAL};
use crate::models::{EnrichedSeries, SignalRecord};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Summarize the latest momentum state as exactly two records, in fixed
/// order: RSI momentum first, MACD trend second.
///
/// Only the last two rows matter. With a single row the previous row is
/// the latest row itself, so the crossover branches cannot fire and the
/// summary falls back to the plain above/below wording.
pub fn generate_trading_signals(series: &EnrichedSeries) -> Vec<SignalRecord> {
    vec![rsi_momentum(series), macd_trend(series)]
}

fn rsi_momentum(series: &EnrichedSeries) -> SignalRecord {
    let summary = match series.latest(COL_RSI) {
        None => "RSI data is not available yet.".to_string(),
        Some(rsi) if rsi >= RSI_OVERBOUGHT => {
            format!("RSI is at {rsi:.1}, signaling the stock may be overbought.")
        }
        Some(rsi) if rsi <= RSI_OVERSOLD => {
            format!("RSI is at {rsi:.1}, signaling the stock may be oversold.")
        }
        Some(rsi) => format!("RSI is at {rsi:.1}, indicating neutral momentum."),
    };
    SignalRecord::new("RSI Momentum", summary)
}

fn macd_trend(series: &EnrichedSeries) -> SignalRecord {
    let latest = (series.latest(COL_MACD), series.latest(COL_SIGNAL));
    let (macd, signal) = match latest {
        (Some(macd), Some(signal)) => (macd, signal),
        _ => {
            return SignalRecord::new("MACD Trend", "MACD data is not available yet.");
        }
    };

    // A row exactly on the boundary (MACD == Signal) is not "above": the
    // strict comparisons push it into the bearish default branch.
    let prev_macd = series.previous(COL_MACD);
    let prev_signal = series.previous(COL_SIGNAL);
    let was_at_or_below = matches!((prev_macd, prev_signal), (Some(m), Some(s)) if m <= s);
    let was_at_or_above = matches!((prev_macd, prev_signal), (Some(m), Some(s)) if m >= s);

    let summary = if macd > signal && was_at_or_below {
        "MACD just crossed above its signal line, a bullish crossover."
    } else if macd < signal && was_at_or_above {
        "MACD just crossed below its signal line, a bearish crossover."
    } else if macd > signal {
        "MACD is above its signal line, suggesting bullish momentum."
    } else {
        "MACD is at or below its signal line, suggesting bearish momentum."
    };
    SignalRecord::new("MACD Trend", summary)
}
