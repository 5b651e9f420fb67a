//! Numeric regression tests for the indicator engine.

use chrono::DateTime;

use stockdash::indicators::{self, build_indicators, ema};
use stockdash::models::{Candle, PriceSeries};

fn series_from_cells(closes: &[Option<f64>]) -> PriceSeries {
    let candles = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let mut candle = Candle::new(
                DateTime::from_timestamp(86_400 * (i as i64 + 1), 0).expect("valid timestamp"),
            );
            candle.close = *close;
            candle
        })
        .collect();
    PriceSeries::new(candles)
}

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let cells: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();
    series_from_cells(&cells)
}

const ALL_COLUMNS: [&str; 7] = [
    "SMA 20",
    "SMA 50",
    "SMA 200",
    "MACD",
    "Signal",
    "Histogram",
    "RSI",
];

#[test]
fn row_count_and_index_are_preserved() {
    for len in [0usize, 1, 5, 60] {
        let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);
        let enriched = build_indicators(&series);

        assert_eq!(enriched.len(), series.len());
        for (input, output) in series.candles().iter().zip(enriched.candles()) {
            assert_eq!(input.timestamp, output.timestamp);
        }
        for name in ALL_COLUMNS {
            let column = enriched.column(name).unwrap_or_else(|| panic!("missing column {name}"));
            assert_eq!(column.len(), len, "column {name} must be index-aligned");
        }
    }
}

#[test]
fn empty_input_keeps_the_full_column_set() {
    let enriched = build_indicators(&PriceSeries::default());
    assert!(enriched.is_empty());
    let names: Vec<&str> = enriched.column_names().collect();
    assert_eq!(names, ALL_COLUMNS);
}

#[test]
fn sma_uses_min_periods_of_one() {
    let closes: Vec<f64> = (1..=25).map(|i| i as f64).collect();
    let series = series_from_closes(&closes);
    let enriched = build_indicators(&series);
    let sma20 = enriched.column("SMA 20").expect("SMA 20 column");

    // Row 0 echoes the first close; row w-1 is the exact mean of the first
    // w closes.
    assert_eq!(sma20[0], Some(closes[0]));
    let expected = closes[..20].iter().sum::<f64>() / 20.0;
    assert_eq!(sma20[19], Some(expected));

    // Before the window fills, the mean runs over the rows seen so far.
    let expected_partial = closes[..5].iter().sum::<f64>() / 5.0;
    assert_eq!(sma20[4], Some(expected_partial));
}

#[test]
fn sma_skips_interior_gaps() {
    let cells = vec![Some(1.0), None, Some(3.0)];
    let series = series_from_cells(&cells);
    let enriched = build_indicators(&series);
    let sma20 = enriched.column("SMA 20").expect("SMA 20 column");

    assert_eq!(sma20[0], Some(1.0));
    assert_eq!(sma20[1], Some(1.0));
    assert_eq!(sma20[2], Some(2.0));
}

#[test]
fn constant_series_macd_converges_to_zero() {
    let series = series_from_closes(&[250.0; 100]);
    let enriched = build_indicators(&series);

    for name in ["MACD", "Signal", "Histogram"] {
        let column = enriched.column(name).expect("macd column");
        let last = column.last().copied().flatten().expect("defined cell");
        assert!(
            last.abs() < 1e-9,
            "{name} should converge to 0 on a constant series, got {last}"
        );
    }
}

#[test]
fn ema_resumes_after_a_gap() {
    let cells = vec![Some(1.0), None, Some(3.0)];
    let out = ema(&cells, 12);
    let alpha = 2.0 / 13.0;

    assert_eq!(out[0], Some(1.0));
    assert_eq!(out[1], None);
    assert_eq!(out[2], Some(alpha * 3.0 + (1.0 - alpha) * 1.0));
}

#[test]
fn rsi_warmup_rows_carry_no_value() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let series = series_from_closes(&closes);
    let enriched = build_indicators(&series);
    let rsi = enriched.column("RSI").expect("RSI column");

    for (i, cell) in rsi.iter().enumerate().take(indicators::RSI_PERIOD) {
        assert_eq!(*cell, None, "row {i} is inside the warm-up window");
    }
    assert!(rsi[indicators::RSI_PERIOD].is_some());
}

#[test]
fn rsi_is_bounded_when_defined() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 1.3).sin() * 8.0).collect();
    let series = series_from_closes(&closes);
    let enriched = build_indicators(&series);
    let rsi = enriched.column("RSI").expect("RSI column");

    for value in rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value), "RSI out of bounds: {value}");
    }
}

#[test]
fn rsi_pins_at_100_when_losses_are_zero() {
    // Non-decreasing closes: avg_loss is exactly 0, which must yield 100
    // rather than a division error or infinity.
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + (i / 2) as f64).collect();
    let series = series_from_closes(&closes);
    let enriched = build_indicators(&series);
    let rsi = enriched.column("RSI").expect("RSI column");

    for cell in rsi.iter().skip(indicators::RSI_PERIOD) {
        assert_eq!(*cell, Some(100.0));
    }
}

#[test]
fn missing_close_column_degrades_to_all_no_value() {
    let cells = vec![None; 10];
    let series = series_from_cells(&cells);
    let enriched = build_indicators(&series);

    for name in ALL_COLUMNS {
        let column = enriched.column(name).expect("column present");
        assert!(
            column.iter().all(Option::is_none),
            "column {name} should be empty without close data"
        );
    }
}

#[test]
fn engine_is_idempotent() {
    let closes: Vec<f64> = (0..120).map(|i| 300.0 + (i as f64 * 0.9).cos() * 12.0).collect();
    let series = series_from_closes(&closes);

    let first = build_indicators(&series);
    let second = build_indicators(&series);
    assert_eq!(first, second);
}
