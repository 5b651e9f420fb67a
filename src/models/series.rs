//! Price series enriched with computed indicator columns.

use serde::{Deserialize, Serialize};

use super::candle::Candle;

/// A named indicator column, index-aligned with the candles it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// The input candles plus appended indicator columns.
///
/// Columns keep their insertion order for display, but correctness-wise the
/// series is a mapping from column name to cell vector: every column has
/// exactly one cell per candle, and lookups go through [`column`].
///
/// [`column`]: EnrichedSeries::column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSeries {
    candles: Vec<Candle>,
    columns: Vec<IndicatorColumn>,
}

impl EnrichedSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self {
            candles,
            columns: Vec::new(),
        }
    }

    /// Append a computed column. The column must be index-aligned 1:1 with
    /// the candles.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) {
        let name = name.into();
        debug_assert_eq!(
            values.len(),
            self.candles.len(),
            "column {name} must be index-aligned with the candles"
        );
        self.columns.push(IndicatorColumn { name, values });
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cells of a column by name, or `None` for an unknown column.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Value of `name` in the last row, flattened: `None` means either the
    /// column is unknown, the series is empty, or the cell itself is empty.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.column(name)?.last().copied().flatten()
    }

    /// Value of `name` in the second-to-last row. With a single row this is
    /// the last row again, so latest/previous comparisons degrade to a
    /// self-comparison rather than an out-of-bounds lookup.
    pub fn previous(&self, name: &str) -> Option<f64> {
        let cells = self.column(name)?;
        match cells.len() {
            0 => None,
            1 => cells[0],
            n => cells[n - 2],
        }
    }
}
