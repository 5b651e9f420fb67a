//! Shared data models spanning the engine layers.

pub mod candle;
pub mod series;
pub mod signal;

pub use candle::{Candle, Interval, PriceSeries};
pub use series::{EnrichedSeries, IndicatorColumn};
pub use signal::SignalRecord;
