//! Price data provider interface for pluggable data sources.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::FetchError;
use crate::models::{Interval, PriceSeries};

#[async_trait]
pub trait PriceProvider {
    /// Fetch historical candles for a ticker over an inclusive date range.
    async fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<PriceSeries, FetchError>;
}
