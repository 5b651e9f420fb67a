//! Yahoo Finance chart API client.
//!
//! Fetches raw OHLCV history and turns it into a [`PriceSeries`] in two
//! steps: deserialize the chart envelope, then coerce the quote arrays
//! into candles. JSON `null` cells become absent values, never zeros.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Candle, Interval, PriceSeries};
use crate::services::market_data::PriceProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_client(DEFAULT_BASE_URL.to_string(), reqwest::Client::new())
    }

    /// Point the provider at a different endpoint, e.g. a mock server in
    /// tests.
    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }

    async fn request_chart(
        &self,
        ticker: &str,
        period1: i64,
        period2: i64,
        interval: Interval,
    ) -> Result<ChartEnvelope, FetchError> {
        let url = format!("{}/v8/finance/chart/{ticker}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", interval.as_str().to_string()),
            ])
            .send()
            .await?;

        // Client errors still carry a JSON error body describing the
        // ticker problem, so only server errors bail out here.
        if let Err(err) = response.error_for_status_ref() {
            if response.status().is_server_error() {
                return Err(FetchError::Http(err));
            }
        }

        Ok(response.json().await?)
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    async fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<PriceSeries, FetchError> {
        if start > end {
            return Err(FetchError::InvalidDateRange { start, end });
        }

        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        // The chart API treats period2 as exclusive; shifting one day makes
        // the caller-facing end date inclusive.
        let period2 = (end + Days::new(1))
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();

        debug!(ticker, %start, %end, %interval, "requesting chart data");

        let envelope = (|| self.request_chart(ticker, period1, period2, interval))
            .retry(ExponentialBuilder::default().with_max_times(3))
            .when(is_transient)
            .notify(|err: &FetchError, dur| {
                warn!(error = %err, backoff = ?dur, "chart request failed, retrying");
            })
            .await?;

        if let Some(api_error) = envelope.chart.error {
            return Err(FetchError::Api {
                ticker: ticker.to_string(),
                message: format!("{}: {}", api_error.code, api_error.description),
            });
        }

        let result = envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                FetchError::MalformedPayload(
                    "chart response carried neither a result nor an error".to_string(),
                )
            })?;

        Ok(coerce_series(result))
    }
}

fn is_transient(err: &FetchError) -> bool {
    match err {
        FetchError::Http(inner) => {
            inner.is_timeout()
                || inner.is_connect()
                || inner.status().is_some_and(|s| s.is_server_error())
        }
        _ => false,
    }
}

/// Pair each timestamp with its OHLCV row. Rows out of ascending order or
/// repeating the previous timestamp are dropped so the series invariant
/// holds; a payload without timestamps coerces to an empty series.
fn coerce_series(result: ChartResult) -> PriceSeries {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();
    let adj_close = result
        .indicators
        .adjclose
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    let mut candles = Vec::with_capacity(timestamps.len());
    let mut last_seen: Option<DateTime<chrono::Utc>> = None;
    for (i, unix) in timestamps.into_iter().enumerate() {
        let Some(timestamp) = DateTime::from_timestamp(unix, 0) else {
            continue;
        };
        if last_seen.is_some_and(|prev| timestamp <= prev) {
            continue;
        }
        last_seen = Some(timestamp);

        let mut candle = Candle::new(timestamp);
        candle.open = cell(&quote.open, i);
        candle.high = cell(&quote.high, i);
        candle.low = cell(&quote.low, i);
        candle.close = cell(&quote.close, i);
        candle.volume = cell(&quote.volume, i);
        candle.adj_close = cell(&adj_close, i);
        candles.push(candle);
    }

    PriceSeries::new(candles)
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: ChartIndicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
    adjclose: Option<Vec<ChartAdjClose>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}
