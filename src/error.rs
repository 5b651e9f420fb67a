//! Error types for the data-fetch edge.
//!
//! The indicator and signal cores never fail: insufficient data, a missing
//! close column, and an empty series are all ordinary values there. Errors
//! only exist where the process touches the network.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chart api error for {ticker}: {message}")]
    Api { ticker: String, message: String },

    #[error("malformed chart payload: {0}")]
    MalformedPayload(String),
}
