//! Market data providers feeding the indicator engine.

pub mod market_data;
pub mod yahoo;

pub use market_data::PriceProvider;
pub use yahoo::YahooFinanceProvider;
