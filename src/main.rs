//! Terminal dashboard: fetch a ticker's history, enrich it with the
//! indicator columns, and print the latest state plus trading signals.
//!
//! Usage: `stockdash [TICKER] [LOOKBACK_DAYS]`
//!
//! | Variable                  | Default | Description                    |
//! |---------------------------|---------|--------------------------------|
//! | `STOCKDASH_TICKER`        | `SPY`   | Instrument to load             |
//! | `STOCKDASH_LOOKBACK_DAYS` | `365`   | History window in days         |
//! | `STOCKDASH_INTERVAL`      | `1d`    | `1d`, `1wk`, or `1mo`          |
//! | `STOCKDASH_ENDPOINT`      | —       | Alternate chart API base URL   |
//! | `RUST_LOG`                | `info`  | Tracing filter                 |

use chrono::{Duration, Utc};
use tracing::{info, warn};

use stockdash::config::{Config, SUPPORTED_TICKERS};
use stockdash::indicators::{self, build_indicators};
use stockdash::logging::init_logging;
use stockdash::models::EnrichedSeries;
use stockdash::services::{PriceProvider, YahooFinanceProvider};
use stockdash::signals::generate_trading_signals;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let mut config = Config::from_env();
    let mut args = std::env::args().skip(1);
    if let Some(ticker) = args.next() {
        config.ticker = ticker.to_uppercase();
    }
    if let Some(days) = args.next() {
        config.lookback_days = days.parse()?;
    }

    if !SUPPORTED_TICKERS.contains(&config.ticker.as_str()) {
        warn!(ticker = %config.ticker, "ticker is not in the supported list, trying anyway");
    }

    let end = Utc::now().date_naive();
    let start = end - Duration::days(config.lookback_days);
    info!(ticker = %config.ticker, %start, %end, interval = %config.interval, "loading price data");

    let provider = match &config.endpoint {
        Some(endpoint) => {
            YahooFinanceProvider::with_client(endpoint.clone(), reqwest::Client::new())
        }
        None => YahooFinanceProvider::new(),
    };

    let series = provider
        .fetch(&config.ticker, start, end, config.interval)
        .await?;

    if series.is_empty() {
        warn!(ticker = %config.ticker, "no data returned for the selected date range");
        return Ok(());
    }

    println!("\n{} — {} rows ({} to {})", config.ticker, series.len(), start, end);
    if let Some(latest) = series.last() {
        println!("  Latest Close:  {}", format_price(latest.close));
        println!("  Latest Open:   {}", format_price(latest.open));
        println!("  Latest Volume: {}", format_volume(latest.volume));
    }

    let enriched = build_indicators(&series);

    println!("\nTrading Signals");
    for signal in generate_trading_signals(&enriched) {
        println!("  {}: {}", signal.title, signal.summary);
    }

    println!("\nRecent Indicators");
    print_tail(&enriched, 10);

    Ok(())
}

fn print_tail(enriched: &EnrichedSeries, rows: usize) {
    let columns = [
        indicators::COL_MACD,
        indicators::COL_SIGNAL,
        indicators::COL_HISTOGRAM,
        indicators::COL_RSI,
    ];
    print!("  {:<12} {:>10}", "Date", "Close");
    for name in columns {
        print!(" {name:>10}");
    }
    println!();

    let start = enriched.len().saturating_sub(rows);
    for i in start..enriched.len() {
        let candle = &enriched.candles()[i];
        print!(
            "  {:<12} {:>10}",
            candle.timestamp.format("%Y-%m-%d").to_string(),
            format_cell(candle.close)
        );
        for name in columns {
            let value = enriched.column(name).and_then(|cells| cells[i]);
            print!(" {:>10}", format_cell(value));
        }
        println!();
    }
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "-".to_string(),
    }
}

fn format_volume(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}
