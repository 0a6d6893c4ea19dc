use std::time::Duration;

use chrono::Local;
use futures::future::join_all;
use reqwest::Client;
use tokio_stream::{Stream, StreamExt, wrappers::IntervalStream};
use tracing::warn;

use super::{binance_dto::BinanceTickerDto, error::ApiError, utils::get_json};
use crate::models::{PricePoint, PriceSnapshot};

const BASE_URL: &str = "https://api.binance.com";
pub const QUOTE_ASSET: &str = "USDT";

pub async fn ticker_24h(client: &Client, symbol: &str) -> Result<PricePoint, ApiError> {
    let url = format!("{}/api/v3/ticker/24hr?symbol={}{}", BASE_URL, symbol, QUOTE_ASSET);
    let data = get_json(client, &url).await?;
    let dto = serde_json::from_value::<BinanceTickerDto>(data)?;
    dto.to_price_point()
}

/// One poll tick: every symbol fetched concurrently, failures tolerated per
/// symbol so one bad ticker never sinks the rest of the snapshot.
pub async fn fetch_snapshot(client: &Client, symbols: &[String]) -> PriceSnapshot {
    let fetches = symbols.iter().map(|symbol| async move {
        let result = ticker_24h(client, symbol).await;
        (symbol.clone(), result)
    });

    collect_snapshot(join_all(fetches).await)
}

pub fn collect_snapshot(results: Vec<(String, Result<PricePoint, ApiError>)>) -> PriceSnapshot {
    let mut points = Vec::new();

    for (symbol, result) in results {
        match result {
            Ok(point) => points.push(point),
            Err(err) => warn!("Price fetch failed for {}: {}", symbol, err),
        }
    }

    PriceSnapshot::new(points, Local::now())
}

/// Lazy, infinite price feed. The first tick fires immediately, then one
/// snapshot per interval until the consumer drops the stream.
pub fn price_stream(
    client: Client,
    symbols: Vec<String>,
    every: Duration,
) -> impl Stream<Item = PriceSnapshot> {
    IntervalStream::new(tokio::time::interval(every)).then(move |_| {
        let client = client.clone();
        let symbols = symbols.clone();
        async move { fetch_snapshot(&client, &symbols).await }
    })
}
