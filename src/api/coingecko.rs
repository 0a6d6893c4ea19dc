use reqwest::Client;

use super::{coingecko_dto::CoinMarketDto, error::ApiError, utils::{get_json, parse_array}};
use crate::models::MarketInsight;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub async fn market_insights(
    client: &Client,
    vs_currency: &str,
    count: usize,
) -> Result<Vec<MarketInsight>, ApiError> {
    let url = format!(
        "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1",
        BASE_URL, vs_currency, count
    );
    let data = get_json(client, &url).await?;
    let coins = parse_array::<CoinMarketDto>(data, "coins/markets")?;

    Ok(coins.iter().map(CoinMarketDto::to_insight).collect())
}
