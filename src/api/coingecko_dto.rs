use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::MarketInsight;

#[derive(Debug, Deserialize, Getters, new)]
pub struct CoinMarketDto {
    name: String,
    symbol: String,
    current_price: Option<Decimal>,
    price_change_percentage_24h: Option<Decimal>,
}

impl CoinMarketDto {
    pub fn to_insight(&self) -> MarketInsight {
        let ticker = self.symbol.to_uppercase();
        let price = self
            .current_price
            .map(|p| format!("${}", p.round_dp(2)))
            .unwrap_or_else(|| String::from("n/a"));
        let change = self
            .price_change_percentage_24h
            .map(|c| format!("{}%", c.round_dp(2)))
            .unwrap_or_else(|| String::from("n/a"));

        MarketInsight::new(
            format!("{} ({}) Market Update", self.name, ticker),
            format!("Price: {} | 24h Change: {}", price, change),
            vec![String::from("Market"), ticker],
        )
    }
}
