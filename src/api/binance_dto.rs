use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{binance::QUOTE_ASSET, error::ApiError};
use crate::models::PricePoint;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct BinanceTickerDto {
    symbol: String,
    last_price: String,
    price_change_percent: String,
}

impl BinanceTickerDto {
    pub fn to_price_point(&self) -> Result<PricePoint, ApiError> {
        let price = self.last_price.parse::<Decimal>()?;
        let change_percent = self.price_change_percent.parse::<Decimal>()?;
        let symbol = self.symbol.trim_end_matches(QUOTE_ASSET).to_string();

        Ok(PricePoint::new(symbol, price, change_percent))
    }
}
