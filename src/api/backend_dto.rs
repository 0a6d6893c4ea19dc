use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::warn;

use crate::models::{AccountBalance, CryptoOrder, InvestmentNav, OrderSide, OrderStatus};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDto {
    balance: Decimal,
    total_profit: Decimal,
    pct_change: Decimal,
}

impl BalanceDto {
    pub fn to_balance(&self) -> AccountBalance {
        AccountBalance::new(self.balance, self.total_profit, self.pct_change)
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsDto {
    crypto_currency: String,
    fiat_currency: Option<String>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct CryptoOrderDto {
    id: Option<String>,
    details: OrderDetailsDto,
    crypto_amount: Decimal,
    amount_paid: Option<Decimal>,
    is_buy_or_sell: Option<String>,
    conversion_price: Option<Decimal>,
    status: Option<String>,
    created_at: Option<String>,
}

impl CryptoOrderDto {
    pub fn to_order(&self) -> CryptoOrder {
        let symbol = self.details.crypto_currency.clone();
        let fiat = self
            .details
            .fiat_currency
            .clone()
            .unwrap_or_else(|| String::from("USD"));

        let side = self
            .is_buy_or_sell
            .as_deref()
            .and_then(|s| OrderSide::from_str(s).ok())
            .unwrap_or(OrderSide::Buy);

        // Backend reports PENDING until the ramp settles the order.
        let status = match self.status.as_deref() {
            Some("PENDING") => OrderStatus::Open,
            _ => OrderStatus::Completed,
        };

        let created_at = self.created_at.as_deref().and_then(parse_timestamp);

        CryptoOrder::new(
            self.id.clone().unwrap_or_default(),
            format!("{}/{}", symbol, fiat),
            symbol,
            side,
            self.crypto_amount,
            self.amount_paid.unwrap_or(Decimal::ZERO),
            self.conversion_price,
            status,
            created_at,
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDto {
    amount: Decimal,
    created_at: String,
}

impl InvestmentDto {
    pub fn to_nav(&self) -> Option<InvestmentNav> {
        let date = parse_timestamp(&self.created_at)?;
        Some(InvestmentNav::new(date.format("%a").to_string(), self.amount))
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(err) => {
            warn!("Failed to parse timestamp '{}': {}", value, err);
            None
        }
    }
}
