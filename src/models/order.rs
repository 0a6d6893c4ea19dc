use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum OrderSide {
    #[strum(serialize = "BUY", to_string = "Buy")]
    Buy,
    #[strum(serialize = "SELL", to_string = "Sell")]
    Sell,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum OrderStatus {
    Open,
    Completed,
}

/// One settled or pending entry of the user's crypto order ledger.
#[derive(Clone, Debug, Getters, new)]
pub struct CryptoOrder {
    id: String,
    pair: String,
    symbol: String,
    side: OrderSide,
    quantity: Decimal,
    amount_paid: Decimal,
    price: Option<Decimal>,
    status: OrderStatus,
    created_at: Option<DateTime<Utc>>,
}

impl CryptoOrder {
    /// Buys add to a holding, sells subtract.
    pub fn signed_quantity(&self) -> Decimal {
        match self.side {
            OrderSide::Buy => self.quantity,
            OrderSide::Sell => -self.quantity,
        }
    }

    pub fn short_id(&self) -> String {
        format!("BG-{}", self.id.chars().take(3).collect::<String>())
    }
}
