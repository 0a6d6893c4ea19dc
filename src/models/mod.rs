pub mod balance;
pub mod equity;
pub mod holding;
pub mod insight;
pub mod investment;
pub mod order;
pub mod price;

pub use balance::AccountBalance;
pub use equity::EquitySnapshot;
pub use holding::Holding;
pub use insight::MarketInsight;
pub use investment::InvestmentNav;
pub use order::{CryptoOrder, OrderSide, OrderStatus};
pub use price::{PriceHistory, PricePoint, PriceSnapshot};
