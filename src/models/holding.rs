use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// A user's net quantity of one tradable symbol, derived from the order
/// ledger. Recomputed on every fetch, never persisted.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Holding {
    symbol: String,
    amount: Decimal,
}
