use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Cash balance as reported by the backend. Authoritative; only ever
/// replaced by a re-fetch, never adjusted client-side.
#[derive(Clone, Copy, Debug, Default, Getters, new)]
pub struct AccountBalance {
    balance: Decimal,
    total_profit: Decimal,
    pct_change: Decimal,
}
