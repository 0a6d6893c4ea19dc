use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Derived headline figure: cash plus mark-to-market value of all holdings.
/// Percent change is measured against the previous in-memory snapshot, so the
/// trend is session-relative.
#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct EquitySnapshot {
    total_equity: Decimal,
    percent_change: Decimal,
}

impl EquitySnapshot {
    pub fn is_gain(&self) -> bool {
        self.percent_change >= Decimal::ZERO
    }
}
