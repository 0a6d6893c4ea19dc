use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One bar of the investment NAV chart: recorded amount keyed by the weekday
/// it was created.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct InvestmentNav {
    label: String,
    amount: Decimal,
}
