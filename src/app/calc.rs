use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CryptoOrder, EquitySnapshot, Holding, PriceSnapshot};

/// Reduce the order ledger into per-symbol quantities by net signed
/// summation: buys add, sells subtract. Symbols with no remaining quantity
/// are dropped.
pub fn reduce_holdings(orders: &[CryptoOrder]) -> Vec<Holding> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();

    for order in orders {
        *totals.entry(order.symbol().clone()).or_insert(Decimal::ZERO) += order.signed_quantity();
    }

    totals
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(symbol, amount)| Holding::new(symbol, amount))
        .collect()
}

/// Equity is cash plus holdings marked to the latest prices. A holding whose
/// symbol has no live price yet contributes nothing this round; the figure is
/// partial rather than blocked.
///
/// The first computation has no baseline, so its percent change is 0%, as is
/// any computation against a zero previous equity.
pub fn compute_equity(
    cash: Decimal,
    holdings: &[Holding],
    prices: &PriceSnapshot,
    previous: Option<Decimal>,
) -> EquitySnapshot {
    let mut equity = cash;

    for holding in holdings {
        if let Some(price) = prices.price_for(holding.symbol()) {
            equity += *holding.amount() * price;
        }
    }

    let percent_change = match previous {
        Some(prev) if !prev.is_zero() => ((equity - prev) / prev) * Decimal::ONE_HUNDRED,
        _ => Decimal::ZERO,
    };

    EquitySnapshot::new(equity, percent_change.round_dp(2))
}
