use std::collections::VecDeque;

use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::ToPrimitive};

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PricePoint {
    symbol: String,
    price: Decimal,
    change_percent: Decimal,
}

/// Latest spot prices for the tracked symbols, replaced wholesale on each
/// poll tick.
#[derive(Clone, Debug, Getters, new)]
pub struct PriceSnapshot {
    points: Vec<PricePoint>,
    fetched_at: DateTime<Local>,
}

impl PriceSnapshot {
    pub fn empty() -> Self {
        Self::new(Vec::new(), Local::now())
    }

    pub fn price_for(&self, symbol: &str) -> Option<Decimal> {
        self.points
            .iter()
            .find(|point| point.symbol() == symbol)
            .map(|point| *point.price())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Bounded rolling window of spot prices for one charted symbol. Old samples
/// fall off the front once the window is full.
#[derive(Clone, Debug)]
pub struct PriceHistory {
    samples: VecDeque<Decimal>,
    capacity: usize,
}

impl PriceHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, price: Decimal) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(price);
    }

    pub fn latest(&self) -> Option<Decimal> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Chart-friendly view of the window.
    pub fn as_chart_points(&self) -> Vec<u64> {
        self.samples
            .iter()
            .map(|price| price.to_u64().unwrap_or(0))
            .collect()
    }
}
