// src/domain/price_range.rs

use crate::domain::property::Property;

/// Price-slider bounds derived from the currently loaded listings rather
/// than a fixed constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        PriceBounds {
            min: 0.0,
            max: 5000.0,
        }
    }
}

/// Recomputes slider bounds from the listing set. Prices at or below zero
/// are ignored; when nothing usable remains the previous bounds are kept so
/// the slider never collapses. The margin is asymmetric: 10% below the
/// cheapest listing (clamped at zero) and 10% above the dearest.
pub fn derive_bounds(properties: &[Property], previous: PriceBounds) -> PriceBounds {
    let mut prices = properties
        .iter()
        .filter(|p| p.has_valid_price())
        .filter_map(|p| p.price);

    let first = match prices.next() {
        Some(price) => price,
        None => return previous,
    };
    let (raw_min, raw_max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    PriceBounds {
        min: (raw_min * 0.9).floor().max(0.0),
        max: (raw_max * 1.1).ceil(),
    }
}

/// Keeps a user's selected range when it still fits inside the new bounds;
/// otherwise the selection resets to the full range.
pub fn reconcile_selection(selection: (f64, f64), bounds: PriceBounds) -> (f64, f64) {
    let (low, high) = selection;
    if low >= bounds.min && high <= bounds.max {
        selection
    } else {
        (bounds.min, bounds.max)
    }
}
