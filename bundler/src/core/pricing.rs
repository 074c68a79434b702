//! Bundle pricing

use shared::Product;
use crate::types::BundlePricing;

/// Round to two decimal places
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Usable discount percentage: missing, negative or non-finite values mean no discount
pub fn effective_discount(discount_percent: f64) -> f64 {
    if discount_percent.is_finite() {
        discount_percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// A positive, finite fixed price overrides the percentage discount
pub fn fixed_override(fixed_price: Option<f64>) -> Option<f64> {
    fixed_price.filter(|price| price.is_finite() && *price > 0.0)
}

/// Compute the raw total and final price for a set of resolved items
///
/// When a fixed price applies the discount percentage no longer affects the
/// result, although callers still display it.
pub fn price(items: &[Product], discount_percent: f64, fixed_price: Option<f64>) -> BundlePricing {
    let total_price = round_to_cents(items.iter().map(|p| p.price).sum());

    let bundle_price = match fixed_override(fixed_price) {
        Some(fixed) => fixed,
        None => round_to_cents(total_price * (1.0 - effective_discount(discount_percent) / 100.0)),
    };

    BundlePricing {
        total_price,
        bundle_price,
    }
}
