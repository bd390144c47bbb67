//! Pricing
//!
//! The fixed business-rule table for checkout totals: flat tax rate, flat
//! shipping fee waived above a subtotal threshold. Amounts are currency-unit
//! agnostic; the policy holds plain decimal values.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::items::{self, LineItem};

/// The pricing rules applied at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    /// Fractional tax rate applied to the subtotal.
    pub tax_rate: Decimal,

    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Decimal,

    /// Flat shipping fee charged below the threshold.
    pub shipping_fee: Decimal,
}

impl Default for PricingPolicy {
    /// The storefront's fixed policy: 16% tax, free shipping from 1000,
    /// a flat fee of 50 below that.
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(16, 2),
            free_shipping_threshold: Decimal::from(1000),
            shipping_fee: Decimal::from(50),
        }
    }
}

/// Totals derived from a cart snapshot at checkout time.
///
/// Never stored; always recomputed from the authoritative snapshot so a
/// stale figure cannot be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotal {
    /// Sum of unit price times quantity over the snapshot.
    pub subtotal: Decimal,

    /// Tax on the subtotal, rounded to whole currency units.
    pub tax: Decimal,

    /// Shipping fee after applying the free-shipping threshold.
    pub shipping_fee: Decimal,

    /// Final payable amount.
    pub grand_total: Decimal,
}

impl OrderTotal {
    /// Derives the order totals for a subtotal under the given policy.
    ///
    /// Tax is rounded half away from zero to whole currency units.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, policy: &PricingPolicy) -> Self {
        let tax = (subtotal * policy.tax_rate)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let shipping_fee = if subtotal >= policy.free_shipping_threshold {
            Decimal::ZERO
        } else {
            policy.shipping_fee
        };

        Self {
            subtotal,
            tax,
            shipping_fee,
            grand_total: subtotal + tax + shipping_fee,
        }
    }

    /// Derives the order totals for a cart snapshot under the given policy.
    #[must_use]
    pub fn from_items(snapshot: &[LineItem], policy: &PricingPolicy) -> Self {
        Self::from_subtotal(items::subtotal(snapshot), policy)
    }
}

#[cfg(test)]
mod tests {
    use crate::products::{Product, ProductId};

    use super::*;

    fn totals(subtotal: i64) -> OrderTotal {
        OrderTotal::from_subtotal(Decimal::from(subtotal), &PricingPolicy::default())
    }

    #[test]
    fn below_threshold_charges_shipping() {
        let total = totals(999);

        assert_eq!(total.tax, Decimal::from(160));
        assert_eq!(total.shipping_fee, Decimal::from(50));
        assert_eq!(total.grand_total, Decimal::from(1209));
    }

    #[test]
    fn at_threshold_shipping_is_free() {
        let total = totals(1000);

        assert_eq!(total.tax, Decimal::from(160));
        assert_eq!(total.shipping_fee, Decimal::ZERO);
        assert_eq!(total.grand_total, Decimal::from(1160));
    }

    #[test]
    fn tax_rounds_to_whole_units() {
        // 3 * 0.16 = 0.48 rounds down, 10 * 0.16 = 1.60 rounds up,
        // 34 * 0.16 = 5.44 rounds down again.
        assert_eq!(totals(3).tax, Decimal::ZERO);
        assert_eq!(totals(10).tax, Decimal::from(2));
        assert_eq!(totals(34).tax, Decimal::from(5));
    }

    #[test]
    fn zero_subtotal_still_charges_the_flat_fee() {
        let total = totals(0);

        assert_eq!(total.tax, Decimal::ZERO);
        assert_eq!(total.shipping_fee, Decimal::from(50));
        assert_eq!(total.grand_total, Decimal::from(50));
    }

    #[test]
    fn from_items_matches_subtotal_derivation() {
        let product = Product {
            id: ProductId(1),
            name: "Playera".to_string(),
            description: None,
            price: Decimal::from(333),
            image_url: None,
            stock: None,
            category_id: None,
            color_id: None,
            brand: None,
        };

        let snapshot = [LineItem::from_product(&product, 3)];

        assert_eq!(
            OrderTotal::from_items(&snapshot, &PricingPolicy::default()),
            totals(999)
        );
    }
}
