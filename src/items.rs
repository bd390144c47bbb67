//! Items
//!
//! A line item is one product plus a quantity inside a cart. Line items are
//! the wire form of the persisted cart snapshot, so they carry the display
//! fields a rehydrated session needs without refetching the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// One product and its quantity inside a cart.
///
/// Uniqueness invariant: a cart holds at most one line item per product id;
/// adding the same product again merges into the existing quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier of the product this line refers to.
    pub product_id: ProductId,

    /// Display name captured at add time.
    pub name: String,

    /// Unit price captured at add time.
    pub unit_price: Decimal,

    /// Number of units, always at least 1 for an item in a cart.
    pub quantity: u32,

    /// Image location captured at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Display description captured at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LineItem {
    /// Creates a line item from a catalog product and a quantity.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image_url: product.image_url.clone(),
            description: product.description.clone(),
        }
    }

    /// The amount this line contributes to the cart subtotal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Calculates the subtotal of a list of line items.
///
/// An empty list has a subtotal of zero; there is no currency to determine
/// because amounts are currency-unit agnostic.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}
