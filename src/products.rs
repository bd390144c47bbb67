//! Products
//!
//! The product record as it arrives from the catalog API. The core only
//! reads the identifier, price and display fields; stock is carried for
//! display but not enforced when adding to a cart.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a product in the external catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product.
///
/// Field aliases match the catalog API wire names, which are Spanish.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,

    /// Display name.
    #[serde(alias = "nombre")]
    pub name: String,

    /// Display description.
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,

    /// Unit price in whole currency units.
    #[serde(alias = "precio")]
    pub price: Decimal,

    /// Image location, if the product has one.
    #[serde(default, alias = "url_imagen", alias = "imagen")]
    pub image_url: Option<String>,

    /// Units in stock according to the catalog at fetch time. Not enforced
    /// when adding to a cart.
    #[serde(default)]
    pub stock: Option<u32>,

    /// Category the product belongs to.
    #[serde(default, alias = "categoria_id")]
    pub category_id: Option<u64>,

    /// Colour variant identifier.
    #[serde(default, alias = "color_id")]
    pub color_id: Option<u64>,

    /// Brand name.
    #[serde(default, alias = "marca")]
    pub brand: Option<String>,
}
