//! Fixtures
//!
//! A small sample catalog in the catalog API's wire shape, used by the demo
//! and by tests that want realistic products without an HTTP round trip.

use serde_json::json;
use thiserror::Error;

use crate::products::Product;

/// Errors that can occur while loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The embedded fixture JSON did not deserialize into products.
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
}

/// Loads the sample catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded fixture data is malformed.
pub fn sample_catalog() -> Result<Vec<Product>, FixtureError> {
    let products = json!([
        {
            "id": 1,
            "nombre": "Playera Azul",
            "descripcion": "Playera de algodón",
            "precio": 199,
            "url_imagen": "playera-azul.png",
            "stock": 25,
            "categoria_id": 1,
            "color_id": 2,
            "marca": "Poli"
        },
        {
            "id": 2,
            "nombre": "Sudadera Roja",
            "descripcion": "Sudadera con capucha",
            "precio": 499,
            "url_imagen": "sudadera-roja.png",
            "stock": 10,
            "categoria_id": 1,
            "color_id": 1,
            "marca": "Poli"
        },
        {
            "id": 3,
            "nombre": "Gorra Negra",
            "precio": 149,
            "imagen": "gorra-negra.png",
            "stock": 40,
            "categoria_id": 2,
            "color_id": 3,
            "marca": "Market"
        },
        {
            "id": 4,
            "nombre": "Termo Institucional",
            "descripcion": "Acero inoxidable, 600 ml",
            "precio": 359,
            "stock": 8,
            "categoria_id": 3,
            "marca": "Market"
        }
    ]);

    Ok(serde_json::from_value(products)?)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    #[test]
    fn sample_catalog_loads_every_product() -> TestResult {
        let catalog = sample_catalog()?;

        assert_eq!(catalog.len(), 4);

        let cap = catalog
            .iter()
            .find(|product| product.id == ProductId(3))
            .ok_or("missing cap fixture")?;

        assert_eq!(cap.name, "Gorra Negra");
        assert_eq!(cap.price, Decimal::from(149));
        assert_eq!(cap.image_url.as_deref(), Some("gorra-negra.png"));

        Ok(())
    }
}
