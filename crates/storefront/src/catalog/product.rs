//! Product records and their JSON decoding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Some products are unbranded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub thumbnail: String,
}

/// Accepted top-level shapes of a product document.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductDocument {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl Product {
    /// Decode products from JSON.
    ///
    /// Accepts either a bare array of products or an object with a
    /// `products` array, as paged product APIs return.
    pub fn list_from_json(json: &str) -> Result<Vec<Product>> {
        let products = match serde_json::from_str(json)? {
            ProductDocument::List(products) => products,
            ProductDocument::Wrapped { products } => products,
        };
        Ok(products)
    }

    /// Read and decode a JSON product file.
    pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Product>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::list_from_json(&json)
    }

    /// The price as shown in product cards, e.g. `$1,249.99`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with thousands separators and at most three decimals,
/// dropping trailing zeros.
pub fn format_price(price: f64) -> String {
    let rounded = (price * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + 4);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push('$');
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "title": "iPhone 9", "description": "An apple mobile", "price": 549,
         "category": "smartphones", "brand": "Apple", "thumbnail": "https://example.test/1.jpg",
         "rating": 4.69},
        {"id": 2, "title": "Tree Oil", "price": 12.5, "category": "skincare"}
    ]"#;

    #[test]
    fn test_decode_bare_array_ignores_unknown_fields() {
        let products = Product::list_from_json(SAMPLE).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].brand.as_deref(), Some("Apple"));
        assert_eq!(products[1].brand, None);
        assert_eq!(products[1].description, "");
    }

    #[test]
    fn test_decode_wrapped_document() {
        let json = format!(r#"{{"products": {SAMPLE}, "total": 2}}"#);
        let products = Product::list_from_json(&json).unwrap();
        assert_eq!(products[1].title, "Tree Oil");
    }

    #[test]
    fn test_decode_error() {
        let err = Product::list_from_json(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(err, Error::Products(_)));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(549.0), "$549");
        assert_eq!(format_price(1249.99), "$1,249.99");
        assert_eq!(format_price(1_234_567.5), "$1,234,567.5");
        assert_eq!(format_price(0.1 + 0.2), "$0.3");
        assert_eq!(format_price(-1000.0), "-$1,000");
    }
}
