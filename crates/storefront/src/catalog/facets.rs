//! Filter choices derived from the product list.

use super::product::Product;

/// The distinct categories and brands of a product list, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

impl Facets {
    /// Collect facets from `products`. Unbranded products contribute no brand.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut facets = Self::default();
        for product in products {
            push_unique(&mut facets.categories, &product.category);
            if let Some(brand) = &product.brand {
                push_unique(&mut facets.brands, brand);
            }
        }
        facets
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
