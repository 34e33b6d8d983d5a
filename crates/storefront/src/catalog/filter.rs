//! Product filtering.

use super::product::Product;

/// Criteria a product must meet to be listed.
///
/// All criteria combine with AND. Within `categories` and `brands` any one
/// value matches, and an empty list matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive text searched in title, description, category and
    /// brand. Blank matches everything.
    pub search: String,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub min_price: f64,
    /// `None` means no upper bound.
    pub max_price: Option<f64>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            min_price: 0.0,
            max_price: None,
        }
    }
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = brands;
        self
    }

    /// Restrict prices to `min..=max`. A missing minimum means 0.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min.unwrap_or(0.0);
        self.max_price = max;
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.categories.is_empty()
            && self.brands.is_empty()
            && self.min_price <= 0.0
            && self.max_price.is_none()
    }

    /// Check `product` against every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.brands.is_empty()
                || product
                    .brand
                    .as_ref()
                    .is_some_and(|brand| self.brands.contains(brand)))
            && product.price >= self.min_price
            && self.max_price.is_none_or(|max| product.price <= max)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(&needle);
        contains(&product.title)
            || contains(&product.description)
            || contains(&product.category)
            || product.brand.as_deref().is_some_and(contains)
    }

    /// The matching products, in list order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Parse a price field as typed by a user. Blank or invalid text is `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
