//! Catalog browsing state.
//!
//! [`CatalogBrowser`] holds the product list together with the filter
//! inputs a storefront page shows: a search box, price range, and category
//! and brand dropdowns. Every filter change returns to the first page,
//! including selection changes made by a dropdown bound to the browser.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use storefront_core::logging::targets;
use storefront_core::{ConnectionId, SharedTimerManager};

use super::facets::Facets;
use super::filter::ProductFilter;
use super::pagination::{Pagination, parse_page};
use super::product::Product;
use crate::model::{SelectionSource, SharedSelection};
use crate::settings::{SelectSettings, Settings};
use crate::widget::widgets::SearchableMultiSelect;

/// Filterable, paged view over a product list.
pub struct CatalogBrowser {
    products: Vec<Product>,
    facets: Facets,

    search: String,
    min_price: Option<f64>,
    max_price: Option<f64>,
    categories: SharedSelection,
    brands: SharedSelection,

    page: Arc<AtomicUsize>,
    per_page: usize,
    connections: Vec<(SharedSelection, ConnectionId)>,

    select_settings: SelectSettings,
    timers: Arc<SharedTimerManager>,
}

impl CatalogBrowser {
    /// Create a browser over `products`, on page 1 with no filters.
    pub fn new(products: Vec<Product>, settings: &Settings, timers: Arc<SharedTimerManager>) -> Self {
        let facets = Facets::from_products(&products);
        let page = Arc::new(AtomicUsize::new(1));
        let categories = SharedSelection::new();
        let brands = SharedSelection::new();

        let connections = [&categories, &brands]
            .into_iter()
            .map(|selection| {
                let page = page.clone();
                let id = selection.changed().connect(move |values| {
                    page.store(1, Ordering::Relaxed);
                    tracing::debug!(target: targets::CATALOG, ?values, "facet selection changed");
                });
                (selection.clone(), id)
            })
            .collect();

        tracing::debug!(
            target: targets::CATALOG,
            products = products.len(),
            categories = facets.categories.len(),
            brands = facets.brands.len(),
            "catalog loaded"
        );

        Self {
            products,
            facets,
            search: String::new(),
            min_price: None,
            max_price: None,
            categories,
            brands,
            page,
            per_page: settings.catalog.per_page.max(1),
            connections,
            select_settings: settings.select.clone(),
            timers,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Categories and brands offered by the filter dropdowns.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            tracing::debug!(target: targets::CATALOG, %search, "search changed");
            self.search = search;
            self.reset_page();
        }
    }

    pub fn price_range(&self) -> (Option<f64>, Option<f64>) {
        (self.min_price, self.max_price)
    }

    /// Set the price bounds. `None` leaves that side open.
    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) {
        if (self.min_price, self.max_price) != (min, max) {
            tracing::debug!(target: targets::CATALOG, ?min, ?max, "price range changed");
            self.min_price = min;
            self.max_price = max;
            self.reset_page();
        }
    }

    /// Selected categories. Changing them returns to page 1.
    pub fn categories(&self) -> &SharedSelection {
        &self.categories
    }

    /// Selected brands. Changing them returns to page 1.
    pub fn brands(&self) -> &SharedSelection {
        &self.brands
    }

    /// Clear every filter and return to page 1.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.min_price = None;
        self.max_price = None;
        self.categories.clear();
        self.brands.clear();
        self.reset_page();
    }

    /// The filter built from the current inputs.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new()
            .with_search(self.search.as_str())
            .with_categories(self.categories.values())
            .with_brands(self.brands.values())
            .with_price_range(self.min_price, self.max_price)
    }

    /// Every product passing the current filter.
    pub fn filtered(&self) -> Vec<&Product> {
        self.filter().apply(&self.products)
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// The current 1-based page.
    pub fn page(&self) -> usize {
        self.page.load(Ordering::Relaxed)
    }

    /// Jump to `page`. Values below 1 select page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page.store(page.max(1), Ordering::Relaxed);
    }

    /// Jump to the page named by a query value such as `"3"`.
    pub fn set_page_from_query(&mut self, query: Option<&str>) {
        self.set_page(parse_page(query));
    }

    fn reset_page(&self) {
        self.page.store(1, Ordering::Relaxed);
    }

    /// Paging state over the filtered products.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page(), self.per_page, self.filtered().len())
    }

    /// The filtered products on the current page.
    pub fn current_page(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        let pagination = Pagination::new(self.page(), self.per_page, filtered.len());
        pagination.slice(&filtered).to_vec()
    }

    /// Go to the first page. Returns whether the page changed.
    pub fn first_page(&mut self) -> bool {
        self.go_to(Some(1))
    }

    pub fn previous_page(&mut self) -> bool {
        let target = self.pagination().previous();
        self.go_to(target)
    }

    pub fn next_page(&mut self) -> bool {
        let target = self.pagination().next();
        self.go_to(target)
    }

    pub fn last_page(&mut self) -> bool {
        let target = self.pagination().last();
        self.go_to(Some(target))
    }

    fn go_to(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(page) if page != self.page() => {
                self.set_page(page);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Filter Widgets
    // =========================================================================

    /// A multi-select dropdown bound to the category selection.
    pub fn category_select(&self) -> SearchableMultiSelect {
        self.facet_select(self.facets.categories.clone(), &self.categories)
            .with_label("Category")
            .with_placeholder("Filter categories ...")
    }

    /// A multi-select dropdown bound to the brand selection.
    pub fn brand_select(&self) -> SearchableMultiSelect {
        self.facet_select(self.facets.brands.clone(), &self.brands)
            .with_label("Brand")
            .with_placeholder("Filter brands ...")
    }

    fn facet_select(&self, options: Vec<String>, selection: &SharedSelection) -> SearchableMultiSelect {
        SearchableMultiSelect::new(options, Arc::new(selection.clone()), self.timers.clone())
            .with_multiple(true)
            .with_settings(&self.select_settings)
    }
}

impl Drop for CatalogBrowser {
    fn drop(&mut self) {
        for (selection, id) in self.connections.drain(..) {
            selection.changed().disconnect(id);
        }
    }
}

impl std::fmt::Debug for CatalogBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBrowser")
            .field("products", &self.products.len())
            .field("search", &self.search)
            .field("price_range", &(self.min_price, self.max_price))
            .field("categories", &self.categories)
            .field("brands", &self.brands)
            .field("page", &self.page())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: i as u64,
                title: format!("Item {i}"),
                description: String::new(),
                price: 10.0 * i as f64,
                category: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                brand: (i % 3 == 0).then(|| "Triple".to_string()),
                thumbnail: String::new(),
            })
            .collect()
    }

    fn browser(count: usize) -> CatalogBrowser {
        CatalogBrowser::new(
            products(count),
            &Settings::default(),
            Arc::new(SharedTimerManager::new()),
        )
    }

    #[test]
    fn test_pages_of_twelve() {
        let mut browser = browser(30);
        assert_eq!(browser.pagination().pages(), 3);
        assert_eq!(browser.current_page().len(), 12);

        assert!(browser.last_page());
        assert_eq!(browser.page(), 3);
        assert_eq!(browser.current_page().len(), 6);
        assert!(!browser.next_page());
        assert!(browser.previous_page());
        assert!(browser.first_page());
        assert!(!browser.first_page());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut browser = browser(30);
        browser.set_page(3);
        browser.set_search("item");
        assert_eq!(browser.page(), 1);

        browser.set_page(2);
        browser.set_price_range(Some(50.0), None);
        assert_eq!(browser.page(), 1);

        browser.set_page(2);
        browser.categories().replace(vec!["odd".to_string()]);
        assert_eq!(browser.page(), 1);
        assert!(browser.filtered().iter().all(|p| p.category == "odd" && p.price >= 50.0));
    }

    #[test]
    fn test_unchanged_search_keeps_page() {
        let mut browser = browser(30);
        browser.set_search("item");
        browser.set_page(2);
        browser.set_search("item");
        assert_eq!(browser.page(), 2);
    }

    #[test]
    fn test_reset_filters() {
        let mut browser = browser(10);
        browser.set_search("nothing matches this");
        browser.brands().replace(vec!["Triple".to_string()]);
        assert!(browser.filtered().is_empty());

        browser.reset_filters();
        assert!(browser.filter().is_empty());
        assert_eq!(browser.filtered().len(), 10);
    }

    #[test]
    fn test_page_from_query() {
        let mut browser = browser(30);
        browser.set_page_from_query(Some("2x"));
        assert_eq!(browser.page(), 2);
        browser.set_page_from_query(Some("nope"));
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn test_facet_selects_share_selection() {
        let browser = browser(6);
        let select = browser.category_select();
        assert!(select.is_multiple());
        assert_eq!(select.options().values(), vec!["even", "odd"]);
        assert_eq!(browser.brand_select().options().values(), vec!["Triple"]);

        select.selection().replace(vec!["even".to_string()]);
        assert_eq!(browser.categories().values(), vec!["even"]);
    }

    #[test]
    fn test_drop_disconnects_page_reset() {
        let browser = browser(3);
        let categories = browser.categories().clone();
        assert_eq!(categories.changed().connection_count(), 1);
        drop(browser);
        assert_eq!(categories.changed().connection_count(), 0);
    }
}
