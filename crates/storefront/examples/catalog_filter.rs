//! Catalog filter example.
//!
//! Drives a category dropdown with scripted keyboard input and prints the
//! resulting page of products after each step.
//!
//! Run with: cargo run -p storefront --example catalog_filter
//! Set `RUST_LOG=storefront=debug` to see widget and catalog logs.

use std::sync::Arc;
use std::time::Duration;

use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

const PRODUCTS: &str = r#"{"products": [
    {"id": 1, "title": "iPhone 9", "price": 549, "category": "smartphones", "brand": "Apple"},
    {"id": 2, "title": "Samsung Universe 9", "price": 1249, "category": "smartphones", "brand": "Samsung"},
    {"id": 3, "title": "MacBook Pro", "price": 1749, "category": "laptops", "brand": "Apple"},
    {"id": 4, "title": "Perfume Oil", "price": 13, "category": "fragrances"},
    {"id": 5, "title": "Brown Perfume", "price": 40, "category": "fragrances", "brand": "Royal_Mirage"},
    {"id": 6, "title": "Tree Oil 30ml", "price": 12, "category": "skincare"}
]}"#;

const SETTINGS: &str = r#"
[catalog]
per_page = 4

[select]
type_ahead_timeout_ms = 300
"#;

fn print_page(step: &str, browser: &CatalogBrowser) {
    let pagination = browser.pagination();
    println!(
        "{step}: page {} of {} ({} items)",
        pagination.page(),
        pagination.pages(),
        pagination.total_items()
    );
    for product in browser.current_page() {
        println!("  {:<22} {:>8}  [{}]", product.title, product.display_price(), product.category);
    }
}

fn press(select: &mut SearchableMultiSelect, key: Key) {
    select.event(&mut WidgetEvent::key(key));
}

fn main() -> storefront::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_toml_str(SETTINGS)?;
    let products = Product::list_from_json(PRODUCTS)?;
    let clock = Arc::new(ManualClock::new());
    let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));

    let mut browser = CatalogBrowser::new(products, &settings, timers.clone());
    print_page("all products", &browser);

    browser.next_page();
    print_page("next page", &browser);

    let mut categories = browser.category_select();
    categories.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    press(&mut categories, Key::Space);

    // Type-ahead to "fragrances" and toggle it.
    press(&mut categories, Key::Character('f'));
    press(&mut categories, Key::Space);
    print_page("fragrances", &browser);

    // Let the type-ahead buffer expire, then add "skincare".
    clock.advance(Duration::from_millis(300));
    deliver_expired_timers(&timers, &mut [&mut categories as &mut dyn Widget]);
    press(&mut categories, Key::Character('s'));
    press(&mut categories, Key::Character('k'));
    press(&mut categories, Key::Space);
    print_page("fragrances + skincare", &browser);

    let view = categories.render();
    let chips: Vec<_> = view
        .find_all(Role::Chip)
        .iter()
        .filter_map(|chip| chip.text.clone())
        .collect();
    println!("chips: {}", chips.join(", "));

    browser.set_search("oil");
    print_page("search \"oil\"", &browser);

    browser.reset_filters();
    print_page("reset", &browser);

    Ok(())
}
