//! Storefront - product catalog browsing with searchable filter dropdowns.
//!
//! The crate is organized in layers:
//!
//! - [`model`]: option lists and externally owned selections
//! - [`widget`]: events, the [`Widget`](widget::Widget) trait, render trees,
//!   and the [`SearchableMultiSelect`](widget::widgets::SearchableMultiSelect)
//!   dropdown
//! - [`catalog`]: products, filtering, paging, and the
//!   [`CatalogBrowser`](catalog::CatalogBrowser) that ties them to dropdowns
//! - [`settings`]: TOML configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use storefront::prelude::*;
//!
//! let products = Product::list_from_json(r#"[
//!     {"id": 1, "title": "iPhone 9", "price": 549, "category": "smartphones", "brand": "Apple"},
//!     {"id": 2, "title": "Tree Oil", "price": 12, "category": "skincare"}
//! ]"#)?;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let browser = CatalogBrowser::new(products, &Settings::default(), timers);
//! browser.categories().replace(vec!["skincare".to_string()]);
//!
//! let titles: Vec<_> = browser.current_page().iter().map(|p| p.title.as_str()).collect();
//! assert_eq!(titles, vec!["Tree Oil"]);
//! # Ok::<(), storefront::Error>(())
//! ```

pub mod catalog;
mod error;
pub mod model;
pub mod prelude;
pub mod settings;
pub mod widget;

pub use error::{Error, Result};
