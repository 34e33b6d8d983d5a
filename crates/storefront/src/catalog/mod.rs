//! Product catalog: records, filtering, paging, and browsing state.

mod browser;
mod facets;
mod filter;
mod pagination;
mod product;

pub use browser::CatalogBrowser;
pub use facets::Facets;
pub use filter::{ProductFilter, parse_price};
pub use pagination::{DEFAULT_PER_PAGE, Pagination, parse_page};
pub use product::{Product, format_price};
