//! Page arithmetic for the product list.

use std::ops::Range;

/// Default number of products per page.
pub const DEFAULT_PER_PAGE: usize = 12;

/// A 1-based page over `total_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// Page numbers below 1 become 1 and a zero page size becomes 1. Pages
    /// past the end are kept; they simply hold no items.
    pub fn new(page: usize, per_page: usize, total_items: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, 0 when there are no items.
    pub fn pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    /// The page before this one, if any.
    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.page - 1)
    }

    /// The page after this one, if any.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn first(&self) -> usize {
        1
    }

    pub fn last(&self) -> usize {
        self.pages().max(1)
    }

    /// Indices of this page's items within the full list.
    pub fn item_range(&self) -> Range<usize> {
        let start = (self.page - 1)
            .saturating_mul(self.per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.per_page).min(self.total_items);
        start..end
    }

    /// The slice of `items` shown on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }
}

/// Parse a page number from a query value.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit,
/// so `"3abc"` is page 3. Missing or unparsable input and values below 1
/// yield page 1.
pub fn parse_page(text: Option<&str>) -> usize {
    let Some(text) = text else {
        return 1;
    };
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 1;
    }
    digits[..end].parse::<usize>().map_or(usize::MAX, |page| page.max(1))
}
