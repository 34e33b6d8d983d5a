//! Concrete widgets.

mod multi_select;

pub use multi_select::SearchableMultiSelect;
