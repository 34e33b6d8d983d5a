//! Prelude module for Storefront.
//!
//! ```ignore
//! use storefront::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use storefront_core::{ManualClock, Point, Rect, SharedTimerManager, Signal, Size, TimerId};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{OptionList, SelectOption, SelectionSource, SharedSelection};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::SearchableMultiSelect;
pub use crate::widget::{
    FocusInEvent, FocusOutEvent, FocusReason, Key, Role, ViewNode, Widget, WidgetEvent,
    deliver_expired_timers,
};

// ============================================================================
// Catalog and Settings
// ============================================================================

pub use crate::catalog::{CatalogBrowser, Facets, Pagination, Product, ProductFilter};
pub use crate::settings::Settings;
pub use crate::Error;
