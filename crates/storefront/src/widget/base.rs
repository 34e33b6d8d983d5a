//! Widget base implementation.
//!
//! `WidgetBase` holds the state every widget needs: identity, geometry,
//! focus, hover, and the repaint flag. Widgets embed one and delegate to it.

use std::sync::atomic::{AtomicU64, Ordering};

use storefront_core::{Point, Rect, Signal, Size};

/// A unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// How a widget accepts keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget never takes focus.
    #[default]
    NoFocus,
    /// Focus via Tab traversal only.
    TabFocus,
    /// Focus via mouse click only.
    ClickFocus,
    /// Focus via both Tab and click.
    StrongFocus,
}

/// The base implementation for all widgets.
pub struct WidgetBase {
    id: WidgetId,
    geometry: Rect,
    focus_policy: FocusPolicy,
    focused: bool,
    hovered: bool,
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
}

impl WidgetBase {
    /// Create a new widget base with a fresh id.
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            geometry: Rect::ZERO,
            focus_policy: FocusPolicy::NoFocus,
            focused: false,
            hovered: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The widget's geometry relative to its parent.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
            self.geometry_changed.emit(rect);
        }
    }

    /// The widget's size.
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// The widget's rectangle in local coordinates (origin at 0, 0).
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    /// Map a point from the parent's coordinates to local coordinates.
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(point.x - self.geometry.left(), point.y - self.geometry.top())
    }

    // =========================================================================
    // Focus and hover
    // =========================================================================

    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Whether the widget can take focus at all.
    pub fn is_focusable(&self) -> bool {
        self.focus_policy != FocusPolicy::NoFocus
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Record a focus change. Called by the widget's focus event handlers.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Whether a repaint is pending.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Clear the repaint flag after the host has rendered the widget.
    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}
