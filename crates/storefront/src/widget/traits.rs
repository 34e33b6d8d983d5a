//! The core `Widget` trait.

use storefront_core::{Point, Rect, Size};

use super::base::{WidgetBase, WidgetId};
use super::events::WidgetEvent;
use super::view::ViewNode;

/// The base trait for all UI elements.
///
/// Widgets embed a [`WidgetBase`] and implement [`render`](Self::render) to
/// describe their current appearance as a [`ViewNode`] tree, and
/// [`event`](Self::event) to react to input.
pub trait Widget: Send + Sync {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's preferred size in its current state.
    fn size_hint(&self) -> Size;

    /// Describe the widget's current appearance.
    fn render(&self) -> ViewNode;

    /// Handle an event.
    ///
    /// Returns `true` if the widget handled the event. Whether the host's
    /// default action runs is decided by the event's accepted flag.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    fn id(&self) -> WidgetId {
        self.widget_base().id()
    }

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }
}
