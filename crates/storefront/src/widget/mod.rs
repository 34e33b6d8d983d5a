//! Widget system.
//!
//! Widgets are plain state machines. A host feeds them [`WidgetEvent`]s and
//! asks them to [`render`](Widget::render) a [`ViewNode`] tree; nothing in
//! this module draws pixels.

mod base;
mod dispatcher;
mod events;
mod metrics;
mod traits;
mod view;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase, WidgetId};
pub use dispatcher::deliver_expired_timers;
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent, TimerEvent, WheelEvent, WidgetEvent,
};
pub use metrics::{FixedAdvanceMetrics, TextMetrics};
pub use traits::Widget;
pub use view::{IconName, Role, ViewNode};
