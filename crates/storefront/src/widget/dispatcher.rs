//! Routing of timer expirations to the widgets that own them.

use storefront_core::SharedTimerManager;
use storefront_core::logging::targets;

use super::events::{TimerEvent, WidgetEvent};
use super::traits::Widget;

/// Collect expired timers and offer each one to `widgets` in order.
///
/// A timer event stops at the first widget that handles it. Returns the
/// number of timer events that found an owner.
pub fn deliver_expired_timers(timers: &SharedTimerManager, widgets: &mut [&mut dyn Widget]) -> usize {
    let mut delivered = 0;
    for id in timers.process_expired() {
        let mut event = WidgetEvent::Timer(TimerEvent::new(id));
        if widgets.iter_mut().any(|widget| widget.event(&mut event)) {
            delivered += 1;
        } else {
            tracing::trace!(target: targets::DISPATCHER, ?id, "timer event without owner");
        }
    }
    delivered
}
