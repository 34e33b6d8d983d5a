//! Timer system for Storefront.
//!
//! Provides one-shot and repeating timers. The manager never sleeps or
//! spawns threads; the host asks it which timers have expired and routes
//! the fired ids to their owners.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::clock::{Clock, SystemClock};
use crate::error::TimerError;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

#[derive(Debug)]
struct TimerData {
    next_fire: Instant,
    interval: Duration,
    kind: TimerKind,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse for earliest-first.
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages a set of timers against a [`Clock`].
pub struct TimerManager {
    clock: Arc<dyn Clock>,
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a timer manager driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a timer manager driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after `duration`.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.insert(duration, TimerKind::OneShot)
    }

    /// Start a repeating timer. The first fire occurs after `interval`.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.insert(interval, TimerKind::Repeating)
    }

    fn insert(&mut self, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = self.clock.now() + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: targets::TIMER, ?id, ?kind, ?interval, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Stale queue entries are discarded lazily when they reach the front.
    pub fn stop(&mut self, id: TimerId) -> Result<(), TimerError> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
                Ok(())
            }
            None => Err(TimerError::InvalidTimerId),
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Duration until the next timer fires, or `None` with no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.discard_stale();
        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Remove queue entries whose timer was stopped or rescheduled.
    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            let live = self
                .timers
                .get(entry.id)
                .is_some_and(|t| t.next_fire == entry.fire_time);
            if live {
                break;
            }
            self.queue.pop();
        }
    }

    /// Collect every timer whose fire time has passed.
    ///
    /// One-shot timers are removed once fired; repeating timers are
    /// rescheduled one interval from now.
    #[tracing::instrument(skip(self), target = "storefront_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.id) else {
                continue;
            };
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            fired.push(entry.id);

            match timer.kind {
                TimerKind::OneShot => {
                    self.timers.remove(entry.id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id: entry.id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        fired
    }

    /// Number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A lock-guarded [`TimerManager`] that widgets and their host can share.
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a shared manager driven by the system clock.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// Create a shared manager driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(TimerManager::with_clock(clock)),
        }
    }

    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    pub fn start_repeating(&self, interval: Duration) -> TimerId {
        self.inner.lock().start_repeating(interval)
    }

    pub fn stop(&self, id: TimerId) -> Result<(), TimerError> {
        self.inner.lock().stop(id)
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual() -> (Arc<ManualClock>, TimerManager) {
        let clock = Arc::new(ManualClock::new());
        let manager = TimerManager::with_clock(clock.clone());
        (clock, manager)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let (clock, mut timers) = manual();
        let id = timers.start_one_shot(Duration::from_millis(100));

        assert!(timers.process_expired().is_empty());
        clock.advance(Duration::from_millis(100));
        assert_eq!(timers.process_expired(), vec![id]);
        assert!(!timers.is_active(id));

        clock.advance(Duration::from_millis(500));
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_repeating_reschedules() {
        let (clock, mut timers) = manual();
        let id = timers.start_repeating(Duration::from_millis(50));

        clock.advance(Duration::from_millis(50));
        assert_eq!(timers.process_expired(), vec![id]);
        clock.advance(Duration::from_millis(50));
        assert_eq!(timers.process_expired(), vec![id]);
        assert!(timers.is_active(id));
    }

    #[test]
    fn test_stop_prevents_fire() {
        let (clock, mut timers) = manual();
        let id = timers.start_one_shot(Duration::from_millis(10));
        timers.stop(id).unwrap();

        clock.advance(Duration::from_millis(20));
        assert!(timers.process_expired().is_empty());
        assert_eq!(timers.stop(id), Err(TimerError::InvalidTimerId));
    }

    #[test]
    fn test_time_until_next_skips_stopped() {
        let (clock, mut timers) = manual();
        let first = timers.start_one_shot(Duration::from_millis(10));
        timers.start_one_shot(Duration::from_millis(40));
        timers.stop(first).unwrap();

        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(40)));
        clock.advance(Duration::from_millis(60));
        assert_eq!(timers.time_until_next(), Some(Duration::ZERO));
    }

    #[test]
    fn test_expired_in_fire_order() {
        let (clock, mut timers) = manual();
        let late = timers.start_one_shot(Duration::from_millis(30));
        let early = timers.start_one_shot(Duration::from_millis(10));

        clock.advance(Duration::from_millis(30));
        assert_eq!(timers.process_expired(), vec![early, late]);
        assert_eq!(timers.active_count(), 0);
    }
}
