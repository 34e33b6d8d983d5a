//! Integration tests for shared timers under a manual clock.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use storefront_core::{ManualClock, SharedTimerManager, TimerError};

fn shared() -> (Arc<ManualClock>, Arc<SharedTimerManager>) {
    let clock = Arc::new(ManualClock::new());
    let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
    (clock, timers)
}

#[test]
fn cancel_and_reschedule_fires_only_latest() {
    let (clock, timers) = shared();

    let mut pending = timers.start_one_shot(Duration::from_millis(1000));
    for _ in 0..3 {
        clock.advance(Duration::from_millis(400));
        timers.stop(pending).unwrap();
        pending = timers.start_one_shot(Duration::from_millis(1000));
        assert!(timers.process_expired().is_empty());
    }
    assert_eq!(timers.active_count(), 1);

    clock.advance(Duration::from_millis(1000));
    assert_eq!(timers.process_expired(), vec![pending]);
    assert_eq!(timers.stop(pending), Err(TimerError::InvalidTimerId));
}

#[test]
fn time_until_next_tracks_clock() {
    let (clock, timers) = shared();
    assert_eq!(timers.time_until_next(), None);

    timers.start_one_shot(Duration::from_millis(250));
    clock.advance(Duration::from_millis(100));
    assert_eq!(timers.time_until_next(), Some(Duration::from_millis(150)));
}

#[test]
fn timers_can_be_started_from_other_threads() {
    let (clock, timers) = shared();

    let handles: Vec<_> = (1..=4u64)
        .map(|i| {
            let timers = timers.clone();
            thread::spawn(move || timers.start_one_shot(Duration::from_millis(10 * i)))
        })
        .collect();
    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    clock.advance(Duration::from_millis(40));
    let fired = timers.process_expired();
    assert_eq!(fired, ids);
}
