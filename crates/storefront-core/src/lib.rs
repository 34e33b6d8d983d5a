//! Core systems for Storefront.
//!
//! This crate provides the foundational pieces the widget layer builds on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Timers**: One-shot and repeating timers driven by a [`Clock`]
//! - **Geometry**: Points, sizes, and rectangles for layout and hit testing
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use storefront_core::{ManualClock, SharedTimerManager};
//!
//! let clock = Arc::new(ManualClock::new());
//! let timers = SharedTimerManager::with_clock(clock.clone());
//!
//! let id = timers.start_one_shot(Duration::from_secs(1));
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

pub mod clock;
mod error;
pub mod geometry;
pub mod logging;
pub mod signal;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TimerError;
pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};
