//! Core systems for Horizon Swipe.
//!
//! This crate provides the widget-independent foundations of the swipe widget:
//!
//! - **Signal/Slot System**: Type-safe notifications from widgets to their parents
//! - **Frame Clocks**: The time source animations sample, real or manual
//! - **Logging**: `tracing` targets, span names and a scoped performance span
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_swipe_core::Signal;
//!
//! let offset_changed = Signal::<f32>::new();
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("Front layer moved to {offset}px");
//! });
//!
//! offset_changed.emit(42.0);
//! offset_changed.disconnect(conn_id);
//! ```
//!
//! # Clock Example
//!
//! ```
//! use horizon_swipe_core::{Clock, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_millis(250));
//! assert_eq!(clock.now() - start, Duration::from_millis(250));
//! ```

mod clock;
pub mod logging;
pub mod signal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
