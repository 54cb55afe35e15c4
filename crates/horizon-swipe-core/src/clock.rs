//! Frame clocks for Horizon Swipe.
//!
//! Animations never read the wall clock directly. They ask a [`Clock`] for the
//! current instant, so a host can drive them from its real frame loop
//! ([`SystemClock`]) while tests and headless tools advance time explicitly
//! ([`ManualClock`]).

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::logging::targets;

/// A source of monotonic instants.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// The system monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and give another to an animator.
///
/// ```
/// use horizon_swipe_core::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(125));
/// assert_eq!(clock.now() - start, Duration::from_millis(125));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current system instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a manual clock frozen at `instant`.
    pub fn starting_at(instant: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(instant)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
        tracing::trace!(target: targets::CLOCK, advanced_ms = by.as_millis() as u64, "manual clock advanced");
    }

    /// Jump the clock to `instant`.
    ///
    /// Instants earlier than the current one are ignored; the clock is monotonic.
    pub fn set(&self, instant: Instant) {
        let mut now = self.now.lock();
        if instant > *now {
            *now = instant;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

static_assertions::assert_impl_all!(ManualClock: Send, Sync, Clone);
