//! Logging facilities for Horizon Swipe.
//!
//! Horizon Swipe uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_swipe=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Per-frame work (pointer moves, animation ticks) logs at `trace`, state
//! transitions at `debug`, and completed commits at `info`.

/// Span names used throughout Horizon Swipe for tracing.
pub mod span_names {
    /// Gesture recognition span.
    pub const GESTURE: &str = "horizon_swipe::gesture";
    /// Animation stepping span.
    pub const ANIMATION: &str = "horizon_swipe::animation";
    /// Swipe widget event dispatch span.
    pub const SWIPE: &str = "horizon_swipe::swipe";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_swipe_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_swipe_core::signal";
    /// Frame clock target.
    pub const CLOCK: &str = "horizon_swipe_core::clock";
    /// Gesture recognizer target.
    pub const GESTURE: &str = "horizon_swipe::gesture";
    /// Animator target.
    pub const ANIMATION: &str = "horizon_swipe::animation";
    /// Swipeable list item target.
    pub const SWIPE: &str = "horizon_swipe::swipe";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_swipe::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring the duration of a scoped operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_swipe::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::GESTURE, targets::ANIMATION, targets::SWIPE, targets::CONFIG] {
            assert!(target.starts_with("horizon_swipe::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }
}
