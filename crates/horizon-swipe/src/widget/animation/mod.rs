//! Animation support for Horizon Swipe.
//!
//! This module provides easing curves, fixed-duration tweens, and the
//! [`Animator`] seam widgets use to run them.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_swipe::widget::animation::{Animator, ClockAnimator, Easing, Tween};
//! use horizon_swipe_core::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut animator = ClockAnimator::new(clock.clone());
//! animator.start(Tween::new(Duration::from_millis(250), Easing::Linear).channel(0.0, 200.0));
//!
//! clock.advance(Duration::from_millis(250));
//! let frames = animator.poll();
//! assert_eq!(frames[0].values, vec![200.0]);
//! assert!(frames[0].finished);
//! ```

mod animator;
mod easing;
mod tween;

pub use animator::{AnimationFrame, AnimationHandle, Animator, ClockAnimator};
pub use easing::{Easing, ease, lerp};
pub use tween::{Channel, Tween, TweenSample};
