//! The animation driver seam.
//!
//! Widgets describe what to animate as a [`Tween`] and hand it to an
//! [`Animator`]. Once per frame the host calls into the widget, which polls the
//! animator for [`AnimationFrame`]s and writes the sampled values into its own
//! state. Pausing a handle is cooperative: the tween simply never produces
//! another frame.

use std::time::Instant;

use horizon_swipe_core::logging::targets;
use horizon_swipe_core::{Clock, SystemClock};
use slotmap::{SlotMap, new_key_type};

use super::tween::Tween;

new_key_type! {
    /// Identifies a tween started on an [`Animator`].
    pub struct AnimationHandle;
}

/// Sampled values of one running tween.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// The tween this frame belongs to.
    pub handle: AnimationHandle,
    /// One value per tween channel.
    pub values: Vec<f32>,
    /// Whether these are the tween's end values. A finished tween produces
    /// exactly one finished frame and is then forgotten.
    pub finished: bool,
}

/// Drives tweens forward in time.
pub trait Animator {
    /// Start a tween and return its handle.
    fn start(&mut self, tween: Tween) -> AnimationHandle;

    /// Stop a tween mid-flight. Returns `false` if it was not running.
    fn pause(&mut self, handle: AnimationHandle) -> bool;

    /// Whether a tween is still producing frames.
    fn is_running(&self, handle: AnimationHandle) -> bool;

    /// Sample every running tween, dropping those that finished.
    fn poll(&mut self) -> Vec<AnimationFrame>;
}

#[derive(Debug)]
struct RunningTween {
    tween: Tween,
    started_at: Instant,
}

/// An [`Animator`] that samples tweens against a [`Clock`].
#[derive(Debug)]
pub struct ClockAnimator<C: Clock = SystemClock> {
    clock: C,
    running: SlotMap<AnimationHandle, RunningTween>,
}

impl ClockAnimator<SystemClock> {
    /// Create an animator driven by the system clock.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for ClockAnimator<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> ClockAnimator<C> {
    /// Create an animator driven by `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: SlotMap::with_key(),
        }
    }

    /// The clock this animator samples.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of tweens still running.
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

impl<C: Clock> Animator for ClockAnimator<C> {
    fn start(&mut self, tween: Tween) -> AnimationHandle {
        let started_at = self.clock.now();
        tracing::trace!(
            target: targets::ANIMATION,
            duration_ms = tween.duration().as_millis() as u64,
            channels = tween.channels().len(),
            "tween started"
        );
        self.running.insert(RunningTween { tween, started_at })
    }

    fn pause(&mut self, handle: AnimationHandle) -> bool {
        let paused = self.running.remove(handle).is_some();
        if paused {
            tracing::trace!(target: targets::ANIMATION, "tween paused");
        }
        paused
    }

    fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.contains_key(handle)
    }

    fn poll(&mut self) -> Vec<AnimationFrame> {
        let now = self.clock.now();
        let mut frames = Vec::with_capacity(self.running.len());

        for (handle, running) in &self.running {
            let sample = running
                .tween
                .sample(now.saturating_duration_since(running.started_at));
            frames.push(AnimationFrame {
                handle,
                values: sample.values,
                finished: sample.finished,
            });
        }

        for frame in frames.iter().filter(|f| f.finished) {
            self.running.remove(frame.handle);
            tracing::trace!(target: targets::ANIMATION, "tween finished");
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use horizon_swipe_core::ManualClock;

    use super::*;
    use crate::widget::animation::Easing;

    fn tween(from: f32, to: f32) -> Tween {
        Tween::new(Duration::from_millis(250), Easing::Linear).channel(from, to)
    }

    #[test]
    fn test_poll_reports_progress_then_finishes_once() {
        let clock = ManualClock::new();
        let mut animator = ClockAnimator::new(clock.clone());
        let handle = animator.start(tween(0.0, 100.0));

        clock.advance(Duration::from_millis(125));
        let frames = animator.poll();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].handle, handle);
        assert!((frames[0].values[0] - 50.0).abs() < 1e-3);
        assert!(!frames[0].finished);

        clock.advance(Duration::from_millis(200));
        let frames = animator.poll();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].values, vec![100.0]);
        assert!(frames[0].finished);

        assert!(!animator.is_running(handle));
        assert!(animator.poll().is_empty());
    }

    #[test]
    fn test_paused_tween_never_ticks_again() {
        let clock = ManualClock::new();
        let mut animator = ClockAnimator::new(clock.clone());
        let handle = animator.start(tween(60.0, 0.0));

        assert!(animator.is_running(handle));
        assert!(animator.pause(handle));
        assert!(!animator.pause(handle));

        clock.advance(Duration::from_secs(1));
        assert!(animator.poll().is_empty());
        assert_eq!(animator.running_count(), 0);
    }

    #[test]
    fn test_independent_tweens() {
        let clock = ManualClock::new();
        let mut animator = ClockAnimator::new(clock.clone());
        let a = animator.start(tween(0.0, 10.0));
        clock.advance(Duration::from_millis(200));
        let b = animator.start(tween(0.0, 10.0));

        clock.advance(Duration::from_millis(50));
        let frames = animator.poll();
        assert_eq!(frames.len(), 2);

        let frame_a = frames.iter().find(|f| f.handle == a).unwrap();
        let frame_b = frames.iter().find(|f| f.handle == b).unwrap();
        assert!(frame_a.finished);
        assert!(!frame_b.finished);
        assert!(!animator.is_running(a));
        assert!(animator.is_running(b));
    }

    #[test]
    fn test_zero_duration_finishes_on_first_poll() {
        let mut animator = ClockAnimator::new(ManualClock::new());
        let handle = animator.start(Tween::new(Duration::ZERO, Easing::Linear).channel(3.0, 7.0));

        let frames = animator.poll();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].handle, handle);
        assert_eq!(frames[0].values, vec![7.0]);
        assert!(frames[0].finished);
    }
}
