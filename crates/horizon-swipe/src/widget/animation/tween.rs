//! Fixed-duration numeric tweens.
//!
//! A [`Tween`] interpolates one or more channels from a start value to an end
//! value over a fixed duration. The swipe widget uses a single channel for the
//! front layer's offset and two channels (height, opacity) for the collapse.

use std::time::Duration;

use super::easing::{Easing, lerp};

/// One interpolated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Value at progress 0.
    pub from: f32,
    /// Value at progress 1.
    pub to: f32,
}

/// A set of channels animated together.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    channels: Vec<Channel>,
    duration: Duration,
    easing: Easing,
}

/// Channel values at one instant of a tween.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenSample {
    /// One value per channel, in the order the channels were added.
    pub values: Vec<f32>,
    /// Whether the tween has reached its end values.
    pub finished: bool,
}

impl Tween {
    /// Create a tween with no channels.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            channels: Vec::new(),
            duration,
            easing,
        }
    }

    /// Add a channel (builder pattern).
    pub fn channel(mut self, from: f32, to: f32) -> Self {
        self.channels.push(Channel { from, to });
        self
    }

    /// The tween's channels.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// The tween's duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The tween's easing.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress after `elapsed`, in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Sample every channel after `elapsed`.
    ///
    /// A zero-duration tween is finished immediately at its end values.
    pub fn sample(&self, elapsed: Duration) -> TweenSample {
        let finished = elapsed >= self.duration;
        let t = if finished { 1.0 } else { self.progress(elapsed) };
        let values = self
            .channels
            .iter()
            .map(|c| lerp(self.easing, c.from, c.to, t))
            .collect();
        TweenSample { values, finished }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_single_channel_linear() {
        let tween = Tween::new(ms(250), Easing::Linear).channel(60.0, 200.0);

        let start = tween.sample(ms(0));
        assert_eq!(start.values, vec![60.0]);
        assert!(!start.finished);

        let mid = tween.sample(ms(125));
        assert!((mid.values[0] - 130.0).abs() < 1e-3);
        assert!(!mid.finished);

        let end = tween.sample(ms(250));
        assert_eq!(end.values, vec![200.0]);
        assert!(end.finished);
    }

    #[test]
    fn test_overshoot_clamps_to_end() {
        let tween = Tween::new(ms(250), Easing::Linear).channel(40.0, 0.0);
        let sample = tween.sample(ms(10_000));
        assert_eq!(sample.values, vec![0.0]);
        assert!(sample.finished);
    }

    #[test]
    fn test_multiple_channels_share_progress() {
        let tween = Tween::new(ms(200), Easing::Linear)
            .channel(48.0, 0.0)
            .channel(1.0, 0.0);

        let quarter = tween.sample(ms(50));
        assert!((quarter.values[0] - 36.0).abs() < 1e-3);
        assert!((quarter.values[1] - 0.75).abs() < 1e-4);

        let end = tween.sample(ms(200));
        assert_eq!(end.values, vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(Duration::ZERO, Easing::EaseInOut).channel(5.0, 9.0);
        assert_eq!(tween.progress(Duration::ZERO), 1.0);
        let sample = tween.sample(Duration::ZERO);
        assert_eq!(sample.values, vec![9.0]);
        assert!(sample.finished);
    }

    #[test]
    fn test_accessors() {
        let tween = Tween::new(ms(300), Easing::EaseOut).channel(0.0, 1.0);
        assert_eq!(tween.duration(), ms(300));
        assert_eq!(tween.easing(), Easing::EaseOut);
        assert_eq!(tween.channels(), &[Channel { from: 0.0, to: 1.0 }]);
    }
}
