//! Easing curves for swipe animations.
//!
//! An easing maps linear progress `t` in `[0, 1]` onto eased progress. The
//! swipe widget uses [`Easing::Linear`] unless configured otherwise.

use serde::{Deserialize, Serialize};

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
    /// Cubic, starts slow.
    EaseInCubic,
    /// Cubic, ends slow.
    EaseOutCubic,
    /// Cubic, slow at both ends.
    EaseInOutCubic,
}

/// Apply an easing curve to a progress value.
///
/// `t` is clamped to `[0, 1]` first, so every curve maps 0 to 0 and 1 to 1.
///
/// ```
/// use horizon_swipe::widget::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInCubic => t * t * t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Interpolate from `start` to `end` at eased progress `t`.
///
/// At `t >= 1` the result is exactly `end`, never a rounding neighbour.
#[inline]
pub fn lerp(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    if t >= 1.0 {
        return end;
    }
    start + (end - start) * ease(easing, t)
}
