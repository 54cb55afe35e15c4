//! Input and gesture events.
//!
//! Raw pointer input arrives as [`TouchEvent`]s (mouse drags are folded into
//! the same shape, see [`super::touch`]). Gesture recognizers turn them into
//! [`PanGestureEvent`]s, which is all the swipe widget consumes.

use super::geometry::Point;

/// Phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The touch went down.
    Started,
    /// The touch moved.
    Moved,
    /// The touch lifted.
    Ended,
    /// The platform cancelled the touch.
    Cancelled,
}

/// One touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier, stable for the touch's lifetime.
    pub id: u64,
    /// Position in logical window coordinates.
    pub position: Point,
    /// What happened to this touch.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// A batch of touch point changes delivered together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    /// The changed points.
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create an event from a list of points.
    pub fn with_points(points: Vec<TouchPoint>) -> Self {
        Self { points }
    }

    /// Create an event carrying a single point.
    pub fn single(id: u64, phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            points: vec![TouchPoint::new(id, Point::new(x, y), phase)],
        }
    }
}

/// Lifecycle state of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// The gesture was just recognized.
    Started,
    /// The gesture moved.
    Updated,
    /// The pointer was released.
    Ended,
    /// The gesture was interrupted.
    Cancelled,
}

/// A pan (drag) gesture update.
///
/// Deltas are cumulative since the touch that started the gesture went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGestureEvent {
    /// Horizontal displacement since the gesture began.
    pub delta_x: f32,
    /// Vertical displacement since the gesture began.
    pub delta_y: f32,
    /// Lifecycle state.
    pub state: GestureState,
}

impl PanGestureEvent {
    /// Create a pan event.
    pub fn new(delta_x: f32, delta_y: f32, state: GestureState) -> Self {
        Self {
            delta_x,
            delta_y,
            state,
        }
    }

    /// A horizontal-only move.
    pub fn moved(delta_x: f32) -> Self {
        Self::new(delta_x, 0.0, GestureState::Updated)
    }

    /// A horizontal-only release.
    pub fn released(delta_x: f32) -> Self {
        Self::new(delta_x, 0.0, GestureState::Ended)
    }

    /// Whether this is the last event of its gesture.
    #[inline]
    pub fn is_final(&self) -> bool {
        matches!(self.state, GestureState::Ended | GestureState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_final() {
        assert!(!PanGestureEvent::new(1.0, 0.0, GestureState::Started).is_final());
        assert!(!PanGestureEvent::moved(5.0).is_final());
        assert!(PanGestureEvent::released(5.0).is_final());
        assert!(PanGestureEvent::new(5.0, 0.0, GestureState::Cancelled).is_final());
    }

    #[test]
    fn test_single_touch_event() {
        let event = TouchEvent::single(7, TouchPhase::Moved, 10.0, 20.0);
        assert_eq!(event.points.len(), 1);
        assert_eq!(event.points[0].id, 7);
        assert_eq!(event.points[0].position, Point::new(10.0, 20.0));
        assert_eq!(event.points[0].phase, TouchPhase::Moved);
    }
}
