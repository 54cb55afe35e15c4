//! Conversion from platform input to touch events.
//!
//! Touchscreens deliver `winit` touch events directly. Mouse drags are folded
//! into the same [`TouchEvent`] shape by [`MouseDragTracker`], so one
//! recognizer handles both.
//!
//! ```ignore
//! use horizon_swipe::widget::touch::{from_winit_touch, MouseDragTracker};
//!
//! match window_event {
//!     WindowEvent::Touch(touch) => {
//!         recognizer.process_touch(&TouchEvent::with_points(vec![from_winit_touch(&touch, scale)]));
//!     }
//!     WindowEvent::CursorMoved { position, .. } => {
//!         if let Some(event) = mouse.cursor_moved(position, scale) {
//!             recognizer.process_touch(&event);
//!         }
//!     }
//!     WindowEvent::MouseInput { state, button, .. } => {
//!         if let Some(event) = mouse.mouse_input(state, button) {
//!             recognizer.process_touch(&event);
//!         }
//!     }
//!     _ => {}
//! }
//! ```

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase as WinitTouchPhase};

use super::events::{TouchEvent, TouchPhase, TouchPoint};
use super::geometry::Point;

/// Touch identifier used for mouse drags.
///
/// Platforms number real touches from zero, so the mouse takes the top of the range.
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

/// Converts a winit touch phase.
pub fn from_winit_touch_phase(phase: WinitTouchPhase) -> TouchPhase {
    match phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

/// Converts a physical window position to logical coordinates.
pub fn to_logical_point(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f32>(scale_factor);
    Point::new(logical.x, logical.y)
}

/// Converts a winit touch into a touch point in logical coordinates.
pub fn from_winit_touch(touch: &Touch, scale_factor: f64) -> TouchPoint {
    TouchPoint::new(
        touch.id,
        to_logical_point(touch.location, scale_factor),
        from_winit_touch_phase(touch.phase),
    )
}

/// Turns left-button mouse drags into single-touch events.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseDragTracker {
    position: Point,
    pressed: bool,
}

impl MouseDragTracker {
    /// Create a tracker with the button up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the left button is held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Last known cursor position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Record a cursor move. Produces a `Moved` touch while the button is held.
    pub fn cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> Option<TouchEvent> {
        self.position = to_logical_point(position, scale_factor);
        self.pressed.then(|| self.event(TouchPhase::Moved))
    }

    /// Record a button change. Only the left button is tracked.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<TouchEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match (state, self.pressed) {
            (ElementState::Pressed, false) => {
                self.pressed = true;
                Some(self.event(TouchPhase::Started))
            }
            (ElementState::Released, true) => {
                self.pressed = false;
                Some(self.event(TouchPhase::Ended))
            }
            _ => None,
        }
    }

    /// The cursor left the window. Cancels a drag in progress.
    pub fn cursor_left(&mut self) -> Option<TouchEvent> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(self.event(TouchPhase::Cancelled))
    }

    fn event(&self, phase: TouchPhase) -> TouchEvent {
        TouchEvent::with_points(vec![TouchPoint::new(MOUSE_TOUCH_ID, self.position, phase)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_phase_conversion() {
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Started), TouchPhase::Started);
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Moved), TouchPhase::Moved);
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Ended), TouchPhase::Ended);
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Cancelled), TouchPhase::Cancelled);
    }

    #[test]
    fn test_logical_conversion() {
        let point = to_logical_point(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(point, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut mouse = MouseDragTracker::new();

        assert!(mouse.cursor_moved(PhysicalPosition::new(10.0, 10.0), 1.0).is_none());

        let down = mouse.mouse_input(ElementState::Pressed, MouseButton::Left).unwrap();
        assert_eq!(down.points[0].phase, TouchPhase::Started);
        assert_eq!(down.points[0].id, MOUSE_TOUCH_ID);
        assert_eq!(down.points[0].position, Point::new(10.0, 10.0));

        let moved = mouse.cursor_moved(PhysicalPosition::new(60.0, 12.0), 1.0).unwrap();
        assert_eq!(moved.points[0].phase, TouchPhase::Moved);
        assert_eq!(moved.points[0].position, Point::new(60.0, 12.0));

        let up = mouse.mouse_input(ElementState::Released, MouseButton::Left).unwrap();
        assert_eq!(up.points[0].phase, TouchPhase::Ended);
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut mouse = MouseDragTracker::new();
        assert!(mouse.mouse_input(ElementState::Pressed, MouseButton::Right).is_none());
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_repeated_press_is_ignored() {
        let mut mouse = MouseDragTracker::new();
        assert!(mouse.mouse_input(ElementState::Pressed, MouseButton::Left).is_some());
        assert!(mouse.mouse_input(ElementState::Pressed, MouseButton::Left).is_none());
        assert!(mouse.mouse_input(ElementState::Released, MouseButton::Left).is_some());
        assert!(mouse.mouse_input(ElementState::Released, MouseButton::Left).is_none());
    }

    #[test]
    fn test_cursor_left_cancels_drag() {
        let mut mouse = MouseDragTracker::new();
        assert!(mouse.cursor_left().is_none());

        mouse.mouse_input(ElementState::Pressed, MouseButton::Left);
        let cancelled = mouse.cursor_left().unwrap();
        assert_eq!(cancelled.points[0].phase, TouchPhase::Cancelled);
        assert!(!mouse.is_pressed());
    }
}
