//! Gesture sources for swipe widgets.
//!
//! A [`GestureSource`] is what a widget attaches to its front layer on mount
//! and detaches on unmount. It yields [`PanGestureEvent`]s lazily: the widget
//! pulls whatever is pending each time the host processes it.
//!
//! [`HorizontalPanRecognizer`] is the production source. It recognizes
//! single-finger horizontal pans from raw touch (or mouse) input:
//!
//! ```
//! use horizon_swipe::widget::events::{TouchEvent, TouchPhase};
//! use horizon_swipe::widget::gesture::{GestureSource, HorizontalPanRecognizer};
//!
//! let mut recognizer = HorizontalPanRecognizer::new();
//! recognizer.attach();
//!
//! recognizer.process_touch(&TouchEvent::single(1, TouchPhase::Started, 100.0, 50.0));
//! recognizer.process_touch(&TouchEvent::single(1, TouchPhase::Moved, 160.0, 52.0));
//! recognizer.process_touch(&TouchEvent::single(1, TouchPhase::Ended, 160.0, 52.0));
//!
//! let first = recognizer.next_event().unwrap();
//! assert_eq!(first.delta_x, 60.0);
//! assert!(recognizer.next_event().unwrap().is_final());
//! ```

use std::collections::VecDeque;

use horizon_swipe_core::logging::targets;

use super::events::{GestureState, PanGestureEvent, TouchEvent, TouchPhase, TouchPoint};
use super::geometry::Point;
use crate::config::{DEFAULT_PAN_THRESHOLD, SwipeConfig};

/// A cancellable, pull-based stream of pan events.
pub trait GestureSource {
    /// Start delivering events.
    fn attach(&mut self);

    /// Stop delivering events and discard anything pending.
    fn detach(&mut self);

    /// Whether the source is attached.
    fn is_attached(&self) -> bool;

    /// Take the next pending event, if any.
    fn next_event(&mut self) -> Option<PanGestureEvent>;

    /// Apply the owning widget's configuration. Called on mount and whenever
    /// the widget's configuration changes. The default ignores it.
    fn configure(&mut self, config: &SwipeConfig) {
        let _ = config;
    }
}

/// Recognition state of the tracked touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recognition {
    /// Not yet moved past the threshold.
    Possible,
    /// Recognized as a horizontal pan.
    Panning,
    /// Moved vertically first; ignored until it lifts.
    Rejected,
}

#[derive(Debug, Clone, Copy)]
struct TrackedTouch {
    id: u64,
    start: Point,
    current: Point,
    recognition: Recognition,
}

impl TrackedTouch {
    fn delta(&self) -> (f32, f32) {
        (
            self.current.x - self.start.x,
            self.current.y - self.start.y,
        )
    }
}

/// Recognizes horizontal single-finger pans.
///
/// A pan begins once horizontal travel exceeds the threshold and is at least
/// as large as vertical travel. A touch that moves vertically past the
/// threshold first is rejected for the rest of its lifetime, leaving vertical
/// scrolling to whatever contains the widget. Additional fingers are ignored.
#[derive(Debug)]
pub struct HorizontalPanRecognizer {
    threshold: f32,
    attached: bool,
    touch: Option<TrackedTouch>,
    pending: VecDeque<PanGestureEvent>,
}

impl Default for HorizontalPanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalPanRecognizer {
    /// Create a detached recognizer with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_PAN_THRESHOLD)
    }

    /// Create a detached recognizer with a custom threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            attached: false,
            touch: None,
            pending: VecDeque::new(),
        }
    }

    /// Create a detached recognizer using `config.pan_threshold`.
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self::with_threshold(config.pan_threshold)
    }

    /// The recognition threshold in pixels.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a pan is currently recognized.
    pub fn is_panning(&self) -> bool {
        self.touch
            .is_some_and(|t| t.recognition == Recognition::Panning)
    }

    /// Number of events waiting to be pulled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Feed raw touch input. Ignored while detached.
    pub fn process_touch(&mut self, event: &TouchEvent) {
        if !self.attached {
            tracing::trace!(target: targets::GESTURE, "touch ignored by detached recognizer");
            return;
        }

        for point in &event.points {
            match point.phase {
                TouchPhase::Started => self.handle_touch_start(point),
                TouchPhase::Moved => self.handle_touch_move(point),
                TouchPhase::Ended => self.handle_touch_finish(point, GestureState::Ended),
                TouchPhase::Cancelled => self.handle_touch_finish(point, GestureState::Cancelled),
            }
        }
    }

    fn handle_touch_start(&mut self, point: &TouchPoint) {
        if self.touch.is_some() {
            return;
        }
        self.touch = Some(TrackedTouch {
            id: point.id,
            start: point.position,
            current: point.position,
            recognition: Recognition::Possible,
        });
    }

    fn handle_touch_move(&mut self, point: &TouchPoint) {
        let threshold = self.threshold;
        let Some(touch) = self.touch.as_mut().filter(|t| t.id == point.id) else {
            return;
        };

        touch.current = point.position;
        let (dx, dy) = touch.delta();

        let event = match touch.recognition {
            Recognition::Possible => {
                if dx.abs() > threshold && dx.abs() >= dy.abs() {
                    touch.recognition = Recognition::Panning;
                    tracing::debug!(target: targets::GESTURE, delta_x = dx, "horizontal pan recognized");
                    Some(PanGestureEvent::new(dx, dy, GestureState::Started))
                } else {
                    if dy.abs() > threshold && dy.abs() > dx.abs() {
                        touch.recognition = Recognition::Rejected;
                        tracing::debug!(target: targets::GESTURE, delta_y = dy, "vertical movement, pan rejected");
                    }
                    None
                }
            }
            Recognition::Panning => Some(PanGestureEvent::new(dx, dy, GestureState::Updated)),
            Recognition::Rejected => None,
        };

        if let Some(event) = event {
            tracing::trace!(target: targets::GESTURE, delta_x = event.delta_x, "pan update");
            self.pending.push_back(event);
        }
    }

    fn handle_touch_finish(&mut self, point: &TouchPoint, state: GestureState) {
        let Some(mut touch) = self.touch.filter(|t| t.id == point.id) else {
            return;
        };
        self.touch = None;

        if touch.recognition != Recognition::Panning {
            return;
        }

        if state == GestureState::Ended {
            touch.current = point.position;
        }
        let (dx, dy) = touch.delta();
        tracing::debug!(target: targets::GESTURE, delta_x = dx, ?state, "pan finished");
        self.pending.push_back(PanGestureEvent::new(dx, dy, state));
    }
}

impl GestureSource for HorizontalPanRecognizer {
    fn configure(&mut self, config: &SwipeConfig) {
        self.threshold = config.pan_threshold.max(0.0);
        tracing::debug!(target: targets::GESTURE, threshold = self.threshold, "pan threshold configured");
    }

    fn attach(&mut self) {
        self.attached = true;
        tracing::debug!(target: targets::GESTURE, "pan recognizer attached");
    }

    fn detach(&mut self) {
        self.attached = false;
        self.touch = None;
        self.pending.clear();
        tracing::debug!(target: targets::GESTURE, "pan recognizer detached");
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn next_event(&mut self) -> Option<PanGestureEvent> {
        if !self.attached {
            return None;
        }
        self.pending.pop_front()
    }
}

/// A source that replays pan events pushed by the caller.
///
/// Useful for driving widgets without pointer input, for example from tests,
/// demos, or an accessibility action.
#[derive(Debug, Default)]
pub struct ScriptedGestures {
    attached: bool,
    queue: VecDeque<PanGestureEvent>,
}

impl ScriptedGestures {
    /// Create an empty, detached script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached script preloaded with `events`.
    pub fn from_events(events: impl IntoIterator<Item = PanGestureEvent>) -> Self {
        Self {
            attached: false,
            queue: events.into_iter().collect(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: PanGestureEvent) {
        self.queue.push_back(event);
    }

    /// Append a drag that moves through `deltas` and releases at the last one.
    pub fn push_drag(&mut self, deltas: &[f32]) {
        let Some((&last, moves)) = deltas.split_last() else {
            return;
        };
        self.queue
            .extend(moves.iter().map(|&dx| PanGestureEvent::moved(dx)));
        self.queue.push_back(PanGestureEvent::released(last));
    }

    /// Number of events not yet pulled.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether every event has been pulled.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl GestureSource for ScriptedGestures {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.queue.clear();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn next_event(&mut self) -> Option<PanGestureEvent> {
        if !self.attached {
            return None;
        }
        self.queue.pop_front()
    }
}

static_assertions::assert_impl_all!(HorizontalPanRecognizer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> HorizontalPanRecognizer {
        let mut recognizer = HorizontalPanRecognizer::new();
        recognizer.attach();
        recognizer
    }

    fn touch(recognizer: &mut HorizontalPanRecognizer, id: u64, phase: TouchPhase, x: f32, y: f32) {
        recognizer.process_touch(&TouchEvent::single(id, phase, x, y));
    }

    fn drain(recognizer: &mut HorizontalPanRecognizer) -> Vec<PanGestureEvent> {
        std::iter::from_fn(|| recognizer.next_event()).collect()
    }

    #[test]
    fn test_horizontal_pan_sequence() {
        let mut recognizer = attached();

        touch(&mut recognizer, 1, TouchPhase::Started, 100.0, 100.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 105.0, 100.0);
        assert!(drain(&mut recognizer).is_empty(), "below threshold");

        touch(&mut recognizer, 1, TouchPhase::Moved, 130.0, 102.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 160.0, 101.0);
        assert!(recognizer.is_panning());
        touch(&mut recognizer, 1, TouchPhase::Ended, 170.0, 101.0);

        let events = drain(&mut recognizer);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].state, GestureState::Started);
        assert_eq!(events[0].delta_x, 30.0);
        assert_eq!(events[1].state, GestureState::Updated);
        assert_eq!(events[1].delta_x, 60.0);
        assert_eq!(events[2].state, GestureState::Ended);
        assert_eq!(events[2].delta_x, 70.0);
        assert!(events[2].is_final());
        assert!(!recognizer.is_panning());
    }

    #[test]
    fn test_leftward_pan_has_negative_delta() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 100.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 60.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Ended, 60.0, 0.0);

        let events = drain(&mut recognizer);
        assert_eq!(events.last().unwrap().delta_x, -40.0);
    }

    #[test]
    fn test_vertical_movement_rejects_touch() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 100.0, 100.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 102.0, 140.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 200.0, 140.0);
        touch(&mut recognizer, 1, TouchPhase::Ended, 200.0, 140.0);

        assert!(drain(&mut recognizer).is_empty());
    }

    #[test]
    fn test_tap_produces_nothing() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 100.0, 100.0);
        touch(&mut recognizer, 1, TouchPhase::Ended, 101.0, 100.0);
        assert!(drain(&mut recognizer).is_empty());
    }

    #[test]
    fn test_cancel_is_final() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 50.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Cancelled, 0.0, 0.0);

        let events = drain(&mut recognizer);
        let last = events.last().unwrap();
        assert_eq!(last.state, GestureState::Cancelled);
        assert_eq!(last.delta_x, 50.0);
        assert!(last.is_final());
    }

    #[test]
    fn test_second_finger_ignored() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 2, TouchPhase::Started, 300.0, 0.0);
        touch(&mut recognizer, 2, TouchPhase::Moved, 400.0, 0.0);
        assert!(drain(&mut recognizer).is_empty());

        touch(&mut recognizer, 1, TouchPhase::Moved, 20.0, 0.0);
        assert_eq!(drain(&mut recognizer).len(), 1);
    }

    #[test]
    fn test_detached_recognizer_ignores_input() {
        let mut recognizer = HorizontalPanRecognizer::new();
        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 50.0, 0.0);
        assert_eq!(recognizer.pending_len(), 0);
        assert!(recognizer.next_event().is_none());
    }

    #[test]
    fn test_detach_discards_pending() {
        let mut recognizer = attached();
        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 50.0, 0.0);
        assert_eq!(recognizer.pending_len(), 1);

        recognizer.detach();
        assert!(!recognizer.is_attached());
        assert_eq!(recognizer.pending_len(), 0);
        assert!(!recognizer.is_panning());
    }

    #[test]
    fn test_threshold_from_config() {
        let config = SwipeConfig {
            pan_threshold: 24.0,
            ..SwipeConfig::default()
        };
        let mut recognizer = HorizontalPanRecognizer::from_config(&config);
        recognizer.attach();
        assert_eq!(recognizer.threshold(), 24.0);

        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 20.0, 0.0);
        assert!(!recognizer.is_panning());
        touch(&mut recognizer, 1, TouchPhase::Moved, 25.0, 0.0);
        assert!(recognizer.is_panning());
    }

    #[test]
    fn test_configure_overrides_threshold() {
        let mut recognizer = HorizontalPanRecognizer::new();
        recognizer.configure(&SwipeConfig {
            pan_threshold: 40.0,
            ..SwipeConfig::default()
        });
        recognizer.attach();
        assert_eq!(recognizer.threshold(), 40.0);

        touch(&mut recognizer, 1, TouchPhase::Started, 0.0, 0.0);
        touch(&mut recognizer, 1, TouchPhase::Moved, 20.0, 0.0);
        assert!(!recognizer.is_panning());
        touch(&mut recognizer, 1, TouchPhase::Moved, 41.0, 0.0);
        assert!(recognizer.is_panning());
    }

    #[test]
    fn test_scripted_gestures() {
        let mut script = ScriptedGestures::new();
        script.push_drag(&[10.0, 30.0, 60.0]);
        assert_eq!(script.len(), 3);

        assert!(script.next_event().is_none(), "detached scripts stay silent");
        script.attach();

        let events: Vec<_> = std::iter::from_fn(|| script.next_event()).collect();
        assert_eq!(events.len(), 3);
        assert!(!events[1].is_final());
        assert!(events[2].is_final());
        assert_eq!(events[2].delta_x, 60.0);
        assert!(script.is_empty());
    }
}
