//! Widget layer for Horizon Swipe.
//!
//! This module provides everything between raw pointer input and a painted
//! swipeable row:
//!
//! - [`touch`]: winit touch and mouse input converted to [`TouchEvent`]s
//! - [`gesture`]: [`GestureSource`] and the horizontal pan recognizer
//! - [`animation`]: Tweens, easing curves and the [`Animator`] seam
//! - [`widgets`]: The [`SwipeableListItem`] widget itself
//!
//! # Data flow
//!
//! ```text
//! winit events ─▶ MouseDragTracker / from_winit_touch ─▶ TouchEvent
//!     ─▶ HorizontalPanRecognizer ─▶ PanGestureEvent ─▶ SwipeableListItem::process
//!     ─▶ Animator frames ─▶ SwipeFrame (paint)
//! ```

pub mod animation;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod touch;
pub mod widgets;

pub use animation::{AnimationHandle, Animator, ClockAnimator, Easing, Tween};
pub use events::{GestureState, PanGestureEvent, TouchEvent, TouchPhase, TouchPoint};
pub use geometry::{ItemHeight, Length, Point, Size};
pub use gesture::{GestureSource, HorizontalPanRecognizer, ScriptedGestures};
pub use touch::MouseDragTracker;

// Re-export widgets for convenience
pub use widgets::{SwipeFrame, SwipeStatus, SwipeableListItem};
