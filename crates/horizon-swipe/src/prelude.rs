//! Prelude module for Horizon Swipe.
//!
//! ```ignore
//! use horizon_swipe::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionId, Signal};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::widgets::{SwipeFrame, SwipeStatus, SwipeableListItem};
pub use crate::{SwipeConfig, SwipeError};

// ============================================================================
// Input
// ============================================================================

pub use crate::widget::events::{PanGestureEvent, TouchEvent, TouchPhase};
pub use crate::widget::gesture::{GestureSource, HorizontalPanRecognizer, ScriptedGestures};
pub use crate::widget::touch::MouseDragTracker;

// ============================================================================
// Geometry
// ============================================================================

pub use crate::widget::geometry::{ItemHeight, Length, Size};
