//! Swipeable list item widget.
//!
//! This module provides [`SwipeableListItem`], a two-layer list row. Dragging
//! the front layer to the right reveals the back layer (typically a delete
//! affordance). Releasing past the trigger threshold slides the front layer
//! out, collapses the whole row, and emits [`SwipeableListItem::action_triggered`].
//! Releasing before it snaps the front layer back to rest.
//!
//! # Example
//!
//! ```
//! use horizon_swipe::prelude::*;
//!
//! let mut item = SwipeableListItem::new("Buy milk", "Delete").with_class_name("todo-row");
//! item.action_triggered.connect(|_| println!("remove the row from the model"));
//!
//! item.mount(HorizontalPanRecognizer::new()).unwrap();
//! item.set_front_size(Size::new(320.0, 48.0));
//!
//! // Each frame: route pointer input to the recognizer, then process.
//! item.process().unwrap();
//! ```
//!
//! # State machine
//!
//! ```text
//! Idle ──drag──▶ Dragging ──release──▶ SnappingBack ──done──▶ Idle
//!                    ▲          └──release past threshold──▶ Committing ──done──▶ Removed
//!                    └──────── a new drag preempts SnappingBack and the slide-out
//! ```

use horizon_swipe_core::logging::{span_names, targets};
use horizon_swipe_core::{PerfSpan, Signal};

use crate::config::SwipeConfig;
use crate::error::{Result, SwipeError};
use crate::widget::animation::{AnimationFrame, AnimationHandle, Animator, ClockAnimator, Tween};
use crate::widget::events::PanGestureEvent;
use crate::widget::geometry::{ItemHeight, Length, Size};
use crate::widget::gesture::{GestureSource, HorizontalPanRecognizer};

/// Base class applied to the whole item.
pub const ITEM_CLASS: &str = "swipe-delete";
/// Class applied to the front layer.
pub const FRONT_CLASS: &str = "swipe-delete__front";
/// Class applied to the back layer.
pub const BACK_CLASS: &str = "swipe-delete__back";

/// Externally visible state of a swipeable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeStatus {
    /// At rest, waiting for a drag.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Animating back to rest.
    SnappingBack,
    /// Sliding out and collapsing.
    Committing,
    /// Collapsed; the action has been emitted.
    Removed,
}

/// Which animation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationKind {
    /// Front layer returning to 0.
    SnapBack,
    /// Front layer leaving to its full width.
    SlideOut,
    /// Whole item shrinking and fading.
    Collapse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Animating {
        kind: AnimationKind,
        handle: AnimationHandle,
    },
    Removed,
}

impl Phase {
    fn status(self) -> SwipeStatus {
        match self {
            Phase::Idle => SwipeStatus::Idle,
            Phase::Dragging => SwipeStatus::Dragging,
            Phase::Animating {
                kind: AnimationKind::SnapBack,
                ..
            } => SwipeStatus::SnappingBack,
            Phase::Animating { .. } => SwipeStatus::Committing,
            Phase::Removed => SwipeStatus::Removed,
        }
    }
}

/// Mutable render state owned by the item.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SwipeState {
    /// Offset applied to the front layer.
    translate_x: Length,
    /// Offset the last gesture or animation settled at; the next drag's baseline.
    last_position: f32,
    /// Opacity of the whole item.
    opacity: f32,
    /// Height of the whole item.
    height: ItemHeight,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            translate_x: Length::default(),
            last_position: 0.0,
            opacity: 1.0,
            height: ItemHeight::Auto,
        }
    }
}

/// Visual state for one paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFrame {
    /// Front layer offset.
    pub translate_x: Length,
    /// Whole-item opacity.
    pub opacity: f32,
    /// Whole-item height.
    pub height: ItemHeight,
}

impl SwipeFrame {
    /// The front layer's transform, e.g. `translateX(40px)`.
    pub fn front_transform(&self) -> String {
        format!("translateX({})", self.translate_x)
    }

    /// The whole item's inline style, e.g. `opacity: 1; height: auto`.
    pub fn item_style(&self) -> String {
        format!("opacity: {}; height: {}", self.opacity, self.height)
    }
}

/// Which layer a [`Layer`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// The revealed layer.
    Back,
    /// The draggable layer.
    Front,
}

/// One layer to paint, with its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer<'a, C> {
    /// Which layer this is.
    pub role: LayerRole,
    /// The caller's content.
    pub content: &'a C,
    /// Style class for the layer.
    pub class_name: &'static str,
    /// Horizontal offset. Always zero for the back layer.
    pub translate_x: Length,
}

/// A list row that can be swiped away.
///
/// The item owns its gesture source while mounted and always owns its
/// animator. Hosts drive it with two calls: they feed platform input to the
/// gesture source (see [`gesture_source_mut`](Self::gesture_source_mut)) and
/// call [`process`](Self::process) once per frame.
///
/// # Signals
///
/// - `action_triggered()`: Emitted once per commit, after the collapse finishes
/// - `status_changed(SwipeStatus)`: Emitted on every status transition
pub struct SwipeableListItem<C, G = HorizontalPanRecognizer, A = ClockAnimator>
where
    G: GestureSource,
    A: Animator,
{
    front: C,
    back: C,
    class_name: Option<String>,
    config: SwipeConfig,

    /// Rendered size of the front layer, once laid out.
    front_size: Option<Size>,

    state: SwipeState,
    phase: Phase,

    /// Attached gesture source while mounted.
    gestures: Option<G>,
    animator: A,

    /// Signal emitted when a commit completes.
    pub action_triggered: Signal<()>,

    /// Signal emitted when the status changes.
    pub status_changed: Signal<SwipeStatus>,
}

impl<C> SwipeableListItem<C> {
    /// Create an item animated by the system clock.
    pub fn new(front: C, back: C) -> Self {
        Self::with_animator(front, back, ClockAnimator::system())
    }
}

impl<C, G: GestureSource, A: Animator> SwipeableListItem<C, G, A> {
    /// Create an item with a specific animator.
    pub fn with_animator(front: C, back: C, animator: A) -> Self {
        Self {
            front,
            back,
            class_name: None,
            config: SwipeConfig::default(),
            front_size: None,
            state: SwipeState::default(),
            phase: Phase::Idle,
            gestures: None,
            animator,
            action_triggered: Signal::new(),
            status_changed: Signal::new(),
        }
    }

    /// Set an extra style class (builder pattern).
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the configuration (builder pattern).
    ///
    /// Fails with [`SwipeError::InvalidConfig`] if the configuration does not validate.
    pub fn with_config(mut self, config: SwipeConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    // =========================================================================
    // Content and configuration
    // =========================================================================

    /// The front layer's content.
    pub fn front(&self) -> &C {
        &self.front
    }

    /// The back layer's content.
    pub fn back(&self) -> &C {
        &self.back
    }

    /// The caller's extra style class.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Set the caller's extra style class.
    pub fn set_class_name(&mut self, class_name: Option<String>) {
        self.class_name = class_name;
    }

    /// The active configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The configuration is validated first; on error the current one is kept.
    /// A mounted gesture source is reconfigured immediately.
    pub fn set_config(&mut self, config: SwipeConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            tracing::warn!(target: targets::CONFIG, %err, "swipe configuration rejected");
            return Err(err);
        }
        if let Some(source) = self.gestures.as_mut() {
            source.configure(&config);
        }
        self.config = config;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach a gesture source and reset the item to rest.
    ///
    /// Fails with [`SwipeError::AlreadyMounted`] if a source is already attached.
    pub fn mount(&mut self, mut source: G) -> Result<()> {
        if self.gestures.is_some() {
            return Err(SwipeError::AlreadyMounted);
        }

        source.configure(&self.config);
        source.attach();
        self.gestures = Some(source);
        self.state = SwipeState::default();
        self.set_phase(Phase::Idle);
        tracing::debug!(target: targets::SWIPE, "swipe item mounted");
        Ok(())
    }

    /// Detach and return the gesture source.
    ///
    /// Any running animation is paused and `action_triggered` is not emitted,
    /// whatever state the item was in. An item that was not removed returns to
    /// rest. Does nothing if not mounted.
    pub fn unmount(&mut self) -> Option<G> {
        let mut source = self.gestures.take()?;
        source.detach();

        if let Phase::Animating { handle, kind } = self.phase {
            self.animator.pause(handle);
            tracing::debug!(target: targets::SWIPE, ?kind, "animation abandoned on unmount");
        }
        if self.phase != Phase::Removed {
            self.state = SwipeState::default();
            self.set_phase(Phase::Idle);
        }

        tracing::debug!(target: targets::SWIPE, "swipe item unmounted");
        Some(source)
    }

    /// Whether a gesture source is attached.
    pub fn is_mounted(&self) -> bool {
        self.gestures.is_some()
    }

    /// The attached gesture source, for routing platform input into it.
    pub fn gesture_source_mut(&mut self) -> Option<&mut G> {
        self.gestures.as_mut()
    }

    /// The animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Record the front layer's rendered size from a layout pass.
    pub fn set_front_size(&mut self, size: Size) {
        self.front_size = Some(size);
    }

    /// The front layer's rendered size, if laid out.
    pub fn front_size(&self) -> Option<Size> {
        self.front_size
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Drain pending gestures, then advance animations.
    ///
    /// Call once per frame. Gestures run first so a new drag pauses any
    /// running animation before that animation can tick again.
    pub fn process(&mut self) -> Result<()> {
        let _perf = PerfSpan::new(span_names::SWIPE);
        let source = self.gestures.as_mut().ok_or(SwipeError::NotMounted)?;
        let events: Vec<PanGestureEvent> = std::iter::from_fn(|| source.next_event()).collect();

        for event in &events {
            self.handle_pan(event);
        }
        self.advance_animations();
        Ok(())
    }

    /// Apply one pan event.
    pub fn handle_pan(&mut self, event: &PanGestureEvent) {
        if !self.is_mounted() {
            tracing::warn!(target: targets::SWIPE, "pan event on unmounted swipe item ignored");
            return;
        }

        match self.phase {
            Phase::Removed => return,
            Phase::Animating {
                kind: AnimationKind::Collapse,
                ..
            } => {
                tracing::trace!(target: targets::SWIPE, "pan ignored while collapsing");
                return;
            }
            Phase::Animating { kind, handle } => {
                self.animator.pause(handle);
                tracing::debug!(target: targets::SWIPE, ?kind, "drag preempted animation");
                // Keep the baseline where the animation left the layer.
                self.set_phase(Phase::Dragging);
            }
            Phase::Idle | Phase::Dragging => {}
        }

        let candidate = (self.state.last_position + event.delta_x).max(0.0);
        self.state.translate_x = Length::Px(candidate);

        if event.is_final() {
            self.settle(candidate);
        } else {
            tracing::trace!(target: targets::SWIPE, offset = candidate, "drag");
            self.set_phase(Phase::Dragging);
        }
    }

    /// Advance running animations and apply their frames.
    pub fn advance_animations(&mut self) {
        for frame in self.animator.poll() {
            self.apply_frame(frame);
        }
    }

    /// Start the release animation from `candidate`.
    fn settle(&mut self, candidate: f32) {
        let (target, commit) = match self.front_size {
            None => {
                tracing::warn!(
                    target: targets::SWIPE,
                    "released before the front layer was laid out; settling to rest"
                );
                (0.0, false)
            }
            Some(size) => {
                let ratio = if size.has_width() {
                    candidate / size.width
                } else {
                    tracing::warn!(target: targets::SWIPE, width = size.width, "front layer has no width; treating swipe ratio as 0");
                    0.0
                };
                let commit = ratio > self.config.trigger_ratio;
                tracing::debug!(target: targets::SWIPE, offset = candidate, ratio, commit, "drag released");
                (if commit { size.width } else { 0.0 }, commit)
            }
        };

        let tween = Tween::new(self.config.settle_duration(), self.config.easing).channel(candidate, target);
        let handle = self.animator.start(tween);
        let kind = if commit {
            AnimationKind::SlideOut
        } else {
            AnimationKind::SnapBack
        };
        self.set_phase(Phase::Animating { kind, handle });
    }

    fn begin_collapse(&mut self) {
        let height = self.front_size.map_or(0.0, |s| s.height);
        let tween = Tween::new(self.config.collapse_duration(), self.config.easing)
            .channel(height, 0.0)
            .channel(1.0, 0.0);
        let handle = self.animator.start(tween);
        self.state.height = ItemHeight::Px(height);
        self.set_phase(Phase::Animating {
            kind: AnimationKind::Collapse,
            handle,
        });
    }

    fn apply_frame(&mut self, frame: AnimationFrame) {
        let Phase::Animating { kind, handle } = self.phase else {
            tracing::trace!(target: targets::SWIPE, "frame for inactive animation dropped");
            return;
        };
        if frame.handle != handle {
            tracing::trace!(target: targets::SWIPE, "stale animation frame dropped");
            return;
        }

        match kind {
            AnimationKind::SnapBack | AnimationKind::SlideOut => {
                let position = frame.values.first().copied().unwrap_or(0.0).max(0.0);
                self.state.translate_x = Length::Px(position);
                self.state.last_position = position;

                if frame.finished {
                    if kind == AnimationKind::SlideOut {
                        self.begin_collapse();
                    } else {
                        self.set_phase(Phase::Idle);
                    }
                }
            }
            AnimationKind::Collapse => {
                if let &[height, opacity, ..] = frame.values.as_slice() {
                    self.state.height = ItemHeight::Px(height.max(0.0));
                    self.state.opacity = opacity.clamp(0.0, 1.0);
                } else {
                    tracing::trace!(
                        target: targets::SWIPE,
                        channels = frame.values.len(),
                        "short collapse frame dropped"
                    );
                }

                if frame.finished {
                    self.set_phase(Phase::Removed);
                    tracing::info!(target: targets::SWIPE, "swipe action committed");
                    self.action_triggered.emit(());
                }
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        let previous = self.phase.status();
        self.phase = phase;
        let status = phase.status();
        if status != previous {
            tracing::debug!(target: targets::SWIPE, ?previous, ?status, "status changed");
            self.status_changed.emit(status);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Current status.
    pub fn status(&self) -> SwipeStatus {
        self.phase.status()
    }

    /// Current front layer offset.
    pub fn translate_x(&self) -> Length {
        self.state.translate_x
    }

    /// Where the last gesture or animation settled.
    pub fn last_position(&self) -> f32 {
        self.state.last_position
    }

    /// Current whole-item opacity.
    pub fn opacity(&self) -> f32 {
        self.state.opacity
    }

    /// Current whole-item height.
    pub fn height(&self) -> ItemHeight {
        self.state.height
    }

    /// Snapshot of everything that affects painting.
    pub fn frame(&self) -> SwipeFrame {
        SwipeFrame {
            translate_x: self.state.translate_x,
            opacity: self.state.opacity,
            height: self.state.height,
        }
    }

    /// The front layer's transform, e.g. `translateX(40px)`.
    pub fn front_transform(&self) -> String {
        self.frame().front_transform()
    }

    /// Classes for the whole item: the base class plus the caller's.
    pub fn class_names(&self) -> String {
        match self.class_name.as_deref() {
            Some(extra) if !extra.trim().is_empty() => format!("{ITEM_CLASS} {}", extra.trim()),
            _ => ITEM_CLASS.to_string(),
        }
    }

    /// Layers in paint order: back first, front on top.
    pub fn layers(&self) -> [Layer<'_, C>; 2] {
        [
            Layer {
                role: LayerRole::Back,
                content: &self.back,
                class_name: BACK_CLASS,
                translate_x: Length::Px(0.0),
            },
            Layer {
                role: LayerRole::Front,
                content: &self.front,
                class_name: FRONT_CLASS,
                translate_x: self.state.translate_x,
            },
        ]
    }
}

impl<C, G: GestureSource, A: Animator> Drop for SwipeableListItem<C, G, A> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<C: std::fmt::Debug, G: GestureSource, A: Animator> std::fmt::Debug for SwipeableListItem<C, G, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeableListItem")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("class_name", &self.class_name)
            .field("status", &self.status())
            .field("translate_x", &self.state.translate_x)
            .field("last_position", &self.state.last_position)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

static_assertions::assert_impl_all!(SwipeableListItem<String>: Send, Sync);
