//! Horizon Swipe - swipe-to-dismiss list items.
//!
//! This is the main crate; it re-exports the core systems from
//! `horizon-swipe-core` alongside the widget layer.
//!
//! A [`SwipeableListItem`] shows a front layer over a back layer. Dragging the
//! front layer right past a quarter of its width slides it out, collapses the
//! row and fires [`SwipeableListItem::action_triggered`]; shorter drags snap
//! back.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_swipe::prelude::*;
//! use horizon_swipe::{ClockAnimator, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut item = SwipeableListItem::with_animator("Buy milk", "Delete", ClockAnimator::new(clock.clone()));
//! item.action_triggered.connect(|_| println!("removed"));
//!
//! item.mount(ScriptedGestures::new())?;
//! item.set_front_size(Size::new(200.0, 48.0));
//!
//! item.gesture_source_mut().unwrap().push_drag(&[30.0, 60.0]);
//! item.process()?;
//! assert_eq!(item.status(), SwipeStatus::Committing);
//!
//! clock.advance(Duration::from_millis(250));
//! item.process()?;
//! clock.advance(Duration::from_millis(250));
//! item.process()?;
//! assert_eq!(item.status(), SwipeStatus::Removed);
//! # Ok::<(), horizon_swipe::SwipeError>(())
//! ```

pub use horizon_swipe_core::*;

pub mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::SwipeConfig;
pub use error::{Result, SwipeError};
pub use widget::animation::{Animator, ClockAnimator};
pub use widget::widgets::{SwipeFrame, SwipeStatus, SwipeableListItem};
