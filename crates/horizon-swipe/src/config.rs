//! Swipe behavior configuration.
//!
//! [`SwipeConfig::default()`] reproduces the widget's fixed design: a commit
//! past 25% of the front layer's width, 250 ms linear animations, and a 10 px
//! pan threshold. Applications that want a different feel can load overrides
//! from TOML; any field left out keeps its default.
//!
//! ```
//! use horizon_swipe::SwipeConfig;
//!
//! let config = SwipeConfig::from_toml_str(r#"
//! trigger_ratio = 0.4
//! easing = "ease_out"
//! "#).unwrap();
//!
//! assert_eq!(config.trigger_ratio, 0.4);
//! assert_eq!(config.settle_duration_ms, 250);
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_swipe_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwipeError};
use crate::widget::animation::Easing;

/// Fraction of the front layer's width a drag must exceed to commit.
pub const DEFAULT_TRIGGER_RATIO: f32 = 0.25;

/// Duration of the snap-back and slide-out animations.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Duration of the height/opacity collapse animation.
pub const DEFAULT_COLLAPSE_DURATION: Duration = Duration::from_millis(250);

/// Horizontal travel in pixels before a pan is recognized.
pub const DEFAULT_PAN_THRESHOLD: f32 = 10.0;

/// Tunables for a [`SwipeableListItem`](crate::SwipeableListItem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeConfig {
    /// Commit threshold as a fraction of the front width. Compared with `>`.
    pub trigger_ratio: f32,
    /// Snap-back and slide-out duration in milliseconds.
    pub settle_duration_ms: u64,
    /// Collapse duration in milliseconds.
    pub collapse_duration_ms: u64,
    /// Easing applied to every animation.
    pub easing: Easing,
    /// Minimum horizontal travel before a pan starts.
    pub pan_threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            trigger_ratio: DEFAULT_TRIGGER_RATIO,
            settle_duration_ms: DEFAULT_SETTLE_DURATION.as_millis() as u64,
            collapse_duration_ms: DEFAULT_COLLAPSE_DURATION.as_millis() as u64,
            easing: Easing::Linear,
            pan_threshold: DEFAULT_PAN_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SwipeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded swipe configuration");
        Ok(config)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.trigger_ratio.is_finite() || self.trigger_ratio <= 0.0 || self.trigger_ratio > 1.0 {
            return Err(SwipeError::InvalidConfig {
                field: "trigger_ratio",
                reason: format!("{} is not in (0, 1]", self.trigger_ratio),
            });
        }
        if !self.pan_threshold.is_finite() || self.pan_threshold < 0.0 {
            return Err(SwipeError::InvalidConfig {
                field: "pan_threshold",
                reason: format!("{} is not a non-negative distance", self.pan_threshold),
            });
        }
        Ok(())
    }

    /// Snap-back and slide-out duration.
    #[inline]
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Collapse duration.
    #[inline]
    pub fn collapse_duration(&self) -> Duration {
        Duration::from_millis(self.collapse_duration_ms)
    }

    /// Set the trigger ratio (builder pattern).
    pub fn with_trigger_ratio(mut self, ratio: f32) -> Self {
        self.trigger_ratio = ratio;
        self
    }

    /// Set the easing (builder pattern).
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
