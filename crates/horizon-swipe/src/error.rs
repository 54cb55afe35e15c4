//! Error types for the swipe crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or mounting a swipe widget.
///
/// Geometry problems during a gesture (no laid-out surface, zero width) are
/// not errors: the widget logs them and settles back to rest.
#[derive(Error, Debug)]
pub enum SwipeError {
    /// `mount` was called while a gesture source is already attached.
    #[error("widget is already mounted")]
    AlreadyMounted,

    /// An operation that needs a gesture source ran on an unmounted widget.
    #[error("widget is not mounted")]
    NotMounted,

    /// A configuration value is out of range.
    #[error("invalid configuration value for `{field}`: {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration text is not valid TOML for [`SwipeConfig`](crate::SwipeConfig).
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    ConfigIo {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for swipe operations.
pub type Result<T> = std::result::Result<T, SwipeError>;
