//! Declarative configuration for [`RotateLayout`](crate::widgets::RotateLayout).
//!
//! Attributes are read from TOML; missing keys fall back to the defaults.
//!
//! ```
//! use rotate_layout::config::RotateLayoutConfig;
//!
//! let config: RotateLayoutConfig = "angle = -90\nsnap_to_right_angles = false"
//!     .parse()
//!     .unwrap();
//! assert_eq!(config.angle, -90);
//! assert!(!config.snap_to_right_angles);
//! ```

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrError {
    #[error("invalid rotate layout attributes: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Construction-time settings for a rotate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotateLayoutConfig {
    /// Initial angle in degrees
    pub angle: i32,
    /// Snap the angle down to a multiple of 90 degrees
    pub snap_to_right_angles: bool,
}

impl RotateLayoutConfig {
    pub fn from_toml(s: &str) -> Result<Self, AttrError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for RotateLayoutConfig {
    fn default() -> Self {
        Self {
            angle: 0,
            snap_to_right_angles: true,
        }
    }
}

impl FromStr for RotateLayoutConfig {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}
