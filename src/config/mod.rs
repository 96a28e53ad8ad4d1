//! Configuration system for livescroll.
//!
//! This module provides the configuration structure with sensible defaults and
//! support for serialization/deserialization via serde. Configuration is read
//! from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use livescroll::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.markers, vec!["current".to_string()]);
//! assert!(!config.snap_to_top);
//!
//! // Create custom configuration
//! let custom = Config {
//!     snap_to_top: true,
//!     nav_bar_height: 52.0,
//!     ..Config::default()
//! };
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::{LayoutMetrics, SnapPolicy};
use crate::scroller::{Markers, ScrollerOptions};

/// Configuration for livescroll.
///
/// # Fields
///
/// * `markers` - Markers put on the current item (default: `["current"]`)
/// * `snap_to_top` - Always align the current item with the top (default: false)
/// * `nav_bar_height` - Height of fixed chrome at the top of the viewport (default: 0)
/// * `bottom_margin` - Space kept below bottom-aligned items (default: 48, i.e. 3em)
/// * `viewport_height` - Viewport height used by the script runner (default: 800)
/// * `log_filter` - Fallback tracing filter when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Markers put on the current item
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Always align the current item with the top of the viewport
    #[serde(default)]
    pub snap_to_top: bool,

    /// Height of the fixed navigation bar
    #[serde(default)]
    pub nav_bar_height: f64,

    /// Space kept below an item aligned to the bottom of the viewport
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f64,

    /// Viewport height used when replaying scripts
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,

    /// Tracing filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_markers() -> Vec<String> {
    vec!["current".to_string()]
}

/// Returns the default bottom margin (3em at a 16px font size).
fn default_bottom_margin() -> f64 {
    48.0
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            snap_to_top: false,
            nav_bar_height: 0.0,
            bottom_margin: default_bottom_margin(),
            viewport_height: default_viewport_height(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/livescroll/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("livescroll");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring malformed config");
                Self::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read config");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Snap policy selected by `snap_to_top`.
    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy::from_snap_to_top(self.snap_to_top)
    }

    /// Layout metrics for revealing items.
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            nav_bar_height: self.nav_bar_height,
            bottom_margin: self.bottom_margin,
        }
    }

    /// Validated scroller options.
    ///
    /// # Errors
    ///
    /// Fails if a configured marker is empty or contains whitespace.
    pub fn scroller_options(&self) -> crate::scroller::Result<ScrollerOptions> {
        Ok(ScrollerOptions {
            markers: Markers::new(self.markers.iter().cloned())?,
            snap: self.snap_policy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_top_default() {
        let config = Config::default();
        assert_eq!(config.snap_policy(), SnapPolicy::Nearest);
    }

    #[test]
    fn test_snap_to_top_can_be_enabled() {
        let config = Config {
            snap_to_top: true,
            ..Default::default()
        };
        assert_eq!(config.snap_policy(), SnapPolicy::Top);
    }
}
