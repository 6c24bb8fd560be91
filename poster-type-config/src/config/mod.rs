//! Poster layout configuration.
//!
//! # Sub-modules
//!
//! - [`persistence`] — `impl Config` methods for load/save and path resolution

pub mod persistence;

use crate::error::ConfigError;
use crate::types::{FontEntry, LogLevel, WeightClass};
use serde::{Deserialize, Serialize};

/// Top-level configuration for poster typesetting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Font fallback chains per weight class
    #[serde(default)]
    pub fonts: FontsConfig,

    /// Heading auto-fit constraints
    #[serde(default)]
    pub heading: HeadingConfig,

    /// Track-list column packing constraints
    #[serde(default)]
    pub track_list: TrackListConfig,

    /// Log level for the log bridge (overridden by `--log-level` and `RUST_LOG`)
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Font fallback chains, one per weight class.
///
/// An empty chain means "use the built-in fallback families".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontsConfig {
    #[serde(default)]
    pub regular: Vec<FontEntry>,
    #[serde(default)]
    pub bold: Vec<FontEntry>,
    #[serde(default)]
    pub heavy: Vec<FontEntry>,
}

impl FontsConfig {
    /// Configured entries for a weight class, most preferred first.
    pub fn chain(&self, weight: WeightClass) -> &[FontEntry] {
        match weight {
            WeightClass::Regular => &self.regular,
            WeightClass::Bold => &self.bold,
            WeightClass::Heavy => &self.heavy,
        }
    }

    /// Mutable access to a weight class chain.
    pub fn chain_mut(&mut self, weight: WeightClass) -> &mut Vec<FontEntry> {
        match weight {
            WeightClass::Regular => &mut self.regular,
            WeightClass::Bold => &mut self.bold,
            WeightClass::Heavy => &mut self.heavy,
        }
    }
}

/// Heading auto-fit constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingConfig {
    /// Starting pixel size; the fitter only ever shrinks from here
    #[serde(default = "crate::defaults::heading_initial_size")]
    pub initial_size: u32,
    /// Maximum rendered width in pixels
    #[serde(default = "crate::defaults::heading_max_width")]
    pub max_width: u32,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            initial_size: crate::defaults::heading_initial_size(),
            max_width: crate::defaults::heading_max_width(),
        }
    }
}

/// Track-list column packing constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackListConfig {
    /// Pixel size of track names
    #[serde(default = "crate::defaults::track_font_size")]
    pub font_size: u32,
    /// Maximum rows per column
    #[serde(default = "crate::defaults::track_max_rows")]
    pub max_rows: usize,
    /// Horizontal gap between columns in pixels
    #[serde(default = "crate::defaults::track_spacing")]
    pub spacing: u32,
    /// Maximum width of the whole grid in pixels
    #[serde(default = "crate::defaults::track_max_total_width")]
    pub max_total_width: u32,
    /// Prefix every track with its 1-based number
    #[serde(default = "crate::defaults::track_with_index")]
    pub with_index: bool,
}

impl Default for TrackListConfig {
    fn default() -> Self {
        Self {
            font_size: crate::defaults::track_font_size(),
            max_rows: crate::defaults::track_max_rows(),
            spacing: crate::defaults::track_spacing(),
            max_total_width: crate::defaults::track_max_total_width(),
            with_index: crate::defaults::track_with_index(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading constraints
    pub fn with_heading(mut self, initial_size: u32, max_width: u32) -> Self {
        self.heading = HeadingConfig {
            initial_size,
            max_width,
        };
        self
    }

    /// Set the font chain for a weight class
    pub fn with_chain(mut self, weight: WeightClass, entries: Vec<FontEntry>) -> Self {
        *self.fonts.chain_mut(weight) = entries;
        self
    }

    /// Check the semantic rules serde cannot express.
    ///
    /// Sizes, widths and the row cap must be positive, and every font entry
    /// must name either a path or a family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heading.initial_size == 0 {
            return Err(ConfigError::Validation(
                "heading.initial_size must be at least 1".to_string(),
            ));
        }
        if self.heading.max_width == 0 {
            return Err(ConfigError::Validation(
                "heading.max_width must be at least 1".to_string(),
            ));
        }
        if self.track_list.font_size == 0 {
            return Err(ConfigError::Validation(
                "track_list.font_size must be at least 1".to_string(),
            ));
        }
        if self.track_list.max_rows == 0 {
            return Err(ConfigError::Validation(
                "track_list.max_rows must be at least 1".to_string(),
            ));
        }
        if self.track_list.max_total_width == 0 {
            return Err(ConfigError::Validation(
                "track_list.max_total_width must be at least 1".to_string(),
            ));
        }
        for weight in WeightClass::all() {
            for (idx, entry) in self.fonts.chain(*weight).iter().enumerate() {
                if !entry.is_resolvable() {
                    return Err(ConfigError::Validation(format!(
                        "fonts.{}[{}] needs a path or a family",
                        weight.display_name().to_lowercase(),
                        idx
                    )));
                }
            }
        }
        Ok(())
    }
}
