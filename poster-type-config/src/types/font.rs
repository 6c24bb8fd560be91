//! Font chain configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Font Types
// ============================================================================

/// One entry of a font fallback chain.
///
/// An entry names its font either by file `path` or by system `family`.
/// When both are set the path wins. Entries are listed most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontEntry {
    /// Font file on disk (TTF/OTF/TTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// System font family name, looked up through the font database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Face index inside a font collection (0 for single-face files)
    #[serde(default)]
    pub face_index: u32,
    /// Name the render backend registers this font under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl FontEntry {
    /// Entry for a font file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Entry for a system font family.
    pub fn from_family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    /// Set the render alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Alias used when registering this font with the render backend.
    ///
    /// Falls back to the family name, then to the file stem.
    pub fn display_alias(&self) -> Option<String> {
        if let Some(alias) = &self.alias {
            return Some(alias.clone());
        }
        if let Some(family) = &self.family {
            return Some(family.clone());
        }
        self.path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    /// Whether the entry names a font at all.
    pub fn is_resolvable(&self) -> bool {
        self.path.is_some() || self.family.is_some()
    }
}

/// Weight class a font chain is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Body text (track names)
    #[default]
    Regular,
    /// Artist and secondary headings
    Bold,
    /// Poster title
    Heavy,
}

impl WeightClass {
    /// CSS-style numeric weight used for system font queries
    pub fn numeric_weight(self) -> u16 {
        match self {
            WeightClass::Regular => 400,
            WeightClass::Bold => 700,
            WeightClass::Heavy => 900,
        }
    }

    /// Display name for CLI output
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightClass::Regular => "Regular",
            WeightClass::Bold => "Bold",
            WeightClass::Heavy => "Heavy",
        }
    }

    /// All weight classes in ascending weight order
    pub fn all() -> &'static [WeightClass] {
        &[WeightClass::Regular, WeightClass::Bold, WeightClass::Heavy]
    }
}
