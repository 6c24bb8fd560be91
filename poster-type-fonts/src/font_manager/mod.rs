//! Font loading with fallback chains for multi-script coverage.
//!
//! This module provides:
//! - [`FontData`], owned font bytes with swash lookups
//! - [`FontProvider`], the seam through which the coverage cache loads fonts
//! - System family resolution and chain building over a fontdb `Database`

mod fallbacks;
mod loader;
mod types;

use std::sync::Arc;

use crate::descriptor::FontDescriptor;
use crate::error::FontError;

pub use fallbacks::FALLBACK_FAMILIES;
pub use loader::{build_chain, load_font_file, resolve_entry, resolve_family};
pub use types::FontData;

/// A loaded font that can answer charmap queries.
pub trait GlyphSource: Send + Sync {
    /// Glyph index for `ch`; 0 is the missing-glyph marker.
    fn glyph_index(&self, ch: char) -> u16;
}

/// Loads the font resource a descriptor points at.
pub trait FontProvider: Send + Sync {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError>;
}

/// Loads fonts from the descriptor's file path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFontProvider;

impl FontProvider for FileFontProvider {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError> {
        let data = load_font_file(font.path(), font.face_index())?;
        log::info!("Loaded font {}", font);
        Ok(Arc::new(data))
    }
}
