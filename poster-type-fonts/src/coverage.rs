//! Memoizing glyph-coverage queries.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::descriptor::FontDescriptor;
use crate::font_manager::{FileFontProvider, FontProvider, GlyphSource};

/// Answers "does this font have a glyph for this character?".
///
/// Each descriptor is loaded at most once through the provider. Failed loads
/// are remembered as well, so a broken font costs one read and one warning,
/// not one per character. Entries are never evicted; [`clear`](Self::clear)
/// only forces reloading.
///
/// The map sits behind a mutex, so one cache may be shared between threads;
/// concurrent first lookups of the same font are serialized.
pub struct GlyphCoverageCache {
    provider: Box<dyn FontProvider>,
    fonts: Mutex<HashMap<FontDescriptor, Option<Arc<dyn GlyphSource>>>>,
}

impl std::fmt::Debug for GlyphCoverageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphCoverageCache")
            .field("cached_fonts", &self.len())
            .finish()
    }
}

impl Default for GlyphCoverageCache {
    fn default() -> Self {
        Self::new(FileFontProvider)
    }
}

impl GlyphCoverageCache {
    pub fn new(provider: impl FontProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            fonts: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `font` has a real glyph for `ch`.
    ///
    /// Returns `false` for glyph index 0 and whenever the font cannot be
    /// loaded.
    pub fn has_glyph(&self, font: &FontDescriptor, ch: char) -> bool {
        self.font(font)
            .is_some_and(|source| source.glyph_index(ch) != 0)
    }

    /// The loaded resource for `font`, loading it on first access.
    pub fn font(&self, font: &FontDescriptor) -> Option<Arc<dyn GlyphSource>> {
        let mut fonts = self.fonts.lock();
        if let Some(cached) = fonts.get(font) {
            return cached.clone();
        }

        let loaded = match self.provider.load(font) {
            Ok(source) => Some(source),
            Err(e) => {
                log::warn!("Font {} unavailable for coverage queries: {}", font, e);
                None
            }
        };
        fonts.insert(font.clone(), loaded.clone());
        loaded
    }

    /// Number of descriptors looked up so far, including failed ones.
    pub fn len(&self) -> usize {
        self.fonts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.lock().is_empty()
    }

    /// Drop every cached resource. Later queries reload from the provider.
    pub fn clear(&self) {
        self.fonts.lock().clear();
    }
}
