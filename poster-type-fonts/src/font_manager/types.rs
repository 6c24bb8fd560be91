//! Font data types for glyph lookups.

use std::sync::Arc;
use swash::{CacheKey, FontRef};

use super::GlyphSource;

/// Owned font bytes plus the swash identifiers needed to borrow a `FontRef`.
///
/// `FontRef` is rebuilt on demand from the stored offset and cache key, so
/// no self-referential borrow is kept alive.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    data: Arc<Vec<u8>>,
    /// Face index within a collection file
    face_index: u32,
    /// Byte offset to the face's table directory
    offset: u32,
    /// Swash cache key, stable for the lifetime of this data
    key: CacheKey,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// # Returns
    /// `Some(FontData)` if the font data is valid, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Self::new_with_index(data, 0)
    }

    /// Create a new FontData from bytes with a specific face index.
    ///
    /// This is needed for TrueType Collection (.ttc) files where multiple
    /// font faces share the same data but have different face indices.
    pub fn new_with_index(data: Vec<u8>, face_index: u32) -> Option<Self> {
        let (offset, key) = {
            let font = FontRef::from_index(&data, face_index as usize)?;
            (font.offset, font.key)
        };
        Some(FontData {
            data: Arc::new(data),
            face_index,
            offset,
            key,
        })
    }

    /// Borrow a swash `FontRef` for metrics, charmap and scaling.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl GlyphSource for FontData {
    fn glyph_index(&self, ch: char) -> u16 {
        self.font_ref().charmap().map(ch)
    }
}
