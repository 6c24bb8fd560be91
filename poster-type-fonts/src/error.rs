//! Typed error types for poster-type-fonts.

use thiserror::Error;

/// Errors produced while loading or resolving fonts.
///
/// Coverage queries never surface these; the coverage cache logs them and
/// answers `false`. They reach callers only through explicit loading APIs.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read from disk.
    #[error("Font file read failed for '{path}': {source}")]
    Read {
        /// Path of the font file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but do not parse as a font face.
    #[error("Invalid font data in '{path}' (face {face_index})")]
    InvalidData {
        /// Path of the font file.
        path: String,
        /// Face index that was requested.
        face_index: u32,
    },

    /// No installed font matches the requested family.
    #[error("Font family '{0}' not found")]
    FamilyNotFound(String),

    /// The font database located the family but it is not backed by a file.
    #[error("Font family '{0}' is not backed by a font file")]
    NotFileBacked(String),
}
