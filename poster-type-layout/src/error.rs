//! Typed error types for poster-type-layout.
//!
//! Layout itself never fails: measurement anomalies and unfittable input
//! degrade to best-effort results. These errors cover backend setup and
//! output only.

use poster_type_fonts::FontError;
use thiserror::Error;

/// Errors from the raster backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A font could not be loaded for registration.
    #[error("Font registration failed: {0}")]
    FontLoad(#[from] FontError),

    /// The canvas was requested with a zero dimension.
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The canvas could not be encoded or written.
    #[error("Image save failed for '{path}': {source}")]
    ImageSave {
        /// Destination path.
        path: String,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },
}
