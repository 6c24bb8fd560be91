//! Text measurement and layout for poster-type.
//!
//! This crate provides:
//! - The [`RenderBackend`] seam (measure and draw text in one font)
//! - [`RasterBackend`], a CPU backend drawing with swash into an RGBA canvas
//! - [`TextMeasurer`], multi-font width measurement over fallback segments
//! - [`ColumnPacker`], column-major track-list packing under a width budget
//! - [`HeadingFitter`], shrink-to-fit heading sizing and drawing
//!
//! All layout work is synchronous. The measurer borrows the backend
//! mutably, so one backend serves one layout session at a time.

pub mod backend;
pub mod column_packer;
pub mod error;
pub mod heading;
pub mod measure;
pub mod raster;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use backend::{Point, RenderBackend, TextMetrics};
pub use column_packer::{
    Column, ColumnPacker, Layout, PackOptions, index_prefix, measure_index_width,
};
pub use error::RenderError;
pub use heading::{FittedHeading, HeadingFitter, MIN_HEADING_SIZE, PlacedRun};
pub use measure::{DEFAULT_WIDTH_CACHE_SIZE, MeasuredRun, TextMeasurer};
pub use raster::RasterBackend;
