//! Font fallback chains, glyph coverage and text segmentation for poster-type.
//!
//! This crate provides:
//! - Font descriptors and ordered fallback chains
//! - Font loading from files, with system family lookup through fontdb
//! - A memoizing glyph-coverage cache
//! - Fallback-chain segmentation of multi-script text into single-font runs
//!
//! # Architecture
//!
//! `segment` walks the text one character at a time and asks the
//! `GlyphCoverageCache` which font of the `FontChain` covers it. The cache
//! loads each font once through its `FontProvider` and answers from the
//! font's charmap afterwards.

pub mod coverage;
pub mod descriptor;
pub mod error;
pub mod font_manager;
pub mod segmenter;

// Re-export main types for convenience
pub use coverage::GlyphCoverageCache;
pub use descriptor::{FontChain, FontDescriptor};
pub use error::FontError;
pub use font_manager::{
    FALLBACK_FAMILIES, FileFontProvider, FontData, FontProvider, GlyphSource, build_chain,
    resolve_family,
};
pub use segmenter::{COMMON_CHARS, TextRun, is_common, segment};
