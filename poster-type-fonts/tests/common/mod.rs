//! Shared integration test helpers for poster-type-fonts.
//!
//! Fake fonts stand in for real font files: each alias covers a fixed set of
//! Unicode ranges.

#![allow(dead_code)]

use poster_type_fonts::{FontChain, FontDescriptor, FontError, FontProvider, GlyphSource};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;

/// Covers the listed character ranges.
pub struct RangeFont(pub Vec<RangeInclusive<char>>);

impl GlyphSource for RangeFont {
    fn glyph_index(&self, ch: char) -> u16 {
        if self.0.iter().any(|r| r.contains(&ch)) {
            1
        } else {
            0
        }
    }
}

/// Provider keyed by alias: `latin`, `bengali`, `cjk`, `symbols`.
/// Any other alias fails to load.
pub struct ScriptProvider;

impl FontProvider for ScriptProvider {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError> {
        let ranges = match font.alias() {
            "latin" => vec![' '..='~', '\u{00C0}'..='\u{024F}'],
            "bengali" => vec!['\u{0980}'..='\u{09FF}'],
            "cjk" => vec![
                '\u{3000}'..='\u{30FF}',
                '\u{4E00}'..='\u{9FFF}',
                '\u{FF00}'..='\u{FFEF}',
            ],
            "symbols" => vec!['\u{2600}'..='\u{27BF}'],
            other => return Err(FontError::FamilyNotFound(other.to_string())),
        };
        Ok(Arc::new(RangeFont(ranges)))
    }
}

/// Chain of fake fonts in the given priority order.
pub fn chain(aliases: &[&str]) -> FontChain {
    aliases
        .iter()
        .map(|alias| FontDescriptor::new(format!("/fonts/{alias}.ttf"), *alias))
        .collect()
}

/// Path of a font checked in under `tests/fonts`.
pub fn fixture_font(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fonts")
        .join(name)
}
