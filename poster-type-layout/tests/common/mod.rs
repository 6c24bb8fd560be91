//! Shared integration test helpers for poster-type-layout.

#![allow(dead_code)]

use std::sync::Arc;

use poster_type_fonts::{
    FontChain, FontDescriptor, FontError, FontProvider, GlyphCoverageCache, GlyphSource,
};
use poster_type_layout::{Point, RenderBackend, TextMetrics};

struct ScriptFont(&'static [std::ops::RangeInclusive<char>]);

impl GlyphSource for ScriptFont {
    fn glyph_index(&self, ch: char) -> u16 {
        u16::from(self.0.iter().any(|r| r.contains(&ch)))
    }
}

const LATIN: &[std::ops::RangeInclusive<char>] = &[' '..='~', '\u{00C0}'..='\u{024F}'];
const CJK: &[std::ops::RangeInclusive<char>] = &['\u{3000}'..='\u{30FF}', '\u{4E00}'..='\u{9FFF}'];

/// `latin` and `cjk` load; every other alias fails.
pub struct ScriptProvider;

impl FontProvider for ScriptProvider {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError> {
        match font.alias() {
            "latin" => Ok(Arc::new(ScriptFont(LATIN))),
            "cjk" => Ok(Arc::new(ScriptFont(CJK))),
            other => Err(FontError::FamilyNotFound(other.to_string())),
        }
    }
}

pub fn coverage() -> GlyphCoverageCache {
    GlyphCoverageCache::new(ScriptProvider)
}

pub fn chain(aliases: &[&str]) -> FontChain {
    aliases
        .iter()
        .map(|alias| FontDescriptor::new(format!("/fonts/{alias}.ttf"), *alias))
        .collect()
}

/// Monospace fake: `latin` glyphs are `size * 0.6` wide, `cjk` glyphs
/// `size`. Ink starts one pixel in and stops one pixel short, so the
/// bounding box is 2px narrower than the advance.
#[derive(Default)]
pub struct MonoBackend {
    pub draws: Vec<(String, Point, f32)>,
}

impl RenderBackend for MonoBackend {
    fn measure_text(&mut self, text: &str, font: &FontDescriptor, size: f32) -> TextMetrics {
        let per_char = if font.alias() == "cjk" { size } else { size * 0.6 };
        let advance_width = text.chars().count() as f32 * per_char;
        if text.trim().is_empty() {
            return TextMetrics {
                advance_width,
                ..TextMetrics::default()
            };
        }
        TextMetrics {
            advance_width,
            bbox_left: -1.0,
            bbox_right: advance_width - 1.0,
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, _font: &FontDescriptor, size: f32) {
        self.draws.push((text.to_string(), position, size));
    }
}
