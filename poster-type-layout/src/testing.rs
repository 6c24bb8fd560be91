//! Fakes shared by the unit tests.

use std::sync::Arc;

use poster_type_fonts::{
    FontChain, FontDescriptor, FontError, FontProvider, GlyphCoverageCache, GlyphSource,
};

use crate::backend::{Point, RenderBackend, TextMetrics};

struct PredicateFont(fn(char) -> bool);

impl GlyphSource for PredicateFont {
    fn glyph_index(&self, ch: char) -> u16 {
        u16::from((self.0)(ch))
    }
}

/// `latin` covers ASCII, `cjk` covers CJK ideographs.
struct FakeProvider;

impl FontProvider for FakeProvider {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError> {
        match font.alias() {
            "latin" => Ok(Arc::new(PredicateFont(|ch| ch.is_ascii()))),
            "cjk" => Ok(Arc::new(PredicateFont(|ch| {
                ('\u{4E00}'..='\u{9FFF}').contains(&ch)
            }))),
            other => Err(FontError::FamilyNotFound(other.to_string())),
        }
    }
}

pub(crate) fn coverage() -> GlyphCoverageCache {
    GlyphCoverageCache::new(FakeProvider)
}

pub(crate) fn chain(aliases: &[&str]) -> FontChain {
    aliases
        .iter()
        .map(|alias| FontDescriptor::new(format!("/fonts/{alias}.ttf"), *alias))
        .collect()
}

/// Every `latin` character advances half the size, every `cjk` character
/// the full size. Whitespace-only text has no ink.
#[derive(Default)]
pub(crate) struct FixedAdvanceBackend {
    pub measure_calls: usize,
    pub drawn: Vec<(String, Point, String, f32)>,
}

impl RenderBackend for FixedAdvanceBackend {
    fn measure_text(&mut self, text: &str, font: &FontDescriptor, size: f32) -> TextMetrics {
        self.measure_calls += 1;
        let per_char = if font.alias() == "cjk" { size } else { size / 2.0 };
        let advance_width = text.chars().count() as f32 * per_char;
        let bbox_right = if text.trim().is_empty() {
            0.0
        } else {
            advance_width
        };
        TextMetrics {
            advance_width,
            bbox_left: 0.0,
            bbox_right,
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, font: &FontDescriptor, size: f32) {
        self.drawn
            .push((text.to_string(), position, font.alias().to_string(), size));
    }
}
