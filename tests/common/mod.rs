//! Shared integration test helpers for the poster-type crate.

#![allow(dead_code)]

use std::sync::Arc;

use poster_type::{Session, WeightChains};
use poster_type_config::Config;
use poster_type_fonts::{
    FontChain, FontDescriptor, FontError, FontProvider, GlyphCoverageCache, GlyphSource,
};
use poster_type_layout::{Point, RenderBackend, TextMetrics};

type Ranges = &'static [std::ops::RangeInclusive<char>];

const LATIN: Ranges = &[' '..='~'];
const BENGALI: Ranges = &['\u{0980}'..='\u{09FF}'];
const CJK: Ranges = &['\u{3000}'..='\u{30FF}', '\u{4E00}'..='\u{9FFF}'];

struct RangeFont(Ranges);

impl GlyphSource for RangeFont {
    fn glyph_index(&self, ch: char) -> u16 {
        u16::from(self.0.iter().any(|r| r.contains(&ch)))
    }
}

/// `latin`, `bengali` and `cjk` load; anything else fails.
pub struct ScriptProvider;

impl FontProvider for ScriptProvider {
    fn load(&self, font: &FontDescriptor) -> Result<Arc<dyn GlyphSource>, FontError> {
        let ranges = match font.alias() {
            "latin" => LATIN,
            "bengali" => BENGALI,
            "cjk" => CJK,
            other => return Err(FontError::FamilyNotFound(other.to_string())),
        };
        Ok(Arc::new(RangeFont(ranges)))
    }
}

pub fn chain(aliases: &[&str]) -> FontChain {
    aliases
        .iter()
        .map(|alias| FontDescriptor::new(format!("/nonexistent/fonts/{alias}.ttf"), *alias))
        .collect()
}

/// Session over fake fonts: every weight uses latin, bengali, cjk.
pub fn session(config: Config) -> Session {
    let fonts = chain(&["latin", "bengali", "cjk"]);
    let chains = WeightChains {
        regular: fonts.clone(),
        bold: fonts.clone(),
        heavy: fonts,
    };
    Session::from_parts(config, chains, GlyphCoverageCache::new(ScriptProvider))
}

/// Every character advances `size / 2`; whitespace has no ink.
#[derive(Default)]
pub struct HalfEmBackend {
    pub drawn: Vec<(String, Point)>,
}

impl RenderBackend for HalfEmBackend {
    fn measure_text(&mut self, text: &str, _font: &FontDescriptor, size: f32) -> TextMetrics {
        let advance_width = text.chars().count() as f32 * size / 2.0;
        let bbox_right = if text.trim().is_empty() { 0.0 } else { advance_width };
        TextMetrics {
            advance_width,
            bbox_left: 0.0,
            bbox_right,
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, _font: &FontDescriptor, _size: f32) {
        self.drawn.push((text.to_string(), position));
    }
}
