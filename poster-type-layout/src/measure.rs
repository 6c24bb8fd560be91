//! Multi-font text width measurement.

use std::num::NonZeroUsize;

use lru::LruCache;
use poster_type_fonts::{FontChain, GlyphCoverageCache, TextRun, segment};

use crate::backend::RenderBackend;

/// Default number of memoized string widths.
pub const DEFAULT_WIDTH_CACHE_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WidthKey {
    text: String,
    chain: FontChain,
    size_bits: u32,
}

/// A segmented run with its unrounded layout width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredRun<'t> {
    pub run: TextRun<'t>,
    pub width: f32,
}

/// Measures rendered text width across a font fallback chain.
///
/// Text is segmented into single-font runs; each run is measured by the
/// backend in its own font and the widths are summed. Kerning across run
/// boundaries is not modeled. Rounded totals are memoized per
/// (text, chain, size) in an LRU cache.
pub struct TextMeasurer<'a, B: RenderBackend + ?Sized> {
    coverage: &'a GlyphCoverageCache,
    backend: &'a mut B,
    widths: LruCache<WidthKey, u32>,
}

impl<'a, B: RenderBackend + ?Sized> TextMeasurer<'a, B> {
    pub fn new(coverage: &'a GlyphCoverageCache, backend: &'a mut B) -> Self {
        Self::with_cache_size(coverage, backend, DEFAULT_WIDTH_CACHE_SIZE)
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_cache_size(
        coverage: &'a GlyphCoverageCache,
        backend: &'a mut B,
        capacity: usize,
    ) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            coverage,
            backend,
            widths: LruCache::new(capacity),
        }
    }

    /// Rendered width of `text` in whole pixels.
    ///
    /// Empty text is 0 without segmenting or touching the backend.
    pub fn width(&mut self, text: &str, chain: &FontChain, size: f32) -> u32 {
        if text.is_empty() {
            return 0;
        }

        let key = WidthKey {
            text: text.to_string(),
            chain: chain.clone(),
            size_bits: size.to_bits(),
        };
        if let Some(&width) = self.widths.get(&key) {
            return width;
        }

        let total: f32 = self
            .run_widths(text, chain, size)
            .iter()
            .map(|measured| measured.width)
            .sum();
        let width = round_px(total);
        self.widths.put(key, width);
        width
    }

    /// Segment `text` and measure every run at `size`. Not cached.
    pub fn run_widths<'t>(
        &mut self,
        text: &'t str,
        chain: &'t FontChain,
        size: f32,
    ) -> Vec<MeasuredRun<'t>> {
        segment(text, chain, self.coverage)
            .into_iter()
            .map(|run| {
                let metrics = self.backend.measure_text(run.text, run.font, size);
                MeasuredRun {
                    run,
                    width: metrics.layout_width(),
                }
            })
            .collect()
    }

    pub fn coverage(&self) -> &'a GlyphCoverageCache {
        self.coverage
    }

    pub fn backend(&self) -> &B {
        &*self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut *self.backend
    }

    /// Number of memoized widths.
    pub fn cached_widths(&self) -> usize {
        self.widths.len()
    }

    pub fn clear_cache(&mut self) {
        self.widths.clear();
    }
}

fn round_px(width: f32) -> u32 {
    if width.is_finite() && width > 0.0 {
        width.round() as u32
    } else {
        0
    }
}
