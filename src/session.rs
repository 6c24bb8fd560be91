//! A rendering session: resolved font chains plus the shared coverage cache.

use std::collections::HashSet;

use poster_type_config::{Config, WeightClass};
use poster_type_fonts::{FontChain, GlyphCoverageCache, TextRun, build_chain, segment};
use poster_type_layout::{
    ColumnPacker, FittedHeading, HeadingFitter, Layout, PackOptions, Point, RasterBackend,
    RenderBackend, TextMeasurer, measure_index_width,
};

/// One fallback chain per weight class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightChains {
    pub regular: FontChain,
    pub bold: FontChain,
    pub heavy: FontChain,
}

impl WeightChains {
    pub fn get(&self, weight: WeightClass) -> &FontChain {
        match weight {
            WeightClass::Regular => &self.regular,
            WeightClass::Bold => &self.bold,
            WeightClass::Heavy => &self.heavy,
        }
    }

    fn get_mut(&mut self, weight: WeightClass) -> &mut FontChain {
        match weight {
            WeightClass::Regular => &mut self.regular,
            WeightClass::Bold => &mut self.bold,
            WeightClass::Heavy => &mut self.heavy,
        }
    }
}

/// Everything a layout command needs, built once per run.
pub struct Session {
    config: Config,
    chains: WeightChains,
    coverage: GlyphCoverageCache,
}

impl Session {
    /// Resolve the configured chains, scanning system fonts only when an
    /// entry names a family or a chain is left to the built-in fallbacks.
    pub fn new(config: Config) -> Self {
        let mut db = fontdb::Database::new();
        if needs_system_fonts(&config) {
            db.load_system_fonts();
            log::info!("Loaded {} system font faces", db.len());
        }

        let mut chains = WeightChains::default();
        for &weight in WeightClass::all() {
            let chain = build_chain(&db, config.fonts.chain(weight), weight);
            if chain.is_empty() {
                log::warn!("No usable fonts for {} text", weight.display_name());
            }
            *chains.get_mut(weight) = chain;
        }

        Self::from_parts(config, chains, GlyphCoverageCache::default())
    }

    /// Session over already-resolved chains and a caller-supplied cache.
    pub fn from_parts(config: Config, chains: WeightChains, coverage: GlyphCoverageCache) -> Self {
        Self {
            config,
            chains,
            coverage,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chain(&self, weight: WeightClass) -> &FontChain {
        self.chains.get(weight)
    }

    pub fn coverage(&self) -> &GlyphCoverageCache {
        &self.coverage
    }

    pub fn segment<'a>(&'a self, text: &'a str, weight: WeightClass) -> Vec<TextRun<'a>> {
        segment(text, self.chain(weight), &self.coverage)
    }

    /// Register every font of every chain with `backend`.
    ///
    /// Fonts that fail to load are skipped with a warning; returns how many
    /// were registered.
    pub fn register_fonts(&self, backend: &mut RasterBackend) -> usize {
        let mut seen = HashSet::new();
        let mut registered = 0;
        for &weight in WeightClass::all() {
            for font in self.chain(weight) {
                if !seen.insert(font) {
                    continue;
                }
                match backend.register_font(font) {
                    Ok(()) => registered += 1,
                    Err(e) => log::warn!("Skipping font {}: {}", font, e),
                }
            }
        }
        log::info!("Registered {} fonts with the raster backend", registered);
        registered
    }

    pub fn measure<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        weight: WeightClass,
        size: f32,
    ) -> u32 {
        TextMeasurer::new(&self.coverage, backend).width(text, self.chain(weight), size)
    }

    /// Size the heading with the configured constraints and draw it at
    /// `origin`.
    pub fn fit_heading<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        fitter: &HeadingFitter,
        text: &str,
        weight: WeightClass,
        origin: Point,
    ) -> FittedHeading {
        let mut measurer = TextMeasurer::new(&self.coverage, backend);
        fitter.fit(&mut measurer, text, self.chain(weight), origin)
    }

    /// The heading fitter for the configured constraints.
    pub fn heading_fitter(&self) -> HeadingFitter {
        HeadingFitter::from_config(&self.config.heading)
    }

    /// Pack options for `count` tracks, with the index width measured as the
    /// widest `"{n}. "` prefix.
    pub fn pack_options<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        count: usize,
        weight: WeightClass,
    ) -> PackOptions {
        let track_list = &self.config.track_list;
        let index_width = if track_list.with_index {
            let mut measurer = TextMeasurer::new(&self.coverage, backend);
            measure_index_width(
                &mut measurer,
                count,
                self.chain(weight),
                track_list.font_size as f32,
            )
        } else {
            0
        };
        PackOptions::from_config(track_list, index_width)
    }

    /// Pack `tracks` into columns with `options`.
    pub fn pack_tracks<B, S>(
        &self,
        backend: &mut B,
        options: PackOptions,
        tracks: &[S],
        weight: WeightClass,
    ) -> (Layout, Vec<u32>)
    where
        B: RenderBackend + ?Sized,
        S: AsRef<str>,
    {
        let mut measurer = TextMeasurer::new(&self.coverage, backend);
        ColumnPacker::new(options).pack(&mut measurer, tracks, self.chain(weight))
    }
}

fn needs_system_fonts(config: &Config) -> bool {
    WeightClass::all().iter().any(|&weight| {
        let entries = config.fonts.chain(weight);
        entries.is_empty() || entries.iter().any(|entry| entry.path.is_none())
    })
}
