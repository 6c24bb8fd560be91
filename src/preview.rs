//! Preview rendering: a fitted heading above a packed track grid.
//!
//! This is the smallest useful composer; real posters add artwork and
//! lyrics around the same two layout steps.

use anyhow::Result;
use poster_type_config::WeightClass;
use poster_type_fonts::FontChain;
use poster_type_layout::{
    FittedHeading, HeadingFitter, Layout, PackOptions, Point, RasterBackend, RenderBackend,
    TextMeasurer,
};
use serde::Serialize;

use crate::session::Session;

/// Canvas geometry for a preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    /// Blank border on every side
    pub margin: u32,
    /// Line height as a multiple of the font size
    pub line_spacing: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1600,
            margin: 60,
            line_spacing: 1.4,
        }
    }
}

/// What was laid out, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSummary {
    pub heading: FittedHeading,
    pub tracks: Layout,
    pub fonts_registered: usize,
}

/// Draw `title` in the heavy chain and `tracks` in the regular chain.
///
/// Both the heading and the grid are limited to the canvas width inside the
/// margins, on top of the configured limits.
pub fn render_preview(
    session: &Session,
    title: &str,
    tracks: &[String],
    options: PreviewOptions,
) -> Result<(RasterBackend, PreviewSummary)> {
    let mut backend = RasterBackend::new(options.width, options.height)?;
    let fonts_registered = session.register_fonts(&mut backend);

    let content_width = options.width.saturating_sub(options.margin.saturating_mul(2));
    let margin = options.margin as f32;

    let configured = session.heading_fitter();
    let fitter = HeadingFitter::new(
        configured.max_width.min(content_width),
        configured.initial_size,
    );
    let heading = session.fit_heading(
        &mut backend,
        &fitter,
        title,
        WeightClass::Heavy,
        Point::new(margin, margin),
    );

    let mut pack_options = session.pack_options(&mut backend, tracks.len(), WeightClass::Regular);
    pack_options.max_total_width = pack_options.max_total_width.min(content_width);
    let (layout, _) = session.pack_tracks(&mut backend, pack_options, tracks, WeightClass::Regular);
    if !layout.dropped.is_empty() {
        log::info!(
            "{} of {} tracks dropped to fit {}px",
            layout.dropped.len(),
            tracks.len(),
            pack_options.max_total_width
        );
    }

    let grid_top = margin + heading.size as f32 * options.line_spacing;
    {
        let mut measurer = TextMeasurer::new(session.coverage(), &mut backend);
        draw_grid(
            &mut measurer,
            &layout,
            session.chain(WeightClass::Regular),
            pack_options,
            Point::new(margin, grid_top),
            options.line_spacing,
        );
    }

    let summary = PreviewSummary {
        heading,
        tracks: layout,
        fonts_registered,
    };
    Ok((backend, summary))
}

fn draw_grid<B: RenderBackend + ?Sized>(
    measurer: &mut TextMeasurer<'_, B>,
    layout: &Layout,
    chain: &FontChain,
    options: PackOptions,
    origin: Point,
    line_spacing: f32,
) {
    let line_height = options.font_size * line_spacing;
    let mut x = origin.x;
    for column in &layout.columns {
        for (row, item) in column.items.iter().enumerate() {
            let y = origin.y + row as f32 * line_height;
            draw_line(measurer, item, chain, options.font_size, Point::new(x, y));
        }
        x += column.width.saturating_add(options.spacing) as f32;
    }
}

/// Draw `text` one run at a time, each run after the previous run's width.
/// Returns the drawn width.
pub fn draw_line<B: RenderBackend + ?Sized>(
    measurer: &mut TextMeasurer<'_, B>,
    text: &str,
    chain: &FontChain,
    size: f32,
    origin: Point,
) -> f32 {
    let mut x = origin.x;
    for measured in measurer.run_widths(text, chain, size) {
        measurer.backend_mut().draw_text(
            measured.run.text,
            Point::new(x, origin.y),
            measured.run.font,
            size,
        );
        x += measured.width;
    }
    x - origin.x
}
