//! Shrink-to-fit heading sizing.

use poster_type_config::HeadingConfig;
use poster_type_fonts::FontChain;
use serde::Serialize;

use crate::backend::{Point, RenderBackend};
use crate::measure::TextMeasurer;

/// Smallest size the fitter will choose; accepted even when the text
/// still overflows.
pub const MIN_HEADING_SIZE: u32 = 1;

/// A run as drawn by [`HeadingFitter::fit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRun {
    pub text: String,
    pub font_alias: String,
    /// Left edge on the canvas
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedHeading {
    pub size: u32,
    /// Measured width at `size`
    pub width: u32,
    /// False only when even the minimum size overflows
    pub fits: bool,
    pub runs: Vec<PlacedRun>,
}

/// Finds the largest pixel size at which a heading fits a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingFitter {
    pub max_width: u32,
    pub initial_size: u32,
}

impl HeadingFitter {
    pub fn new(max_width: u32, initial_size: u32) -> Self {
        Self {
            max_width,
            initial_size,
        }
    }

    pub fn from_config(config: &HeadingConfig) -> Self {
        Self::new(config.max_width, config.initial_size)
    }

    /// Step down one pixel at a time from the initial size until `text`
    /// fits, stopping at [`MIN_HEADING_SIZE`].
    pub fn choose_size<B: RenderBackend + ?Sized>(
        &self,
        measurer: &mut TextMeasurer<'_, B>,
        text: &str,
        chain: &FontChain,
    ) -> u32 {
        let mut size = self.initial_size.max(MIN_HEADING_SIZE);
        while size > MIN_HEADING_SIZE && measurer.width(text, chain, size as f32) > self.max_width {
            size -= 1;
        }
        log::debug!(
            "Heading '{}' sized {}px (start {}px, max width {}px)",
            text,
            size,
            self.initial_size,
            self.max_width
        );
        size
    }

    /// Choose the size, then draw the runs left to right starting at
    /// `origin`, each offset by the widths of the runs before it.
    pub fn fit<B: RenderBackend + ?Sized>(
        &self,
        measurer: &mut TextMeasurer<'_, B>,
        text: &str,
        chain: &FontChain,
        origin: Point,
    ) -> FittedHeading {
        let size = self.choose_size(measurer, text, chain);
        let width = measurer.width(text, chain, size as f32);
        let fits = width <= self.max_width;
        if !fits {
            log::warn!(
                "Heading '{}' is {}px wide at the minimum size, over {}px",
                text,
                width,
                self.max_width
            );
        }

        let measured = measurer.run_widths(text, chain, size as f32);
        let mut runs = Vec::with_capacity(measured.len());
        let mut x = origin.x;
        for run in measured {
            measurer.backend_mut().draw_text(
                run.run.text,
                Point::new(x, origin.y),
                run.run.font,
                size as f32,
            );
            runs.push(PlacedRun {
                text: run.run.text.to_string(),
                font_alias: run.run.font.alias().to_string(),
                x,
                width: run.width,
            });
            x += run.width;
        }

        FittedHeading {
            size,
            width,
            fits,
            runs,
        }
    }
}
