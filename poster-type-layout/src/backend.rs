//! The rendering backend seam.

use poster_type_fonts::FontDescriptor;
use serde::Serialize;

/// A position on the canvas in pixels; `y` is the top of the text line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Metrics of a string rendered in a single font.
///
/// `bbox_left` and `bbox_right` are distances from the text origin to the
/// left and right ink edges, positive when the ink extends in that
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Sum of glyph advances
    pub advance_width: f32,
    /// Ink extent to the left of the origin
    pub bbox_left: f32,
    /// Ink extent to the right of the origin
    pub bbox_right: f32,
}

impl TextMetrics {
    /// Width of the inked bounding box.
    pub fn bounding_width(&self) -> f32 {
        self.bbox_left + self.bbox_right
    }

    /// Width used for layout decisions.
    ///
    /// The bounding-box width, unless it is not finite or not positive
    /// (whitespace, backends without ink bounds), in which case the advance
    /// width. A non-finite advance counts as 0.
    pub fn layout_width(&self) -> f32 {
        let bounding = self.bounding_width();
        if bounding.is_finite() && bounding > 0.0 {
            bounding
        } else if self.advance_width.is_finite() {
            self.advance_width.max(0.0)
        } else {
            0.0
        }
    }
}

/// A 2D surface that can measure and draw text in one font at a time.
///
/// Fonts are addressed by descriptor; backends key them by
/// [`FontDescriptor::alias`] and expect them registered before the first
/// draw.
pub trait RenderBackend {
    /// Metrics of `text` in `font` at `size` pixels.
    fn measure_text(&mut self, text: &str, font: &FontDescriptor, size: f32) -> TextMetrics;

    /// Draw `text` with its line top-left at `position`.
    fn draw_text(&mut self, text: &str, position: Point, font: &FontDescriptor, size: f32);
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn measure_text(&mut self, text: &str, font: &FontDescriptor, size: f32) -> TextMetrics {
        (**self).measure_text(text, font, size)
    }

    fn draw_text(&mut self, text: &str, position: Point, font: &FontDescriptor, size: f32) {
        (**self).draw_text(text, position, font, size)
    }
}
