//! CPU raster backend: swash glyph rendering into an RGBA canvas.

mod glyph;

use std::collections::HashMap;
use std::path::Path;

use image::{Rgba, RgbaImage};
use poster_type_fonts::font_manager::load_font_file;
use poster_type_fonts::{FontData, FontDescriptor};
use swash::scale::ScaleContext;

use crate::backend::{Point, RenderBackend, TextMetrics};
use crate::error::RenderError;
use glyph::GlyphStyle;

/// Renders text into an in-memory [`RgbaImage`].
///
/// Fonts are registered per descriptor (path and face), so two faces that
/// share an alias never shadow each other. Measuring or drawing with a
/// descriptor that was never registered yields empty metrics and draws
/// nothing.
pub struct RasterBackend {
    canvas: RgbaImage,
    fonts: HashMap<FontDescriptor, FontData>,
    context: ScaleContext,
    color: Rgba<u8>,
    antialias: bool,
    hinting: bool,
    thin_strokes: bool,
}

impl std::fmt::Debug for RasterBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterBackend")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl RasterBackend {
    /// A white canvas of the given size with black text.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidCanvas { width, height });
        }
        Ok(Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
            fonts: HashMap::new(),
            context: ScaleContext::new(),
            color: Rgba([0, 0, 0, 255]),
            antialias: true,
            hinting: true,
            thin_strokes: false,
        })
    }

    /// A backend used for measurement only.
    pub fn measuring() -> Self {
        Self {
            canvas: RgbaImage::new(1, 1),
            fonts: HashMap::new(),
            context: ScaleContext::new(),
            color: Rgba([0, 0, 0, 255]),
            antialias: true,
            hinting: true,
            thin_strokes: false,
        }
    }

    /// Fill the whole canvas with `color`.
    pub fn with_background(mut self, color: Rgba<u8>) -> Self {
        for px in self.canvas.pixels_mut() {
            *px = color;
        }
        self
    }

    pub fn set_text_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    pub fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
    }

    pub fn set_hinting(&mut self, hinting: bool) {
        self.hinting = hinting;
    }

    /// Lighter strokes through subpixel masks. Ignored without antialiasing.
    pub fn set_thin_strokes(&mut self, thin_strokes: bool) {
        self.thin_strokes = thin_strokes;
    }

    /// Load the descriptor's file and register it.
    ///
    /// Re-registering a descriptor replaces the previous font.
    pub fn register_font(&mut self, font: &FontDescriptor) -> Result<(), RenderError> {
        let data = load_font_file(font.path(), font.face_index())?;
        log::debug!("Registered font {}", font);
        self.register_font_data(font.clone(), data);
        Ok(())
    }

    /// Register already-loaded font data for `font`.
    pub fn register_font_data(&mut self, font: FontDescriptor, data: FontData) {
        self.fonts.insert(font, data);
    }

    pub fn is_registered(&self, font: &FontDescriptor) -> bool {
        self.fonts.contains_key(font)
    }

    /// Number of registered faces.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.canvas
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| RenderError::ImageSave {
                path: path.display().to_string(),
                source,
            })?;
        log::info!(
            "Saved {}x{} canvas to {}",
            self.canvas.width(),
            self.canvas.height(),
            path.display()
        );
        Ok(())
    }

    fn style(&self) -> GlyphStyle {
        GlyphStyle {
            color: self.color,
            antialias: self.antialias,
            thin_strokes: self.thin_strokes,
        }
    }
}

impl RenderBackend for RasterBackend {
    fn measure_text(&mut self, text: &str, font: &FontDescriptor, size: f32) -> TextMetrics {
        let Some(data) = self.fonts.get(font) else {
            log::warn!("Measuring with unregistered font {}", font);
            return TextMetrics::default();
        };

        let font_ref = data.font_ref();
        let charmap = font_ref.charmap();
        let glyph_metrics = font_ref.glyph_metrics(&[]).scale(size);
        let mut scaler = self
            .context
            .builder(font_ref)
            .size(size)
            .hint(self.hinting)
            .build();

        let mut pen = 0.0f32;
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch);
            if let Some(outline) = scaler.scale_outline(glyph_id) {
                let bounds = outline.bounds();
                if bounds.max.x > bounds.min.x {
                    min_x = min_x.min(pen + bounds.min.x);
                    max_x = max_x.max(pen + bounds.max.x);
                }
            }
            pen += glyph_metrics.advance_width(glyph_id);
        }

        // No ink (whitespace): an empty box, so layout falls back to advance.
        let (bbox_left, bbox_right) = if min_x <= max_x {
            (-min_x, max_x)
        } else {
            (0.0, 0.0)
        };
        TextMetrics {
            advance_width: pen,
            bbox_left,
            bbox_right,
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, font: &FontDescriptor, size: f32) {
        let style = self.style();
        let Some(data) = self.fonts.get(font) else {
            log::warn!("Drawing with unregistered font {}", font);
            return;
        };

        let font_ref = data.font_ref();
        let metrics = font_ref.metrics(&[]);
        let scale = size / metrics.units_per_em as f32;
        let baseline = (position.y + metrics.ascent * scale).round() as i32;
        let charmap = font_ref.charmap();
        let glyph_metrics = font_ref.glyph_metrics(&[]).scale(size);
        let mut scaler = self
            .context
            .builder(font_ref)
            .size(size)
            .hint(self.hinting)
            .build();

        let mut pen = position.x;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch);
            if let Some(image) = glyph::rasterize(&mut scaler, glyph_id, style) {
                glyph::blit(&mut self.canvas, &image, pen.round() as i32, baseline, style);
            }
            pen += glyph_metrics.advance_width(glyph_id);
        }
    }
}
