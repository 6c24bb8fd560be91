//! Glyph rasterization and compositing onto the canvas.

use image::{Rgba, RgbaImage};
use swash::scale::image::{Content, Image};
use swash::scale::{Render, Scaler, Source, StrikeWith};
use swash::zeno::Format;

/// Sources tried in order: color bitmaps and outlines first so emoji fonts
/// come out in color, plain outlines for everything else.
const SOURCES: [Source; 3] = [
    Source::ColorBitmap(StrikeWith::BestFit),
    Source::ColorOutline(0),
    Source::Outline,
];

/// Rendering options shared by every glyph of a draw call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GlyphStyle {
    pub color: Rgba<u8>,
    pub antialias: bool,
    pub thin_strokes: bool,
}

/// Rasterize one glyph with the scaler's font and size.
pub(crate) fn rasterize(
    scaler: &mut Scaler<'_>,
    glyph_id: u16,
    style: GlyphStyle,
) -> Option<Image> {
    let format = if style.antialias && style.thin_strokes {
        Format::Subpixel
    } else {
        Format::Alpha
    };
    Render::new(&SOURCES).format(format).render(scaler, glyph_id)
}

/// Composite `glyph` onto `canvas` with its origin at `(pen_x, baseline)`.
///
/// Pixels falling outside the canvas are clipped.
pub(crate) fn blit(
    canvas: &mut RgbaImage,
    glyph: &Image,
    pen_x: i32,
    baseline: i32,
    style: GlyphStyle,
) {
    let width = glyph.placement.width as usize;
    let height = glyph.placement.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let left = pen_x + glyph.placement.left;
    let top = baseline - glyph.placement.top;
    let coverage = coverage_mask(glyph);

    for row in 0..height {
        let y = top + row as i32;
        if y < 0 || y >= canvas.height() as i32 {
            continue;
        }
        for col in 0..width {
            let x = left + col as i32;
            if x < 0 || x >= canvas.width() as i32 {
                continue;
            }
            let i = row * width + col;
            let (rgb, alpha) = match glyph.content {
                Content::Color => {
                    let px = &glyph.data[i * 4..i * 4 + 4];
                    ([px[0], px[1], px[2]], px[3])
                }
                Content::Mask | Content::SubpixelMask => {
                    let mut alpha = coverage.get(i).copied().unwrap_or(0);
                    if !style.antialias {
                        alpha = if alpha > 127 { 255 } else { 0 };
                    }
                    let alpha = (alpha as u32 * style.color[3] as u32 / 255) as u8;
                    ([style.color[0], style.color[1], style.color[2]], alpha)
                }
            };
            if alpha > 0 {
                blend(canvas.get_pixel_mut(x as u32, y as u32), rgb, alpha);
            }
        }
    }
}

/// Per-pixel coverage of a mask glyph. Empty for color glyphs.
fn coverage_mask(glyph: &Image) -> Vec<u8> {
    match glyph.content {
        Content::Mask => glyph.data.clone(),
        Content::SubpixelMask => subpixel_coverage(glyph),
        Content::Color => Vec::new(),
    }
}

/// Collapse a subpixel mask to one coverage byte per pixel.
///
/// Depending on the swash build the mask has 3 (RGB) or 4 (RGBA) bytes per
/// pixel. Coverage comes from the luminance of RGB; the packed alpha is
/// ignored since some builds leave it zeroed.
fn subpixel_coverage(glyph: &Image) -> Vec<u8> {
    let pixels = glyph.placement.width as usize * glyph.placement.height as usize;
    let stride = if pixels > 0 { glyph.data.len() / pixels } else { 0 };

    match stride {
        3 | 4 => glyph
            .data
            .chunks_exact(stride)
            .map(|px| luminance(px[0], px[1], px[2]))
            .collect(),
        // Unknown layout: opaque rather than invisible.
        _ => vec![255; pixels],
    }
}

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

/// Source-over blend of a straight-alpha color onto `dst`.
fn blend(dst: &mut Rgba<u8>, rgb: [u8; 3], alpha: u8) {
    let a = alpha as u32;
    let inv = 255 - a;
    for (channel, src) in dst.0.iter_mut().zip(rgb) {
        *channel = ((src as u32 * a + *channel as u32 * inv + 127) / 255) as u8;
    }
    dst.0[3] = (a + (dst.0[3] as u32 * inv + 127) / 255).min(255) as u8;
}
