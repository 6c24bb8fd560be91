//! Fallback-chain segmentation of text into single-font runs.

use crate::coverage::GlyphCoverageCache;
use crate::descriptor::{FontChain, FontDescriptor};

/// Characters that never trigger a font switch.
///
/// Space, ASCII punctuation, brackets, arithmetic symbols and quotes are
/// assumed present in every font. They inherit the font of the preceding
/// character so mixed-script text does not flicker between fonts on them.
/// Full-width punctuation is deliberately not included.
pub const COMMON_CHARS: &str = " !\"'`,.:;?-_()[]{}<>+*/=%&#@~^|\\";

/// Whether `ch` belongs to [`COMMON_CHARS`].
pub fn is_common(ch: char) -> bool {
    COMMON_CHARS.contains(ch)
}

/// A maximal slice of the input rendered with one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    /// Non-empty slice of the segmented text
    pub text: &'a str,
    /// Font the slice is rendered with
    pub font: &'a FontDescriptor,
    /// Position of `font` in the chain
    pub font_index: usize,
}

/// Split `text` into runs, each tagged with the first font of `chain` that
/// covers its characters.
///
/// Common characters take the previous character's font (the chain's first
/// font at the start). A character no font covers also keeps the previous
/// font, so nothing is ever dropped. Adjacent characters resolved to the same
/// font share one run; concatenating the runs gives back `text`.
///
/// Returns no runs for empty text or an empty chain.
pub fn segment<'a>(
    text: &'a str,
    chain: &'a FontChain,
    coverage: &GlyphCoverageCache,
) -> Vec<TextRun<'a>> {
    let mut runs = Vec::new();
    if text.is_empty() || chain.is_empty() {
        return runs;
    }

    let mut last_font = 0usize;
    let mut run_start = 0usize;
    let mut run_font = 0usize;

    for (offset, ch) in text.char_indices() {
        let font_index = if is_common(ch) {
            last_font
        } else {
            match chain.iter().position(|font| coverage.has_glyph(font, ch)) {
                Some(found) => {
                    last_font = found;
                    found
                }
                None => {
                    log::trace!(
                        "No font in chain covers '{}' (U+{:04X}), keeping font {}",
                        ch,
                        ch as u32,
                        last_font
                    );
                    last_font
                }
            }
        };

        // Merging happens as we go: a run closes only when the font changes.
        if font_index != run_font && offset > run_start {
            runs.push(TextRun {
                text: &text[run_start..offset],
                font: &chain.as_slice()[run_font],
                font_index: run_font,
            });
            run_start = offset;
        }
        run_font = font_index;
    }

    runs.push(TextRun {
        text: &text[run_start..],
        font: &chain.as_slice()[run_font],
        font_index: run_font,
    });
    runs
}
