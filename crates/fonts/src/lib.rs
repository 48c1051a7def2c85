//! # fonts
//!
//! A `fontdue`-backed [`FontMetrics`] provider.
//!
//! This is the one real metrics source in the tree; the layout and widget
//! crates only ever see the trait, and their tests run on fixed-advance
//! fakes instead.

use fontdue::{Font, FontSettings};
use text_layout::{FontMetrics, GlyphBounds};

/// Why loading a face failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontLoadError {
    /// The bytes did not parse as a TTF/OTF face.
    Parse(&'static str),
}

/// One font face measured through `fontdue`.
///
/// Bold and outline flags are accepted and ignored: this is a single-face
/// provider, so a bold style wants a bold face loaded as its own
/// `FontdueFace`. Every `char` resolves (unknown ones land on the face's
/// notdef glyph), so lookups never fail.
pub struct FontdueFace {
    font: Font,
}

impl FontdueFace {
    /// Parses a TTF/OTF face from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FontLoadError> {
        let font =
            Font::from_bytes(data, FontSettings::default()).map_err(FontLoadError::Parse)?;
        Ok(FontdueFace { font })
    }
}

impl FontMetrics for FontdueFace {
    fn glyph_advance(&self, ch: char, px: f32, _bold: bool, _outline: f32) -> f32 {
        self.font.metrics(ch, px).advance_width
    }

    fn glyph_bounds(&self, ch: char, px: f32, _bold: bool, _outline: f32) -> GlyphBounds {
        // fontdue reports y-up outline boxes; the accumulator wants y-down
        // bearings relative to the baseline.
        let bounds = self.font.metrics(ch, px).bounds;
        GlyphBounds {
            left: bounds.xmin,
            top: -(bounds.ymin + bounds.height),
            right: bounds.xmin + bounds.width,
            bottom: -bounds.ymin,
        }
    }

    fn kerning(&self, prev: Option<char>, ch: char, px: f32) -> f32 {
        match prev {
            Some(prev) => self.font.horizontal_kern(prev, ch, px).unwrap_or(0.0),
            None => 0.0,
        }
    }

    fn line_spacing(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map_or(px, |lm| lm.new_line_size)
    }
}
