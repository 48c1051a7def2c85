use crate::style::TextStyle;

/// Horizontal slant applied to the X extents of measured glyph boxes when
/// the style is italic.
pub const ITALIC_SHEAR: f32 = 0.209;

/// Glyph box in y-down bearing coordinates relative to the pen position:
/// `top` is negative above the baseline, `bottom` positive below it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Per-glyph measurements for one face. The layout engine can depend on
/// this without knowing about any font backend; tests use fixed-advance
/// fakes.
///
/// Measurement always passes `outline = 0.0` (outline only expands the
/// final box); the parameter exists for renderer-side providers that
/// rasterize outlined glyphs.
pub trait FontMetrics {
    /// Horizontal pen advance for `ch` at `px`.
    fn glyph_advance(&self, ch: char, px: f32, bold: bool, outline: f32) -> f32;

    /// The glyph's ink box, see [`GlyphBounds`].
    fn glyph_bounds(&self, ch: char, px: f32, bold: bool, outline: f32) -> GlyphBounds;

    /// Kerning adjustment between `prev` and `ch`; 0 when `prev` is `None`
    /// or the pair has no kerning.
    fn kerning(&self, prev: Option<char>, ch: char, px: f32) -> f32;

    /// Vertical distance between consecutive baselines at `px`.
    fn line_spacing(&self, px: f32) -> f32;
}

/// Style-derived measuring constants, computed once per layout pass and
/// passed by value through the accumulator.
#[derive(Clone, Copy, Debug)]
pub struct ScaledMetrics {
    pub font_px: f32,
    pub bold: bool,
    /// 0 when upright, [`ITALIC_SHEAR`] when italic.
    pub italic_shear: f32,
    pub outline: f32,
    /// Advance of `' '` including the extra letter spacing.
    pub whitespace_advance: f32,
    /// Extra spacing appended after every glyph advance.
    pub letter_spacing: f32,
    /// Provider line spacing scaled by the style factor.
    pub line_spacing: f32,
}

impl ScaledMetrics {
    pub fn new(metrics: &dyn FontMetrics, style: &TextStyle) -> Self {
        let space = metrics.glyph_advance(' ', style.font_px, style.bold, 0.0);
        let letter_spacing = (space / 3.0) * (style.letter_spacing_factor - 1.0);
        ScaledMetrics {
            font_px: style.font_px,
            bold: style.bold,
            italic_shear: if style.italic { ITALIC_SHEAR } else { 0.0 },
            outline: style.outline,
            whitespace_advance: space + letter_spacing,
            letter_spacing,
            line_spacing: metrics.line_spacing(style.font_px) * style.line_spacing_factor,
        }
    }
}
