use crate::metrics::{FontMetrics, GlyphBounds};

/// Fixed-advance metrics for deterministic geometry in tests: every glyph
/// advances 10 px and inks a 10-wide box from 8 above the baseline to 2
/// below; line spacing is 1.5 × the character size.
pub(crate) struct FakeMetrics {
    pub advance: f32,
    /// One kerning pair `(prev, ch, adjustment)`, for kerning-path tests.
    pub kern: Option<(char, char, f32)>,
}

impl Default for FakeMetrics {
    fn default() -> Self {
        FakeMetrics {
            advance: 10.0,
            kern: None,
        }
    }
}

impl FontMetrics for FakeMetrics {
    fn glyph_advance(&self, _ch: char, _px: f32, _bold: bool, _outline: f32) -> f32 {
        self.advance
    }

    fn glyph_bounds(&self, _ch: char, _px: f32, _bold: bool, _outline: f32) -> GlyphBounds {
        GlyphBounds {
            left: 0.0,
            top: -8.0,
            right: self.advance,
            bottom: 2.0,
        }
    }

    fn kerning(&self, prev: Option<char>, ch: char, _px: f32) -> f32 {
        match (self.kern, prev) {
            (Some((a, b, k)), Some(p)) if p == a && ch == b => k,
            _ => 0.0,
        }
    }

    fn line_spacing(&self, px: f32) -> f32 {
        px * 1.5
    }
}

pub(crate) fn assert_approx_eq(got: f32, want: f32) {
    let eps = 0.01;
    assert!(
        (got - want).abs() <= eps,
        "expected {want:.4}, got {got:.4}"
    );
}
