use crate::metrics::{FontMetrics, ScaledMetrics};

/// Pixel bounding box of one measured row, relative to the row's pen
/// origin. `min_y` is usually negative (ink above the baseline reference);
/// `max_y` is the bottom edge used for block-height accounting.
///
/// A row with nothing folded into it keeps its initial mins above its maxes,
/// so `width()` can be negative; size folds start from 0 and absorb that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl RowBounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Bottom edge measured from the pen origin.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max_y
    }
}

/// Incremental metrics accumulator: feed characters with [`push`], read the
/// running pen position and ink box at any prefix. Pushing a character never
/// shrinks the box, so prefix snapshots equal a fresh measurement of that
/// prefix; the wrap search leans on this.
///
/// The pen starts at `(0, font_px)`; mins start at `font_px` and maxes at 0.
/// `\r` is skipped entirely. Spaces advance by the cached whitespace
/// advance, tabs by four of them, `\n` drops the pen one line spacing and
/// resets x. Glyph boxes fold in with the italic shear applied to the X
/// extents.
///
/// [`push`]: RowCursor::push
pub struct RowCursor<'a> {
    metrics: &'a dyn FontMetrics,
    scaled: ScaledMetrics,
    x: f32,
    y: f32,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    prev: Option<char>,
}

impl<'a> RowCursor<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, scaled: ScaledMetrics) -> Self {
        RowCursor {
            metrics,
            scaled,
            x: 0.0,
            y: scaled.font_px,
            min_x: scaled.font_px,
            min_y: scaled.font_px,
            max_x: 0.0,
            max_y: 0.0,
            prev: None,
        }
    }

    pub fn push(&mut self, ch: char) {
        if ch == '\r' {
            return;
        }

        let px = self.scaled.font_px;
        self.x += self.metrics.kerning(self.prev, ch, px);
        self.prev = Some(ch);

        if ch == ' ' || ch == '\t' || ch == '\n' {
            // Mins fold before the advance, maxes after, so a trailing
            // space widens the box but a leading one does not shift it.
            self.min_x = self.min_x.min(self.x);
            self.min_y = self.min_y.min(self.y);
            match ch {
                ' ' => self.x += self.scaled.whitespace_advance,
                '\t' => self.x += self.scaled.whitespace_advance * 4.0,
                _ => {
                    self.y += self.scaled.line_spacing;
                    self.x = 0.0;
                }
            }
            self.max_x = self.max_x.max(self.x);
            self.max_y = self.max_y.max(self.y);
            return;
        }

        let bounds = self.metrics.glyph_bounds(ch, px, self.scaled.bold, 0.0);
        let shear = self.scaled.italic_shear;
        self.min_x = self.min_x.min(self.x + bounds.left - shear * bounds.bottom);
        self.max_x = self.max_x.max(self.x + bounds.right - shear * bounds.top);
        self.min_y = self.min_y.min(self.y + bounds.top);
        self.max_y = self.max_y.max(self.y + bounds.bottom);
        self.x += self.metrics.glyph_advance(ch, px, self.scaled.bold, 0.0)
            + self.scaled.letter_spacing;
    }

    /// Current pen x: the cumulative advance of everything pushed so far.
    #[inline]
    pub fn pen_x(&self) -> f32 {
        self.x
    }

    /// Ink box of everything pushed so far, expanded on all four sides by
    /// `ceil(|outline|)` when an outline is configured.
    pub fn bounds(&self) -> RowBounds {
        let mut bounds = RowBounds {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x,
            max_y: self.max_y,
        };
        if self.scaled.outline != 0.0 {
            let expand = self.scaled.outline.abs().ceil();
            bounds.min_x -= expand;
            bounds.min_y -= expand;
            bounds.max_x += expand;
            bounds.max_y += expand;
        }
        bounds
    }
}

/// Cumulative advance position at every char boundary of a single-line
/// string, kerning and whitespace handling included. The two returned
/// vectors run in lockstep: `boundaries[i]` is a byte offset, `advances[i]`
/// the pen x after the text up to it. Both start at `(0, 0.0)`.
///
/// These positions feed hit-testing and cursor/selection geometry, so they
/// must come from the same metrics used to draw.
pub fn prefix_advances(
    metrics: &dyn FontMetrics,
    scaled: ScaledMetrics,
    text: &str,
) -> (Vec<usize>, Vec<f32>) {
    let mut cursor = RowCursor::new(metrics, scaled);
    let mut boundaries = Vec::with_capacity(text.len() + 1);
    let mut advances = Vec::with_capacity(text.len() + 1);
    boundaries.push(0);
    advances.push(0.0);
    for (idx, ch) in text.char_indices() {
        cursor.push(ch);
        boundaries.push(idx + ch.len_utf8());
        advances.push(cursor.pen_x());
    }
    (boundaries, advances)
}
