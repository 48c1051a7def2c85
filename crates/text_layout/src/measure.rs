use crate::bounds::{RowBounds, RowCursor};
use crate::metrics::{FontMetrics, ScaledMetrics};
use crate::style::{Constraint, TextStyle, WrapMode};
use crate::wrap::wrap_text;

/// One wrapped visual row with its measured ink box.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredRow {
    pub text: String,
    pub bounds: RowBounds,
}

/// The wrapped rows plus the block size negotiated against the caller's
/// constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredText {
    pub rows: Vec<MeasuredRow>,
    pub width: f32,
    pub height: f32,
    /// The scaled metrics the rows were measured with; drawing reuses them
    /// so row placement agrees with measurement.
    pub line_spacing: f32,
}

/// Wraps `text` under `max_width` and measures each row.
pub fn layout_rows(
    metrics: &dyn FontMetrics,
    scaled: ScaledMetrics,
    text: &str,
    mode: WrapMode,
    max_width: f32,
) -> Vec<MeasuredRow> {
    wrap_text(metrics, scaled, text, mode, max_width)
        .into_iter()
        .map(|row| {
            let mut cursor = RowCursor::new(metrics, scaled);
            for ch in row.chars() {
                cursor.push(ch);
            }
            MeasuredRow {
                bounds: cursor.bounds(),
                text: row,
            }
        })
        .collect()
}

/// Measures `text` for layout-size negotiation: wraps under the width
/// constraint's limit, takes the widest row and the stacked row heights as
/// the natural size, then applies the per-axis constraint overrides.
///
/// Pure function of its inputs plus the metrics provider; the caller owns
/// any caching.
pub fn measure_text(
    metrics: &dyn FontMetrics,
    text: &str,
    width_constraint: Constraint,
    height_constraint: Constraint,
    mode: WrapMode,
    style: &TextStyle,
) -> MeasuredText {
    let scaled = ScaledMetrics::new(metrics, style);
    let rows = layout_rows(metrics, scaled, text, mode, width_constraint.limit());

    let mut natural_width = 0.0f32;
    let mut natural_height = 0.0f32;
    for (i, row) in rows.iter().enumerate() {
        natural_width = natural_width.max(row.bounds.width());
        if i + 1 == rows.len() {
            // The last row contributes its real bottom edge instead of a
            // full line spacing, so glyph overshoot is not double-counted.
            natural_height += row.bounds.bottom();
        } else {
            natural_height += scaled.line_spacing;
        }
    }

    let width = width_constraint.apply(natural_width);
    let height = height_constraint.apply(natural_height);
    log::trace!(
        target: "text_layout.measure",
        "measured {} rows, natural {natural_width}x{natural_height}, final {width}x{height}",
        rows.len(),
    );

    MeasuredText {
        rows,
        width,
        height,
        line_spacing: scaled.line_spacing,
    }
}
