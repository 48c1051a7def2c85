use crate::bounds::RowCursor;
use crate::metrics::{FontMetrics, ScaledMetrics};
use crate::style::WrapMode;
use edit_core::{next_char_boundary, next_word_position};

/// Splits `text` into visual rows under `max_width`.
///
/// An infinite width disables wrapping regardless of mode, and `NoWrap`
/// behaves the same under a finite one: the entire string comes back as a
/// single row, verbatim. Otherwise carriage returns are stripped, the text
/// splits into paragraphs on `\n`, and each paragraph packs greedily into
/// rows by longest fit. An empty paragraph produces no row.
pub fn wrap_text(
    metrics: &dyn FontMetrics,
    scaled: ScaledMetrics,
    text: &str,
    mode: WrapMode,
    max_width: f32,
) -> Vec<String> {
    if mode == WrapMode::NoWrap || !max_width.is_finite() {
        return vec![text.to_owned()];
    }

    let stripped: String;
    let text = if text.contains('\r') {
        stripped = text.replace('\r', "");
        &stripped
    } else {
        text
    };

    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut remaining = paragraph;
        while !remaining.is_empty() {
            let cut = longest_fit(metrics, scaled, remaining, mode, max_width);
            rows.push(remaining[..cut].to_owned());
            remaining = &remaining[cut..];
            if mode == WrapMode::WordWrap {
                // The whitespace run at the cut point is consumed, not
                // carried onto the next row.
                remaining = remaining.trim_start();
            }
        }
    }

    log::trace!(
        target: "text_layout.wrap",
        "wrapped {} bytes into {} rows at width {max_width}",
        text.len(),
        rows.len(),
    );
    rows
}

// --- Internal helper functions ---

/// Longest prefix of `text` whose measured width stays within `max_width`,
/// grown one char (`CharWrap`) or one word step (`WordWrap`) at a time.
/// Floors at one unit so an over-wide character or word lands alone on its
/// row and the caller always makes progress.
fn longest_fit(
    metrics: &dyn FontMetrics,
    scaled: ScaledMetrics,
    text: &str,
    mode: WrapMode,
    max_width: f32,
) -> usize {
    let mut cursor = RowCursor::new(metrics, scaled);
    let mut fitted = 0usize;
    let mut end = 0usize;

    while end < text.len() {
        let next = grow(text, end, mode);
        for ch in text[end..next].chars() {
            cursor.push(ch);
        }
        end = next;
        if cursor.bounds().width() <= max_width {
            fitted = end;
        } else {
            break;
        }
    }

    if fitted == 0 {
        grow(text, 0, mode)
    } else {
        fitted
    }
}

fn grow(text: &str, from: usize, mode: WrapMode) -> usize {
    match mode {
        WrapMode::CharWrap => next_char_boundary(text, from),
        WrapMode::WordWrap => next_word_position(text, from),
        // NoWrap never reaches the fit search.
        WrapMode::NoWrap => text.len(),
    }
}
