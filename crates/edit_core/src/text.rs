//! Byte-offset text utilities: char-boundary clamping, word boundaries,
//! caret hit-testing and the single-line content filter.
//!
//! Everything here treats positions as byte offsets into UTF-8 text. Offsets
//! that fall inside a multi-byte character clamp down to the boundary that
//! starts it; offsets past the end clamp to the length.

/// Clamps `index` to the nearest `char` boundary at or below it.
///
/// # Examples
///
/// ```
/// use edit_core::clamp_to_char_boundary;
///
/// assert_eq!(clamp_to_char_boundary("héllo", 2), 1); // inside 'é'
/// assert_eq!(clamp_to_char_boundary("héllo", 3), 3);
/// assert_eq!(clamp_to_char_boundary("héllo", 99), 6);
/// ```
pub fn clamp_to_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Returns the char boundary immediately before `index`, or 0 when there is
/// no earlier boundary.
///
/// # Examples
///
/// ```
/// use edit_core::prev_char_boundary;
///
/// assert_eq!(prev_char_boundary("héllo", 3), 1);
/// assert_eq!(prev_char_boundary("héllo", 0), 0);
/// ```
pub fn prev_char_boundary(text: &str, index: usize) -> usize {
    let index = clamp_to_char_boundary(text, index);
    match text[..index].chars().next_back() {
        Some(ch) => index - ch.len_utf8(),
        None => 0,
    }
}

/// Returns the char boundary immediately after `index`, or `text.len()` when
/// there is no later boundary.
///
/// # Examples
///
/// ```
/// use edit_core::next_char_boundary;
///
/// assert_eq!(next_char_boundary("héllo", 1), 3);
/// assert_eq!(next_char_boundary("héllo", 6), 6);
/// ```
pub fn next_char_boundary(text: &str, index: usize) -> usize {
    let index = clamp_to_char_boundary(text, index);
    match text[index..].chars().next() {
        Some(ch) => index + ch.len_utf8(),
        None => text.len(),
    }
}

/// Next word boundary after `from`: skips the whitespace run, then the
/// alphanumeric run. When neither run moves the position (e.g. the cursor
/// sits on punctuation), advances exactly one character instead.
///
/// # Examples
///
/// ```
/// use edit_core::next_word_position;
///
/// assert_eq!(next_word_position("hello world", 0), 5);
/// assert_eq!(next_word_position("hello world", 5), 11);
/// assert_eq!(next_word_position("a,b", 1), 2); // ',' forces the one-char step
/// ```
pub fn next_word_position(text: &str, from: usize) -> usize {
    let start = clamp_to_char_boundary(text, from);
    let mut pos = start;
    for ch in text[start..].chars() {
        if !ch.is_whitespace() {
            break;
        }
        pos += ch.len_utf8();
    }
    for ch in text[pos..].chars() {
        if !ch.is_alphanumeric() {
            break;
        }
        pos += ch.len_utf8();
    }
    if pos == start {
        next_char_boundary(text, start)
    } else {
        pos
    }
}

/// Previous word boundary before `from`: the mirror of
/// [`next_word_position`]. Saturates at 0.
///
/// # Examples
///
/// ```
/// use edit_core::prev_word_position;
///
/// assert_eq!(prev_word_position("hello world", 11), 6);
/// assert_eq!(prev_word_position("hello world", 6), 0);
/// assert_eq!(prev_word_position("hello", 0), 0);
/// ```
pub fn prev_word_position(text: &str, from: usize) -> usize {
    let start = clamp_to_char_boundary(text, from);
    let mut pos = start;
    for ch in text[..start].chars().rev() {
        if !ch.is_whitespace() {
            break;
        }
        pos -= ch.len_utf8();
    }
    for ch in text[..pos].chars().rev() {
        if !ch.is_alphanumeric() {
            break;
        }
        pos -= ch.len_utf8();
    }
    if pos == start {
        prev_char_boundary(text, start)
    } else {
        pos
    }
}

/// True when `text` contains any control character. Newline, carriage
/// return and tab are control characters, so a single check covers the
/// whole set a single-line field must refuse.
///
/// # Examples
///
/// ```
/// use edit_core::contains_control;
///
/// assert!(contains_control("a\nb"));
/// assert!(contains_control("\t"));
/// assert!(!contains_control("plain text"));
/// ```
pub fn contains_control(text: &str) -> bool {
    text.chars().any(char::is_control)
}

/// Maps a pixel `x` to the nearest caret boundary.
///
/// `boundaries` holds the byte offset of every char boundary (including 0
/// and the text length); `advances` holds the cumulative pixel advance at
/// each of those boundaries and must be monotonically non-decreasing. The
/// two slices run in lockstep. Picks the boundary whose advance is
/// numerically closest to `x`; exact midpoints resolve to the earlier one.
pub fn caret_from_x(boundaries: &[usize], advances: &[f32], x: f32) -> usize {
    if boundaries.is_empty() || boundaries.len() != advances.len() {
        return 0;
    }

    // Bisect to the first boundary at or past x, then snap to whichever
    // neighbour is closer.
    let last = advances.len() - 1;
    let mut best = advances[..last].partition_point(|&p| p < x);
    if best > 0 && (x - advances[best - 1]).abs() <= (advances[best] - x).abs() {
        best -= 1;
    }
    boundaries[best]
}
