use crate::notice::EditNotice;
use crate::selection::SelectionSpan;
use crate::text::{
    clamp_to_char_boundary, contains_control, next_char_boundary, next_word_position,
    prev_char_boundary, prev_word_position,
};
use std::fmt;

/// Pixel distance kept between the cursor and the left viewport edge.
pub const VIEWPORT_THRESHOLD_LEFT: f32 = 20.0;
/// Pixel distance kept between the cursor and the right viewport edge.
pub const VIEWPORT_THRESHOLD_RIGHT: f32 = 40.0;

/// Validator hook invoked with `(proposed, current)` on every text mutation.
/// `None` accepts the proposal as-is; `Some(replacement)` substitutes it.
/// Returning the current text rejects the change.
pub type Validator = Box<dyn Fn(&str, &str) -> Option<String>>;

/// Single-line text editing state: buffer, cursor, selection and horizontal
/// scroll offset.
///
/// All positions are byte offsets clamped to char boundaries; out-of-range
/// values clamp instead of failing. Every buffer mutation funnels through
/// one validated path, and every mutating call returns the [`EditNotice`]s
/// it produced, in order.
pub struct LineEditor {
    text: String,
    cursor: usize,
    sel_begin: usize,
    sel_len: usize,
    scroll_x: f32,
    revision: u64,
    validator: Option<Validator>,
    notices: Vec<EditNotice>,
}

impl LineEditor {
    pub fn new() -> Self {
        LineEditor {
            text: String::new(),
            cursor: 0,
            sel_begin: 0,
            sel_len: 0,
            scroll_x: 0.0,
            revision: 0,
            validator: None,
            notices: Vec::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bumped on every buffer change; cheap cache key for advance tables.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Horizontal pixel scroll applied when the line is wider than the
    /// visible width.
    #[inline]
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// Canonical selection begin: the cursor position while nothing is
    /// selected.
    #[inline]
    pub fn selection_begin(&self) -> usize {
        if self.sel_len == 0 { self.cursor } else { self.sel_begin }
    }

    #[inline]
    pub fn selection_length(&self) -> usize {
        self.sel_len
    }

    /// The canonical selection pair as a span.
    pub fn selection(&self) -> SelectionSpan {
        SelectionSpan::new(self.selection_begin(), self.sel_len)
    }

    pub fn selected_text(&self) -> &str {
        self.selection().slice(&self.text)
    }

    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
    }

    /// Replaces the buffer. Equality with the current text is a no-op; the
    /// validator may rewrite or reject the proposal; on an actual change the
    /// cursor is re-clamped and the selection reasserted against the new
    /// length, each emitting its own notice.
    pub fn set_text(&mut self, new_text: &str) -> Vec<EditNotice> {
        self.set_text_inner(new_text);
        self.take_notices()
    }

    /// Moves the cursor, clamped to `[0, len]`. No notice when unchanged.
    /// The caller is responsible for re-running the viewport reflow.
    pub fn set_cursor(&mut self, position: usize) -> Vec<EditNotice> {
        self.set_cursor_inner(position);
        self.take_notices()
    }

    /// Sets the selection. A negative `length` selects backwards from
    /// `begin` (`set_selection(5, -3)` is `set_selection(2, 3)`); both ends
    /// clamp into the buffer. No notice when the result equals the current
    /// canonical selection.
    pub fn set_selection(&mut self, begin: usize, length: isize) -> Vec<EditNotice> {
        self.set_selection_inner(begin as i64, length as i64);
        self.take_notices()
    }

    /// Selects the span between two unordered positions.
    pub fn select_between(&mut self, a: usize, b: usize) -> Vec<EditNotice> {
        self.select_between_inner(a, b);
        self.take_notices()
    }

    pub fn select_all(&mut self) -> Vec<EditNotice> {
        self.set_selection_inner(0, self.text.len() as i64);
        self.take_notices()
    }

    pub fn clear_selection(&mut self) -> Vec<EditNotice> {
        self.set_selection_inner(0, 0);
        self.take_notices()
    }

    /// Applies the selection-extension policy after a cursor move from
    /// `old_cursor`. Without `selecting` the selection clears; with it, the
    /// end of the selection that the cursor left follows the cursor while
    /// the other end stays anchored, and a fresh selection spans
    /// `[old, new]`.
    pub fn extend_for_cursor_move(
        &mut self,
        old_cursor: usize,
        selecting: bool,
    ) -> Vec<EditNotice> {
        self.extend_inner(old_cursor, selecting);
        self.take_notices()
    }

    /// Moves the cursor to `position` and applies the extension policy.
    pub fn move_cursor_to(&mut self, position: usize, selecting: bool) -> Vec<EditNotice> {
        let old = self.cursor;
        self.set_cursor_inner(position);
        self.extend_inner(old, selecting);
        self.take_notices()
    }

    /// One char left, or one word with `word`. Shift-style extension via
    /// `selecting`.
    pub fn move_left(&mut self, selecting: bool, word: bool) -> Vec<EditNotice> {
        let target = if word {
            prev_word_position(&self.text, self.cursor)
        } else {
            prev_char_boundary(&self.text, self.cursor)
        };
        self.move_cursor_to(target, selecting)
    }

    /// One char right, or one word with `word`.
    pub fn move_right(&mut self, selecting: bool, word: bool) -> Vec<EditNotice> {
        let target = if word {
            next_word_position(&self.text, self.cursor)
        } else {
            next_char_boundary(&self.text, self.cursor)
        };
        self.move_cursor_to(target, selecting)
    }

    pub fn move_to_start(&mut self, selecting: bool) -> Vec<EditNotice> {
        self.move_cursor_to(0, selecting)
    }

    pub fn move_to_end(&mut self, selecting: bool) -> Vec<EditNotice> {
        self.move_cursor_to(self.text.len(), selecting)
    }

    /// Inserts `text` at the cursor, replacing any pending selection first.
    /// An insertion containing a control character (newline, carriage
    /// return and tab included) is dropped wholesale.
    pub fn insert_text(&mut self, text: &str) -> Vec<EditNotice> {
        if contains_control(text) {
            return Vec::new();
        }

        self.remove_selection_inner();

        let cursor = self.cursor;
        let mut new_text = String::with_capacity(self.text.len() + text.len());
        new_text.push_str(&self.text[..cursor]);
        new_text.push_str(text);
        new_text.push_str(&self.text[cursor..]);
        self.set_text_inner(&new_text);

        // The validator may have rewritten the buffer; advance from the
        // re-clamped cursor, not the captured one.
        let target = self.cursor + text.len();
        self.set_cursor_inner(target);
        self.take_notices()
    }

    /// Removes the char (or word, with `word`) before the cursor, or the
    /// selection when one exists.
    pub fn backspace(&mut self, word: bool) -> Vec<EditNotice> {
        if self.sel_len > 0 {
            self.remove_selection_inner();
            return self.take_notices();
        }

        let target = if word {
            prev_word_position(&self.text, self.cursor)
        } else {
            prev_char_boundary(&self.text, self.cursor)
        };
        if target >= self.cursor {
            return self.take_notices();
        }

        let new_text = self.text_without(target, self.cursor);
        self.set_text_inner(&new_text);
        self.set_cursor_inner(target);
        self.take_notices()
    }

    /// Removes the char (or word, with `word`) after the cursor, or the
    /// selection when one exists. The cursor does not move.
    pub fn delete_forward(&mut self, word: bool) -> Vec<EditNotice> {
        if self.sel_len > 0 {
            self.remove_selection_inner();
            self.set_selection_inner(0, 0);
            return self.take_notices();
        }

        let target = if word {
            next_word_position(&self.text, self.cursor)
        } else {
            next_char_boundary(&self.text, self.cursor)
        };
        if target > self.text.len() || target <= self.cursor {
            return self.take_notices();
        }

        let new_text = self.text_without(self.cursor, target);
        self.set_text_inner(&new_text);
        self.take_notices()
    }

    /// Selects the whitespace/non-whitespace run under the cursor. The
    /// leftward scan never reaches the first character of the buffer.
    pub fn select_run_at_cursor(&mut self) -> Vec<EditNotice> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let idx = if self.cursor >= self.text.len() {
            prev_char_boundary(&self.text, self.text.len())
        } else {
            clamp_to_char_boundary(&self.text, self.cursor)
        };
        let Some(under) = self.text[idx..].chars().next() else {
            return Vec::new();
        };
        let is_ws = under.is_whitespace();

        let mut left = idx;
        while left > 1 {
            let prev = prev_char_boundary(&self.text, left);
            if prev == 0 {
                break;
            }
            let same_class = self.text[prev..]
                .chars()
                .next()
                .is_some_and(|ch| ch.is_whitespace() == is_ws);
            if !same_class {
                break;
            }
            left = prev;
        }

        let mut right = idx;
        while right < self.text.len() {
            let same_class = self.text[right..]
                .chars()
                .next()
                .is_some_and(|ch| ch.is_whitespace() == is_ws);
            if !same_class {
                break;
            }
            right = next_char_boundary(&self.text, right);
        }

        self.select_between_inner(left, right);
        self.take_notices()
    }

    /// Reflows the horizontal scroll so the cursor stays inside the visible
    /// window: pushed left of the right threshold, right of the left
    /// threshold, then clamped to the scrollable range. All inputs are
    /// pixels measured by the caller.
    pub fn update_scroll_for_cursor(&mut self, cursor_px: f32, text_w: f32, visible_w: f32) {
        let half = visible_w / 2.0;
        let threshold_left = VIEWPORT_THRESHOLD_LEFT.min(half);
        let threshold_right = VIEWPORT_THRESHOLD_RIGHT.min(half);

        if cursor_px - self.scroll_x > visible_w - threshold_right {
            self.scroll_x = cursor_px - visible_w + threshold_right;
        }
        if cursor_px - self.scroll_x < threshold_left {
            self.scroll_x = cursor_px - threshold_left;
        }

        let max_scroll = (text_w - visible_w).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_scroll);
    }

    // --- Internal helper functions ---

    fn set_text_inner(&mut self, new_text: &str) {
        if new_text == self.text {
            return;
        }

        let mut accepted = new_text.to_owned();
        if let Some(validator) = &self.validator {
            if let Some(replacement) = validator(&accepted, &self.text) {
                accepted = replacement;
            }
            if accepted == self.text {
                return;
            }
        }

        let old = std::mem::replace(&mut self.text, accepted);
        self.revision = self.revision.wrapping_add(1);
        self.notices.push(EditNotice::TextChanged {
            text: self.text.clone(),
            old,
        });

        // Re-clamp the cursor and reassert the selection against the new
        // length; each emits a notice only if it actually changed.
        self.set_cursor_inner(self.cursor);
        self.set_selection_inner(self.selection_begin() as i64, self.sel_len as i64);
    }

    fn set_cursor_inner(&mut self, position: usize) {
        let position = clamp_to_char_boundary(&self.text, position);
        if position == self.cursor {
            return;
        }
        let old = std::mem::replace(&mut self.cursor, position);
        self.notices.push(EditNotice::CursorMoved { position, old });
    }

    fn set_selection_inner(&mut self, mut begin: i64, mut length: i64) {
        if length < 0 {
            begin += length;
            length = -length;
        }

        let end = self.clamp_index(begin + length);
        let begin = self.clamp_index(begin);
        let length = end - begin;

        if begin == self.selection_begin() && length == self.sel_len {
            return;
        }

        self.sel_begin = begin;
        self.sel_len = length;
        self.notices.push(EditNotice::SelectionChanged {
            begin: self.selection_begin(),
            length: self.sel_len,
        });
    }

    fn select_between_inner(&mut self, a: usize, b: usize) {
        let a = clamp_to_char_boundary(&self.text, a);
        let b = clamp_to_char_boundary(&self.text, b);
        if a < b {
            self.set_selection_inner(a as i64, (b - a) as i64);
        } else {
            self.set_selection_inner(b as i64, (a - b) as i64);
        }
    }

    fn extend_inner(&mut self, old_cursor: usize, selecting: bool) {
        if !selecting {
            self.set_selection_inner(0, 0);
            return;
        }

        if self.sel_len != 0 {
            let begin = self.sel_begin;
            let end = self.sel_begin + self.sel_len;
            if old_cursor == begin {
                self.select_between_inner(self.cursor, end);
                return;
            }
            if old_cursor == end {
                self.select_between_inner(begin, self.cursor);
                return;
            }
        }

        self.select_between_inner(old_cursor, self.cursor);
    }

    fn remove_selection_inner(&mut self) {
        if self.sel_len == 0 {
            return;
        }

        let begin = clamp_to_char_boundary(&self.text, self.sel_begin);
        let end = clamp_to_char_boundary(&self.text, self.sel_begin + self.sel_len);
        let new_text = self.text_without(begin, end);
        self.set_text_inner(&new_text);
        self.set_cursor_inner(begin);
        self.set_selection_inner(0, 0);
    }

    fn text_without(&self, begin: usize, end: usize) -> String {
        let mut out = String::with_capacity(self.text.len());
        out.push_str(&self.text[..begin]);
        out.push_str(&self.text[end..]);
        out
    }

    fn clamp_index(&self, index: i64) -> usize {
        let clamped = index.clamp(0, self.text.len() as i64) as usize;
        clamp_to_char_boundary(&self.text, clamped)
    }

    fn take_notices(&mut self) -> Vec<EditNotice> {
        std::mem::take(&mut self.notices)
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEditor")
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("sel_begin", &self.sel_begin)
            .field("sel_len", &self.sel_len)
            .field("scroll_x", &self.scroll_x)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
