/// A selection reported in canonical form: `begin` is a char-boundary byte
/// offset, `length` a byte length. A `length` of 0 means no selection, in
/// which case `begin` is the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub begin: usize,
    pub length: usize,
}

impl SelectionSpan {
    pub fn new(begin: usize, length: usize) -> Self {
        SelectionSpan { begin, length }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.begin + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The selected slice of `text`. Empty when nothing is selected.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let begin = self.begin.min(text.len());
        let end = self.end().min(text.len());
        &text[begin..end]
    }
}
