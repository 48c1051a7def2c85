/// A change produced by a mutating editor call, returned to the caller in
/// the order it happened.
///
/// Notices are values, not callbacks: the editor finishes its whole
/// mutation before anyone can observe it, so observers can never re-enter
/// the editor mid-change. One call can produce several notices (replacing
/// text re-clamps the cursor and reasserts the selection, each with its own
/// notice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditNotice {
    /// The buffer changed. Carries the new and previous contents.
    TextChanged { text: String, old: String },
    /// The cursor moved. Carries the new and previous byte offsets.
    CursorMoved { position: usize, old: usize },
    /// The selection changed, in canonical form: while the stored length is
    /// 0 the reported `begin` is the cursor position.
    SelectionChanged { begin: usize, length: usize },
}
