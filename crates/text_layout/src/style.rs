/// Style inputs shared by measurement and drawing. Always passed explicitly;
/// nothing reads ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Character size in pixels.
    pub font_px: f32,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    /// Outline thickness; expands measured boxes on all sides, see
    /// [`RowBounds`](crate::RowBounds).
    pub outline: f32,
    /// 1.0 is the font's natural letter spacing.
    pub letter_spacing_factor: f32,
    /// 1.0 is the font's natural line spacing.
    pub line_spacing_factor: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_px: 10.0,
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            outline: 0.0,
            letter_spacing_factor: 1.0,
            line_spacing_factor: 1.0,
        }
    }
}

/// How text breaks into rows under a finite width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapMode {
    /// Never wrap; one row regardless of width.
    #[default]
    NoWrap,
    /// Break anywhere, at char boundaries. The cut remainder is carried
    /// onto the next row verbatim, leading whitespace included.
    CharWrap,
    /// Break at word-boundary steps. The whitespace run at a cut point is
    /// consumed.
    WordWrap,
}

/// One axis of a measurement constraint, in the shape flex-style measure
/// callbacks hand down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Constraint {
    /// No limit; the natural size passes through.
    #[default]
    Unconstrained,
    /// The result is forced to exactly this size.
    Exactly(f32),
    /// The result is the natural size, capped at this.
    AtMost(f32),
}

impl Constraint {
    /// The width limit wrapping runs against. Unconstrained wraps at
    /// infinity, which disables wrapping entirely.
    #[inline]
    pub fn limit(self) -> f32 {
        match self {
            Constraint::Unconstrained => f32::INFINITY,
            Constraint::Exactly(v) | Constraint::AtMost(v) => v,
        }
    }

    /// Overrides a measured natural size along this axis.
    #[inline]
    pub fn apply(self, natural: f32) -> f32 {
        match self {
            Constraint::Unconstrained => natural,
            Constraint::Exactly(v) => v,
            Constraint::AtMost(v) => natural.min(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_limit_and_apply() {
        assert_eq!(Constraint::Unconstrained.limit(), f32::INFINITY);
        assert_eq!(Constraint::Exactly(80.0).limit(), 80.0);
        assert_eq!(Constraint::AtMost(80.0).limit(), 80.0);

        assert_eq!(Constraint::Unconstrained.apply(33.0), 33.0);
        assert_eq!(Constraint::Exactly(80.0).apply(33.0), 80.0);
        assert_eq!(Constraint::AtMost(80.0).apply(33.0), 33.0);
        assert_eq!(Constraint::AtMost(20.0).apply(33.0), 20.0);
    }

    #[test]
    fn style_defaults_match_the_widget_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.font_px, 10.0);
        assert_eq!(style.letter_spacing_factor, 1.0);
        assert_eq!(style.line_spacing_factor, 1.0);
        assert!(!style.bold && !style.italic);
    }
}
