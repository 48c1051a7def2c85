use text_layout::TextStyle;

/// Plain RGBA color, straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

/// Axis-aligned rectangle in the widget's local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One drawable primitive. Widgets emit these in paint order; the host
/// forwards them to its renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// A text run whose glyphs lay out from `(x, y)` with the baseline one
    /// character size below `y` — the same origin row measurement uses, so
    /// measured bounds are offsets from here.
    TextRun {
        x: f32,
        y: f32,
        text: String,
        color: Color,
        style: TextStyle,
    },
}
