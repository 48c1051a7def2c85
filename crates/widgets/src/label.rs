use crate::draw::{Color, DrawCmd};
use crate::event::{EventOutcome, InputEvent};
use text_layout::{
    Constraint, FontMetrics, MeasuredRow, ScaledMetrics, TextStyle, WrapMode, layout_rows,
    measure_text,
};

/// Static text block: wraps under the width the host last reported, caches
/// the measured rows, and emits one text run per row. Never consumes
/// pointer or keyboard input.
pub struct Label {
    text: String,
    text_rev: u64,
    style: TextStyle,
    color: Color,
    wrap: WrapMode,
    layout_width: f32,
    cache: Option<RowCache>,
}

/// Measured rows for one (text, width, style, wrap) key, rebuilt wholesale
/// on any key change.
struct RowCache {
    text_rev: u64,
    width: f32,
    style: TextStyle,
    wrap: WrapMode,
    rows: Vec<MeasuredRow>,
    line_spacing: f32,
}

impl Label {
    pub fn new() -> Self {
        Label {
            text: String::new(),
            text_rev: 0,
            style: TextStyle::default(),
            color: Color::BLACK,
            wrap: WrapMode::NoWrap,
            layout_width: f32::INFINITY,
            cache: None,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.text_rev = self.text_rev.wrapping_add(1);
    }

    #[inline]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    /// Flex-style measure callback: the natural wrapped size under the
    /// width constraint's limit, then per-axis overrides. Stateless; the
    /// row cache is untouched.
    pub fn measure(
        &self,
        metrics: &dyn FontMetrics,
        width_constraint: Constraint,
        height_constraint: Constraint,
    ) -> (f32, f32) {
        let measured = measure_text(
            metrics,
            &self.text,
            width_constraint,
            height_constraint,
            self.wrap,
            &self.style,
        );
        (measured.width, measured.height)
    }

    /// Labels only react to geometry and style changes; everything else
    /// passes through unhandled.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::LayoutChanged { width } => {
                self.layout_width = *width;
                EventOutcome::consumed()
            }
            InputEvent::StyleChanged => {
                self.cache = None;
                EventOutcome::consumed()
            }
            _ => EventOutcome::ignored(),
        }
    }

    /// Emits one text run per wrapped row: row `i` sits at `i` line
    /// spacings, the first row lifted by its box top and every row shifted
    /// left by its box left, so ink starts flush with the widget origin.
    pub fn draw(&mut self, metrics: &dyn FontMetrics) -> Vec<DrawCmd> {
        if self.text.is_empty() {
            return Vec::new();
        }

        self.ensure_row_cache(metrics);
        let Some(cache) = self.cache.as_ref() else {
            return Vec::new();
        };

        let mut cmds = Vec::with_capacity(cache.rows.len());
        for (i, row) in cache.rows.iter().enumerate() {
            let mut y = i as f32 * cache.line_spacing;
            if i == 0 {
                y -= row.bounds.min_y;
            }
            cmds.push(DrawCmd::TextRun {
                x: -row.bounds.min_x,
                y,
                text: row.text.clone(),
                color: self.color,
                style: self.style,
            });
        }
        cmds
    }

    // --- Internal helper functions ---

    fn ensure_row_cache(&mut self, metrics: &dyn FontMetrics) {
        let cache_valid = self.cache.as_ref().is_some_and(|c| {
            c.text_rev == self.text_rev
                && (c.width == self.layout_width
                    || (c.width - self.layout_width).abs() <= 0.5)
                && c.style == self.style
                && c.wrap == self.wrap
        });
        if cache_valid {
            return;
        }

        let scaled = ScaledMetrics::new(metrics, &self.style);
        let rows = layout_rows(metrics, scaled, &self.text, self.wrap, self.layout_width);
        log::trace!(
            target: "widgets.label",
            "rebuilt row cache: {} rows at width {}",
            rows.len(),
            self.layout_width,
        );
        self.cache = Some(RowCache {
            text_rev: self.text_rev,
            width: self.layout_width,
            style: self.style,
            wrap: self.wrap,
            rows,
            line_spacing: scaled.line_spacing,
        });
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}
