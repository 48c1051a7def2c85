use crate::blink::CursorBlink;
use crate::draw::{Color, DrawCmd, Rect};
use crate::event::{EventOutcome, InputEvent, Key, Modifiers, PointerButton, PointerButtons};
use edit_core::{EditNotice, LineEditor, Validator, caret_from_x, contains_control};
use text_layout::{FontMetrics, ScaledMetrics, TextStyle, prefix_advances};

/// Single-line text input: routes the closed event set into the editing
/// engine, keeps cursor geometry and the horizontal viewport in sync with
/// the metrics used to draw, and emits the draw list for one frame.
///
/// The host owns geometry and focus: it reports width via
/// [`InputEvent::LayoutChanged`], focus via `FocusGained`/`FocusLost`, and
/// passes the content height to [`draw`].
///
/// [`draw`]: EditLine::draw
pub struct EditLine {
    editor: LineEditor,
    style: TextStyle,
    text_color: Color,
    selection_color: Color,
    cursor_color: Color,
    placeholder_color: Color,
    cursor_width: f32,
    placeholder: String,
    blink: CursorBlink,
    focused: bool,
    visible_width: f32,
    cache: Option<AdvanceCache>,
}

/// Cumulative advance positions for the current text and style, rebuilt
/// wholesale whenever either changes.
struct AdvanceCache {
    revision: u64,
    style: TextStyle,
    boundaries: Vec<usize>,
    advances: Vec<f32>,
}

impl EditLine {
    pub fn new() -> Self {
        EditLine {
            editor: LineEditor::new(),
            style: TextStyle {
                font_px: 18.0,
                ..TextStyle::default()
            },
            text_color: Color::WHITE,
            selection_color: Color::rgb(10, 66, 122),
            cursor_color: Color::WHITE,
            placeholder_color: Color::rgb(150, 150, 150),
            cursor_width: 2.0,
            placeholder: String::new(),
            blink: CursorBlink::new(),
            focused: false,
            visible_width: 0.0,
            cache: None,
        }
    }

    /// Read-only view of the editing state.
    #[inline]
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.editor.set_validator(validator);
    }

    pub fn set_cursor_width(&mut self, width: f32) {
        self.cursor_width = width;
    }

    pub fn set_blink_period(&mut self, period: f32) {
        self.blink.set_period(period);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_selection_color(&mut self, color: Color) {
        self.selection_color = color;
    }

    pub fn set_cursor_color(&mut self, color: Color) {
        self.cursor_color = color;
    }

    pub fn set_placeholder_color(&mut self, color: Color) {
        self.placeholder_color = color;
    }

    /// Replaces the text programmatically, through the same validated path
    /// events use, then re-runs the viewport reflow.
    pub fn set_text(&mut self, metrics: &dyn FontMetrics, text: &str) -> Vec<EditNotice> {
        let notices = self.editor.set_text(text);
        self.reflow_viewport(metrics);
        notices
    }

    /// Advances the blink timer; true means the cursor visibility flipped
    /// and a repaint is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.blink.tick(dt)
    }

    /// Routes one input event.
    pub fn handle_event(&mut self, metrics: &dyn FontMetrics, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::KeyPress { key, modifiers } => self.handle_key(metrics, *key, *modifiers),
            InputEvent::TextInput { text } => self.handle_text_input(metrics, text),
            InputEvent::PointerPress {
                x,
                button,
                press_index,
                modifiers,
                ..
            } => self.handle_pointer_press(metrics, *x, *button, *press_index, *modifiers),
            InputEvent::PointerMove { x, buttons, .. } => {
                self.handle_pointer_move(metrics, *x, *buttons)
            }
            InputEvent::FocusGained => {
                self.focused = true;
                self.blink.reset();
                EventOutcome::consumed()
            }
            InputEvent::FocusLost => {
                self.focused = false;
                self.blink.stop();
                EventOutcome::consumed()
            }
            InputEvent::LayoutChanged { width } => {
                self.visible_width = width.max(0.0);
                self.reflow_viewport(metrics);
                EventOutcome::consumed()
            }
            InputEvent::StyleChanged => {
                self.cache = None;
                self.reflow_viewport(metrics);
                EventOutcome::consumed()
            }
        }
    }

    /// Emits this frame's draw list in paint order: selection fill, text
    /// (or placeholder when empty and unfocused), cursor. All coordinates
    /// are local to the content rect of `content_height`.
    pub fn draw(&mut self, metrics: &dyn FontMetrics, content_height: f32) -> Vec<DrawCmd> {
        // The raw face line spacing centers the text vertically; the style's
        // line-spacing factor only matters for multi-row layout.
        let line_spacing = metrics.line_spacing(self.style.font_px);
        let text_y = content_height / 2.0 - line_spacing / 2.0;
        let scroll_x = self.editor.scroll_x();
        let mut cmds = Vec::new();

        let span = self.editor.selection();
        if span.length > 0 {
            let begin_px = self.advance_at(metrics, span.begin);
            let end_px = self.advance_at(metrics, span.end());
            cmds.push(DrawCmd::FillRect {
                rect: Rect {
                    x: begin_px - scroll_x,
                    y: 0.0,
                    width: end_px - begin_px,
                    height: content_height,
                },
                color: self.selection_color,
            });
        }

        if !self.editor.is_empty() {
            cmds.push(DrawCmd::TextRun {
                x: -scroll_x,
                y: text_y,
                text: self.editor.text().to_owned(),
                color: self.text_color,
                style: self.style,
            });
        } else if !self.focused && !self.placeholder.is_empty() {
            cmds.push(DrawCmd::TextRun {
                x: -scroll_x,
                y: text_y,
                text: self.placeholder.clone(),
                color: self.placeholder_color,
                style: self.style,
            });
        }

        if self.focused && self.blink.visible() {
            let cursor_px = self.advance_at(metrics, self.editor.cursor());
            cmds.push(DrawCmd::FillRect {
                rect: Rect {
                    x: cursor_px - scroll_x,
                    y: 0.0,
                    width: self.cursor_width,
                    height: content_height,
                },
                color: self.cursor_color,
            });
        }

        cmds
    }

    // --- Internal helper functions ---

    fn handle_key(
        &mut self,
        metrics: &dyn FontMetrics,
        key: Key,
        modifiers: Modifiers,
    ) -> EventOutcome {
        let notices = match key {
            Key::Home | Key::PageUp | Key::ArrowUp => self.editor.move_to_start(modifiers.shift),
            Key::End | Key::PageDown | Key::ArrowDown => self.editor.move_to_end(modifiers.shift),
            Key::ArrowLeft => self.editor.move_left(modifiers.shift, modifiers.control),
            Key::ArrowRight => self.editor.move_right(modifiers.shift, modifiers.control),
            Key::Backspace => self.editor.backspace(modifiers.control),
            Key::Delete => self.editor.delete_forward(modifiers.control),
            Key::A if modifiers.only_control() => self.editor.select_all(),
            _ => return EventOutcome::ignored(),
        };

        log::trace!(target: "widgets.edit_line", "key {key:?} handled, {} notices", notices.len());
        self.reflow_viewport(metrics);
        self.blink.reset();
        EventOutcome::consumed_with(notices)
    }

    fn handle_text_input(&mut self, metrics: &dyn FontMetrics, text: &str) -> EventOutcome {
        // A run with any control character is dropped wholesale, but the
        // event is still consumed.
        if contains_control(text) {
            return EventOutcome::consumed();
        }

        let notices = self.editor.insert_text(text);
        self.reflow_viewport(metrics);
        self.blink.reset();
        EventOutcome::consumed_with(notices)
    }

    fn handle_pointer_press(
        &mut self,
        metrics: &dyn FontMetrics,
        x: f32,
        button: PointerButton,
        press_index: u32,
        modifiers: Modifiers,
    ) -> EventOutcome {
        let old = self.editor.cursor();
        let hit = self.hit_index(metrics, x + self.editor.scroll_x());
        let mut notices = self.editor.set_cursor(hit);
        self.blink.reset();

        let repeat_select = button == PointerButton::Primary
            && press_index > 0
            && !modifiers.shift
            && !self.editor.is_empty();
        if repeat_select {
            // Odd repeats select the run under the cursor, even ones the
            // whole text.
            let more = if press_index % 2 == 1 {
                self.editor.select_run_at_cursor()
            } else {
                self.editor.select_all()
            };
            notices.extend(more);
        } else {
            notices.extend(self.editor.extend_for_cursor_move(old, modifiers.shift));
        }

        self.reflow_viewport(metrics);
        EventOutcome::consumed_with(notices)
    }

    fn handle_pointer_move(
        &mut self,
        metrics: &dyn FontMetrics,
        x: f32,
        buttons: PointerButtons,
    ) -> EventOutcome {
        if !buttons.primary {
            return EventOutcome::ignored();
        }

        // Dragging extends the selection as if Shift were held.
        let hit = self.hit_index(metrics, x + self.editor.scroll_x());
        let notices = self.editor.move_cursor_to(hit, true);
        self.blink.reset();
        self.reflow_viewport(metrics);
        EventOutcome::consumed_with(notices)
    }

    fn ensure_advance_cache(&mut self, metrics: &dyn FontMetrics) {
        let revision = self.editor.revision();
        let cache_valid = self
            .cache
            .as_ref()
            .is_some_and(|c| c.revision == revision && c.style == self.style);
        if cache_valid {
            return;
        }

        let scaled = ScaledMetrics::new(metrics, &self.style);
        let (boundaries, advances) = prefix_advances(metrics, scaled, self.editor.text());
        log::trace!(
            target: "widgets.edit_line",
            "rebuilt advance cache: rev {revision}, {} boundaries",
            boundaries.len(),
        );
        self.cache = Some(AdvanceCache {
            revision,
            style: self.style,
            boundaries,
            advances,
        });
    }

    /// Pixel advance at a char-boundary byte offset.
    fn advance_at(&mut self, metrics: &dyn FontMetrics, offset: usize) -> f32 {
        self.ensure_advance_cache(metrics);
        let Some(cache) = self.cache.as_ref() else {
            return 0.0;
        };
        let idx = cache.boundaries.partition_point(|&b| b < offset);
        cache.advances.get(idx).copied().unwrap_or(0.0)
    }

    /// Nearest char boundary to a pixel x in text space (scroll already
    /// added by the caller).
    fn hit_index(&mut self, metrics: &dyn FontMetrics, x: f32) -> usize {
        self.ensure_advance_cache(metrics);
        let Some(cache) = self.cache.as_ref() else {
            return 0;
        };
        caret_from_x(&cache.boundaries, &cache.advances, x)
    }

    fn reflow_viewport(&mut self, metrics: &dyn FontMetrics) {
        let cursor_px = self.advance_at(metrics, self.editor.cursor());
        let text_w = self
            .cache
            .as_ref()
            .and_then(|c| c.advances.last().copied())
            .unwrap_or(0.0);
        self.editor
            .update_scroll_for_cursor(cursor_px, text_w, self.visible_width);
    }
}

impl Default for EditLine {
    fn default() -> Self {
        Self::new()
    }
}
