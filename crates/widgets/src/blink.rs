/// Cursor blink state machine, driven by frame ticks rather than a thread.
///
/// While running, visibility flips every half period. Edits and navigation
/// call [`reset`] so the cursor is always visible right after an action;
/// focus loss calls [`stop`] so an unfocused widget never shows one.
///
/// [`reset`]: CursorBlink::reset
/// [`stop`]: CursorBlink::stop
#[derive(Debug)]
pub struct CursorBlink {
    period: f32,
    elapsed: f32,
    visible: bool,
    running: bool,
}

impl CursorBlink {
    pub fn new() -> Self {
        CursorBlink {
            period: 1.0,
            elapsed: 0.0,
            visible: false,
            running: false,
        }
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Full blink period in seconds; visibility toggles each half period.
    pub fn set_period(&mut self, period: f32) {
        self.period = period.max(f32::EPSILON);
    }

    /// Advances the timer by `dt` seconds. Returns true when visibility
    /// flipped, so the host knows a repaint is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        let half = self.period / 2.0;
        let mut flipped = false;
        self.elapsed += dt;
        while self.elapsed >= half {
            self.elapsed -= half;
            self.visible = !self.visible;
            flipped = true;
        }
        flipped
    }

    /// Restarts the timer with the cursor visible.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.visible = true;
        self.running = true;
    }

    /// Stops the timer and hides the cursor.
    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.visible = false;
        self.running = false;
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
