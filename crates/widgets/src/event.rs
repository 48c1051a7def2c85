use edit_core::EditNotice;

/// Keyboard modifier state carried on key and pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
        alt: false,
    };

    /// True when Control is held and nothing else is. Shortcuts like
    /// Ctrl+A require this exact state, not merely "Control among others".
    #[inline]
    pub fn only_control(self) -> bool {
        self == Modifiers::CONTROL
    }
}

/// The keys the widgets route. Anything outside this set never reaches
/// them as a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    A,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Which buttons are held during a pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const PRIMARY: PointerButtons = PointerButtons {
        primary: true,
        secondary: false,
        middle: false,
    };
}

/// The closed input set the host feeds into a widget. Coordinates are local
/// to the widget's content rect, in pixels. Widgets implement only the
/// events they care about; everything else passes through unhandled.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyPress {
        key: Key,
        modifiers: Modifiers,
    },
    TextInput {
        text: String,
    },
    PointerPress {
        x: f32,
        y: f32,
        button: PointerButton,
        /// 0 for a fresh press; counts up while the host considers
        /// presses at the same spot a repeat (double/triple click).
        press_index: u32,
        modifiers: Modifiers,
    },
    PointerMove {
        x: f32,
        y: f32,
        buttons: PointerButtons,
    },
    FocusGained,
    FocusLost,
    /// The host resized the widget's content rect.
    LayoutChanged {
        width: f32,
    },
    /// The host changed style properties; caches must not survive this.
    StyleChanged,
}

/// What routing one event produced: whether the widget consumed it, and the
/// editing notices the host may want to react to.
#[derive(Debug, Default, PartialEq)]
pub struct EventOutcome {
    pub handled: bool,
    pub notices: Vec<EditNotice>,
}

impl EventOutcome {
    /// The event was not for this widget; the host should keep routing it.
    pub fn ignored() -> Self {
        EventOutcome::default()
    }

    /// Consumed, nothing changed.
    pub fn consumed() -> Self {
        EventOutcome {
            handled: true,
            notices: Vec::new(),
        }
    }

    /// Consumed, with the notices the editing engine reported.
    pub fn consumed_with(notices: Vec<EditNotice>) -> Self {
        EventOutcome {
            handled: true,
            notices,
        }
    }
}
