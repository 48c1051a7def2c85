use edit_core::EditNotice;
use text_layout::{FontMetrics, GlyphBounds};
use widgets::{DrawCmd, EditLine, InputEvent, Key, Modifiers, PointerButton, PointerButtons};

/// Fixed-advance metrics: 10 px per glyph, line spacing 1.5 x size.
struct FakeMetrics;

impl FontMetrics for FakeMetrics {
    fn glyph_advance(&self, _ch: char, _px: f32, _bold: bool, _outline: f32) -> f32 {
        10.0
    }

    fn glyph_bounds(&self, _ch: char, _px: f32, _bold: bool, _outline: f32) -> GlyphBounds {
        GlyphBounds {
            left: 0.0,
            top: -8.0,
            right: 10.0,
            bottom: 2.0,
        }
    }

    fn kerning(&self, _prev: Option<char>, _ch: char, _px: f32) -> f32 {
        0.0
    }

    fn line_spacing(&self, px: f32) -> f32 {
        px * 1.5
    }
}

fn focused_line_with(text: &str) -> EditLine {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.handle_event(&metrics, &InputEvent::LayoutChanged { width: 500.0 });
    line.handle_event(&metrics, &InputEvent::FocusGained);
    line.set_text(&metrics, text);
    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::End,
            modifiers: Modifiers::NONE,
        },
    );
    line
}

fn press(x: f32, press_index: u32, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerPress {
        x,
        y: 5.0,
        button: PointerButton::Primary,
        press_index,
        modifiers,
    }
}

#[test]
fn typing_builds_text_and_reports_notices() {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.handle_event(&metrics, &InputEvent::FocusGained);

    let outcome = line.handle_event(
        &metrics,
        &InputEvent::TextInput {
            text: "hi".to_owned(),
        },
    );
    assert!(outcome.handled);
    assert_eq!(line.text(), "hi");
    assert_eq!(line.editor().cursor(), 2);
    assert_eq!(
        outcome.notices,
        vec![
            EditNotice::TextChanged {
                text: "hi".into(),
                old: "".into(),
            },
            EditNotice::CursorMoved {
                position: 2,
                old: 0
            },
        ]
    );

    line.handle_event(
        &metrics,
        &InputEvent::TextInput {
            text: "!".to_owned(),
        },
    );
    assert_eq!(line.text(), "hi!");
}

#[test]
fn control_characters_are_dropped_but_consumed() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("ab");

    for bad in ["x\ny", "\t", "\r", "\u{1b}"] {
        let outcome = line.handle_event(
            &metrics,
            &InputEvent::TextInput {
                text: bad.to_owned(),
            },
        );
        assert!(outcome.handled);
        assert!(outcome.notices.is_empty());
    }
    assert_eq!(line.text(), "ab");
}

#[test]
fn click_moves_the_cursor_to_the_nearest_boundary() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");

    // 23 px sits between boundaries 2 (20 px) and 3 (30 px), closer to 2.
    let outcome = line.handle_event(&metrics, &press(23.0, 0, Modifiers::NONE));
    assert!(outcome.handled);
    assert_eq!(line.editor().cursor(), 2);
    assert_eq!(line.editor().selection_length(), 0);

    // An exact midpoint resolves to the earlier boundary.
    line.handle_event(&metrics, &press(25.0, 0, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 2);

    // Far past the end clamps to the length.
    line.handle_event(&metrics, &press(400.0, 0, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 5);
}

#[test]
fn shift_click_extends_from_the_old_cursor() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");
    line.handle_event(&metrics, &press(10.0, 0, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 1);

    line.handle_event(&metrics, &press(40.0, 0, Modifiers::SHIFT));
    assert_eq!(line.editor().cursor(), 4);
    let span = line.editor().selection();
    assert_eq!((span.begin, span.length), (1, 3));
}

#[test]
fn dragging_with_primary_extends_like_shift() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");
    line.handle_event(&metrics, &press(0.0, 0, Modifiers::NONE));

    let outcome = line.handle_event(
        &metrics,
        &InputEvent::PointerMove {
            x: 30.0,
            y: 5.0,
            buttons: PointerButtons::PRIMARY,
        },
    );
    assert!(outcome.handled);
    let span = line.editor().selection();
    assert_eq!((span.begin, span.length), (0, 3));

    // Without the primary button held, a move is not ours.
    let outcome = line.handle_event(
        &metrics,
        &InputEvent::PointerMove {
            x: 50.0,
            y: 5.0,
            buttons: PointerButtons::default(),
        },
    );
    assert!(!outcome.handled);
}

#[test]
fn odd_repeat_press_selects_the_run_under_the_cursor() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello world");

    // Double click inside "hello": the leftward scan stops short of the
    // first character.
    line.handle_event(&metrics, &press(30.0, 1, Modifiers::NONE));
    assert_eq!(line.editor().selected_text(), "ello");

    // Triple click selects everything.
    line.handle_event(&metrics, &press(30.0, 2, Modifiers::NONE));
    assert_eq!(line.editor().selected_text(), "hello world");
}

#[test]
fn repeat_press_with_shift_extends_instead() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");
    line.handle_event(&metrics, &press(0.0, 0, Modifiers::NONE));

    line.handle_event(&metrics, &press(30.0, 1, Modifiers::SHIFT));
    let span = line.editor().selection();
    assert_eq!((span.begin, span.length), (0, 3));
}

#[test]
fn arrows_home_end_and_word_jumps_route_through() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello world");

    let key = |key, modifiers| InputEvent::KeyPress { key, modifiers };

    line.handle_event(&metrics, &key(Key::Home, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 0);

    line.handle_event(&metrics, &key(Key::ArrowRight, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 1);

    line.handle_event(&metrics, &key(Key::ArrowRight, Modifiers::CONTROL));
    assert_eq!(line.editor().cursor(), 5);

    line.handle_event(&metrics, &key(Key::End, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 11);

    line.handle_event(&metrics, &key(Key::ArrowLeft, Modifiers::CONTROL));
    assert_eq!(line.editor().cursor(), 6);

    // Up and PageUp behave like Home, Down and PageDown like End.
    line.handle_event(&metrics, &key(Key::ArrowUp, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 0);
    line.handle_event(&metrics, &key(Key::PageDown, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 11);

    // Shifted movement selects.
    line.handle_event(&metrics, &key(Key::Home, Modifiers::SHIFT));
    assert_eq!(line.editor().selected_text(), "hello world");
}

#[test]
fn backspace_and_delete_route_with_word_variants() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello world");

    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::Backspace,
            modifiers: Modifiers::CONTROL,
        },
    );
    assert_eq!(line.text(), "hello ");

    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::Backspace,
            modifiers: Modifiers::NONE,
        },
    );
    assert_eq!(line.text(), "hello");

    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::Home,
            modifiers: Modifiers::NONE,
        },
    );
    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::Delete,
            modifiers: Modifiers::CONTROL,
        },
    );
    assert_eq!(line.text(), "");
}

#[test]
fn ctrl_a_requires_control_alone() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");

    let outcome = line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::A,
            modifiers: Modifiers {
                shift: true,
                control: true,
                alt: false,
            },
        },
    );
    assert!(!outcome.handled);
    assert_eq!(line.editor().selection_length(), 0);

    let outcome = line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::A,
            modifiers: Modifiers::CONTROL,
        },
    );
    assert!(outcome.handled);
    assert_eq!(line.editor().selected_text(), "hello");
}

#[test]
fn viewport_follows_the_cursor_and_clamps() {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.handle_event(&metrics, &InputEvent::LayoutChanged { width: 50.0 });
    line.handle_event(&metrics, &InputEvent::FocusGained);

    for _ in 0..10 {
        line.handle_event(
            &metrics,
            &InputEvent::TextInput {
                text: "a".to_owned(),
            },
        );
    }
    // 100 px of text in a 50 px window: scrolled all the way right.
    assert_eq!(line.editor().scroll_x(), 50.0);

    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::Home,
            modifiers: Modifiers::NONE,
        },
    );
    assert_eq!(line.editor().scroll_x(), 0.0);

    // Hit-testing accounts for the scroll offset.
    line.handle_event(
        &metrics,
        &InputEvent::KeyPress {
            key: Key::End,
            modifiers: Modifiers::NONE,
        },
    );
    line.handle_event(&metrics, &press(46.0, 0, Modifiers::NONE));
    assert_eq!(line.editor().cursor(), 10); // 46 local + 50 scroll = 96 px

    // A wider layout clamps the scroll back.
    line.handle_event(&metrics, &InputEvent::LayoutChanged { width: 400.0 });
    assert_eq!(line.editor().scroll_x(), 0.0);
}

#[test]
fn draw_emits_selection_text_and_cursor_in_order() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("hello");
    line.handle_event(&metrics, &press(10.0, 0, Modifiers::NONE));
    line.handle_event(&metrics, &press(40.0, 0, Modifiers::SHIFT)); // select [1, 4)

    let cmds = line.draw(&metrics, 30.0);
    assert_eq!(cmds.len(), 3);

    match &cmds[0] {
        DrawCmd::FillRect { rect, .. } => {
            assert_eq!(rect.x, 10.0);
            assert_eq!(rect.y, 0.0);
            assert_eq!(rect.width, 30.0);
            assert_eq!(rect.height, 30.0);
        }
        other => panic!("expected selection rect, got {other:?}"),
    }

    match &cmds[1] {
        DrawCmd::TextRun { x, y, text, .. } => {
            assert_eq!(*x, 0.0);
            // Centered: 30 / 2 - line_spacing(18) / 2 = 15 - 13.5.
            assert!((y - 1.5).abs() < 1e-4);
            assert_eq!(text, "hello");
        }
        other => panic!("expected text run, got {other:?}"),
    }

    match &cmds[2] {
        DrawCmd::FillRect { rect, .. } => {
            assert_eq!(rect.x, 40.0); // cursor at boundary 4
            assert_eq!(rect.width, 2.0);
            assert_eq!(rect.height, 30.0);
        }
        other => panic!("expected cursor rect, got {other:?}"),
    }
}

#[test]
fn placeholder_shows_only_when_empty_and_unfocused() {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.set_placeholder("type here");

    let cmds = line.draw(&metrics, 30.0);
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        DrawCmd::TextRun { text, .. } => assert_eq!(text, "type here"),
        other => panic!("expected placeholder run, got {other:?}"),
    }

    // Focus hides the placeholder; the freshly reset blink shows a cursor.
    line.handle_event(&metrics, &InputEvent::FocusGained);
    let cmds = line.draw(&metrics, 30.0);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], DrawCmd::FillRect { .. }));

    // Text hides it too.
    line.handle_event(
        &metrics,
        &InputEvent::TextInput {
            text: "x".to_owned(),
        },
    );
    line.handle_event(&metrics, &InputEvent::FocusLost);
    let cmds = line.draw(&metrics, 30.0);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], DrawCmd::TextRun { text, .. } if text == "x"));
}

#[test]
fn blink_tick_toggles_the_cursor_rect() {
    let metrics = FakeMetrics;
    let mut line = focused_line_with("a");

    let visible = |line: &mut EditLine| {
        line.draw(&metrics, 30.0)
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::FillRect { .. }))
            .count()
    };
    assert_eq!(visible(&mut line), 1);

    assert!(line.tick(0.5));
    assert_eq!(visible(&mut line), 0);
    assert!(line.tick(0.5));
    assert_eq!(visible(&mut line), 1);

    line.handle_event(&metrics, &InputEvent::FocusLost);
    assert!(!line.tick(5.0));
    assert_eq!(visible(&mut line), 0);
}

#[test]
fn unfocused_line_never_draws_a_cursor() {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.set_text(&metrics, "hello");

    let cmds = line.draw(&metrics, 30.0);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], DrawCmd::TextRun { .. }));
}

#[test]
fn validator_gates_event_driven_edits() {
    let metrics = FakeMetrics;
    let mut line = EditLine::new();
    line.handle_event(&metrics, &InputEvent::FocusGained);
    line.set_validator(Some(Box::new(|proposed: &str, current: &str| {
        if proposed.chars().all(|c| c.is_ascii_digit()) {
            None
        } else {
            Some(current.to_owned())
        }
    })));

    line.handle_event(
        &metrics,
        &InputEvent::TextInput {
            text: "12".to_owned(),
        },
    );
    assert_eq!(line.text(), "12");

    let outcome = line.handle_event(
        &metrics,
        &InputEvent::TextInput {
            text: "x".to_owned(),
        },
    );
    assert!(outcome.handled);
    assert_eq!(line.text(), "12");
}
