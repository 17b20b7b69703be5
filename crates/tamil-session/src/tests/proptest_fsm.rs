//! Property-based tests for the field session state machine.
//!
//! Drives a headless host field with random keystrokes, mode toggles and
//! external clears, and checks the session against a small reference model
//! of the hidden buffer after every action.

use proptest::prelude::*;

use tamil_core::translit::transliterate;

use super::host::HostField;
use crate::{InputMode, Key, KeyEvent, Modifiers, ModeSwitch};

// ---------------------------------------------------------------------------
// Action enum: every user-facing operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    Backspace,
    Shortcut(char),
    Named(&'static str),
    Toggle,
    ClearExternally,
}

fn arb_letter() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o']),
        4 => prop::sample::select(vec![
            'k', 'n', 'g', 'c', 'h', 's', 't', 'd', 'p', 'm', 'y', 'r', 'l', 'v', 'z', 'j',
        ]),
        1 => prop::sample::select(vec!['A', 'K', 'S', 'q', 'x', 'w', 'f', 'b']),
        1 => prop::sample::select(vec![' ', '1', '.', 'é', 'அ']),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        50 => arb_letter().prop_map(Action::Type),
        10 => Just(Action::Backspace),
        4 => prop::sample::select(vec!['a', 'c', 'v', 'z']).prop_map(Action::Shortcut),
        4 => prop::sample::select(vec!["Enter", "Tab", "ArrowLeft", "Home", "F2", "Dead"])
            .prop_map(Action::Named),
        5 => Just(Action::Toggle),
        2 => Just(Action::ClearExternally),
    ]
}

// ---------------------------------------------------------------------------
// Reference model of the hidden buffer
// ---------------------------------------------------------------------------

struct Model {
    raw: String,
    /// A switch into Tamil not yet observed by an event.
    pending_reset: bool,
}

fn event_for(action: &Action) -> Option<KeyEvent> {
    match action {
        Action::Type(c) => Some(KeyEvent::char(*c)),
        Action::Backspace => Some(KeyEvent::backspace()),
        Action::Shortcut(c) => Some(KeyEvent::char(*c).with_modifiers(Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        })),
        Action::Named(name) => Some(KeyEvent::named(name)),
        Action::Toggle | Action::ClearExternally => None,
    }
}

fn run(mode: &ModeSwitch, field: &mut HostField, model: &mut Model, action: &Action) {
    let Some(event) = event_for(action) else {
        match action {
            Action::Toggle => {
                if mode.toggle() == InputMode::Tamil {
                    model.pending_reset = true;
                }
            }
            Action::ClearExternally => {
                field.clear_externally();
                model.raw.clear();
            }
            _ => unreachable!(),
        }
        return;
    };

    if std::mem::take(&mut model.pending_reset) {
        model.raw.clear();
    }
    let tamil = mode.is_tamil();
    let had_value = !field.value.is_empty();
    let resp = field.press(&event);

    if !tamil {
        assert!(!resp.consumed, "English mode consumed {action:?}");
        assert!(resp.value.is_none(), "English keydown pushed a value");
        // Native edits (if any) were mirrored through the change event.
        let edited = match event.key {
            Key::Char(_) => !event.modifiers.is_shortcut(),
            Key::Backspace => had_value && !event.modifiers.is_shortcut(),
            _ => false,
        };
        if edited {
            model.raw.clone_from(&field.value);
        }
        return;
    }

    match &event.key {
        Key::Backspace => {
            assert!(resp.consumed, "Tamil backspace must be consumed");
            model.raw.pop();
        }
        _ if event.modifiers.is_shortcut() => {
            assert!(!resp.consumed, "shortcut {action:?} consumed");
        }
        Key::Char(c) => {
            assert!(resp.consumed, "Tamil char {c:?} not consumed");
            model.raw.push(*c);
        }
        Key::Named(_) | Key::Other(_) => {
            assert!(!resp.consumed, "{action:?} consumed");
            assert!(resp.value.is_none());
        }
    }
    if let Some(value) = &resp.value {
        assert_eq!(*value, transliterate(&model.raw), "after {action:?}");
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_tracks_reference_model(
        start_tamil in any::<bool>(),
        actions in prop::collection::vec(arb_action(), 1..120),
    ) {
        let start = if start_tamil { InputMode::Tamil } else { InputMode::English };
        let mode = ModeSwitch::new(start);
        let mut field = HostField::new(mode.clone());
        let mut model = Model { raw: String::new(), pending_reset: false };
        for action in &actions {
            run(&mode, &mut field, &mut model, action);
            prop_assert_eq!(field.session.raw(), model.raw.as_str(), "after {:?}", action);
        }
    }

    #[test]
    fn tamil_value_always_matches_buffer(
        text in "[a-z ]{0,24}",
        backspaces in 0usize..30,
    ) {
        let mode = ModeSwitch::new(InputMode::Tamil);
        let mut field = HostField::new(mode);
        field.type_str(&text);
        for _ in 0..backspaces {
            field.press(&KeyEvent::backspace());
        }
        let kept = &text[..text.len().saturating_sub(backspaces)];
        prop_assert_eq!(field.session.raw(), kept);
        prop_assert_eq!(field.value.clone(), transliterate(kept));
    }
}
