use crate::{FieldSession, InputMode, Key, KeyEvent, KeyResponse, ModeSwitch};

/// Headless text input for integration tests.
///
/// Plays the browser's part: when the session does not consume a key, the
/// native edit happens and a change event follows, exactly like an
/// `<input>` with both handlers attached.
pub(crate) struct HostField {
    pub session: FieldSession,
    pub value: String,
}

impl HostField {
    pub fn new(mode: ModeSwitch) -> Self {
        Self {
            session: FieldSession::new(mode),
            value: String::new(),
        }
    }

    pub fn press(&mut self, event: &KeyEvent) -> KeyResponse {
        let resp = self.session.handle_key(event);
        if let Some(value) = &resp.value {
            self.value.clone_from(value);
        }
        if !resp.consumed && !event.modifiers.is_shortcut() {
            let edited = match &event.key {
                Key::Char(c) => {
                    self.value.push(*c);
                    true
                }
                Key::Backspace => self.value.pop().is_some(),
                _ => false,
            };
            if edited {
                let native = self.value.clone();
                let change = self.session.handle_change(&native);
                if let Some(value) = change.value {
                    self.value = value;
                }
            }
        }
        resp
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(&KeyEvent::char(c));
        }
    }

    /// The owning form clears the value from outside the input.
    pub fn clear_externally(&mut self) {
        self.value.clear();
        self.session.sync_value(Some(&self.value));
    }
}

#[test]
fn english_typing_goes_through_native_path() {
    let mode = ModeSwitch::new(InputMode::English);
    let mut field = HostField::new(mode);
    field.type_str("Raja");
    assert_eq!(field.value, "Raja");
    assert_eq!(field.session.raw(), "Raja");
    field.press(&KeyEvent::backspace());
    assert_eq!(field.value, "Raj");
    assert_eq!(field.session.raw(), "Raj");
}

#[test]
fn tamil_typing_replaces_value() {
    let mode = ModeSwitch::new(InputMode::Tamil);
    let mut field = HostField::new(mode);
    field.type_str("raja");
    assert_eq!(field.value, "ரஜ");
    assert_eq!(field.session.raw(), "raja");
}
