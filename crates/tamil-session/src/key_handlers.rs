use tracing::{debug_span, trace};

use super::types::{Key, KeyEvent, KeyResponse};
use super::{FieldSession, InputMode};

impl FieldSession {
    /// Process a key-down event. Returns a KeyResponse describing what the host should do.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        // English mode: the native input owns the value.
        if self.observe_mode() == InputMode::English {
            return KeyResponse::not_consumed();
        }

        match &event.key {
            // Backspace is handled even with modifiers held.
            Key::Backspace => self.handle_backspace(),

            // Shortcuts (copy, paste, select-all...) go to the host untouched.
            _ if event.modifiers.is_shortcut() => KeyResponse::not_consumed(),

            Key::Char(c) => {
                self.raw.push(*c);
                self.respond_with_display()
            }

            // Navigation and control keys
            Key::Named(_) | Key::Other(_) => KeyResponse::not_consumed(),
        }
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        if self.raw.pop().is_none() {
            return KeyResponse::consumed();
        }
        self.respond_with_display()
    }

    fn respond_with_display(&self) -> KeyResponse {
        let value = self.display();
        trace!(raw = %self.raw, %value, "buffer transliterated");
        KeyResponse::replace(value)
    }

    /// Process a native change event carrying the input's raw value.
    ///
    /// In English mode the buffer mirrors the native value, which is forwarded
    /// unchanged. In Tamil mode `handle_key` already owns the value and the
    /// native event is stale, so nothing happens.
    pub fn handle_change(&mut self, native_value: &str) -> KeyResponse {
        let _span = debug_span!("handle_change").entered();

        if self.observe_mode() == InputMode::Tamil {
            return KeyResponse::not_consumed();
        }
        self.raw.clear();
        self.raw.push_str(native_value);
        KeyResponse::forward(native_value.to_string())
    }
}
