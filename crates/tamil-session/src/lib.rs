//! Per-field Tamil input handling.
//!
//! A `FieldSession` owns the hidden Latin buffer of one text field. Every
//! intercepted keystroke edits that buffer and the whole buffer is
//! transliterated again, so the visible Tamil text re-segments as the user
//! keeps typing ("k" -> க், "ka" -> க). Sessions share a `ModeSwitch` and
//! return a `KeyResponse` telling the host whether to block the native edit
//! and which value to show.

mod form;
mod key_handlers;
mod mode;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use tamil_core::translit::RuleTable;

pub use form::{FormError, FormState};
pub use mode::{InputMode, ModeSwitch};
pub use types::{
    Key, KeyEvent, KeyResponse, Modifiers, NamedKey, FLAG_ALT, FLAG_CTRL, FLAG_META, FLAG_SHIFT,
};

/// Input engine for a single editable field.
pub struct FieldSession {
    table: Arc<RuleTable>,
    mode: ModeSwitch,
    /// Activation count of `mode` already accounted for.
    seen_activations: u64,
    /// Raw Latin keystrokes typed in Tamil mode (or mirrored from English edits).
    raw: String,
}

impl FieldSession {
    pub fn new(mode: ModeSwitch) -> Self {
        Self::with_table(mode, RuleTable::shared())
    }

    pub fn with_table(mode: ModeSwitch, table: Arc<RuleTable>) -> Self {
        Self {
            table,
            seen_activations: mode.activations(),
            mode,
            raw: String::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The Tamil text the buffer currently stands for.
    pub fn display(&self) -> String {
        self.table.transliterate(&self.raw)
    }

    pub fn mode(&self) -> &ModeSwitch {
        &self.mode
    }

    pub fn is_tamil(&self) -> bool {
        self.mode.is_tamil()
    }

    pub fn reset(&mut self) {
        self.raw.clear();
    }

    /// Read the shared mode. A switch into Tamil that this session has not
    /// seen yet starts a fresh buffer.
    pub fn observe_mode(&mut self) -> InputMode {
        let activations = self.mode.activations();
        if activations != self.seen_activations {
            self.seen_activations = activations;
            if !self.raw.is_empty() {
                debug!(raw = %self.raw, "tamil mode activated, buffer cleared");
            }
            self.raw.clear();
        }
        self.mode.mode()
    }

    /// Tell the session the field's current value. An absent or empty value
    /// (form reset, programmatic clear) empties the buffer too.
    pub fn sync_value(&mut self, value: Option<&str>) {
        if value.map_or(true, str::is_empty) && !self.raw.is_empty() {
            debug!(raw = %self.raw, "field cleared externally, buffer cleared");
            self.raw.clear();
        }
    }
}
