mod host;
mod proptest_fsm;

use super::{FieldSession, InputMode, KeyEvent, KeyResponse, ModeSwitch};

pub(super) fn tamil_session() -> FieldSession {
    FieldSession::new(ModeSwitch::new(InputMode::Tamil))
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut FieldSession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|c| session.handle_key(&KeyEvent::char(c)))
        .collect()
}

pub(super) fn press_backspace(session: &mut FieldSession, times: usize) -> Vec<KeyResponse> {
    (0..times)
        .map(|_| session.handle_key(&KeyEvent::backspace()))
        .collect()
}

/// Last value pushed to the host, if any response carried one.
pub(super) fn last_value(responses: &[KeyResponse]) -> Option<&str> {
    responses.iter().rev().find_map(|r| r.value.as_deref())
}
