use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Which script keystrokes produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    English,
    Tamil,
}

impl InputMode {
    /// Text shown on the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "ENG",
            Self::Tamil => "தமிழ்",
        }
    }

    /// Single-glyph indicator for the toggle knob.
    pub fn indicator(self) -> char {
        match self {
            Self::English => 'A',
            Self::Tamil => 'அ',
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Tamil,
            Self::Tamil => Self::English,
        }
    }
}

#[derive(Debug, Default)]
struct ModeState {
    tamil: AtomicBool,
    /// Number of English -> Tamil transitions so far.
    activations: AtomicU64,
}

/// Shared Tamil/English toggle. Clones share the same state.
///
/// Sessions read it on every event and never cache the mode; they only
/// remember the activation count they last saw, so an English -> Tamil
/// switch is noticed even if it was toggled back and forth between events.
#[derive(Debug, Clone, Default)]
pub struct ModeSwitch {
    state: Arc<ModeState>,
}

impl ModeSwitch {
    pub fn new(mode: InputMode) -> Self {
        let switch = Self::default();
        switch
            .state
            .tamil
            .store(mode == InputMode::Tamil, Ordering::SeqCst);
        switch
    }

    pub fn mode(&self) -> InputMode {
        if self.is_tamil() {
            InputMode::Tamil
        } else {
            InputMode::English
        }
    }

    pub fn is_tamil(&self) -> bool {
        self.state.tamil.load(Ordering::SeqCst)
    }

    /// Set the mode. Returns true if it changed.
    pub fn set(&self, mode: InputMode) -> bool {
        let tamil = mode == InputMode::Tamil;
        let was_tamil = self.state.tamil.swap(tamil, Ordering::SeqCst);
        if tamil && !was_tamil {
            self.state.activations.fetch_add(1, Ordering::SeqCst);
        }
        was_tamil != tamil
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&self) -> InputMode {
        let was_tamil = self.state.tamil.fetch_xor(true, Ordering::SeqCst);
        if !was_tamil {
            self.state.activations.fetch_add(1, Ordering::SeqCst);
            InputMode::Tamil
        } else {
            InputMode::English
        }
    }

    pub fn activations(&self) -> u64 {
        self.state.activations.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        let switch = ModeSwitch::default();
        assert_eq!(switch.mode(), InputMode::English);
        assert_eq!(switch.activations(), 0);
    }

    #[test]
    fn starting_in_tamil_is_not_an_activation() {
        let switch = ModeSwitch::new(InputMode::Tamil);
        assert!(switch.is_tamil());
        assert_eq!(switch.activations(), 0);
    }

    #[test]
    fn set_counts_only_english_to_tamil() {
        let switch = ModeSwitch::new(InputMode::English);
        assert!(switch.set(InputMode::Tamil));
        assert!(!switch.set(InputMode::Tamil));
        assert_eq!(switch.activations(), 1);
        assert!(switch.set(InputMode::English));
        assert_eq!(switch.activations(), 1);
        switch.set(InputMode::Tamil);
        assert_eq!(switch.activations(), 2);
    }

    #[test]
    fn toggle_flips_and_counts() {
        let switch = ModeSwitch::new(InputMode::English);
        assert_eq!(switch.toggle(), InputMode::Tamil);
        assert_eq!(switch.toggle(), InputMode::English);
        assert_eq!(switch.toggle(), InputMode::Tamil);
        assert_eq!(switch.activations(), 2);
    }

    #[test]
    fn clones_share_state() {
        let a = ModeSwitch::new(InputMode::English);
        let b = a.clone();
        a.toggle();
        assert!(b.is_tamil());
        assert_eq!(b.activations(), 1);
    }

    #[test]
    fn labels() {
        assert_eq!(InputMode::English.label(), "ENG");
        assert_eq!(InputMode::Tamil.label(), "தமிழ்");
        assert_eq!(InputMode::Tamil.indicator(), 'அ');
        assert_eq!(InputMode::English.toggled(), InputMode::Tamil);
    }
}
