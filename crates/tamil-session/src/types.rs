// Flag bits for key events arriving over FFI
pub const FLAG_SHIFT: u8 = 1;
pub const FLAG_CTRL: u8 = 2;
pub const FLAG_ALT: u8 = 4;
pub const FLAG_META: u8 = 8;

/// Navigation and control keys. A session never intercepts these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Insert,
    /// F1..F24
    Function(u8),
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    NumLock,
    ScrollLock,
}

impl NamedKey {
    /// Parse a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Delete" => Self::Delete,
            "Insert" => Self::Insert,
            "Shift" => Self::Shift,
            "Control" => Self::Control,
            "Alt" => Self::Alt,
            "Meta" => Self::Meta,
            "CapsLock" => Self::CapsLock,
            "NumLock" => Self::NumLock,
            "ScrollLock" => Self::ScrollLock,
            _ => {
                let n: u8 = name.strip_prefix('F')?.parse().ok()?;
                if !(1..=24).contains(&n) {
                    return None;
                }
                Self::Function(n)
            }
        };
        Some(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Backspace,
    /// A key whose name is a single character (letters, digits, space, symbols).
    Char(char),
    Named(NamedKey),
    /// Any other multi-character key name ("Dead", "Unidentified", media keys...).
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        if name == "Backspace" {
            return Self::Backspace;
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }
        match NamedKey::from_name(name) {
            Some(named) => Self::Named(named),
            None => Self::Other(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    pub fn from_flags(flags: u8) -> Self {
        Self {
            ctrl: flags & FLAG_CTRL != 0,
            meta: flags & FLAG_META != 0,
            alt: flags & FLAG_ALT != 0,
            shift: flags & FLAG_SHIFT != 0,
        }
    }

    /// Ctrl, Cmd or Alt held: the keystroke is a shortcut, not text.
    pub fn is_shortcut(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// A key-down event as delivered by the host text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parse a DOM key name with no modifiers held.
    pub fn named(name: &str) -> Self {
        Self::new(Key::from_name(name), Modifiers::NONE)
    }

    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::NONE)
    }

    pub fn backspace() -> Self {
        Self::new(Key::Backspace, Modifiers::NONE)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What the host must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The native edit must be prevented.
    pub consumed: bool,
    /// New field value to push to the host, if any.
    pub value: Option<String>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            value: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    /// Consume the native edit and replace the field value.
    pub(crate) fn replace(value: String) -> Self {
        Self {
            consumed: true,
            value: Some(value),
        }
    }

    /// Let the native edit happen and forward its value unchanged.
    pub(crate) fn forward(value: String) -> Self {
        Self {
            consumed: false,
            value: Some(value),
        }
    }
}
