//! Replay key sequences against a headless field, printing the value the
//! user would see after every step.
//!
//! Tokens are DOM key names (`k`, `Backspace`, `ArrowLeft`, `Space`),
//! optionally prefixed with modifiers (`Ctrl+a`, `Shift+K`), or directives:
//! `@tamil`, `@english`, `@toggle`, `@clear` and `@change=<text>`.

use std::io::{self, Read};

use tamil_session::{FieldSession, InputMode, Key, KeyEvent, ModeSwitch, Modifiers};

use super::die;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("empty token")]
    Empty,
    #[error("unknown directive: {0}")]
    UnknownDirective(String),
    #[error("unknown modifier '{modifier}' in {token}")]
    UnknownModifier { modifier: String, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(KeyEvent),
    SetMode(InputMode),
    Toggle,
    /// The page clears the field (form reset).
    Clear,
    /// The page writes this value into the field.
    Change(String),
}

pub fn parse_token(token: &str) -> Result<Step, TokenError> {
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    if let Some(directive) = token.strip_prefix('@') {
        return match directive {
            "tamil" => Ok(Step::SetMode(InputMode::Tamil)),
            "english" => Ok(Step::SetMode(InputMode::English)),
            "toggle" => Ok(Step::Toggle),
            "clear" => Ok(Step::Clear),
            _ => match directive.strip_prefix("change=") {
                Some(text) => Ok(Step::Change(text.to_string())),
                None => Err(TokenError::UnknownDirective(token.to_string())),
            },
        };
    }

    let (chord, key) = match token.strip_suffix("++") {
        Some(chord) => (chord, "+"),
        None => match token.rsplit_once('+') {
            Some((chord, key)) if !chord.is_empty() && !key.is_empty() => (chord, key),
            _ => ("", token),
        },
    };

    let mut modifiers = Modifiers::NONE;
    for modifier in chord.split('+').filter(|m| !m.is_empty()) {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" => modifiers.meta = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            _ => {
                return Err(TokenError::UnknownModifier {
                    modifier: modifier.to_string(),
                    token: token.to_string(),
                })
            }
        }
    }

    let key = match key {
        "Space" => Key::Char(' '),
        other => Key::from_name(other),
    };
    Ok(Step::Key(KeyEvent::new(key, modifiers)))
}

/// A text input as the browser drives it: keys the session does not consume
/// are applied natively and followed by a change event.
pub struct SimField {
    pub mode: ModeSwitch,
    pub session: FieldSession,
    pub value: String,
}

/// What one step did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub consumed: bool,
    pub value: String,
    pub raw: String,
    pub mode: InputMode,
}

impl SimField {
    pub fn new(mode: InputMode) -> Self {
        let mode = ModeSwitch::new(mode);
        Self {
            session: FieldSession::new(mode.clone()),
            mode,
            value: String::new(),
        }
    }

    pub fn apply(&mut self, step: &Step) -> StepOutcome {
        let mut consumed = false;
        match step {
            Step::Key(event) => consumed = self.press(event),
            Step::SetMode(mode) => {
                self.mode.set(*mode);
            }
            Step::Toggle => {
                self.mode.toggle();
            }
            Step::Clear => {
                self.value.clear();
                self.session.sync_value(None);
            }
            Step::Change(text) => {
                self.value.clone_from(text);
                self.session.sync_value(Some(text));
                let resp = self.session.handle_change(text);
                if let Some(value) = resp.value {
                    self.value = value;
                }
            }
        }
        StepOutcome {
            consumed,
            value: self.value.clone(),
            raw: self.session.raw().to_string(),
            mode: self.mode.mode(),
        }
    }

    fn press(&mut self, event: &KeyEvent) -> bool {
        let resp = self.session.handle_key(event);
        if let Some(value) = resp.value {
            self.value = value;
        }
        if resp.consumed || event.modifiers.is_shortcut() {
            return resp.consumed;
        }
        let edited = match &event.key {
            Key::Char(c) => {
                self.value.push(*c);
                true
            }
            Key::Backspace => self.value.pop().is_some(),
            Key::Named(_) | Key::Other(_) => false,
        };
        if edited {
            let resp = self.session.handle_change(&self.value);
            if let Some(value) = resp.value {
                self.value = value;
            }
        }
        false
    }
}

pub fn simulate_cmd(tokens: &[String], english: bool) {
    let tokens: Vec<String> = if tokens.is_empty() {
        let mut input = String::new();
        die!(io::stdin().read_to_string(&mut input), "Error reading stdin: {}");
        input.split_whitespace().map(str::to_string).collect()
    } else {
        tokens.to_vec()
    };

    let steps: Vec<Step> = tokens
        .iter()
        .map(|t| die!(parse_token(t), "Error: {}"))
        .collect();

    let start = if english {
        InputMode::English
    } else {
        InputMode::Tamil
    };
    let mut field = SimField::new(start);
    let token_width = tokens.iter().map(String::len).max().unwrap_or(0);
    for (token, step) in tokens.iter().zip(&steps) {
        let outcome = field.apply(step);
        println!(
            "{:<token_width$}  {}  {:<5}  {}  raw={:?}",
            token,
            if outcome.consumed { '*' } else { ' ' },
            outcome.mode.label(),
            outcome.value,
            outcome.raw,
        );
    }
}
