// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Tamil phonetic input engine.
//!
//! Re-exports the rule table (`tamil_core`) and the per-field input session
//! (`tamil_session`), and exposes both to a hosting UI layer over a C ABI.

pub mod ffi;
pub mod trace_init;

pub use ffi::*;

pub use tamil_core::translit::{
    default_toml, parse_rules_toml, transliterate, Rule, RuleConfigError, RuleTable, Segment,
};
pub use tamil_core::unicode;
pub use tamil_session::{
    FieldSession, FormError, FormState, InputMode, Key, KeyEvent, KeyResponse, ModeSwitch,
    Modifiers, NamedKey,
};
