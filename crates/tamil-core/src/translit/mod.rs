//! Latin-to-Tamil phonetic transliteration.
//!
//! An ordered rule table is scanned left to right; at every position the
//! first rule (in table order) whose pattern matches wins. The output is
//! always re-derived from the whole input, so callers never carry
//! incremental state.

mod config;
mod rules;
mod segment;
mod table;


pub use config::{parse_rules_toml, RuleConfigError, MAX_PATTERN_LEN};
pub use rules::{Rule, RuleTable};
pub use segment::{Segment, Segments};

/// Transliterate `input` with the process-wide rule table.
pub fn transliterate(input: &str) -> String {
    RuleTable::global().transliterate(input)
}

/// Returns the embedded default rule table TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
