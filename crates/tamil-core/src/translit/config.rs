use serde::Deserialize;

use super::rules::{Rule, RuleTable};
use crate::unicode::is_tamil;

/// Longest pattern a rule may carry.
pub const MAX_PATTERN_LEN: usize = 4;

#[derive(Deserialize)]
struct RuleConfig {
    rules: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rules table is empty")]
    Empty,
    #[error("empty pattern at rule #{0}")]
    EmptyPattern(usize),
    #[error("pattern {0:?} is longer than {max} characters", max = MAX_PATTERN_LEN)]
    PatternTooLong(String),
    #[error("pattern {0:?} must be lowercase printable ASCII")]
    InvalidPattern(String),
    #[error("empty replacement for pattern: {0}")]
    EmptyReplacement(String),
    #[error("replacement {replacement:?} for pattern {pattern:?} is not Tamil script")]
    NonTamilReplacement { pattern: String, replacement: String },
    #[error("duplicate pattern {pattern:?} at rule #{index} (first defined at #{first})")]
    Duplicate {
        pattern: String,
        index: usize,
        first: usize,
    },
    #[error(
        "rule #{longer_index} {longer:?} is unreachable: its prefix {shorter:?} comes first at #{shorter_index}"
    )]
    Shadowed {
        longer: String,
        longer_index: usize,
        shorter: String,
        shorter_index: usize,
    },
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text (`rules = [["pattern", "replacement"], ...]`) into a
/// validated, order-preserving [`RuleTable`].
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleTable, RuleConfigError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;
    RuleTable::from_pairs(config.rules)
}

/// Check every rule on its own, then the ordering of the whole sequence.
pub(super) fn validate(rules: &[Rule]) -> Result<(), RuleConfigError> {
    if rules.is_empty() {
        return Err(RuleConfigError::Empty);
    }

    for (index, rule) in rules.iter().enumerate() {
        validate_rule(index, rule)?;
    }

    // Every earlier pattern against every later one.
    for (j, later) in rules.iter().enumerate() {
        for (i, earlier) in rules[..j].iter().enumerate() {
            if later.pattern == earlier.pattern {
                return Err(RuleConfigError::Duplicate {
                    pattern: later.pattern.clone(),
                    index: j,
                    first: i,
                });
            }
            if later.pattern.starts_with(&earlier.pattern) {
                return Err(RuleConfigError::Shadowed {
                    longer: later.pattern.clone(),
                    longer_index: j,
                    shorter: earlier.pattern.clone(),
                    shorter_index: i,
                });
            }
        }
    }

    Ok(())
}

fn validate_rule(index: usize, rule: &Rule) -> Result<(), RuleConfigError> {
    if rule.pattern.is_empty() {
        return Err(RuleConfigError::EmptyPattern(index));
    }
    if !rule
        .pattern
        .chars()
        .all(|c| c.is_ascii_graphic() && !c.is_ascii_uppercase())
    {
        return Err(RuleConfigError::InvalidPattern(rule.pattern.clone()));
    }
    if rule.pattern.len() > MAX_PATTERN_LEN {
        return Err(RuleConfigError::PatternTooLong(rule.pattern.clone()));
    }
    if rule.replacement.is_empty() {
        return Err(RuleConfigError::EmptyReplacement(rule.pattern.clone()));
    }
    if !is_tamil(&rule.replacement) {
        return Err(RuleConfigError::NonTamilReplacement {
            pattern: rule.pattern.clone(),
            replacement: rule.replacement.clone(),
        });
    }
    Ok(())
}
