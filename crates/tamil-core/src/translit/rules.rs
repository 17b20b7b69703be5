use std::sync::{Arc, OnceLock};

use tracing::trace;

use super::config::{parse_rules_toml, validate, RuleConfigError};
use super::segment::Segments;
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Arc<RuleTable>> = OnceLock::new();

/// One Latin pattern and the Tamil text it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// ASCII case-insensitive prefix test against the unscanned input.
    ///
    /// Patterns are ASCII, so a successful match always ends on a char
    /// boundary of `rest`.
    fn matches(&self, rest: &str) -> bool {
        let pattern = self.pattern.as_bytes();
        rest.len() >= pattern.len()
            && rest.as_bytes()[..pattern.len()].eq_ignore_ascii_case(pattern)
    }
}

/// Ordered rule sequence. Position is priority: the first matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from `(pattern, replacement)` pairs, keeping their order.
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, RuleConfigError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let rules: Vec<Rule> = pairs.into_iter().map(|(p, r)| Rule::new(p, r)).collect();
        validate(&rules)?;
        Ok(Self { rules })
    }

    /// Set a custom rule TOML before the first `global()` / `shared()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RuleConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RuleConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuleConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static RuleTable {
        Self::instance()
    }

    /// The global table as a shareable handle.
    pub fn shared() -> Arc<RuleTable> {
        Arc::clone(Self::instance())
    }

    fn instance() -> &'static Arc<RuleTable> {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Arc::new(parse_rules_toml(toml_str).expect("rule TOML must be valid"))
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Position and rule with exactly this pattern.
    pub fn find(&self, pattern: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern == pattern)
    }

    /// First rule, in table order, whose pattern is a prefix of `rest`.
    pub fn match_at(&self, rest: &str) -> Option<(usize, &Rule)> {
        let found = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(rest));
        if let Some((index, rule)) = found {
            trace!(index, pattern = %rule.pattern, "rule matched");
        }
        found
    }

    /// Walk `input` step by step, one segment per matched rule or
    /// passed-through character.
    pub fn segments<'a>(&'a self, input: &'a str) -> Segments<'a> {
        Segments::new(self, input)
    }

    /// Convert the whole of `input`. Unmatched characters are copied as-is,
    /// in their original case.
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 3);
        for segment in self.segments(input) {
            out.push_str(segment.output);
        }
        out
    }
}
