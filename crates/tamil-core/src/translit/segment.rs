use super::rules::RuleTable;

/// One step of the left-to-right scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Input text consumed by this step, in its original case.
    pub source: &'a str,
    /// Text emitted for `source`.
    pub output: &'a str,
    /// Index of the matched rule; `None` when `source` was copied through.
    pub rule: Option<usize>,
}

impl Segment<'_> {
    pub fn is_passthrough(&self) -> bool {
        self.rule.is_none()
    }
}

/// Iterator over the scan steps of one input. Every step consumes at least
/// one character, so it yields at most `input.chars().count()` items.
pub struct Segments<'a> {
    table: &'a RuleTable,
    input: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    pub(super) fn new(table: &'a RuleTable, input: &'a str) -> Self {
        Self {
            table,
            input,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let input = self.input;
        let rest = &input[self.pos..];
        let first = rest.chars().next()?;

        let segment = match self.table.match_at(rest) {
            Some((index, rule)) => Segment {
                source: &rest[..rule.pattern.len()],
                output: &rule.replacement,
                rule: Some(index),
            },
            None => {
                let source = &rest[..first.len_utf8()];
                Segment {
                    source,
                    output: source,
                    rule: None,
                }
            }
        };
        self.pos += segment.source.len();
        Some(segment)
    }
}
