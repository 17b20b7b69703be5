use std::fmt::Write as _;
use std::fs;
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use super::die;
use tamil_core::translit::{default_toml, parse_rules_toml, RuleTable};

/// The table in `path`, or the built-in one.
pub fn load_table(path: Option<&str>) -> Arc<RuleTable> {
    let Some(path) = path else {
        return RuleTable::shared();
    };
    let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
    Arc::new(die!(parse_rules_toml(&content), "Error in {path}: {}"))
}

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let table = load_table(Some(file));
    println!("OK: {} rules", table.len());
}

pub fn table_list(file: Option<&str>) {
    let table = load_table(file);
    print!("{}", format_table(&table));
}

/// One line per rule: priority, pattern, replacement and its code points,
/// with the replacement column padded to its display width.
pub fn format_table(table: &RuleTable) -> String {
    let index_width = table.len().to_string().len();
    let pattern_width = table
        .rules()
        .iter()
        .map(|r| r.pattern.len())
        .max()
        .unwrap_or(0);
    let replacement_width = table
        .rules()
        .iter()
        .map(|r| r.replacement.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, rule) in table.rules().iter().enumerate() {
        let pad = replacement_width - rule.replacement.width();
        let code_points: Vec<String> = rule
            .replacement
            .chars()
            .map(|c| format!("U+{:04X}", c as u32))
            .collect();
        let _ = writeln!(
            out,
            "{i:>index_width$}  {:<pattern_width$}  {}{:pad$}  {}",
            rule.pattern,
            rule.replacement,
            "",
            code_points.join(" "),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_small_table() {
        let table = RuleTable::from_pairs([("ka", "க"), ("k", "க்")]).unwrap();
        let text = format_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0  ka  க"));
        assert!(lines[0].ends_with("U+0B95"));
        assert!(lines[1].starts_with("1  k   க்"));
        assert!(lines[1].ends_with("U+0B95 U+0BCD"));
    }

    #[test]
    fn format_default_table_has_one_line_per_rule() {
        let table = RuleTable::global();
        let text = format_table(table);
        assert_eq!(text.lines().count(), table.len());
        assert!(text.lines().next().unwrap().contains("shri"));
    }

    #[test]
    fn load_default_table() {
        assert_eq!(load_table(None).len(), RuleTable::global().len());
    }
}
