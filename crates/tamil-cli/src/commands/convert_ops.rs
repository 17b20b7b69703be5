use std::fmt::Write as _;
use std::io::{self, BufRead};

use serde::Serialize;

use super::die;
use super::table_ops::load_table;
use tamil_core::translit::RuleTable;

#[derive(Debug, Serialize)]
pub struct SegmentReport<'a> {
    pub source: &'a str,
    pub output: &'a str,
    /// Matched rule index, absent for copied-through characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ConvertReport<'a> {
    pub input: &'a str,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentReport<'a>>>,
}

pub fn convert_report<'a>(table: &'a RuleTable, input: &'a str, explain: bool) -> ConvertReport<'a> {
    let segments = explain.then(|| {
        table
            .segments(input)
            .map(|s| SegmentReport {
                source: s.source,
                output: s.output,
                rule: s.rule,
            })
            .collect()
    });
    ConvertReport {
        input,
        output: table.transliterate(input),
        segments,
    }
}

/// Human-readable scan trace: one line per segment.
pub fn format_explain(table: &RuleTable, report: &ConvertReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} → {}", report.input, report.output);
    for seg in report.segments.iter().flatten() {
        match seg.rule.and_then(|i| table.get(i).map(|r| (i, r))) {
            Some((i, rule)) => {
                let _ = writeln!(
                    out,
                    "  {:<4} → {}  [#{i} {}]",
                    seg.source, seg.output, rule.pattern
                );
            }
            None => {
                let _ = writeln!(out, "  {:<4} → {}  (unmapped)", seg.source, seg.output);
            }
        }
    }
    out
}

pub fn convert_cmd(texts: &[String], table_file: Option<&str>, explain: bool, json: bool) {
    let table = load_table(table_file);
    let emit = |line: &str| {
        let report = convert_report(&table, line, explain);
        if json {
            println!(
                "{}",
                die!(serde_json::to_string(&report), "Error serializing result: {}")
            );
        } else if explain {
            print!("{}", format_explain(&table, &report));
        } else {
            println!("{}", report.output);
        }
    };

    if !texts.is_empty() {
        for text in texts {
            emit(text);
        }
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        emit(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_explain() {
        let table = RuleTable::global();
        let report = convert_report(table, "vanakkam", false);
        assert_eq!(report.output, "வநக்கம்");
        assert!(report.segments.is_none());
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"input":"vanakkam","output":"வநக்கம்"}"#
        );
    }

    #[test]
    fn report_with_segments() {
        let table = RuleTable::global();
        let report = convert_report(table, "ma!", true);
        let segments = report.segments.as_ref().unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].source, "ma");
        assert_eq!(segments[0].output, "ம");
        assert_eq!(segments[0].rule, table.find("ma").map(|(i, _)| i));
        assert_eq!(segments[1].source, "!");
        assert!(segments[1].rule.is_none());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.ends_with(r#"{"source":"!","output":"!"}]}"#));
    }

    #[test]
    fn explain_text() {
        let table = RuleTable::global();
        let report = convert_report(table, "Ka1", true);
        let text = format_explain(table, &report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ka1 → க1");
        assert!(lines[1].starts_with("  Ka   → க  [#"));
        assert!(lines[1].ends_with(" ka]"));
        assert_eq!(lines[2], "  1    → 1  (unmapped)");
    }
}
