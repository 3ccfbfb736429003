//! # Reporter Module
//!
//! Renders session results for the console.
//!
//! The line formats are a contract for anything parsing the output:
//! - a match: `d077f244def8a70... : cat (0.42s)`
//! - after all workers finish, `--UNSOLVED HASHES--` and
//!   `--UNKNOWN HASH TYPES--` sections, each preceded by a blank line and
//!   only present when non-empty.

use crate::core::cracker::MatchResult;
use crate::core::pipeline::RunReport;
use serde_json::json;
use std::io::{self, Write};

/// Header of the unsolved section
pub const UNSOLVED_HEADER: &str = "--UNSOLVED HASHES--";

/// Header of the unknown-type section
pub const UNKNOWN_HEADER: &str = "--UNKNOWN HASH TYPES--";

/// Format a match the moment it is found
pub fn format_match(found: &MatchResult) -> String {
    format!(
        "{} : {} ({:.2}s)",
        found.short_hash(),
        found.word,
        found.elapsed_secs
    )
}

/// Write the unsolved and unknown-type sections
pub fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    write_section(out, UNSOLVED_HEADER, &report.unsolved)?;
    write_section(out, UNKNOWN_HEADER, &report.unknown)
}

/// Write one `ERROR:` line per failed worker
pub fn write_failures<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    for failure in &report.failures {
        writeln!(out, "ERROR: {failure}")?;
    }
    Ok(())
}

fn write_section<W: Write>(out: &mut W, header: &str, hashes: &[String]) -> io::Result<()> {
    if hashes.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{header}")?;
    for hash in hashes {
        writeln!(out, "{hash}")?;
    }
    Ok(())
}

/// The whole report as one JSON document
pub fn to_json(report: &RunReport) -> serde_json::Value {
    json!({
        "started_at": report.started_at,
        "duration_ms": report.duration_ms,
        "total_hashes": report.total_hashes,
        "solved": report.solved(),
        "matches": report.matches,
        "unsolved": report.unsolved,
        "unknown": report.unknown,
        "duplicates": report.duplicates,
        "failures": report.failures.iter().map(|f| {
            json!({
                "algorithm": f.algorithm(),
                "message": f.to_string(),
            })
        }).collect::<Vec<_>>(),
        "words_tried": report.words_tried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::HashAlgorithmKind;
    use crate::error::WorkerError;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn report(unsolved: &[&str], unknown: &[&str]) -> RunReport {
        RunReport {
            started_at: Utc::now(),
            matches: Vec::new(),
            unsolved: unsolved.iter().map(|s| s.to_string()).collect(),
            unknown: unknown.iter().map(|s| s.to_string()).collect(),
            duplicates: Vec::new(),
            failures: Vec::new(),
            words_tried: BTreeMap::new(),
            total_hashes: unsolved.len() + unknown.len(),
            duration_ms: 12,
        }
    }

    fn render(report: &RunReport) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn match_line_format() {
        let found = MatchResult::new(
            HashAlgorithmKind::Md5,
            "d077f244def8a70e5ea758bd8352fcd8".to_string(),
            "cat".to_string(),
            Duration::from_millis(1500),
        );
        assert_eq!(format_match(&found), "d077f244def8a70... : cat (1.50s)");
    }

    #[test]
    fn match_line_keeps_leading_whitespace_of_word() {
        let found = MatchResult::new(
            HashAlgorithmKind::Md5,
            "cff9da835667748807c68401a9cce150".to_string(),
            "  pass".to_string(),
            Duration::ZERO,
        );
        assert_eq!(format_match(&found), "cff9da835667748... :   pass (0.00s)");
    }

    #[test]
    fn both_sections_in_order() {
        let output = render(&report(&["aaaa", "bbbb"], &["xyz123"]));
        assert_eq!(
            output,
            "\n--UNSOLVED HASHES--\naaaa\nbbbb\n\n--UNKNOWN HASH TYPES--\nxyz123\n"
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        assert_eq!(render(&report(&[], &[])), "");
        assert_eq!(render(&report(&[], &["q"])), "\n--UNKNOWN HASH TYPES--\nq\n");
    }

    #[test]
    fn failures_are_one_line_each() {
        let mut report = report(&[], &[]);
        report.failures.push(WorkerError::Panicked {
            algorithm: HashAlgorithmKind::Sha256,
            message: "boom".to_string(),
        });

        let mut out = Vec::new();
        write_failures(&mut out, &report).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ERROR: sha256 worker panicked: boom\n");
    }

    #[test]
    fn json_report_lists_everything() {
        let mut report = report(&["aaaa"], &["xyz"]);
        report.words_tried.insert(HashAlgorithmKind::Md5, 3);

        let value = to_json(&report);

        assert_eq!(value["unsolved"][0], "aaaa");
        assert_eq!(value["unknown"][0], "xyz");
        assert_eq!(value["words_tried"]["md5"], 3);
        assert_eq!(value["solved"], 0);
    }
}
