//! Clause file validator.
//!
//! Every non-blank line must be a ground clause of the form
//! `clause1(<name>(<term>,<term>),true).` where a term is either a bare
//! identifier or a single-quoted literal.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "output/clauses";

/// Shape of a clause line.
pub const CLAUSE_PATTERN: &str = r"^clause1\([^\s(),']+\([^\s(),']+,(?:'.*'|[^\s(),']+)\),true\)\.$";

/// Validates the clause file at `path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn validate(path: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !path.is_file() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("clause file {} not found", path.display()),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let pattern = Regex::new(CLAUSE_PATTERN).context("Invalid clause pattern")?;

    let mut clauses = 0usize;
    let mut malformed = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        clauses += 1;
        if !pattern.is_match(line) {
            malformed.push(format!("line {}: {line}", number + 1));
        }
    }

    if !malformed.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} of {clauses} clause lines are malformed", malformed.len()),
            malformed,
        ));
    } else if clauses == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("{} contains no clauses", path.display()),
        ));
    } else {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{clauses} clause lines are well-formed"),
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn check(content: &str) -> ConformanceReport {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edb.pl");
        std::fs::write(&path, content).unwrap();
        validate(&path).unwrap()
    }

    #[test]
    fn accepts_generated_shapes() {
        let report = check(
            "clause1(type(pump11,pump),true).\n\
             clause1(identifier(attr71,'A-7, rev (b)'),true).\n\
             clause1(feeds(tank11,b0),true).\n",
        );
        assert!(report.all_passed());
        assert_eq!(report.results[0].severity, Severity::Pass);
    }

    #[test]
    fn rejects_other_lines() {
        let report = check("clause1(type(pump11,pump),true).\nfoo(bar).\n");
        let result = &report.results[0];
        assert!(result.is_failure());
        assert_eq!(result.details, ["line 2: foo(bar)."]);
    }

    #[test]
    fn empty_file_warns() {
        let report = check("");
        assert_eq!(report.results[0].severity, Severity::Warning);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = validate(&dir.path().join("edb.pl")).unwrap();
        assert!(!report.all_passed());
    }
}
