//! Check results and their aggregation.

use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious but not invalid output.
    Warning,
    /// The output is invalid.
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// One check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Check identifier, e.g. `output/clauses`.
    pub validator: String,
    /// One-line outcome.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending lines or files, if any.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// A failing result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// A failing result listing what went wrong.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// A warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Returns true for failures.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All results of a conformance run, in check order.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Individual results.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if nothing failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
