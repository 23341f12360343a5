//! Conformance checks for the fact generator.
//!
//! Two groups of checks:
//!
//! | Group | Checks |
//! |-------|--------|
//! | Engine | built-in AML, OPC-UA and mixed fixtures classify to the expected partitions |
//! | Output | clause file shape, partition file hygiene, Prolog path files |
//!
//! # Entry Point
//!
//! ```no_run
//! use facts_conformance::run_all;
//! use facts_engine::FactsConfig;
//!
//! let config = FactsConfig::default();
//! let report = run_all(&config)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

use facts_engine::FactsConfig;
use tracing::debug;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs every check against the output directory described by `config`.
///
/// Order:
/// 1. Engine fixtures
/// 2. Clause file
/// 3. Partition files
/// 4. Prolog path files, when `output.prolog_paths_dir` is set
///
/// # Errors
///
/// Returns an error only if an existing output file cannot be read.
pub fn run_all(config: &FactsConfig) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::engine::fixtures::validate());
    report.extend(validators::output::clauses::validate(&config.clause_path())?);
    report.extend(validators::output::partitions::validate(config)?);
    if let Some(dir) = &config.output.prolog_paths_dir {
        report.extend(validators::output::prolog::validate(dir, config)?);
    }

    debug!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}
