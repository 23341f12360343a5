//! Prolog path file validator.

use std::path::Path;

use anyhow::{Context, Result};
use facts_engine::pipeline::{EDB_PATH_FILE, OUTPUT_PATH_FILE};
use facts_engine::FactsConfig;

use crate::report::{ConformanceReport, TestResult};

/// Checks that `dir` holds the two path files and that `edb.txt` names the
/// configured clause file.
///
/// # Errors
///
/// Returns an error if a path file exists but cannot be read.
pub fn validate(dir: &Path, config: &FactsConfig) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let expected = [
        (EDB_PATH_FILE, config.clause_path()),
        (OUTPUT_PATH_FILE, config.output.dir.join(OUTPUT_PATH_FILE)),
    ];

    for (name, target) in expected {
        let validator = format!("output/prolog/{name}");
        let path = dir.join(name);
        if !path.is_file() {
            report.push(TestResult::fail(
                validator,
                format!("{} not found", path.display()),
            ));
            continue;
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let want = format!("'{}'.", target.display());
        if content.trim_end() == want {
            report.push(TestResult::pass(validator, want));
        } else {
            report.push(TestResult::fail_with_details(
                validator,
                format!("{} does not name {}", path.display(), target.display()),
                vec![format!("expected {want}"), format!("found {}", content.trim_end())],
            ));
        }
    }
    Ok(report)
}
