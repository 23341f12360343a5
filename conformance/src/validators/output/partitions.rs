//! Partition file validator.
//!
//! For each of the five partition files:
//! - the file exists
//! - no line is blank
//! - no line carries a residual `aml:remove` / `opcua:remove` marker
//! - Document lines are bare tokens; every other partition holds
//!   `owner:value` pairs

use std::path::Path;

use anyhow::{Context, Result};
use facts_engine::{FactsConfig, PartitionKind};

use crate::report::{ConformanceReport, TestResult};

/// Marker fragments that must never reach an output file.
pub const RESIDUAL_MARKERS: [&str; 2] = ["aml:remove", "opcua:remove"];

/// Validates the partition files named by `config`.
///
/// # Errors
///
/// Returns an error if a partition file exists but cannot be read.
pub fn validate(config: &FactsConfig) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for kind in PartitionKind::ALL {
        validate_file(kind, &config.partition_path(kind), &mut report)?;
    }
    Ok(report)
}

fn validate_file(kind: PartitionKind, path: &Path, report: &mut ConformanceReport) -> Result<()> {
    let validator = format!("output/partitions/{kind}");
    if !path.is_file() {
        report.push(TestResult::fail(
            validator,
            format!("{} not found", path.display()),
        ));
        return Ok(());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut issues = Vec::new();
    let mut entries = 0usize;
    for (number, line) in content.lines().enumerate() {
        let number = number + 1;
        if line.trim().is_empty() {
            issues.push(format!("line {number}: blank line"));
            continue;
        }
        entries += 1;
        if RESIDUAL_MARKERS.iter().any(|m| line.contains(m)) {
            issues.push(format!("line {number}: residual marker in `{line}`"));
        }
        let is_pair = line.contains(':');
        match kind {
            PartitionKind::Document if is_pair => {
                issues.push(format!("line {number}: expected a bare token, got `{line}`"));
            }
            PartitionKind::Document => {}
            _ if !is_pair => {
                issues.push(format!("line {number}: expected owner:value, got `{line}`"));
            }
            _ => {}
        }
    }

    if !issues.is_empty() {
        report.push(TestResult::fail_with_details(
            validator,
            format!("{} has {} issue(s)", path.display(), issues.len()),
            issues,
        ));
    } else if entries == 0 {
        report.push(TestResult::warn(
            validator,
            format!("{} is empty", path.display()),
        ));
    } else {
        report.push(TestResult::pass(
            validator,
            format!("{entries} entries"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use std::fs;

    fn write_all(config: &FactsConfig, lines: &str) {
        fs::create_dir_all(&config.output.dir).unwrap();
        for kind in PartitionKind::ALL {
            let content = if kind == PartitionKind::Document {
                "tank1\n".to_string()
            } else {
                lines.to_string()
            };
            fs::write(config.partition_path(kind), content).unwrap();
        }
    }

    fn config(dir: &Path) -> FactsConfig {
        let mut config = FactsConfig::default();
        config.output.dir = dir.to_path_buf();
        config
    }

    #[test]
    fn clean_files_pass() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_all(&config, "tank1:level\nlevel:high\n");

        let report = validate(&config).unwrap();
        assert_eq!(report.count(Severity::Pass), 5);
    }

    #[test]
    fn residual_marker_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_all(&config, "level:aml:removehigh\n");

        let report = validate(&config).unwrap();
        assert_eq!(report.failure_count(), 4);
        assert!(report.results[1].details[0].contains("residual marker"));
    }

    #[test]
    fn blank_lines_and_missing_files_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_all(&config, "tank1:level\n\nlevel:high\n");
        fs::remove_file(config.partition_path(PartitionKind::Identifier)).unwrap();

        let report = validate(&config).unwrap();
        assert_eq!(report.failure_count(), 4);
        assert!(report
            .results
            .iter()
            .any(|r| r.message.contains("not found")));
    }

    #[test]
    fn empty_partition_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_all(&config, "");

        let report = validate(&config).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Warning), 4);
    }
}
