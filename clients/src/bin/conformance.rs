//! `facts-conformance`: Validates a generated output directory.
//!
//! Runs the engine fixture checks, then checks the clause file, the five
//! partition files and, when configured, the Prolog path files.
//!
//! **Usage:**
//! ```text
//! facts-conformance [--config <file>] [--out <dir>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use facts_clients::{init_logging, ConfigArgs};
use facts_conformance::{run_all, Severity};

/// Run the conformance checks.
#[derive(Parser)]
#[command(
    name = "facts-conformance",
    about = "Validate generated clause and partition files"
)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.config.resolve()?;

    let report = run_all(&config)?;

    println!("Fact Output Conformance Report");
    println!("==============================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
