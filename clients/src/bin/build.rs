//! `facts-build`: Runs the whole pipeline: clause file, partition files, and
//! the Prolog path files.
//!
//! **Usage:**
//! ```text
//! facts-build [--config <file>] [--input <dir>] [--out <dir>] [--prolog-paths <dir>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use facts_clients::{init_logging, ConfigArgs};
use facts_engine::pipeline::build;

/// Generate every output from the source corpus.
#[derive(Parser)]
#[command(name = "facts-build", about = "Generate Datalog and PSL facts from RDF documents")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Directory for `edb.txt` / `output.txt` (overrides the configuration).
    #[arg(long)]
    prolog_paths: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let mut config = args.config.resolve()?;
    if args.prolog_paths.is_some() {
        config.output.prolog_paths_dir = args.prolog_paths;
    }

    let report = build(&config).context("Build failed")?;

    println!(
        "{} documents: {} clauses, {} partition entries",
        report.documents,
        report.clauses,
        report.total_entries()
    );
    for path in &report.files {
        println!("  Written: {}", path.display());
    }
    println!("Build complete.");
    Ok(())
}
