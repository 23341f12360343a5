//! `facts-psl`: Classifies every source document into the five PSL predicate
//! partitions.
//!
//! **Outputs** (in `<out>`, names configurable):
//! - `fromDocument.txt`
//! - `Attribute.txt`
//! - `InternalElements.txt`
//! - `hasRefsemantic.txt`
//! - `hasID.txt`
//!
//! **Usage:**
//! ```text
//! facts-psl [--config <file>] [--input <dir>] [--out <dir>] [--aml-marker <text>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use facts_clients::{init_logging, ConfigArgs};
use facts_engine::pipeline::generate_psl_predicates;
use facts_graph::discover;

/// Write the PSL partition files.
#[derive(Parser)]
#[command(name = "facts-psl", about = "Classify RDF documents into PSL predicate files")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.config.resolve()?;

    let files = discover(&config.input.dir, &config.input.extensions)
        .with_context(|| format!("Failed to list {}", config.input.dir.display()))?;
    let report = generate_psl_predicates(&files, &config)
        .context("Failed to generate partition files")?;

    println!("{} documents classified", report.documents);
    for (kind, count) in &report.partition_entries {
        println!("  {kind}: {count} entries");
    }
    for path in &report.files {
        println!("  Written: {}", path.display());
    }
    Ok(())
}
