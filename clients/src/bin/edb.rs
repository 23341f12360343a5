//! `facts-edb`: Converts every source document into Datalog ground clauses.
//!
//! **Output:** `<out>/<clause_file>` (default `data/ontology/test/edb.pl`),
//! one `clause1(predicate(subject, object), true).` line per statement.
//!
//! **Usage:**
//! ```text
//! facts-edb [--config <file>] [--input <dir>] [--out <dir>]
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
use facts_engine::pipeline::generate_extensional_db;
use facts_graph::discover;

/// Write the Datalog clause file.
#[derive(Parser)]
#[command(name = "facts-edb", about = "Convert RDF documents to Datalog clauses")]
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
    let out = config.clause_path();
    let clauses = generate_extensional_db(&files, &out)
        .with_context(|| format!("Failed to generate {}", out.display()))?;

    println!("{} documents, {} clauses", files.len(), clauses);
    println!("  Written: {}", out.display());
    Ok(())
}
