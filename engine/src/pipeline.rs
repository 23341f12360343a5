//! Corpus-level generation.
//!
//! Documents are processed one at a time, in the order given, with 1-based
//! indices. A failing document aborts the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use facts_graph::{discover, Graph};
use tracing::info;

use crate::classify::Classifier;
use crate::config::FactsConfig;
use crate::datalog::document_clauses;
use crate::error::{EngineError, Result};
use crate::partition::PartitionKind;
use crate::writer::{write_text, PartitionFiles};

/// Prolog path file naming the clause file.
pub const EDB_PATH_FILE: &str = "edb.txt";
/// Prolog path file naming the evaluator's output file.
pub const OUTPUT_PATH_FILE: &str = "output.txt";

/// Summary of a generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Documents processed.
    pub documents: usize,
    /// Clause lines written.
    pub clauses: usize,
    /// Entries written per partition, summed over documents.
    pub partition_entries: BTreeMap<PartitionKind, usize>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

impl RunReport {
    /// Total partition entries over all partitions.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.partition_entries.values().sum()
    }

    fn merge(&mut self, other: RunReport) {
        self.documents = self.documents.max(other.documents);
        self.clauses += other.clauses;
        for (kind, count) in other.partition_entries {
            *self.partition_entries.entry(kind).or_default() += count;
        }
        self.files.extend(other.files);
    }
}

fn in_document(index: usize, path: &Path) -> impl FnOnce(EngineError) -> EngineError + '_ {
    move |source| EngineError::Document {
        index,
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Writes the clause file for `files` to `out`. Returns the clause count.
///
/// The file is written once, after every document has been converted.
///
/// # Errors
///
/// Returns [`EngineError::Document`] for a document that fails to load or
/// convert, or [`EngineError::Write`] if `out` cannot be written.
pub fn generate_extensional_db(files: &[PathBuf], out: &Path) -> Result<usize> {
    let mut content = String::new();
    let mut count = 0;
    for (index, path) in files.iter().enumerate().map(|(i, p)| (i + 1, p)) {
        let clauses = Graph::load(path)
            .map_err(EngineError::from)
            .and_then(|graph| document_clauses(&graph, index))
            .map_err(in_document(index, path))?;
        info!(
            document = index,
            path = %path.display(),
            clauses = clauses.len(),
            "converted to clauses"
        );
        for line in clauses {
            content.push_str(&line);
            content.push('\n');
            count += 1;
        }
    }
    write_text(out, &content)?;
    info!(path = %out.display(), clauses = count, "wrote clause file");
    Ok(count)
}

/// Classifies every document of `files` and appends its partitions to the
/// partition files named by `config`.
///
/// # Errors
///
/// Returns [`EngineError::Document`] for a document that fails to load or
/// classify, or [`EngineError::Write`] if a partition file cannot be written.
/// Partitions of the failing document are never written.
pub fn generate_psl_predicates(files: &[PathBuf], config: &FactsConfig) -> Result<RunReport> {
    let classifier = Classifier::new(config.schema.aml_namespace_marker.as_str());
    let mut sinks = PartitionFiles::create(config)?;
    let mut report = RunReport::default();

    for (index, path) in files.iter().enumerate().map(|(i, p)| (i + 1, p)) {
        let partitions = Graph::load(path)
            .map_err(EngineError::from)
            .and_then(|graph| classifier.classify(&graph))
            .map_err(in_document(index, path))?;
        sinks.append(&partitions)?;

        for kind in PartitionKind::ALL {
            *report.partition_entries.entry(kind).or_default() += partitions.get(kind).len();
        }
        report.documents += 1;
        info!(document = index, path = %path.display(), "classified");
    }

    report.files = sinks.finish()?;
    info!(
        documents = report.documents,
        entries = report.total_entries(),
        "wrote partition files"
    );
    Ok(report)
}

/// Writes the Prolog path files into `dir`: `edb.txt` holds the quoted path of
/// the clause file, `output.txt` the quoted path of the evaluator's output.
///
/// # Errors
///
/// Returns [`EngineError::Write`] if either file cannot be written.
pub fn write_prolog_paths(
    dir: &Path,
    output_dir: &Path,
    clause_file: &str,
) -> Result<Vec<PathBuf>> {
    let entries = [
        (EDB_PATH_FILE, output_dir.join(clause_file)),
        (OUTPUT_PATH_FILE, output_dir.join(OUTPUT_PATH_FILE)),
    ];
    let mut written = Vec::with_capacity(entries.len());
    for (name, target) in entries {
        let path = dir.join(name);
        write_text(&path, &format!("'{}'.\n", target.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Runs the whole pipeline for `config`: discovery, clause file, partition
/// files, and the Prolog path files when configured.
///
/// # Errors
///
/// Returns the first discovery, document or write failure.
pub fn build(config: &FactsConfig) -> Result<RunReport> {
    let files = discover(&config.input.dir, &config.input.extensions)?;
    info!(dir = %config.input.dir.display(), documents = files.len(), "discovered documents");

    let mut report = RunReport::default();
    let clause_path = config.clause_path();
    report.clauses = generate_extensional_db(&files, &clause_path)?;
    report.files.push(clause_path);

    report.merge(generate_psl_predicates(&files, config)?);

    if let Some(dir) = &config.output.prolog_paths_dir {
        report
            .files
            .extend(write_prolog_paths(dir, &config.output.dir, &config.output.clause_file)?);
    }
    Ok(report)
}
