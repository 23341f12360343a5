//! Engine error types.

use std::path::PathBuf;

use facts_graph::GraphError;
use thiserror::Error;

/// Errors raised while generating facts. None of them is recovered locally:
/// each aborts the document (or run) it occurred in.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Loading or inspecting the graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A rule needed a literal object and found something else.
    #[error("expected a literal object for `{predicate}` in statement {statement}")]
    ExpectedLiteral {
        /// Predicate local name of the rule that fired.
        predicate: String,
        /// The offending statement.
        statement: String,
    },

    /// A rule needed a resource object and found something else.
    #[error("expected a resource object for `{predicate}` in statement {statement}")]
    ExpectedResource {
        /// Predicate local name of the rule that fired.
        predicate: String,
        /// The offending statement.
        statement: String,
    },

    /// A document failed; wraps the cause with the document's position.
    #[error("document {index} ({path}) failed: {source}")]
    Document {
        /// 1-based document index.
        index: usize,
        /// Source file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<EngineError>,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is unreadable or invalid.
    #[error("invalid configuration {path}: {message}")]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// Reader or parser message.
        message: String,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
