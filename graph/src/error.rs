//! Error types for loading and inspecting RDF documents.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Position of a term inside a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The statement subject.
    Subject,
    /// The statement predicate.
    Predicate,
    /// The statement object.
    Object,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Subject => "subject",
            Position::Predicate => "predicate",
            Position::Object => "object",
        })
    }
}

/// Errors raised while reading or querying a document graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A Turtle document could not be parsed.
    #[error("failed to parse Turtle in {origin}: {message}")]
    Parse {
        /// File path or other label of the document.
        origin: String,
        /// Parser message.
        message: String,
    },

    /// A term that must carry a namespace-qualified local name does not.
    #[error("{position} `{term}` has no local name in statement {statement}")]
    NoLocalName {
        /// Where the term sits in the statement.
        position: Position,
        /// Textual form of the offending term.
        term: String,
        /// The whole statement, N-Triples style.
        statement: String,
    },

    /// The corpus location is missing or not a directory.
    #[error("input path {0} is not a directory")]
    NotADirectory(PathBuf),

    /// Walking the corpus directory failed.
    #[error("failed to list {path}: {message}")]
    Walk {
        /// Directory being listed.
        path: PathBuf,
        /// Walker message.
        message: String,
    },
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
