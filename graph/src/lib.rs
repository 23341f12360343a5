//! RDF statement model for the fact generator.
//!
//! The `facts-graph` crate owns everything on the input side of the pipeline:
//! the [`Statement`] model, namespace / local-name splitting, an in-memory
//! [`Graph`] implementing the [`TripleSource`] contract, Turtle loading, and
//! discovery of source files in a corpus directory.
//!
//! # Entry Point
//!
//! ```
//! use facts_graph::{Graph, TripleSource};
//!
//! let graph = Graph::from_turtle_str(
//!     "inline",
//!     r#"
//!     @prefix ex: <http://example.org/plant#> .
//!     ex:Tank1 ex:hasRefSemantic ex:Level .
//!     ex:Level ex:value "high" .
//!     "#,
//! )?;
//! assert_eq!(graph.statements().count(), 2);
//! # Ok::<(), facts_graph::GraphError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod discover;
pub mod error;
pub mod model;
pub mod store;
pub mod turtle;

pub use discover::discover;
pub use error::{GraphError, Position, Result};
pub use model::{Iri, Literal, Node, Statement};
pub use store::{Graph, TripleSource};
