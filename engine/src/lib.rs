//! Fact generation from AML / OPC-UA RDF documents.
//!
//! Reads the ordered statements of each document and produces two outputs:
//!
//! - Datalog ground clauses, `clause1(predicate(subject, object), true).`, one
//!   per statement (see [`datalog`]).
//! - Five PSL predicate partitions, Document, Attribute, Identifier,
//!   ReferenceSemantic and InternalElement, filled by the [`classify`] engine
//!   from two independent rule sets ([`rules::aml`], [`rules::opcua`]).
//!
//! # Entry Point
//!
//! ```
//! use facts_engine::classify::Classifier;
//! use facts_graph::Graph;
//!
//! let graph = Graph::from_turtle_str(
//!     "inline",
//!     r#"
//!     @prefix ex: <http://example.org/plant#> .
//!     ex:Tank1 ex:hasRefSemantic ex:Level .
//!     ex:Level ex:value "high" .
//!     "#,
//! )?;
//! let partitions = Classifier::default().classify(&graph)?;
//! let lines: Vec<String> = partitions.reference_semantic.lines().collect();
//! assert_eq!(lines, ["level:high"]);
//! # Ok::<(), facts_engine::EngineError>(())
//! ```
//!
//! # Pipeline
//!
//! | Step | Function |
//! |------|----------|
//! | Clause file | [`pipeline::generate_extensional_db`] |
//! | Partition files | [`pipeline::generate_psl_predicates`] |
//! | Prolog path files | [`pipeline::write_prolog_paths`] |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod config;
pub mod datalog;
pub mod error;
pub mod normalize;
pub mod origin;
pub mod partition;
pub mod pipeline;
pub mod rules;
pub mod writer;

pub use classify::Classifier;
pub use config::FactsConfig;
pub use error::{EngineError, Result};
pub use partition::{Entry, Partition, PartitionKind, Partitions};
