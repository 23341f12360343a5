//! Turtle loading.
//!
//! Parsing is delegated to `sophia_turtle`; statements are stored in the
//! order the parser yields them, which is document order.

use std::fs;
use std::path::Path;

use sophia_api::source::TripleSource as _;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::model::{Iri, Literal, Node, Statement};
use crate::store::Graph;

impl Graph {
    /// Parses a Turtle document held in memory. `origin` labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if the text is not valid Turtle.
    pub fn from_turtle_str(origin: &str, content: &str) -> Result<Self> {
        let mut graph = Graph::new();
        let mut skipped = 0usize;

        let mut source = sophia_turtle::parser::turtle::parse_str(content);
        source
            .for_each_triple(|t| {
                match (to_node(t.s()), to_iri(t.p()), to_node(t.o())) {
                    (Some(s), Some(p), Some(o)) => graph.insert(Statement::new(s, p, o)),
                    _ => skipped += 1,
                }
            })
            .map_err(|e| GraphError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        if skipped > 0 {
            warn!(origin, skipped, "ignored statements with unsupported terms");
        }
        debug!(origin, statements = graph.len(), "parsed Turtle document");
        Ok(graph)
    }

    /// Reads and parses a Turtle file.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read and
    /// [`GraphError::Parse`] if it is not valid Turtle.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_turtle_str(&path.display().to_string(), &content)
    }
}

fn to_iri<T: Term>(term: T) -> Option<Iri> {
    term.iri().map(|iri| Iri::new(iri.as_str()))
}

fn to_node<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => to_iri(term).map(Node::Iri),
        TermKind::Literal => term
            .lexical_form()
            .map(|lexical| Node::Literal(Literal::new(&*lexical))),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_string())),
        _ => None,
    }
}
