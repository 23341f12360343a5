//! In-memory triple source.

use std::collections::HashMap;

use crate::model::{Node, Statement};

/// Read access to the statements of one document.
///
/// `statements` must be replayable: classification walks the sequence more
/// than once and relies on the same order every time.
pub trait TripleSource {
    /// All statements of the document, in source order.
    fn statements(&self) -> impl Iterator<Item = &Statement>;

    /// Statements whose subject is `resource`, in source order.
    fn outgoing_edges(&self, resource: &Node) -> impl Iterator<Item = &Statement>;
}

/// An ordered statement list with a subject index.
///
/// Duplicate statements are kept: the clause output is not deduplicated.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    statements: Vec<Statement>,
    by_subject: HashMap<Node, Vec<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement.
    pub fn insert(&mut self, statement: Statement) {
        let index = self.statements.len();
        self.by_subject
            .entry(statement.subject.clone())
            .or_default()
            .push(index);
        self.statements.push(statement);
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the graph holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for statement in iter {
            graph.insert(statement);
        }
        graph
    }
}

impl TripleSource for Graph {
    fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    fn outgoing_edges(&self, resource: &Node) -> impl Iterator<Item = &Statement> {
        let indices = self.by_subject.get(resource).map(Vec::as_slice).unwrap_or(&[]);
        indices.iter().map(move |&i| &self.statements[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Iri;

    fn st(s: &str, p: &str, o: Node) -> Statement {
        Statement::new(Node::iri(s), Iri::new(p), o)
    }

    #[test]
    fn outgoing_edges_follow_source_order() {
        let graph: Graph = [
            st("http://ex.org/#A", "http://ex.org/#p", Node::literal("1")),
            st("http://ex.org/#B", "http://ex.org/#p", Node::literal("2")),
            st("http://ex.org/#A", "http://ex.org/#q", Node::literal("3")),
        ]
        .into_iter()
        .collect();

        let values: Vec<String> = graph
            .outgoing_edges(&Node::iri("http://ex.org/#A"))
            .map(|s| s.object.to_string())
            .collect();
        assert_eq!(values, vec!["1", "3"]);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn unknown_resource_has_no_edges() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.outgoing_edges(&Node::iri("http://ex.org/#Z")).count(), 0);
    }

    #[test]
    fn statements_are_replayable() {
        let graph: Graph = [st("http://ex.org/#A", "http://ex.org/#p", Node::literal("1"))]
            .into_iter()
            .collect();
        let first: Vec<_> = graph.statements().cloned().collect();
        let second: Vec<_> = graph.statements().cloned().collect();
        assert_eq!(first, second);
    }
}
