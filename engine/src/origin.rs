//! Schema origin of statements and the OPC-UA subject snapshot.
//!
//! Every statement is attributed to the schema it came from by looking at its
//! subject's namespace. The snapshot collects OPC-UA subjects from the whole
//! document, so it does not depend on how the source orders its statements.

use std::collections::HashSet;

use facts_graph::{Node, TripleSource};

/// Default namespace marker for AutomationML resources.
pub const DEFAULT_AML_MARKER: &str = "aml";

/// Source schema of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOrigin {
    /// AutomationML.
    Aml,
    /// OPC-UA.
    OpcUa,
}

impl SchemaOrigin {
    /// `Aml` if the node's namespace contains `aml_marker`, `OpcUa` otherwise.
    /// Blank nodes and literals carry no namespace and count as OPC-UA.
    #[must_use]
    pub fn of(node: &Node, aml_marker: &str) -> Self {
        match node.namespace() {
            Some(ns) if ns.contains(aml_marker) => SchemaOrigin::Aml,
            _ => SchemaOrigin::OpcUa,
        }
    }
}

/// Ordered, duplicate-free OPC-UA subjects of one document.
#[derive(Debug, Default, Clone)]
pub struct SubjectSnapshot {
    subjects: Vec<Node>,
    members: HashSet<Node>,
}

impl SubjectSnapshot {
    /// Collects every OPC-UA-origin subject in first-seen order.
    pub fn build<S: TripleSource>(source: &S, aml_marker: &str) -> Self {
        let mut snapshot = SubjectSnapshot::default();
        for statement in source.statements() {
            let subject = &statement.subject;
            if SchemaOrigin::of(subject, aml_marker) == SchemaOrigin::OpcUa
                && !snapshot.members.contains(subject)
            {
                snapshot.members.insert(subject.clone());
                snapshot.subjects.push(subject.clone());
            }
        }
        snapshot
    }

    /// Returns true if `node` is an OPC-UA subject of the document.
    #[must_use]
    pub fn contains(&self, node: &Node) -> bool {
        self.members.contains(node)
    }

    /// Subjects in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.subjects.iter()
    }

    /// Number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns true if the document has no OPC-UA subjects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_graph::{Graph, Iri, Statement};

    fn st(s: &str, o: &str) -> Statement {
        Statement::new(
            Node::iri(s),
            Iri::new("http://opcfoundation.org/UA/#nodeId"),
            Node::literal(o),
        )
    }

    #[test]
    fn origin_follows_namespace_marker() {
        assert_eq!(
            SchemaOrigin::of(&Node::iri("https://w3id.org/i40/aml#Tank1"), "aml"),
            SchemaOrigin::Aml
        );
        assert_eq!(
            SchemaOrigin::of(&Node::iri("http://opcfoundation.org/UA/#Pump"), "aml"),
            SchemaOrigin::OpcUa
        );
        assert_eq!(
            SchemaOrigin::of(&Node::Blank("b1".into()), "aml"),
            SchemaOrigin::OpcUa
        );
    }

    #[test]
    fn snapshot_ignores_statement_interleaving() {
        // AML statement first: a positional cut-off would miss both OPC-UA subjects.
        let graph: Graph = [
            st("https://w3id.org/i40/aml#Tank1", "a"),
            st("http://opcfoundation.org/UA/#Pump", "1"),
            st("https://w3id.org/i40/aml#Tank2", "b"),
            st("http://opcfoundation.org/UA/#Valve", "2"),
            st("http://opcfoundation.org/UA/#Pump", "3"),
        ]
        .into_iter()
        .collect();

        let snapshot = SubjectSnapshot::build(&graph, DEFAULT_AML_MARKER);
        let names: Vec<_> = snapshot.iter().filter_map(Node::local_name).collect();
        assert_eq!(names, ["Pump", "Valve"]);
        assert!(!snapshot.contains(&Node::iri("https://w3id.org/i40/aml#Tank1")));
        assert_eq!(snapshot.len(), 2);
    }
}
