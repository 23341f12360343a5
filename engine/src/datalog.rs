//! Datalog clause emission.
//!
//! Every statement becomes one ground clause:
//!
//! ```text
//! clause1(hasRefSemantic(tank11,level1),true).
//! clause1(type(pump11,pump),true).
//! clause1(identifier(attr71,'A-7'),true).
//! ```
//!
//! Entity identifiers carry the document index so facts from different
//! documents never unify. Objects of `type` are classes, shared by all
//! documents, and are left unsuffixed.

use facts_graph::{Node, Statement, TripleSource};

use crate::error::Result;
use crate::normalize::lower_first;

/// Predicate local name whose objects are not document-scoped.
pub const TYPE_PREDICATE: &str = "type";

/// Renders one statement of document `document` as a clause line (no newline).
///
/// Literal objects are quoted verbatim; embedded quotes are not escaped.
///
/// # Errors
///
/// Returns an error if the subject, predicate or an IRI object has no local name.
pub fn clause(statement: &Statement, document: usize) -> Result<String> {
    let predicate = statement.predicate_name()?;
    let object = match &statement.object {
        Node::Iri(_) if predicate == TYPE_PREDICATE => lower_first(statement.object_name()?),
        Node::Iri(_) => format!("{}{document}", lower_first(statement.object_name()?)),
        Node::Literal(lit) => format!("'{}'", lit.lexical_form()),
        other => other.to_string(),
    };

    Ok(format!(
        "clause1({}({}{document},{object}),true).",
        lower_first(predicate),
        lower_first(statement.subject_name()?),
    ))
}

/// Clause lines for every statement of a document, in source order.
///
/// # Errors
///
/// Fails on the first statement [`clause`] rejects.
pub fn document_clauses<S: TripleSource>(source: &S, document: usize) -> Result<Vec<String>> {
    source
        .statements()
        .map(|statement| clause(statement, document))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_graph::{Graph, Iri};
    use proptest::prelude::*;

    const EX: &str = "http://example.org/plant#";
    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    fn st(s: &str, p: &str, o: Node) -> Statement {
        Statement::new(Node::iri(format!("{EX}{s}")), Iri::new(p), o)
    }

    #[test]
    fn type_object_is_not_suffixed() {
        let statement = st("Pump1", RDF_TYPE, Node::iri(format!("{EX}Pump")));
        assert_eq!(clause(&statement, 3).unwrap(), "clause1(type(pump13,pump),true).");
    }

    #[test]
    fn resource_object_is_suffixed() {
        let statement = st(
            "Tank1",
            &format!("{EX}HasRefSemantic"),
            Node::iri(format!("{EX}Level")),
        );
        assert_eq!(
            clause(&statement, 2).unwrap(),
            "clause1(hasRefSemantic(tank12,level2),true)."
        );
    }

    #[test]
    fn literal_is_quoted_verbatim() {
        let statement = st("Attr7", &format!("{EX}identifier"), Node::literal("it's 7"));
        assert_eq!(
            clause(&statement, 1).unwrap(),
            "clause1(identifier(attr71,'it's 7'),true)."
        );
    }

    #[test]
    fn blank_object_uses_its_label() {
        let statement = st("Tank1", &format!("{EX}feeds"), Node::Blank("b7".into()));
        assert_eq!(
            clause(&statement, 1).unwrap(),
            "clause1(feeds(tank11,b7),true)."
        );
    }

    #[test]
    fn blank_subject_is_fatal() {
        let statement = Statement::new(
            Node::Blank("b0".into()),
            Iri::new(format!("{EX}value")),
            Node::literal("x"),
        );
        assert!(clause(&statement, 1).is_err());
    }

    #[test]
    fn document_clauses_keep_order_and_duplicates() {
        let repeated = st("A", &format!("{EX}p"), Node::literal("1"));
        let graph: Graph = [repeated.clone(), st("B", &format!("{EX}p"), Node::literal("2")), repeated]
            .into_iter()
            .collect();
        assert_eq!(
            document_clauses(&graph, 1).unwrap(),
            [
                "clause1(p(a1,'1'),true).",
                "clause1(p(b1,'2'),true).",
                "clause1(p(a1,'1'),true).",
            ]
        );
    }

    proptest! {
        #[test]
        fn suffix_present_unless_type(
            pred in "[a-z][A-Za-z]{0,8}",
            obj in "[A-Z][A-Za-z0-9]{0,8}",
            doc in 1usize..50,
        ) {
            let statement = st("S", &format!("{EX}{pred}"), Node::iri(format!("{EX}{obj}")));
            let line = clause(&statement, doc).unwrap();
            let expected_object = if pred == TYPE_PREDICATE {
                lower_first(&obj)
            } else {
                format!("{}{doc}", lower_first(&obj))
            };
            let want = format!(",{expected_object}),true).");
            prop_assert!(line.ends_with(&want), "{} does not end with {}", line, want);
        }
    }
}
