//! Core statement model.
//!
//! A document is a sequence of [`Statement`]s. Terms are owned strings; IRIs
//! remember where their local name starts so rules can match on local names
//! without re-splitting.

use std::fmt;

use crate::error::{GraphError, Position, Result};

/// An absolute IRI split into namespace and local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: String,
    local_start: Option<usize>,
}

impl Iri {
    /// Creates an IRI and computes its namespace / local-name boundary.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let local_start = local_name_start(&value);
        Self { value, local_start }
    }

    /// Returns the full IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns everything before the local name. IRIs without a local name
    /// are all namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self.local_start {
            Some(i) => &self.value[..i],
            None => &self.value,
        }
    }

    /// Returns the local name, or `None` if the IRI does not end in an XML name.
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.local_start.map(|i| &self.value[i..])
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || matches!(c, '-' | '.' | '\u{00B7}')
}

/// Byte offset of the local name: the longest trailing run of name characters,
/// advanced to its first valid name-start character.
fn local_name_start(iri: &str) -> Option<usize> {
    let mut start = iri.len();
    for (i, c) in iri.char_indices().rev() {
        if !is_name_char(c) {
            break;
        }
        start = i;
    }
    let (offset, _) = iri[start..]
        .char_indices()
        .find(|&(_, c)| is_name_start(c))?;
    // A whole-IRI "local name" would leave an empty namespace.
    if start + offset == 0 {
        return None;
    }
    Some(start + offset)
}

/// An RDF literal. Only the lexical form is kept; datatypes and language
/// tags play no part in fact generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: String,
}

impl Literal {
    /// Creates a plain literal.
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
        }
    }

    /// Returns the lexical form, verbatim.
    #[must_use]
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }
}

/// A term in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A named resource.
    Iri(Iri),
    /// A literal value (object position only).
    Literal(Literal),
    /// A blank node, by label.
    Blank(String),
}

impl Node {
    /// Shorthand for an IRI node.
    pub fn iri(value: impl Into<String>) -> Self {
        Node::Iri(Iri::new(value))
    }

    /// Shorthand for a plain literal node.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Node::Literal(Literal::new(lexical))
    }

    /// Returns the local name of an IRI node.
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => iri.local_name(),
            _ => None,
        }
    }

    /// Returns the namespace of an IRI node.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri.namespace()),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for IRI nodes.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }
}

/// Default textual form: the IRI, the lexical form, or the blank label.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => f.write_str(iri.as_str()),
            Node::Literal(lit) => f.write_str(lit.lexical_form()),
            Node::Blank(label) => f.write_str(label),
        }
    }
}

/// An immutable (subject, predicate, object) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// IRI or blank node.
    pub subject: Node,
    /// Property IRI.
    pub predicate: Iri,
    /// IRI, literal or blank node.
    pub object: Node,
}

impl Statement {
    /// Creates a statement.
    pub fn new(subject: Node, predicate: Iri, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Local name of the subject.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoLocalName`] for blank subjects or IRIs without a local name.
    pub fn subject_name(&self) -> Result<&str> {
        self.subject
            .local_name()
            .ok_or_else(|| self.no_local_name(Position::Subject, self.subject.to_string()))
    }

    /// Local name of the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoLocalName`] if the predicate IRI has no local name.
    pub fn predicate_name(&self) -> Result<&str> {
        self.predicate
            .local_name()
            .ok_or_else(|| self.no_local_name(Position::Predicate, self.predicate.to_string()))
    }

    /// Local name of the object.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoLocalName`] if the object is not an IRI with a local name.
    pub fn object_name(&self) -> Result<&str> {
        self.object
            .local_name()
            .ok_or_else(|| self.no_local_name(Position::Object, self.object.to_string()))
    }

    fn no_local_name(&self, position: Position, term: String) -> GraphError {
        GraphError::NoLocalName {
            position,
            term,
            statement: self.to_string(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, &self.subject)?;
        write!(f, " <{}> ", self.predicate)?;
        write_term(f, &self.object)?;
        f.write_str(" .")
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Iri(iri) => write!(f, "<{iri}>"),
        Node::Literal(lit) => write!(f, "{:?}", lit.lexical_form()),
        Node::Blank(label) => write!(f, "_:{label}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hash_and_slash_namespaces() {
        let iri = Iri::new("http://example.org/plant#Tank1");
        assert_eq!(iri.namespace(), "http://example.org/plant#");
        assert_eq!(iri.local_name(), Some("Tank1"));

        let iri = Iri::new("https://www.w3.org/aml/InternalElement_3");
        assert_eq!(iri.namespace(), "https://www.w3.org/aml/");
        assert_eq!(iri.local_name(), Some("InternalElement_3"));
    }

    #[test]
    fn leading_digits_stay_in_namespace() {
        let iri = Iri::new("http://example.org/nodes/42abc");
        assert_eq!(iri.local_name(), Some("abc"));
        assert_eq!(iri.namespace(), "http://example.org/nodes/42");
    }

    #[test]
    fn numeric_tail_has_no_local_name() {
        let iri = Iri::new("http://example.org/nodes/42");
        assert_eq!(iri.local_name(), None);
        assert_eq!(iri.namespace(), "http://example.org/nodes/42");
    }

    #[test]
    fn urn_splits_on_colon() {
        assert_eq!(Iri::new("urn:opcua:Pump").local_name(), Some("Pump"));
    }

    #[test]
    fn blank_subject_has_no_local_name() {
        let st = Statement::new(
            Node::Blank("b0".into()),
            Iri::new("http://example.org/p#value"),
            Node::literal("x"),
        );
        let err = st.subject_name().unwrap_err();
        assert!(matches!(
            err,
            GraphError::NoLocalName {
                position: Position::Subject,
                ..
            }
        ));
        assert!(err.to_string().contains("_:b0"));
    }

    #[test]
    fn statement_display_is_ntriples_like() {
        let st = Statement::new(
            Node::iri("http://example.org/a#S"),
            Iri::new("http://example.org/a#p"),
            Node::literal("v"),
        );
        assert_eq!(
            st.to_string(),
            "<http://example.org/a#S> <http://example.org/a#p> \"v\" ."
        );
    }
}
