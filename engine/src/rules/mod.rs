//! Schema rule sets.
//!
//! Each rule set looks at one statement at a time and writes into the shared
//! [`RulePartitions`]. Both sets are applied to every statement; they are not
//! alternatives.

pub mod aml;
pub mod opcua;

use facts_graph::{Node, Statement, TripleSource};

use crate::error::{EngineError, Result};
use crate::partition::{Entry, Partition, RulePartitions};

/// A classifier over single statements.
pub trait Rules {
    /// Applies the rules to `statement`, consulting `source` for related edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not have the shape a matching
    /// rule requires.
    fn apply<S: TripleSource>(
        &self,
        statement: &Statement,
        source: &S,
        out: &mut RulePartitions<'_>,
    ) -> Result<()>;
}

/// Lexical form of the object, or a malformed-graph error naming `predicate`.
pub(crate) fn literal_object<'a>(statement: &'a Statement, predicate: &str) -> Result<&'a str> {
    statement
        .object
        .as_literal()
        .map(|lit| lit.lexical_form())
        .ok_or_else(|| EngineError::ExpectedLiteral {
            predicate: predicate.to_string(),
            statement: statement.to_string(),
        })
}

/// Requires an IRI object, or a malformed-graph error naming `predicate`.
pub(crate) fn resource_object(statement: &Statement, predicate: &str) -> Result<()> {
    if statement.object.is_iri() {
        Ok(())
    } else {
        Err(EngineError::ExpectedResource {
            predicate: predicate.to_string(),
            statement: statement.to_string(),
        })
    }
}

/// Adds every literal value on `resource`'s outgoing edges to `partition`,
/// owned by `owner`. Returns the number of new entries.
pub(crate) fn expand_literals<S: TripleSource>(
    source: &S,
    resource: &Node,
    owner: &str,
    partition: &mut Partition,
) -> usize {
    let mut added = 0;
    for literal in source
        .outgoing_edges(resource)
        .filter_map(|edge| edge.object.as_literal())
    {
        if partition.insert(Entry::literal(owner, literal.lexical_form())) {
            added += 1;
        }
    }
    added
}
