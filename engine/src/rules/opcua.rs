//! OPC-UA rules.
//!
//! OPC-UA documents do not say in any single statement that a node is an
//! internal element of another node. The containment has to be rebuilt from
//! the document's OPC-UA subjects, which is what [`ParentIndex`] does once per
//! document before classification starts.
//!
//! | Predicate | Attribute | InternalElement | Identifier | ReferenceSemantic |
//! |-----------|-----------|-----------------|------------|-------------------|
//! | `nodeId` | `node:identifier` (no parent) | `node:identifier` (has parent) | literal | |
//! | `parentNodeId`, containment | | `child:parent` | | |
//! | `hasTypeDefinition` (IRI object) | `node:type` | | | literals of `type` |

use std::collections::HashMap;

use facts_graph::{Node, Statement, TripleSource};
use tracing::{debug, trace};

use super::aml::IDENTIFIER;
use super::{expand_literals, literal_object, Rules};
use crate::error::Result;
use crate::normalize::lower_first;
use crate::origin::SubjectSnapshot;
use crate::partition::{Entry, RulePartitions};

/// Predicate carrying a node's OPC-UA identifier literal.
pub const NODE_ID: &str = "nodeId";
/// Predicate carrying the identifier of a node's parent.
pub const PARENT_NODE_ID: &str = "parentNodeId";
/// Predicate linking a node to its type definition.
pub const HAS_TYPE_DEFINITION: &str = "hasTypeDefinition";
/// Hierarchical references: `parent <predicate> child`.
pub const CONTAINMENT: [&str; 4] = ["hasComponent", "hasProperty", "organizes", "hasChild"];

/// Child → parent links between OPC-UA subjects of one document.
///
/// Built from the subject snapshot only, so AML resources never appear on
/// either side. Resolution order for a child:
///
/// 1. an explicit `parentNodeId` literal matching another subject's `nodeId`;
/// 2. otherwise the first subject that lists the child through a containment
///    predicate.
///
/// Only nodes with a local name take part.
#[derive(Debug, Default, Clone)]
pub struct ParentIndex {
    parents: HashMap<Node, Node>,
}

impl ParentIndex {
    /// Builds the index from `snapshot`, consulting `source` for edges.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge of a snapshot subject has a predicate
    /// without a local name.
    pub fn build<S: TripleSource>(snapshot: &SubjectSnapshot, source: &S) -> Result<Self> {
        let named: Vec<&Node> = snapshot.iter().filter(|n| n.local_name().is_some()).collect();

        let mut node_ids: HashMap<&str, &Node> = HashMap::new();
        for &subject in &named {
            for edge in source.outgoing_edges(subject) {
                if edge.predicate_name()? == NODE_ID {
                    if let Some(lit) = edge.object.as_literal() {
                        node_ids.entry(lit.lexical_form()).or_insert(subject);
                    }
                }
            }
        }

        let mut parents: HashMap<Node, Node> = HashMap::new();
        for &child in &named {
            for edge in source.outgoing_edges(child) {
                if edge.predicate_name()? != PARENT_NODE_ID {
                    continue;
                }
                let parent = edge
                    .object
                    .as_literal()
                    .and_then(|lit| node_ids.get(lit.lexical_form()));
                if let Some(&parent) = parent {
                    if parent != child {
                        parents.entry(child.clone()).or_insert_with(|| parent.clone());
                    }
                }
            }
        }

        for &parent in &named {
            for edge in source.outgoing_edges(parent) {
                if !CONTAINMENT.contains(&edge.predicate_name()?) {
                    continue;
                }
                let child = &edge.object;
                if child != parent && child.local_name().is_some() && snapshot.contains(child) {
                    parents
                        .entry(child.clone())
                        .or_insert_with(|| parent.clone());
                }
            }
        }

        debug!(
            subjects = snapshot.len(),
            links = parents.len(),
            "built OPC-UA parent index"
        );
        Ok(Self { parents })
    }

    /// The structural parent of `node`, if any.
    #[must_use]
    pub fn parent_of(&self, node: &Node) -> Option<&Node> {
        self.parents.get(node)
    }

    /// Number of child → parent links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no links were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// The OPC-UA rule set, bound to one document's parent index.
#[derive(Debug, Clone)]
pub struct OpcUaRules {
    parents: ParentIndex,
}

impl OpcUaRules {
    /// Rules for the document whose snapshot is `snapshot`.
    ///
    /// # Errors
    ///
    /// Propagates [`ParentIndex::build`] failures.
    pub fn new<S: TripleSource>(snapshot: &SubjectSnapshot, source: &S) -> Result<Self> {
        Ok(Self {
            parents: ParentIndex::build(snapshot, source)?,
        })
    }

    /// The parent index the rules consult.
    #[must_use]
    pub fn parents(&self) -> &ParentIndex {
        &self.parents
    }

    /// Records `child:parent` when `child` has a resolved parent.
    fn relate(&self, child: &Node, out: &mut RulePartitions<'_>) {
        let Some(parent) = self.parents.parent_of(child) else {
            return;
        };
        if let (Some(c), Some(p)) = (child.local_name(), parent.local_name()) {
            let (c, p) = (lower_first(c), lower_first(p));
            trace!(child = %c, parent = %p, "opcua containment");
            out.internal_element.insert(Entry::pair(&c, &p));
        }
    }
}

impl Rules for OpcUaRules {
    fn apply<S: TripleSource>(
        &self,
        statement: &Statement,
        source: &S,
        out: &mut RulePartitions<'_>,
    ) -> Result<()> {
        let predicate = statement.predicate_name()?;
        match predicate {
            NODE_ID => {
                let value = literal_object(statement, NODE_ID)?;
                let node = lower_first(statement.subject_name()?);
                let target = if self.parents.parent_of(&statement.subject).is_some() {
                    &mut *out.internal_element
                } else {
                    &mut *out.attribute
                };
                target.insert(Entry::pair(&node, IDENTIFIER));
                out.identifier.insert(Entry::literal(node, value));
            }
            PARENT_NODE_ID => self.relate(&statement.subject, out),
            HAS_TYPE_DEFINITION if statement.object.is_iri() => {
                let node = lower_first(statement.subject_name()?);
                let type_ = lower_first(statement.object_name()?);
                out.attribute.insert(Entry::pair(&node, &type_));
                expand_literals(source, &statement.object, &type_, out.reference_semantic);
            }
            p if CONTAINMENT.contains(&p) => self.relate(&statement.object, out),
            _ => {}
        }
        Ok(())
    }
}
