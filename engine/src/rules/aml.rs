//! AutomationML rules.
//!
//! | Predicate | Attribute | InternalElement | Identifier | ReferenceSemantic |
//! |-----------|-----------|-----------------|------------|-------------------|
//! | `hasRefSemantic` | `subject:object` | | | literals of `object` |
//! | `identifier` | `subject:identifier` (plain) | `subject:identifier` (internal) | literal | |
//!
//! A subject is an internal element when its local name contains
//! `InternalElement`.

use facts_graph::{Statement, TripleSource};
use tracing::trace;

use super::{expand_literals, literal_object, resource_object, Rules};
use crate::error::Result;
use crate::normalize::lower_first;
use crate::partition::{Entry, RulePartitions};

/// Predicate linking an AML element to its semantic reference.
pub const HAS_REF_SEMANTIC: &str = "hasRefSemantic";
/// Predicate carrying an element's identifier literal.
pub const IDENTIFIER: &str = "identifier";
/// Local-name fragment marking internal elements.
pub const INTERNAL_ELEMENT: &str = "InternalElement";

/// The AML rule set. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmlRules;

impl Rules for AmlRules {
    fn apply<S: TripleSource>(
        &self,
        statement: &Statement,
        source: &S,
        out: &mut RulePartitions<'_>,
    ) -> Result<()> {
        match statement.predicate_name()? {
            HAS_REF_SEMANTIC => {
                resource_object(statement, HAS_REF_SEMANTIC)?;
                let subject = lower_first(statement.subject_name()?);
                let object = lower_first(statement.object_name()?);
                out.attribute.insert(Entry::pair(&subject, &object));
                let added =
                    expand_literals(source, &statement.object, &object, out.reference_semantic);
                trace!(%subject, %object, added, "aml hasRefSemantic");
            }
            IDENTIFIER => {
                let value = literal_object(statement, IDENTIFIER)?;
                let name = statement.subject_name()?;
                let subject = lower_first(name);
                let target = if name.contains(INTERNAL_ELEMENT) {
                    &mut *out.internal_element
                } else {
                    &mut *out.attribute
                };
                target.insert(Entry::pair(&subject, IDENTIFIER));
                out.identifier.insert(Entry::literal(subject, value));
            }
            _ => {}
        }
        Ok(())
    }
}
