//! The classification pass over one document.

use facts_graph::TripleSource;
use tracing::debug;

use crate::error::Result;
use crate::normalize::lower_first;
use crate::origin::{SubjectSnapshot, DEFAULT_AML_MARKER};
use crate::partition::{Entry, PartitionKind, Partitions};
use crate::rules::aml::AmlRules;
use crate::rules::opcua::OpcUaRules;
use crate::rules::Rules;

/// Classifies the statements of a document into the five partitions.
#[derive(Debug, Clone)]
pub struct Classifier {
    aml_marker: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_AML_MARKER)
    }
}

impl Classifier {
    /// A classifier that treats namespaces containing `aml_marker` as AML.
    pub fn new(aml_marker: impl Into<String>) -> Self {
        Self {
            aml_marker: aml_marker.into(),
        }
    }

    /// Runs the document through document tagging and both rule sets.
    ///
    /// Returns fresh partitions; nothing is shared with earlier documents.
    ///
    /// # Errors
    ///
    /// Returns the first malformed statement. No partial result is returned.
    pub fn classify<S: TripleSource>(&self, source: &S) -> Result<Partitions> {
        let snapshot = SubjectSnapshot::build(source, &self.aml_marker);
        let aml = AmlRules;
        let opcua = OpcUaRules::new(&snapshot, source)?;

        let mut partitions = Partitions::new();
        for statement in source.statements() {
            let subject = lower_first(statement.subject_name()?);
            partitions.document.insert(Entry::Reference(subject));

            let mut view = partitions.rule_view();
            aml.apply(statement, source, &mut view)?;
            opcua.apply(statement, source, &mut view)?;
        }

        for kind in PartitionKind::ALL {
            debug!(partition = %kind, entries = partitions.get(kind).len(), "classified");
        }
        Ok(partitions)
    }
}
