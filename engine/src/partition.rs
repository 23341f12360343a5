//! The five PSL partitions.
//!
//! A [`Partition`] is an insertion-ordered set of [`Entry`] values. Entries are
//! tagged when they are inserted: structural references are kept verbatim,
//! literal values remember the entity that owns them. Rendering happens only in
//! the writer.

use std::collections::HashSet;
use std::fmt;

/// One partition entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A structural token such as `tank1` or `tank1:level`.
    Reference(String),
    /// A literal value owned by an entity token.
    Literal {
        /// Normalized owner token.
        owner: String,
        /// Lexical form, verbatim.
        value: String,
    },
}

impl Entry {
    /// A `owner:suffix` reference.
    pub fn pair(owner: &str, suffix: &str) -> Self {
        Entry::Reference(format!("{owner}:{suffix}"))
    }

    /// A literal owned by `owner`.
    pub fn literal(owner: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::Literal {
            owner: owner.into(),
            value: value.into(),
        }
    }
}

/// Output line for the entry: references verbatim, literals as `owner:value`.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Reference(token) => f.write_str(token),
            Entry::Literal { owner, value } => write!(f, "{owner}:{value}"),
        }
    }
}

/// Names the five partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartitionKind {
    /// Subjects seen in the document.
    Document,
    /// Attribute relations.
    Attribute,
    /// Identifier literals.
    Identifier,
    /// Literals reached through semantic references.
    ReferenceSemantic,
    /// Internal element identifiers and parent links.
    InternalElement,
}

impl PartitionKind {
    /// All partitions, in flush order.
    pub const ALL: [PartitionKind; 5] = [
        PartitionKind::Document,
        PartitionKind::Attribute,
        PartitionKind::InternalElement,
        PartitionKind::ReferenceSemantic,
        PartitionKind::Identifier,
    ];

    /// Short name used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PartitionKind::Document => "document",
            PartitionKind::Attribute => "attribute",
            PartitionKind::Identifier => "identifier",
            PartitionKind::ReferenceSemantic => "reference_semantic",
            PartitionKind::InternalElement => "internal_element",
        }
    }
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered, duplicate-free entry set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    entries: Vec<Entry>,
    seen: HashSet<Entry>,
}

impl Partition {
    /// Creates an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` unless an equal entry is already present. Returns true
    /// if it was added.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if self.seen.contains(&entry) {
            return false;
        }
        self.seen.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    /// Returns true if an equal entry is present.
    #[must_use]
    pub fn contains(&self, entry: &Entry) -> bool {
        self.seen.contains(entry)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Rendered output lines in first-seen order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(Entry::to_string)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the partition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The five partitions of one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partitions {
    /// Document membership.
    pub document: Partition,
    /// Attribute relations.
    pub attribute: Partition,
    /// Identifier literals.
    pub identifier: Partition,
    /// Reference-semantic literals.
    pub reference_semantic: Partition,
    /// Internal elements.
    pub internal_element: Partition,
}

impl Partitions {
    /// Fresh, empty partitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the partition named by `kind`.
    #[must_use]
    pub fn get(&self, kind: PartitionKind) -> &Partition {
        match kind {
            PartitionKind::Document => &self.document,
            PartitionKind::Attribute => &self.attribute,
            PartitionKind::Identifier => &self.identifier,
            PartitionKind::ReferenceSemantic => &self.reference_semantic,
            PartitionKind::InternalElement => &self.internal_element,
        }
    }

    /// Mutable view over the four partitions the rule sets may write.
    pub fn rule_view(&mut self) -> RulePartitions<'_> {
        RulePartitions {
            attribute: &mut self.attribute,
            identifier: &mut self.identifier,
            reference_semantic: &mut self.reference_semantic,
            internal_element: &mut self.internal_element,
        }
    }
}

/// Explicit `&mut` handles to the partitions shared by the rule sets.
/// Document membership is not reachable from here.
#[derive(Debug)]
pub struct RulePartitions<'a> {
    /// Attribute relations.
    pub attribute: &'a mut Partition,
    /// Identifier literals.
    pub identifier: &'a mut Partition,
    /// Reference-semantic literals.
    pub reference_semantic: &'a mut Partition,
    /// Internal elements.
    pub internal_element: &'a mut Partition,
}
