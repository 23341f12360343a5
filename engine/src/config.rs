//! Run configuration (`facts.toml`).
//!
//! ```toml
//! [input]
//! dir = "data/rdf"
//! extensions = ["ttl"]
//!
//! [output]
//! dir = "data/ontology/test"
//! clause_file = "edb.pl"
//! prolog_paths_dir = "prolog"
//!
//! [output.partitions]
//! document = "fromDocument.txt"
//!
//! [schema]
//! aml_namespace_marker = "aml"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown by
//! [`FactsConfig::default`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EngineError, Result};
use crate::origin::DEFAULT_AML_MARKER;
use crate::partition::PartitionKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactsConfig {
    /// Where source documents are read from.
    pub input: InputConfig,
    /// Where facts are written.
    pub output: OutputConfig,
    /// Schema detection.
    pub schema: SchemaConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Directory holding converted Turtle documents.
    pub dir: PathBuf,
    /// Accepted file extensions, without the dot.
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/rdf"),
            extensions: vec!["ttl".to_string()],
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the clause file and the partition files.
    pub dir: PathBuf,
    /// Clause file name inside `dir`.
    pub clause_file: String,
    /// Directory for the Prolog path files; none are written when unset.
    pub prolog_paths_dir: Option<PathBuf>,
    /// Partition file names inside `dir`.
    pub partitions: PartitionFileNames,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/ontology/test"),
            clause_file: "edb.pl".to_string(),
            prolog_paths_dir: None,
            partitions: PartitionFileNames::default(),
        }
    }
}

/// `[output.partitions]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartitionFileNames {
    /// Document membership.
    pub document: String,
    /// Attribute relations.
    pub attribute: String,
    /// Identifier literals.
    pub identifier: String,
    /// Reference-semantic literals.
    pub reference_semantic: String,
    /// Internal elements.
    pub internal_element: String,
}

impl Default for PartitionFileNames {
    fn default() -> Self {
        Self {
            document: "fromDocument.txt".to_string(),
            attribute: "Attribute.txt".to_string(),
            identifier: "hasID.txt".to_string(),
            reference_semantic: "hasRefsemantic.txt".to_string(),
            internal_element: "InternalElements.txt".to_string(),
        }
    }
}

impl PartitionFileNames {
    /// File name for `kind`.
    #[must_use]
    pub fn get(&self, kind: PartitionKind) -> &str {
        match kind {
            PartitionKind::Document => &self.document,
            PartitionKind::Attribute => &self.attribute,
            PartitionKind::Identifier => &self.identifier,
            PartitionKind::ReferenceSemantic => &self.reference_semantic,
            PartitionKind::InternalElement => &self.internal_element,
        }
    }
}

/// `[schema]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Namespace fragment identifying AML subjects.
    pub aml_namespace_marker: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            aml_namespace_marker: DEFAULT_AML_MARKER.to_string(),
        }
    }
}

impl FactsConfig {
    /// Parses configuration text. `origin` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(origin: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EngineError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(path, &content)
    }

    /// Full path of the partition file for `kind`.
    #[must_use]
    pub fn partition_path(&self, kind: PartitionKind) -> PathBuf {
        self.output.dir.join(self.output.partitions.get(kind))
    }

    /// Full path of the clause file.
    #[must_use]
    pub fn clause_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.clause_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = FactsConfig::from_toml_str(Path::new("facts.toml"), "").unwrap();
        assert_eq!(config, FactsConfig::default());
        assert_eq!(config.input.extensions, ["ttl"]);
        assert_eq!(config.schema.aml_namespace_marker, "aml");
        assert_eq!(
            config.clause_path(),
            Path::new("data/ontology/test").join("edb.pl")
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = FactsConfig::from_toml_str(
            Path::new("facts.toml"),
            r#"
            [output]
            dir = "out"
            prolog_paths_dir = "prolog"

            [output.partitions]
            identifier = "ids.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.input, InputConfig::default());
        assert_eq!(config.output.clause_file, "edb.pl");
        assert_eq!(config.output.prolog_paths_dir, Some(PathBuf::from("prolog")));
        assert_eq!(
            config.partition_path(PartitionKind::Identifier),
            Path::new("out").join("ids.txt")
        );
        assert_eq!(
            config.partition_path(PartitionKind::Document),
            Path::new("out").join("fromDocument.txt")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FactsConfig::from_toml_str(Path::new("bad.toml"), "[input]\nfolder = \"x\"\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.toml");
        std::fs::write(&path, "[schema]\naml_namespace_marker = \"automationml\"\n").unwrap();

        let config = FactsConfig::load(&path).unwrap();
        assert_eq!(config.schema.aml_namespace_marker, "automationml");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = FactsConfig::load(Path::new("/nonexistent/facts.toml")).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }
}
