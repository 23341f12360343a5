//! Shared plumbing for the command-line clients: logging setup and the
//! configuration flags every client accepts.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use facts_engine::FactsConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "facts.toml";

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `facts=info` filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "facts=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Configuration flags. Flags override values read from the file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Configuration file (default: ./facts.toml when it exists).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory of Turtle source documents.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output directory for the clause and partition files.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Namespace fragment identifying AML subjects.
    #[arg(long)]
    pub aml_marker: Option<String>,
}

impl ConfigArgs {
    /// Loads the configuration file, if any, and applies the flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named or default configuration file
    /// cannot be read or parsed.
    pub fn resolve(&self) -> Result<FactsConfig> {
        let mut config = match &self.config {
            Some(path) => load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                load(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => FactsConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.dir = input.clone();
        }
        if let Some(out) = &self.out {
            config.output.dir = out.clone();
        }
        if let Some(marker) = &self.aml_marker {
            config.schema.aml_namespace_marker = marker.clone();
        }
        Ok(config)
    }
}

fn load(path: &Path) -> Result<FactsConfig> {
    FactsConfig::load(path)
        .with_context(|| format!("Failed to load configuration {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[input]\ndir = \"from-file\"\n[output]\nclause_file = \"facts.pl\"\n",
        )
        .unwrap();

        let args = ConfigArgs {
            config: Some(path),
            out: Some(PathBuf::from("elsewhere")),
            aml_marker: Some("automationml".into()),
            ..ConfigArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.input.dir, PathBuf::from("from-file"));
        assert_eq!(config.clause_path(), Path::new("elsewhere").join("facts.pl"));
        assert_eq!(config.schema.aml_namespace_marker, "automationml");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/facts.toml")),
            ..ConfigArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
