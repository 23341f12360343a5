//! Output files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::FactsConfig;
use crate::error::{EngineError, Result};
use crate::partition::{Partition, PartitionKind, Partitions};

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> EngineError + '_ {
    move |source| EngineError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes a text file, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`EngineError::Write`] if the directory or the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }
    fs::write(path, content).map_err(write_error(path))
}

/// Writes `lines`, each terminated by a newline. Returns the number written.
///
/// # Errors
///
/// Propagates the sink's I/O errors.
pub fn write_lines<W, I>(out: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut count = 0;
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Drains one partition in insertion order: references verbatim, literals as
/// `owner:value`.
///
/// # Errors
///
/// Propagates the sink's I/O errors.
pub fn write_partition<W: Write>(out: &mut W, partition: &Partition) -> io::Result<usize> {
    write_lines(out, partition.lines())
}

struct Sink {
    kind: PartitionKind,
    path: PathBuf,
    out: BufWriter<File>,
}

/// The five partition files of one run.
///
/// Created (truncated) once; every document's partitions are appended in
/// document order.
pub struct PartitionFiles {
    sinks: Vec<Sink>,
}

impl PartitionFiles {
    /// Creates or truncates the partition files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Write`] if the output directory or a file cannot
    /// be created.
    pub fn create(config: &FactsConfig) -> Result<Self> {
        fs::create_dir_all(&config.output.dir).map_err(write_error(&config.output.dir))?;

        let mut sinks = Vec::with_capacity(PartitionKind::ALL.len());
        for kind in PartitionKind::ALL {
            let path = config.partition_path(kind);
            let file = File::create(&path).map_err(write_error(&path))?;
            sinks.push(Sink {
                kind,
                path,
                out: BufWriter::new(file),
            });
        }
        Ok(Self { sinks })
    }

    /// Appends one document's partitions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Write`] naming the file that failed.
    pub fn append(&mut self, partitions: &Partitions) -> Result<()> {
        for sink in &mut self.sinks {
            let written = write_partition(&mut sink.out, partitions.get(sink.kind))
                .map_err(write_error(&sink.path))?;
            debug!(partition = %sink.kind, written, "flushed partition");
        }
        Ok(())
    }

    /// Flushes every file and returns their paths in flush order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Write`] if a buffered write fails.
    pub fn finish(self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(self.sinks.len());
        for mut sink in self.sinks {
            sink.out.flush().map_err(write_error(&sink.path))?;
            paths.push(sink.path);
        }
        Ok(paths)
    }
}
