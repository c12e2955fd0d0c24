//! Wordlist persistence.
//!
//! Writes a generated wordlist to a timestamped text file, one entry per
//! line. Lines go to a temporary file in the output directory that is only
//! renamed onto the final name once everything is flushed, so a failed
//! write never leaves a truncated wordlist behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tempfile::NamedTempFile;
use thiserror::Error;

const FILE_PREFIX: &str = "custom_wordlist_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Output directory {path} is not usable: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write wordlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes wordlists into a fixed output directory.
#[derive(Debug, Clone)]
pub struct WordlistWriter {
    output_dir: PathBuf,
}

/// Returns the artifact file name for `timestamp`.
pub fn wordlist_file_name(timestamp: NaiveDateTime) -> String {
    format!("{FILE_PREFIX}{}.txt", timestamp.format(TIMESTAMP_FORMAT))
}

impl WordlistWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `lines` to a file named after the current local time.
    ///
    /// # Errors
    /// See [`WordlistWriter::write_at`].
    pub fn write(&self, lines: &[String]) -> Result<PathBuf, WriteError> {
        self.write_at(lines, Local::now().naive_local())
    }

    /// Writes `lines` to `custom_wordlist_<timestamp>.txt` in the output
    /// directory, replacing a file of the same name.
    ///
    /// Lines are written in the given order, each followed by `\n`.
    ///
    /// # Errors
    /// Returns [`WriteError::OutputDir`] if the temporary file cannot be
    /// created in the output directory, or [`WriteError::Io`] if writing or
    /// renaming fails.
    pub fn write_at(
        &self,
        lines: &[String],
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, WriteError> {
        let path = self.output_dir.join(wordlist_file_name(timestamp));

        let temp_file =
            NamedTempFile::new_in(&self.output_dir).map_err(|source| WriteError::OutputDir {
                path: self.output_dir.clone(),
                source,
            })?;

        let io_error = |source| WriteError::Io {
            path: path.clone(),
            source,
        };

        let mut out = BufWriter::new(temp_file);
        for line in lines {
            writeln!(out, "{line}").map_err(io_error)?;
        }
        let temp_file = out.into_inner().map_err(|e| io_error(e.into_error()))?;
        temp_file.as_file().sync_all().map_err(io_error)?;
        temp_file.persist(&path).map_err(|e| io_error(e.error))?;

        #[cfg(feature = "tracing")]
        tracing::info!(path = %path.display(), entries = lines.len(), "wordlist written");

        Ok(path)
    }
}
