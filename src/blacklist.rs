//! Blacklist management module
//!
//! Loads the list of common passwords consulted by the heuristic scorer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Set of common passwords, stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

/// Returns the path tried when no blacklist is configured.
pub fn default_blacklist_path() -> PathBuf {
    PathBuf::from(DEFAULT_BLACKLIST_PATH)
}

impl Blacklist {
    /// A blacklist that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a blacklist with one password per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist: Self = content.lines().collect();

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Checks membership, ignoring case.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Blacklist {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}
