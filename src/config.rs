//! Runtime configuration.
//!
//! Values come from the environment and can be overridden by command-line
//! flags.
//!
//! # Environment Variables
//!
//! - `PASSGUARD_OUTPUT_DIR`: directory wordlists are written to (default: `.`)
//! - `PASSGUARD_SCORER`: `zxcvbn` (default) or `heuristic`
//! - `PASSGUARD_BLACKLIST_PATH`: common-password list for the heuristic scorer

use std::path::PathBuf;

use thiserror::Error;

use crate::scorer::ScorerKind;

pub const OUTPUT_DIR_ENV: &str = "PASSGUARD_OUTPUT_DIR";
pub const SCORER_ENV: &str = "PASSGUARD_SCORER";
pub const BLACKLIST_PATH_ENV: &str = "PASSGUARD_BLACKLIST_PATH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown scorer '{0}' (expected 'zxcvbn' or 'heuristic')")]
    UnknownScorer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub scorer: ScorerKind,
    pub blacklist_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scorer: ScorerKind::default(),
            blacklist_path: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Reads the configuration from environment variables, falling back to
    /// defaults for unset or empty ones.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownScorer`] if `PASSGUARD_SCORER` names no
    /// known scorer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = non_empty_var(OUTPUT_DIR_ENV) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(scorer) = non_empty_var(SCORER_ENV) {
            config.scorer = scorer.parse()?;
        }
        config.blacklist_path = non_empty_var(BLACKLIST_PATH_ENV).map(PathBuf::from);

        Ok(config)
    }

    /// Applies values given explicitly on the command line.
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        scorer: Option<ScorerKind>,
        blacklist_path: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(scorer) = scorer {
            self.scorer = scorer;
        }
        if blacklist_path.is_some() {
            self.blacklist_path = blacklist_path;
        }
        self
    }
}
