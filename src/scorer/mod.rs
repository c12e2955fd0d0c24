//! Password strength scoring.
//!
//! Scorers sit behind the [`StrengthScorer`] trait so the front ends never
//! depend on a concrete estimation algorithm.

mod estimator;
mod heuristic;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::blacklist::{Blacklist, default_blacklist_path};
use crate::config::{Config, ConfigError};

pub use estimator::ZxcvbnScorer;
pub use heuristic::HeuristicScorer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Password is empty")]
    BlankPassword,
    #[error("Score {0} is outside the 0-4 range")]
    OutOfRange(u8),
    #[error("Strength estimator failed: {0}")]
    Estimator(String),
}

/// Discrete strength rating from 0 (trivially guessable) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 4;

    /// Returns `None` when `value` is above [`Score::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "very weak",
            1 => "weak",
            2 => "fair",
            3 => "strong",
            _ => "very strong",
        }
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ScoreError::OutOfRange(value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable advice attached to a score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Result of scoring one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: Score,
    pub feedback: Feedback,
    /// Estimated offline cracking time, when the scorer provides one.
    pub crack_time: Option<String>,
}

/// Anything that can rate a password.
pub trait StrengthScorer {
    /// Scores `password`.
    ///
    /// # Errors
    /// Returns a [`ScoreError`] when the password cannot be evaluated.
    fn score(&self, password: &SecretString) -> Result<StrengthReport, ScoreError>;
}

/// Which scorer implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerKind {
    #[default]
    Zxcvbn,
    Heuristic,
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zxcvbn" => Ok(Self::Zxcvbn),
            "heuristic" => Ok(Self::Heuristic),
            _ => Err(ConfigError::UnknownScorer(s.to_string())),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::Zxcvbn => write!(f, "zxcvbn"),
            ScorerKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Builds the scorer selected by `config`.
///
/// `user_inputs` are personal strings (usually the seed triple) that make a
/// password weaker when it contains them.
///
/// # Errors
/// Returns an error if a configured blacklist file cannot be loaded.
pub fn build_scorer(
    config: &Config,
    user_inputs: &[&str],
) -> crate::Result<Box<dyn StrengthScorer>> {
    #[cfg(feature = "tracing")]
    tracing::debug!(scorer = %config.scorer, "building strength scorer");

    let scorer: Box<dyn StrengthScorer> = match config.scorer {
        ScorerKind::Zxcvbn => Box::new(ZxcvbnScorer::new().with_user_inputs(user_inputs)),
        ScorerKind::Heuristic => {
            let blacklist = match &config.blacklist_path {
                Some(path) => Blacklist::from_path(path)?,
                None => load_default_blacklist(&default_blacklist_path()),
            };
            Box::new(HeuristicScorer::new(blacklist).with_user_inputs(user_inputs))
        }
    };
    Ok(scorer)
}

fn load_default_blacklist(path: &Path) -> Blacklist {
    match Blacklist::from_path(path) {
        Ok(blacklist) => blacklist,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), error = %_e, "running without a blacklist");
            Blacklist::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_range() {
        assert_eq!(Score::new(0).map(Score::value), Some(0));
        assert_eq!(Score::new(4).map(Score::value), Some(4));
        assert!(Score::new(5).is_none());
        assert_eq!(Score::try_from(9), Err(ScoreError::OutOfRange(9)));
    }

    #[test]
    fn test_score_labels() {
        let labels: Vec<_> = (0..=4)
            .filter_map(Score::new)
            .map(Score::label)
            .collect();
        assert_eq!(labels, ["very weak", "weak", "fair", "strong", "very strong"]);
    }

    #[test]
    fn test_scorer_kind_parse() {
        assert_eq!("zxcvbn".parse::<ScorerKind>(), Ok(ScorerKind::Zxcvbn));
        assert_eq!(" Heuristic ".parse::<ScorerKind>(), Ok(ScorerKind::Heuristic));
        assert!(matches!(
            "entropy".parse::<ScorerKind>(),
            Err(ConfigError::UnknownScorer(_))
        ));
    }

    #[test]
    fn test_build_default_scorer() {
        let config = Config::default();
        let scorer = build_scorer(&config, &[]).expect("Failed to build scorer");
        let report = scorer.score(&secret("password")).expect("Failed to score");
        assert_eq!(report.score.value(), 0);
    }

    #[test]
    fn test_build_heuristic_with_blacklist() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Tr0ub4dor&3xyz").expect("Failed to write");

        let config = Config {
            scorer: ScorerKind::Heuristic,
            blacklist_path: Some(temp_file.path().to_path_buf()),
            ..Config::default()
        };
        let scorer = build_scorer(&config, &[]).expect("Failed to build scorer");
        let report = scorer.score(&secret("Tr0ub4dor&3xyz")).expect("Failed to score");
        assert!(report.feedback.warning.is_some());
    }

    #[test]
    fn test_build_heuristic_missing_configured_blacklist() {
        let config = Config {
            scorer: ScorerKind::Heuristic,
            blacklist_path: Some(PathBuf::from("/nonexistent/path/blacklist.txt")),
            ..Config::default()
        };
        let result = build_scorer(&config, &[]);
        assert!(matches!(
            result,
            Err(crate::Error::Blacklist(crate::BlacklistError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_load_default_blacklist_falls_back_to_empty() {
        let blacklist = load_default_blacklist(Path::new("/nonexistent/path/blacklist.txt"));
        assert!(blacklist.is_empty());
    }
}
