//! Password strength analysis and personalized wordlist generation.
//!
//! Scores a password with a pluggable strength scorer and, given a name,
//! date of birth and pet name, generates the variants (case folding,
//! reversal, common suffixes, leetspeak) an attacker would try first.
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use passguard::{AnalysisRequest, WordlistWriter, ZxcvbnScorer, analyze};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let request = AnalysisRequest::new(
//!     password,
//!     Some("Rex".into()),
//!     Some("1999".into()),
//!     Some("Rex".into()),
//! );
//!
//! let outcome = analyze(&request, &ZxcvbnScorer::new(), &WordlistWriter::new("."))
//!     .expect("analysis failed");
//! println!("Score: {}", outcome.report.score);
//! ```

// Internal modules
mod analysis;
mod blacklist;
mod config;
mod error;
mod scorer;
mod sections;
mod wordlist;
mod writer;

// Public API
pub use analysis::{AnalysisOutcome, AnalysisRequest, SavedWordlist, analyze};
pub use blacklist::{Blacklist, BlacklistError, default_blacklist_path};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use scorer::{
    Feedback, HeuristicScorer, Score, ScoreError, ScorerKind, StrengthReport, StrengthScorer,
    ZxcvbnScorer, build_scorer,
};
pub use wordlist::{COMMON_SUFFIXES, LEETSPEAK_MAP, SeedTriple, generate_wordlist};
pub use writer::{WordlistWriter, WriteError, wordlist_file_name};
