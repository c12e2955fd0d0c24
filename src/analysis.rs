//! One analysis run, shared by every front end.
//!
//! Scoring always happens; wordlist generation and persistence only run
//! when a complete seed triple was supplied.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::scorer::{StrengthReport, StrengthScorer};
use crate::wordlist::SeedTriple;
use crate::writer::WordlistWriter;

/// Input collected by a front end.
#[derive(Debug)]
pub struct AnalysisRequest {
    pub password: SecretString,
    pub seeds: Option<SeedTriple>,
}

impl AnalysisRequest {
    /// Builds a request; seeds are kept only when all three are non-empty.
    pub fn new(
        password: SecretString,
        name: Option<String>,
        dob: Option<String>,
        pet: Option<String>,
    ) -> Self {
        Self {
            password,
            seeds: SeedTriple::from_parts(name, dob, pet),
        }
    }

    /// Seed words to pass to a scorer as personal inputs.
    pub fn user_inputs(&self) -> Vec<&str> {
        self.seeds
            .as_ref()
            .map(|seeds| seeds.words().to_vec())
            .unwrap_or_default()
    }
}

/// Where a generated wordlist ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedWordlist {
    pub path: PathBuf,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub report: StrengthReport,
    /// `None` when generation was skipped for lack of seeds.
    pub wordlist: Option<SavedWordlist>,
}

/// Scores the password, then generates and saves the wordlist if seeds are
/// present.
///
/// # Errors
/// A scoring failure aborts before any generation. A write failure is
/// returned as is; no wordlist file is left behind in that case.
pub fn analyze(
    request: &AnalysisRequest,
    scorer: &dyn StrengthScorer,
    writer: &WordlistWriter,
) -> crate::Result<AnalysisOutcome> {
    let report = scorer.score(&request.password)?;

    let wordlist = match &request.seeds {
        Some(seeds) => {
            let lines = seeds.generate();
            let path = writer.write(&lines)?;
            Some(SavedWordlist {
                path,
                entries: lines.len(),
            })
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::info!("wordlist generation skipped: seed triple incomplete");
            None
        }
    };

    Ok(AnalysisOutcome { report, wordlist })
}
