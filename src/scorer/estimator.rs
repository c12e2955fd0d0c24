//! Scorer backed by the zxcvbn strength estimator.

use secrecy::{ExposeSecret, SecretString};
use zxcvbn::ZxcvbnError;

use super::{Feedback, Score, ScoreError, StrengthReport, StrengthScorer};

/// Scores passwords with zxcvbn, optionally penalizing personal inputs.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds strings the estimator should treat as known to an attacker.
    /// Empty inputs are ignored.
    pub fn with_user_inputs(mut self, inputs: &[&str]) -> Self {
        self.user_inputs.extend(
            inputs
                .iter()
                .filter(|input| !input.is_empty())
                .map(|input| input.to_lowercase()),
        );
        self
    }
}

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &SecretString) -> Result<StrengthReport, ScoreError> {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password.expose_secret(), &inputs).map_err(|e| match e {
            ZxcvbnError::BlankPassword => ScoreError::BlankPassword,
            other => ScoreError::Estimator(other.to_string()),
        })?;

        let score = Score::try_from(entropy.score())?;
        let feedback = entropy
            .feedback()
            .as_ref()
            .map(|fb| Feedback {
                warning: fb.warning().map(|w| w.to_string()),
                suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
            })
            .unwrap_or_default();
        let crack_time = entropy
            .crack_times()
            .offline_slow_hashing_1e4_per_second()
            .to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!(score = score.value(), "zxcvbn evaluation finished");

        Ok(StrengthReport {
            score,
            feedback,
            crack_time: Some(crack_time),
        })
    }
}
