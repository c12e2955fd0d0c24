//! Rule-based strength scorer.
//!
//! Runs the evaluation sections in sequence, turns their findings into
//! feedback and folds length, variety and uniqueness bonuses into a 0-100
//! point total that is bucketed into a [`Score`].

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use super::{Feedback, Score, ScoreError, StrengthReport, StrengthScorer};
use crate::blacklist::Blacklist;
use crate::sections::{Finding, SECTIONS, SectionContext};

const FALLBACK_SUGGESTION: &str = "Use a longer password with more character types";

/// Offline scorer that needs no estimator data beyond an optional blacklist.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    blacklist: Blacklist,
    user_inputs: Vec<String>,
}

impl HeuristicScorer {
    pub fn new(blacklist: Blacklist) -> Self {
        Self {
            blacklist,
            user_inputs: Vec::new(),
        }
    }

    /// Adds personal strings the password should not contain.
    pub fn with_user_inputs(mut self, inputs: &[&str]) -> Self {
        self.user_inputs.extend(
            inputs
                .iter()
                .filter(|input| !input.is_empty())
                .map(|input| input.to_lowercase()),
        );
        self
    }

    fn findings(&self, password: &SecretString) -> Vec<Finding> {
        let ctx = SectionContext {
            blacklist: &self.blacklist,
            user_inputs: &self.user_inputs,
        };

        // Orchestrator: execute sections in sequence
        SECTIONS
            .iter()
            .filter_map(|(_section_name, section_fn)| {
                let finding = section_fn(password, &ctx);
                #[cfg(feature = "tracing")]
                {
                    if finding.is_some() {
                        tracing::trace!(section = *_section_name, "section reported a finding");
                    }
                }
                finding
            })
            .collect()
    }
}

impl StrengthScorer for HeuristicScorer {
    fn score(&self, password: &SecretString) -> Result<StrengthReport, ScoreError> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Err(ScoreError::BlankPassword);
        }

        let findings = self.findings(password);
        let points = strength_points(pwd, findings.len());
        let score = score_from_points(points);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            points,
            score = score.value(),
            findings = findings.len(),
            "heuristic evaluation finished"
        );

        let warning = findings.first().map(|f| f.warning.clone());
        let mut suggestions: Vec<String> = findings.into_iter().map(|f| f.suggestion).collect();
        if suggestions.is_empty() && score.value() < 3 {
            suggestions.push(FALLBACK_SUGGESTION.to_string());
        }

        Ok(StrengthReport {
            score,
            feedback: Feedback {
                warning,
                suggestions,
            },
            crack_time: None,
        })
    }
}

/// Computes the 0-100 point total for `pwd` given how many sections failed.
pub(crate) fn strength_points(pwd: &str, finding_count: usize) -> i64 {
    let pwd_len = pwd.chars().count() as i64;
    let mut points = 0;

    // Length bonus: up to 20 points (0.5 per character)
    points += (pwd_len / 2).min(20);

    // Character variety: up to 60 points (15 per type)
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_alphanumeric());
    let variety_count = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as i64;
    points += variety_count * 15;

    // Extra length bonus: +5 if > 12, +10 if > 16
    if pwd_len > 16 {
        points += 10;
    } else if pwd_len > 12 {
        points += 5;
    }

    if pwd.chars().filter(|c| !c.is_alphanumeric()).count() >= 2 {
        points += 5;
    }

    let unique_count = pwd.chars().collect::<HashSet<char>>().len();
    if unique_count >= 16 {
        points += 10;
    } else if unique_count >= 12 {
        points += 5;
    }

    points -= finding_count as i64 * 10;
    points.clamp(0, 100)
}

/// Buckets a point total into the 0-4 scale.
pub(crate) fn score_from_points(points: i64) -> Score {
    let value = match points {
        ..25 => 0,
        25..50 => 1,
        50..70 => 2,
        70..85 => 3,
        _ => 4,
    };
    Score(value)
}
