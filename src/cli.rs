//! Batch front end driven by command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use passguard::{
    AnalysisOutcome, AnalysisRequest, Config, ScorerKind, WordlistWriter, analyze, build_scorer,
};
use secrecy::SecretString;

pub const SKIP_NOTICE: &str = "Wordlist generation skipped (name, dob, pet not fully provided).";

/// PassGuard - Password Strength Analyzer and Wordlist Generator
#[derive(Parser)]
#[command(name = "passguard", version, about)]
pub struct Cli {
    /// Password to analyze
    #[arg(long)]
    pub password: String,

    /// Your name
    #[arg(long)]
    pub name: Option<String>,

    /// Your date of birth (e.g., 1998)
    #[arg(long)]
    pub dob: Option<String>,

    /// Your pet name
    #[arg(long)]
    pub pet: Option<String>,

    /// Strength scorer to use: zxcvbn or heuristic
    #[arg(long, value_name = "SCORER", env = "PASSGUARD_SCORER")]
    pub scorer: Option<ScorerKind>,

    /// Directory the wordlist is written to
    #[arg(long, value_name = "DIR", env = "PASSGUARD_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Common-password list for the heuristic scorer
    #[arg(long, value_name = "FILE", env = "PASSGUARD_BLACKLIST_PATH")]
    pub blacklist: Option<PathBuf>,
}

impl Cli {
    /// Configuration for this run. clap has already merged flags over the
    /// environment, so the environment is not read again here.
    pub fn config(&self) -> Config {
        Config::default().with_overrides(
            self.output_dir.clone(),
            self.scorer,
            self.blacklist.clone(),
        )
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let request = AnalysisRequest::new(
        SecretString::new(cli.password.into()),
        cli.name,
        cli.dob,
        cli.pet,
    );

    let scorer = build_scorer(&config, &request.user_inputs())
        .context("failed to set up the strength scorer")?;
    let writer = WordlistWriter::new(&config.output_dir);
    let outcome = analyze(&request, scorer.as_ref(), &writer)?;

    print!("{}", render(&outcome));
    Ok(())
}

/// Formats an outcome the way the batch mode prints it.
pub fn render(outcome: &AnalysisOutcome) -> String {
    let report = &outcome.report;
    let mut lines = vec![
        format!("Password Strength Score: {} (0=Weak, 4=Strong)", report.score),
        format!(
            "Feedback: {} {:?}",
            report.feedback.warning.as_deref().unwrap_or("Good password!"),
            report.feedback.suggestions
        ),
    ];
    if let Some(crack_time) = &report.crack_time {
        lines.push(format!("Estimated offline crack time: {crack_time}"));
    }
    match &outcome.wordlist {
        Some(saved) => lines.push(format!(
            "Wordlist saved to {} ({} entries)",
            saved.path.display(),
            saved.entries
        )),
        None => lines.push(SKIP_NOTICE.to_string()),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use passguard::{Feedback, SavedWordlist, Score, StrengthReport, StrengthScorer};
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env("PASSGUARD_SCORER");
        remove_env("PASSGUARD_OUTPUT_DIR");
        remove_env("PASSGUARD_BLACKLIST_PATH");
    }

    fn outcome(wordlist: Option<SavedWordlist>) -> AnalysisOutcome {
        AnalysisOutcome {
            report: StrengthReport {
                score: Score::new(1).expect("valid score"),
                feedback: Feedback {
                    warning: Some("This is similar to a commonly used password".to_string()),
                    suggestions: vec!["Add another word or two".to_string()],
                },
                crack_time: Some("2 hours".to_string()),
            },
            wordlist,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn test_scorer_flag_wins_over_invalid_env() {
        clear_env();
        set_env("PASSGUARD_SCORER", "entropy");

        let cli = Cli::try_parse_from([
            "passguard",
            "--password",
            "x9!Kq#zLm2",
            "--scorer",
            "heuristic",
        ])
        .expect("Failed to parse");
        let config = cli.config();

        assert_eq!(config.scorer, ScorerKind::Heuristic);
        let scorer = build_scorer(&config, &[]).expect("Failed to build scorer");
        assert!(scorer.score(&SecretString::new("x9!Kq#zLm2".to_string().into())).is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_used_when_flag_absent() {
        clear_env();
        set_env("PASSGUARD_SCORER", "heuristic");
        set_env("PASSGUARD_OUTPUT_DIR", "/tmp/wordlists");

        let cli = Cli::try_parse_from(["passguard", "--password", "x"]).expect("Failed to parse");
        let config = cli.config();

        assert_eq!(config.scorer, ScorerKind::Heuristic);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/wordlists"));
        assert_eq!(config.blacklist_path, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_scorer_without_flag_is_rejected() {
        clear_env();
        set_env("PASSGUARD_SCORER", "entropy");

        let result = Cli::try_parse_from(["passguard", "--password", "x"]);
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_requires_password() {
        clear_env();
        let result = Cli::try_parse_from(["passguard", "--name", "Rex"]);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_cli_parses_all_flags() {
        clear_env();
        let cli = Cli::try_parse_from([
            "passguard",
            "--password",
            "hunter2",
            "--name",
            "Rex",
            "--dob",
            "1999",
            "--pet",
            "Bo",
            "--scorer",
            "heuristic",
            "--output-dir",
            "/tmp",
        ])
        .expect("Failed to parse");

        assert_eq!(cli.password, "hunter2");
        assert_eq!(cli.dob.as_deref(), Some("1999"));
        assert_eq!(cli.scorer, Some(ScorerKind::Heuristic));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.blacklist, None);
    }

    #[test]
    #[serial]
    fn test_cli_rejects_unknown_scorer() {
        clear_env();
        let result = Cli::try_parse_from(["passguard", "--password", "x", "--scorer", "entropy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_with_wordlist() {
        let text = render(&outcome(Some(SavedWordlist {
            path: PathBuf::from("custom_wordlist_20250307_090501.txt"),
            entries: 13,
        })));

        assert_eq!(
            text,
            "Password Strength Score: 1 (0=Weak, 4=Strong)\n\
             Feedback: This is similar to a commonly used password [\"Add another word or two\"]\n\
             Estimated offline crack time: 2 hours\n\
             Wordlist saved to custom_wordlist_20250307_090501.txt (13 entries)\n"
        );
    }

    #[test]
    fn test_render_skip_notice() {
        let text = render(&outcome(None));
        assert!(text.ends_with(&format!("{SKIP_NOTICE}\n")));
    }

    #[test]
    fn test_render_without_warning() {
        let mut outcome = outcome(None);
        outcome.report.feedback = Feedback::default();
        outcome.report.crack_time = None;

        let text = render(&outcome);
        assert!(text.contains("Feedback: Good password! []"));
        assert!(!text.contains("crack time"));
    }
}
