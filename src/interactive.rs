//! Interactive front end: a small terminal form.

use anyhow::Result;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};
use passguard::{
    AnalysisOutcome, AnalysisRequest, Config, WordlistWriter, analyze, build_scorer,
};
use secrecy::SecretString;

struct FormInput {
    password: SecretString,
    name: String,
    dob: String,
    pet: String,
}

pub fn run() -> Result<()> {
    let config = Config::from_env()?;
    let writer = WordlistWriter::new(&config.output_dir);

    println!("PassGuard - Password Strength Analyzer and Wordlist Generator");

    loop {
        let form = match prompt_form() {
            Ok(Some(form)) => form,
            Ok(None) => return Ok(()),
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let request = AnalysisRequest::new(
            form.password,
            Some(form.name),
            Some(form.dob),
            Some(form.pet),
        );
        let result = build_scorer(&config, &request.user_inputs())
            .and_then(|scorer| analyze(&request, scorer.as_ref(), &writer));

        match result {
            Ok(outcome) => println!("\n{}", render(&outcome)),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!(error = %e, "analysis failed");
                println!("\nError: {e}\n");
            }
        }

        match Confirm::new("Run another analysis?").with_default(false).prompt() {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Collects the four fields, then asks for the trigger action.
///
/// Returns `Ok(None)` when the user declines to run the analysis, which
/// closes the form.
fn prompt_form() -> Result<Option<FormInput>, InquireError> {
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    let name = Text::new("Name:").prompt()?;
    let dob = Text::new("Date of Birth:")
        .with_help_message("e.g., 1998")
        .prompt()?;
    let pet = Text::new("Pet Name:").prompt()?;

    let confirmed = Confirm::new("Analyze + Generate Wordlist?")
        .with_default(true)
        .prompt()?;

    Ok(confirmed.then(|| FormInput {
        password: SecretString::new(password.into()),
        name,
        dob,
        pet,
    }))
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Formats an outcome for the form's result area.
fn render(outcome: &AnalysisOutcome) -> String {
    let report = &outcome.report;
    let mut out = format!(
        "Score: {}/4 ({})\nFeedback: {}\nSuggestions: {}\n",
        report.score,
        report.score.label(),
        report.feedback.warning.as_deref().unwrap_or("none"),
        if report.feedback.suggestions.is_empty() {
            "none".to_string()
        } else {
            report.feedback.suggestions.join("; ")
        }
    );
    if let Some(saved) = &outcome.wordlist {
        out.push_str(&format!(
            "\nWordlist generated and saved to {}.\n",
            saved.path.display()
        ));
    }
    out
}
