//! Personal info section - flags passwords built from the user's own data.

use super::{Finding, SectionContext, SectionResult};
use secrecy::{ExposeSecret, SecretString};

/// Inputs shorter than this are too generic to flag.
const MIN_INPUT_LENGTH: usize = 3;

/// Checks whether the password contains any personal input, ignoring case.
pub fn personal_info_section(password: &SecretString, ctx: &SectionContext<'_>) -> SectionResult {
    let pwd = password.expose_secret().to_lowercase();
    let hit = ctx
        .user_inputs
        .iter()
        .filter(|input| input.chars().count() >= MIN_INPUT_LENGTH)
        .any(|input| pwd.contains(input.as_str()));

    if hit {
        return Some(Finding::new(
            "This password contains personal information",
            "Avoid names, dates and other details about yourself",
        ));
    }
    None
}
