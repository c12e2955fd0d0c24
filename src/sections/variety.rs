//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::{Finding, SectionContext, SectionResult};
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains a variety of character types.
///
/// # Returns
/// - `Some(finding)` listing the missing character types
/// - `None` if all character types are present
pub fn character_variety_section(
    password: &SecretString,
    _ctx: &SectionContext<'_>,
) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_alphanumeric());

    let missing: Vec<_> = [
        (!has_upper).then_some("uppercase"),
        (!has_lower).then_some("lowercase"),
        (!has_digit).then_some("numbers"),
        (!has_special).then_some("special characters"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(Finding::new(
            "This password uses few character types",
            format!("Add {}", missing.join(", ")),
        ));
    }
    None
}
