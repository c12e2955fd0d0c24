//! Length section - checks password minimum length.

use super::{Finding, SectionContext, SectionResult};
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString, _ctx: &SectionContext<'_>) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding::new(
            "This password is too short",
            format!("Use at least {} characters", MIN_LENGTH),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::empty_context;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd, &empty_context());
        assert_eq!(
            result.map(|f| f.suggestion),
            Some("Use at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd, &empty_context()), None);
    }

    #[test]
    fn test_length_section_counts_chars() {
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert!(length_section(&pwd, &empty_context()).is_some());
    }
}
