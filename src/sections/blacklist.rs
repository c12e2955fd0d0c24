//! Blacklist section - checks if password is in the common password list.

use super::{Finding, SectionContext, SectionResult};
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(finding)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString, ctx: &SectionContext<'_>) -> SectionResult {
    if ctx.blacklist.contains(password.expose_secret()) {
        return Some(Finding::new(
            "This is a very common password",
            "Avoid passwords that appear in common password lists",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn context(blacklist: &Blacklist) -> SectionContext<'_> {
        SectionContext {
            blacklist,
            user_inputs: &[],
        }
    }

    #[test]
    fn test_blacklist_section_common_password() {
        let blacklist: Blacklist = ["password", "123456", "qwerty"].into_iter().collect();

        let pwd = SecretString::new("Password".to_string().into());
        let result = blacklist_section(&pwd, &context(&blacklist));
        assert!(matches!(result, Some(_)));
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        let blacklist: Blacklist = ["password", "123456", "qwerty"].into_iter().collect();

        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        let result = blacklist_section(&pwd, &context(&blacklist));
        assert_eq!(result, None);
    }
}
