//! Pattern analysis section - detects repetitive and sequential patterns.

use super::{Finding, SectionContext, SectionResult};
use secrecy::{ExposeSecret, SecretString};

/// Analyzes password for repetitive and sequential patterns.
///
/// A run of three identical characters counts as repetitive; four or more
/// characters stepping by one code point (up or down) count as sequential.
pub fn pattern_analysis_section(
    password: &SecretString,
    _ctx: &SectionContext<'_>,
) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return None;
    }

    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return Some(Finding::new(
            "Repeated characters like \"aaa\" are easy to guess",
            "Avoid repeated characters",
        ));
    }

    let is_sequential = chars.windows(4).any(|window| {
        window.windows(2).all(|w| {
            let prev = w[0] as i64;
            let curr = w[1] as i64;
            curr == prev + 1 || curr == prev - 1
        })
    });
    if is_sequential {
        return Some(Finding::new(
            "Sequences like \"abcd\" or \"4321\" are easy to guess",
            "Avoid sequences of adjacent characters",
        ));
    }

    None
}
