//! Heuristic evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and reports
//! at most one finding.

mod blacklist;
mod length;
mod pattern;
mod personal;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use personal::personal_info_section;
pub use variety::character_variety_section;

use crate::blacklist::Blacklist;
use secrecy::SecretString;

/// A weakness found by a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub warning: String,
    pub suggestion: String,
}

impl Finding {
    pub fn new(warning: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            warning: warning.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Result type for section evaluation functions.
/// - `Some(finding)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;

/// Data shared by all sections during one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub blacklist: &'a Blacklist,
    /// Lowercased personal strings.
    pub user_inputs: &'a [String],
}

pub type Section = fn(&SecretString, &SectionContext<'_>) -> SectionResult;

/// Sections in evaluation order.
pub const SECTIONS: &[(&str, Section)] = &[
    ("blacklist", blacklist_section),
    ("personal", personal_info_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("pattern", pattern_analysis_section),
];

#[cfg(test)]
pub(crate) fn empty_context() -> SectionContext<'static> {
    static EMPTY: std::sync::OnceLock<Blacklist> = std::sync::OnceLock::new();
    SectionContext {
        blacklist: EMPTY.get_or_init(Blacklist::empty),
        user_inputs: &[],
    }
}
