//! Personalized wordlist generation.
//!
//! Expands a seed triple (name, date of birth, pet name) into the guessable
//! variants an attacker would try first: lowercase, reversed, common
//! suffixes and leetspeak substitutions.

use std::collections::HashSet;

/// Leetspeak substitutes per lowercase letter. Each entry lists the letter
/// itself first.
pub const LEETSPEAK_MAP: &[(char, &[char])] = &[
    ('a', &['a', '@', '4']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '$', '5']),
    ('t', &['t', '7']),
];

/// Suffixes appended to every lowercased seed word.
pub const COMMON_SUFFIXES: &[&str] = &["123", "@123", "2025", "!"];

/// Returns the substitutes registered for `c`, if it is a leetspeak key.
pub fn leetspeak_substitutes(c: char) -> Option<&'static [char]> {
    LEETSPEAK_MAP
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, substitutes)| *substitutes)
}

/// The three personal strings a wordlist is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTriple {
    pub name: String,
    pub dob: String,
    pub pet: String,
}

impl SeedTriple {
    pub fn new(name: impl Into<String>, dob: impl Into<String>, pet: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
            pet: pet.into(),
        }
    }

    /// Builds a triple only when all three values are present and non-empty.
    ///
    /// Front ends call this to decide whether generation runs at all.
    pub fn from_parts(
        name: Option<String>,
        dob: Option<String>,
        pet: Option<String>,
    ) -> Option<Self> {
        match (name, dob, pet) {
            (Some(name), Some(dob), Some(pet))
                if !name.is_empty() && !dob.is_empty() && !pet.is_empty() =>
            {
                Some(Self { name, dob, pet })
            }
            _ => None,
        }
    }

    /// Seed words in name, date of birth, pet order.
    pub fn words(&self) -> [&str; 3] {
        [&self.name, &self.dob, &self.pet]
    }

    /// Generates the sorted, deduplicated wordlist for this triple.
    pub fn generate(&self) -> Vec<String> {
        generate_wordlist(&self.name, &self.dob, &self.pet)
    }
}

/// Generates candidate passwords from a name, date of birth and pet name.
///
/// Each seed word contributes its lowercased form, its reversal, one entry
/// per common suffix and one entry per distinct (leetspeak key, substitute)
/// pair found in the word. Substitutions replace every occurrence of the key
/// character at once.
///
/// No presence check is done here: an empty word contributes the empty
/// string and the bare suffixes.
///
/// # Returns
/// The union of all variants, deduplicated and sorted by code point.
pub fn generate_wordlist(name: &str, dob: &str, pet: &str) -> Vec<String> {
    let mut variants = HashSet::new();

    for word in [name, dob, pet] {
        add_word_variants(word, &mut variants);
    }

    let mut wordlist: Vec<String> = variants.into_iter().collect();
    wordlist.sort_unstable();
    wordlist
}

fn add_word_variants(word: &str, variants: &mut HashSet<String>) {
    let word = word.to_lowercase();

    variants.insert(word.chars().rev().collect());

    for suffix in COMMON_SUFFIXES {
        variants.insert(format!("{word}{suffix}"));
    }

    let mut seen = HashSet::new();
    for c in word.chars() {
        if !seen.insert(c) {
            continue;
        }
        if let Some(substitutes) = leetspeak_substitutes(c) {
            for substitute in substitutes {
                variants.insert(word.replace(c, &substitute.to_string()));
            }
        }
    }

    variants.insert(word);
}
