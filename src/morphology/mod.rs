//! Regular English word forms
//!
//! Derives the extra forms added to the dictionary for nouns and verbs. The
//! rules are a small fixed set: there is no consonant doubling and no table of
//! irregular forms, so `make` conjugates to `maked`.

pub mod conjugation;
pub mod plurals;

pub use conjugation::verb_forms;
pub use plurals::plural;

/// Vowels considered by the suffix rules
pub(crate) fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}
