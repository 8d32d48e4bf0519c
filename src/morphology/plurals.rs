//! Noun pluralization

use super::is_vowel;

/// Suffixes that take "-es" in the plural
const SIBILANT_ENDINGS: [&str; 5] = ["s", "sh", "ch", "x", "z"];

/// Returns the plural of a noun.
///
/// - sibilant endings (`s`, `sh`, `ch`, `x`, `z`) take "-es": box → boxes
/// - consonant + `y` becomes "-ies": fly → flies
/// - everything else takes "-s": boy → boys
pub fn plural(word: &str) -> String {
    if SIBILANT_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y') {
        // `stem` is empty for the one-letter word "y"
        if let Some(before) = stem.chars().last() {
            if !is_vowel(before) {
                return format!("{stem}ies");
            }
        }
    }

    format!("{word}s")
}
