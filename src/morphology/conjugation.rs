//! Regular verb conjugation

/// Returns the `(past tense, present participle)` pair of a verb.
///
/// Only the final silent `e` is special-cased:
/// walk → (walked, walking), bake → (baked, baking).
pub fn verb_forms(word: &str) -> (String, String) {
    let past = if word.ends_with('e') {
        format!("{word}d")
    } else {
        format!("{word}ed")
    };

    let participle = match word.strip_suffix('e') {
        Some(stem) if !stem.is_empty() => format!("{stem}ing"),
        _ => format!("{word}ing"),
    };

    (past, participle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(past: &str, participle: &str) -> (String, String) {
        (past.to_string(), participle.to_string())
    }

    #[test]
    fn test_verb_forms_regular() {
        assert_eq!(verb_forms("walk"), forms("walked", "walking"));
        assert_eq!(verb_forms("jump"), forms("jumped", "jumping"));
        assert_eq!(verb_forms("play"), forms("played", "playing"));
    }

    #[test]
    fn test_verb_forms_silent_e() {
        assert_eq!(verb_forms("bake"), forms("baked", "baking"));
        assert_eq!(verb_forms("dance"), forms("danced", "dancing"));
    }

    #[test]
    fn test_verb_forms_irregular_not_handled() {
        assert_eq!(verb_forms("make"), forms("maked", "making"));
        assert_eq!(verb_forms("run"), forms("runed", "runing"));
        assert_eq!(verb_forms("see"), forms("seed", "seing"));
    }

    #[test]
    fn test_verb_forms_edge_cases() {
        assert_eq!(verb_forms("e"), forms("ed", "eing"));
        assert_eq!(verb_forms(""), forms("ed", "ing"));
    }
}
