//! Stem-shape predicates for the double-vowel orthography.
//!
//! The paradigm rules dispatch on the final sound of a stem: short vowel,
//! long vowel (a digraph, or the inherently long `e`), or specific final
//! consonants. Everything here is a pure string predicate.

/// Short vowels of the double-vowel orthography.
pub const SHORT_VOWELS: [&str; 3] = ["a", "i", "o"];

/// Long vowels. `e` has no short counterpart and patterns long.
pub const LONG_VOWELS: [&str; 4] = ["aa", "e", "ii", "oo"];

/// True if the stem ends in a long vowel (digraph or `e`).
pub fn ends_in_long_vowel(stem: &str) -> bool {
    LONG_VOWELS.iter().any(|v| stem.ends_with(v))
}

/// True if the stem ends in a short vowel. A digraph final like `aa`
/// also ends in the letter `a`, so long-vowel finals are excluded here.
pub fn ends_in_short_vowel(stem: &str) -> bool {
    SHORT_VOWELS.iter().any(|v| stem.ends_with(v)) && !ends_in_long_vowel(stem)
}

/// True if the stem ends in any vowel, short or long.
pub fn ends_in_vowel(stem: &str) -> bool {
    ends_in_long_vowel(stem) || ends_in_short_vowel(stem)
}

/// The word-initial sound: a leading long-vowel digraph if present,
/// otherwise the first letter. Used by the pronoun-prefix selector to
/// pick an allomorph.
pub fn initial_sound(word: &str) -> Option<&str> {
    if word.is_empty() {
        return None;
    }
    for v in LONG_VOWELS {
        if v.len() > 1 && word.starts_with(v) {
            return Some(&word[..v.len()]);
        }
    }
    let first = word.chars().next()?;
    Some(&word[..first.len_utf8()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_vowel_finals() {
        assert!(ends_in_long_vowel("gisinaa"));
        assert!(ends_in_long_vowel("nibaa"));
        assert!(ends_in_long_vowel("ashange"));
        assert!(ends_in_long_vowel("debisinii"));
        assert!(!ends_in_long_vowel("wiisini"));
        assert!(!ends_in_long_vowel("bakaanad"));
    }

    #[test]
    fn short_vowel_finals() {
        assert!(ends_in_short_vowel("wiisini"));
        assert!(ends_in_short_vowel("ikido"));
        assert!(ends_in_short_vowel("ojibwemo"));
        // Digraph finals are long, not short.
        assert!(!ends_in_short_vowel("gisinaa"));
        assert!(!ends_in_short_vowel("bangishin"));
    }

    #[test]
    fn vowel_finals() {
        assert!(ends_in_vowel("nibaa"));
        assert!(ends_in_vowel("wiisini"));
        assert!(!ends_in_vowel("jiikendam"));
        assert!(!ends_in_vowel("zoogipon"));
    }

    #[test]
    fn initial_sounds() {
        assert_eq!(initial_sound("wiisini"), Some("w"));
        assert_eq!(initial_sound("aabawaa"), Some("aa"));
        assert_eq!(initial_sound("ikido"), Some("i"));
        assert_eq!(initial_sound("ojibwemo"), Some("o"));
        assert_eq!(initial_sound("e-izhichiged"), Some("e"));
        assert_eq!(initial_sound(""), None);
    }
}
