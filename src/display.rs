//! Terminal presentation of conjugated forms.
//!
//! The engine itself never emits escape codes; this layer maps a
//! [`CategoryTag`] to an ANSI style (color for polarity, weight/slant for
//! clause form) and underlines epenthetic letters when a caller wants the
//! stem edit made visible.

use crate::schema::category::CategoryTag;
use crate::schema::request::{ConjugationResult, StemEdit};

const RESET: &str = "\x1b[0m";
const UNDERLINE: &str = "\x1b[4m";

/// The ANSI style for a display category: green affirmative, red negative;
/// plain for independent, italic for dependent, bold for imperative.
pub fn style(tag: CategoryTag) -> &'static str {
    match tag {
        CategoryTag::IndependentAffirmative => "\x1b[0;32m",
        CategoryTag::IndependentNegative => "\x1b[0;31m",
        CategoryTag::DependentAffirmative => "\x1b[3;32m",
        CategoryTag::DependentNegative => "\x1b[3;31m",
        CategoryTag::ImperativeAffirmative => "\x1b[1;32m",
        CategoryTag::ImperativeNegative => "\x1b[1;31m",
    }
}

/// Wraps `text` in the category's style. Empty text stays empty so blank
/// table cells do not accumulate stray escape codes.
pub fn decorate(text: &str, tag: CategoryTag) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}{}{}", style(tag), text, RESET)
}

/// Renders a full result, underlining the final letter of the stem when
/// the rule appended an epenthetic sound or substituted the object-marking
/// consonant.
pub fn render(result: &ConjugationResult) -> String {
    let surface = match result.edit {
        StemEdit::AppendEpentheticVowel | StemEdit::SubstituteObjectMarker => {
            match result.stem.char_indices().next_back() {
                Some((idx, _)) => format!(
                    "{}{}{}{}{}",
                    &result.stem[..idx],
                    UNDERLINE,
                    &result.stem[idx..],
                    RESET,
                    result.suffix
                ),
                None => result.surface(),
            }
        }
        _ => result.surface(),
    };
    decorate(&surface, result.tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorate_wraps_nonempty_text() {
        let decorated = decorate("gisinaawan", CategoryTag::IndependentAffirmative);
        assert_eq!(decorated, "\x1b[0;32mgisinaawan\x1b[0m");
    }

    #[test]
    fn decorate_leaves_empty_text_alone() {
        assert_eq!(decorate("", CategoryTag::ImperativeNegative), "");
    }

    #[test]
    fn styles_differ_per_category() {
        let tags = [
            CategoryTag::IndependentAffirmative,
            CategoryTag::IndependentNegative,
            CategoryTag::DependentAffirmative,
            CategoryTag::DependentNegative,
            CategoryTag::ImperativeAffirmative,
            CategoryTag::ImperativeNegative,
        ];
        let mut seen = std::collections::HashSet::new();
        for tag in tags {
            seen.insert(style(tag));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn render_underlines_epenthetic_letters() {
        let result = ConjugationResult {
            stem: "bangishini".to_string(),
            suffix: "min".to_string(),
            tag: CategoryTag::IndependentAffirmative,
            edit: StemEdit::AppendEpentheticVowel,
        };
        let rendered = render(&result);
        assert!(rendered.contains("bangishin\x1b[4mi\x1b[0mmin"));
        assert!(rendered.starts_with("\x1b[0;32m"));
    }

    #[test]
    fn render_underlines_the_object_marker() {
        let result = ConjugationResult {
            stem: "miijim".to_string(),
            suffix: "yaan".to_string(),
            tag: CategoryTag::DependentAffirmative,
            edit: StemEdit::SubstituteObjectMarker,
        };
        let rendered = render(&result);
        assert!(rendered.contains("miiji\x1b[4mm\x1b[0myaan"));
        assert!(rendered.starts_with("\x1b[3;32m"));
    }

    #[test]
    fn render_leaves_subject_agreement_substitutions_plain() {
        let result = ConjugationResult {
            stem: "jiikendan".to_string(),
            suffix: "ziin".to_string(),
            tag: CategoryTag::IndependentNegative,
            edit: StemEdit::SubstituteFinalConsonant,
        };
        assert_eq!(render(&result), "\x1b[0;31mjiikendanziin\x1b[0m");
    }

    #[test]
    fn render_plain_for_unedited_stems() {
        let result = ConjugationResult {
            stem: "nibaa".to_string(),
            suffix: "wag".to_string(),
            tag: CategoryTag::IndependentAffirmative,
            edit: StemEdit::None,
        };
        assert_eq!(render(&result), "\x1b[0;32mnibaawag\x1b[0m");
    }
}
