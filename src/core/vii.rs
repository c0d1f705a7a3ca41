//! VII rule chains: `d`/`n` finals, vowel finals, and the irregular
//! weather/season stems whose final `n` is not part of the stem proper.

use crate::core::phonology;
use crate::core::rules::{RuleInput, RuleOutcome, SuffixRule};
use crate::core::suffix_table::SuffixSet;
use crate::schema::category::{Form, Polarity, Pronoun};
use crate::schema::request::{StemEdit, StemMutation};

fn plain(input: &RuleInput, set: SuffixSet) -> RuleOutcome {
    RuleOutcome {
        mutation: StemMutation::unchanged(input.stem),
        set,
        object_key: None,
    }
}

fn drop_final_consonant(input: &RuleInput, set: SuffixSet) -> RuleOutcome {
    RuleOutcome {
        mutation: StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
        set,
        object_key: None,
    }
}

/// Selects the VII rule chain for a clause form and polarity. VII has no
/// imperative; request validation rejects it before rule selection.
pub(crate) fn rules(form: Form, polarity: Polarity) -> &'static [SuffixRule] {
    match (form, polarity) {
        (Form::Independent, Polarity::Affirmative) => INDEPENDENT_AFFIRMATIVE,
        (Form::Independent, Polarity::Negative) => INDEPENDENT_NEGATIVE,
        (Form::Dependent, Polarity::Affirmative) => DEPENDENT_AFFIRMATIVE,
        (Form::Dependent, Polarity::Negative) => DEPENDENT_NEGATIVE,
        (Form::Imperative, _) => &[],
    }
}

// Irregular stems shed their dummy n only in the plural; in the other
// cells they pattern with the regular n finals.
static INDEPENDENT_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "irregular stem, inanimate plural",
        applies: |input| {
            input.exceptions.contains(input.stem) && input.pronoun == Pronoun::InanimatePlural
        },
        resolve: |input| drop_final_consonant(input, SuffixSet::LongVowel),
    },
    SuffixRule {
        name: "d or n final",
        applies: |input| input.stem.ends_with('d') || input.stem.ends_with('n'),
        resolve: |input| plain(input, SuffixSet::DN),
    },
    SuffixRule {
        name: "long-vowel final",
        applies: |input| phonology::ends_in_long_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::LongVowel),
    },
    SuffixRule {
        name: "short-vowel final",
        applies: |input| phonology::ends_in_short_vowel(input.stem),
        resolve: |input| RuleOutcome {
            mutation: StemMutation::drop_final(input.stem, StemEdit::DropFinalVowel),
            set: SuffixSet::ShortVowel,
            object_key: None,
        },
    },
];

static INDEPENDENT_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "d final or irregular stem",
        applies: |input| input.stem.ends_with('d') || input.exceptions.contains(input.stem),
        resolve: |input| drop_final_consonant(input, SuffixSet::DOrVowel),
    },
    SuffixRule {
        name: "n final",
        applies: |input| input.stem.ends_with('n'),
        resolve: |input| plain(input, SuffixSet::N),
    },
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::DOrVowel),
    },
];

// The d partition only exists for the proximate pronouns; a d-final stem
// with an obviative subject matches no rule.
static DEPENDENT_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "d final, proximate",
        applies: |input| {
            input.stem.ends_with('d')
                && matches!(
                    input.pronoun,
                    Pronoun::InanimateSingular | Pronoun::InanimatePlural
                )
        },
        resolve: |input| drop_final_consonant(input, SuffixSet::D),
    },
    SuffixRule {
        name: "irregular stem",
        applies: |input| input.exceptions.contains(input.stem),
        resolve: |input| drop_final_consonant(input, SuffixSet::N),
    },
    SuffixRule {
        name: "n final",
        applies: |input| input.stem.ends_with('n'),
        resolve: |input| plain(input, SuffixSet::N),
    },
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::Vowel),
    },
];

static DEPENDENT_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "d final",
        applies: |input| input.stem.ends_with('d'),
        resolve: |input| drop_final_consonant(input, SuffixSet::DOrVowel),
    },
    SuffixRule {
        name: "irregular stem",
        applies: |input| input.exceptions.contains(input.stem),
        resolve: |input| drop_final_consonant(input, SuffixSet::DOrVowel),
    },
    SuffixRule {
        name: "n final",
        applies: |input| input.stem.ends_with('n'),
        resolve: |input| plain(input, SuffixSet::N),
    },
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::DOrVowel),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::ExceptionLexicon;
    use crate::core::rules::first_match;

    fn run(
        form: Form,
        polarity: Polarity,
        stem: &str,
        pronoun: Pronoun,
    ) -> Option<(String, StemEdit, SuffixSet)> {
        let exceptions = ExceptionLexicon::builtin().unwrap().vii;
        let input = RuleInput {
            stem,
            pronoun,
            object: None,
            exceptions: &exceptions,
        };
        first_match(rules(form, polarity), &input)
            .map(|(_, o)| (o.mutation.stem, o.mutation.edit, o.set))
    }

    #[test]
    fn irregular_plural_outranks_the_n_final_rule() {
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Affirmative,
                "dakaagamin",
                Pronoun::InanimatePlural
            ),
            Some((
                "dakaagami".into(),
                StemEdit::DropFinalConsonant,
                SuffixSet::LongVowel
            ))
        );
        // Singular irregulars pattern with the regular d/n finals.
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Affirmative,
                "zoogipon",
                Pronoun::InanimateSingular
            ),
            Some(("zoogipon".into(), StemEdit::None, SuffixSet::DN))
        );
    }

    #[test]
    fn regular_finals_route_by_shape() {
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Affirmative,
                "bakaanad",
                Pronoun::InanimatePlural
            ),
            Some(("bakaanad".into(), StemEdit::None, SuffixSet::DN))
        );
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Affirmative,
                "gisinaa",
                Pronoun::InanimatePlural
            ),
            Some(("gisinaa".into(), StemEdit::None, SuffixSet::LongVowel))
        );
    }

    #[test]
    fn negative_drops_d_and_dummy_n() {
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Negative,
                "bakaanad",
                Pronoun::InanimateSingular
            ),
            Some((
                "bakaana".into(),
                StemEdit::DropFinalConsonant,
                SuffixSet::DOrVowel
            ))
        );
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Negative,
                "dakaagamin",
                Pronoun::InanimateSingular
            ),
            Some((
                "dakaagami".into(),
                StemEdit::DropFinalConsonant,
                SuffixSet::DOrVowel
            ))
        );
        assert_eq!(
            run(
                Form::Independent,
                Polarity::Negative,
                "wanisin",
                Pronoun::InanimateSingular
            ),
            Some(("wanisin".into(), StemEdit::None, SuffixSet::N))
        );
    }

    #[test]
    fn dependent_d_partition_is_proximate_only() {
        assert_eq!(
            run(
                Form::Dependent,
                Polarity::Affirmative,
                "bakaanad",
                Pronoun::InanimatePlural
            ),
            Some((
                "bakaana".into(),
                StemEdit::DropFinalConsonant,
                SuffixSet::D
            ))
        );
        assert_eq!(
            run(
                Form::Dependent,
                Polarity::Affirmative,
                "bakaanad",
                Pronoun::InanimatePluralObviative
            ),
            None
        );
    }

    #[test]
    fn imperative_has_no_rules() {
        assert_eq!(
            run(
                Form::Imperative,
                Polarity::Affirmative,
                "gisinaa",
                Pronoun::InanimateSingular
            ),
            None
        );
    }
}
