//! VAI rule chains: stems ending in a vowel, in `n`, or in `am`.

use crate::core::phonology;
use crate::core::rules::{RuleInput, RuleOutcome, SuffixRule};
use crate::core::suffix_table::SuffixSet;
use crate::schema::category::{Form, Polarity, Pronoun};
use crate::schema::request::{StemEdit, StemMutation};

// 1p, 21, 2p: the plural pronouns whose suffixes attach to an edited stem.
fn non_third_plural(pronoun: Pronoun) -> bool {
    matches!(
        pronoun,
        Pronoun::FirstPluralExclusive | Pronoun::FirstPluralInclusive | Pronoun::SecondPlural
    )
}

fn singular_local(pronoun: Pronoun) -> bool {
    matches!(pronoun, Pronoun::FirstSingular | Pronoun::SecondSingular)
}

fn plain(input: &RuleInput, set: SuffixSet) -> RuleOutcome {
    RuleOutcome {
        mutation: StemMutation::unchanged(input.stem),
        set,
        object_key: None,
    }
}

/// Selects the VAI rule chain for a clause form and polarity.
pub(crate) fn rules(form: Form, polarity: Polarity) -> &'static [SuffixRule] {
    match (form, polarity) {
        (Form::Independent, Polarity::Affirmative) => INDEPENDENT_AFFIRMATIVE,
        (Form::Independent, Polarity::Negative) => INDEPENDENT_NEGATIVE,
        (Form::Dependent, _) | (Form::Imperative, _) => SHAPE_ONLY,
    }
}

// In the independent affirmative, short-vowel finals truncate before the
// bare 1s/2s suffix, and n/am finals epenthesize before the non-third
// plural suffixes.
static INDEPENDENT_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "short-vowel final, singular local person",
        applies: |input| {
            phonology::ends_in_short_vowel(input.stem) && singular_local(input.pronoun)
        },
        resolve: |input| RuleOutcome {
            mutation: StemMutation::drop_final(input.stem, StemEdit::DropFinalVowel),
            set: SuffixSet::Vowel,
            object_key: None,
        },
    },
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::Vowel),
    },
    SuffixRule {
        name: "n final, non-third plural",
        applies: |input| input.stem.ends_with('n') && non_third_plural(input.pronoun),
        resolve: |input| RuleOutcome {
            mutation: StemMutation::append(input.stem, "i", StemEdit::AppendEpentheticVowel),
            set: SuffixSet::NAm,
            object_key: None,
        },
    },
    SuffixRule {
        name: "am final, non-third plural",
        applies: |input| input.stem.ends_with("am") && non_third_plural(input.pronoun),
        resolve: |input| RuleOutcome {
            mutation: StemMutation::replace_final(
                input.stem,
                "a",
                StemEdit::SubstituteFinalConsonant,
            ),
            set: SuffixSet::NAm,
            object_key: None,
        },
    },
    SuffixRule {
        name: "n or am final",
        applies: |input| input.stem.ends_with('n') || input.stem.ends_with("am"),
        resolve: |input| plain(input, SuffixSet::NAm),
    },
];

// Negative `am` finals surface as `n` before the z-initial suffixes.
static INDEPENDENT_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::Vowel),
    },
    SuffixRule {
        name: "am final",
        applies: |input| input.stem.ends_with("am"),
        resolve: |input| RuleOutcome {
            mutation: StemMutation::replace_final(
                input.stem,
                "n",
                StemEdit::SubstituteFinalConsonant,
            ),
            set: SuffixSet::NAm,
            object_key: None,
        },
    },
    SuffixRule {
        name: "n final",
        applies: |input| input.stem.ends_with('n'),
        resolve: |input| plain(input, SuffixSet::NAm),
    },
];

// Dependent and imperative forms never edit the stem; the partition alone
// carries the ending distinction.
static SHAPE_ONLY: &[SuffixRule] = &[
    SuffixRule {
        name: "vowel final",
        applies: |input| phonology::ends_in_vowel(input.stem),
        resolve: |input| plain(input, SuffixSet::Vowel),
    },
    SuffixRule {
        name: "n or am final",
        applies: |input| input.stem.ends_with('n') || input.stem.ends_with("am"),
        resolve: |input| plain(input, SuffixSet::NAm),
    },
];
