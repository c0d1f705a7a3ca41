//! VTI rule chains: stems ending in `an`/`aan` versus `oon`/`in`.
//!
//! Only the independent-order outcomes carry the object number into the
//! table key; the dependent and imperative partitions are object-neutral
//! (the imperative 21 cells split by object inside the cell).

use crate::core::rules::{RuleInput, RuleOutcome, SuffixRule};
use crate::core::suffix_table::SuffixSet;
use crate::schema::category::{Form, Polarity, Pronoun};
use crate::schema::request::{StemEdit, StemMutation};

fn first_plural(pronoun: Pronoun) -> bool {
    matches!(
        pronoun,
        Pronoun::FirstPluralExclusive | Pronoun::FirstPluralInclusive
    )
}

fn ends_oon_or_in(stem: &str) -> bool {
    stem.ends_with("oon") || stem.ends_with("in")
}

fn keyed(mutation: StemMutation, set: SuffixSet, input: &RuleInput) -> RuleOutcome {
    RuleOutcome {
        mutation,
        set,
        object_key: input.object,
    }
}

fn plain(mutation: StemMutation, set: SuffixSet) -> RuleOutcome {
    RuleOutcome {
        mutation,
        set,
        object_key: None,
    }
}

/// Selects the VTI rule chain for a clause form and polarity.
pub(crate) fn rules(form: Form, polarity: Polarity) -> &'static [SuffixRule] {
    match (form, polarity) {
        (Form::Independent, Polarity::Affirmative) => INDEPENDENT_AFFIRMATIVE,
        (Form::Independent, Polarity::Negative) => INDEPENDENT_NEGATIVE,
        (Form::Dependent, Polarity::Affirmative) => DEPENDENT_AFFIRMATIVE,
        (Form::Dependent, Polarity::Negative) => DEPENDENT_NEGATIVE,
        (Form::Imperative, Polarity::Affirmative) => IMPERATIVE_AFFIRMATIVE,
        (Form::Imperative, Polarity::Negative) => IMPERATIVE_NEGATIVE,
    }
}

// First-plural subjects truncate the final n before `min`; a bare `an`
// final lengthens to `aan` everywhere else in the independent affirmative.
static INDEPENDENT_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "aan final, first plural",
        applies: |input| input.stem.ends_with("aan") && first_plural(input.pronoun),
        resolve: |input| {
            keyed(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::Unified,
                input,
            )
        },
    },
    SuffixRule {
        name: "aan final",
        applies: |input| input.stem.ends_with("aan"),
        resolve: |input| keyed(StemMutation::unchanged(input.stem), SuffixSet::Unified, input),
    },
    SuffixRule {
        name: "an final, first plural",
        applies: |input| input.stem.ends_with("an") && first_plural(input.pronoun),
        resolve: |input| {
            keyed(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::Unified,
                input,
            )
        },
    },
    SuffixRule {
        name: "an final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| {
            // The theme vowel lengthens: -an surfaces as -aan.
            keyed(
                StemMutation::replace_final(input.stem, "an", StemEdit::AppendEpentheticVowel),
                SuffixSet::Unified,
                input,
            )
        },
    },
    SuffixRule {
        name: "oon or in final, first plural",
        applies: |input| ends_oon_or_in(input.stem) && first_plural(input.pronoun),
        resolve: |input| {
            keyed(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::Unified,
                input,
            )
        },
    },
    SuffixRule {
        name: "oon or in final",
        applies: |input| ends_oon_or_in(input.stem),
        resolve: |input| keyed(StemMutation::unchanged(input.stem), SuffixSet::Unified, input),
    },
];

static INDEPENDENT_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "an or aan final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| keyed(StemMutation::unchanged(input.stem), SuffixSet::AnAan, input),
    },
    SuffixRule {
        name: "oon or in final",
        applies: |input| ends_oon_or_in(input.stem),
        resolve: |input| {
            keyed(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::OonIn,
                input,
            )
        },
    },
];

// Non-third subjects replace the final n with m before the dependent
// suffixes; the third singular keeps the stem whole.
static DEPENDENT_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "an or aan final, third singular",
        applies: |input| input.stem.ends_with("an") && input.pronoun == Pronoun::ThirdSingular,
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::AnAan),
    },
    SuffixRule {
        name: "an or aan final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| {
            plain(
                StemMutation::replace_final(input.stem, "m", StemEdit::SubstituteObjectMarker),
                SuffixSet::AnAan,
            )
        },
    },
    SuffixRule {
        name: "oon final",
        applies: |input| input.stem.ends_with("oon"),
        resolve: |input| {
            plain(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::OonIn,
            )
        },
    },
    SuffixRule {
        name: "in final, third singular",
        applies: |input| input.stem.ends_with("in") && input.pronoun == Pronoun::ThirdSingular,
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::OonIn),
    },
    SuffixRule {
        name: "in final",
        applies: |input| input.stem.ends_with("in"),
        resolve: |input| {
            plain(
                StemMutation::replace_final(input.stem, "m", StemEdit::SubstituteObjectMarker),
                SuffixSet::OonIn,
            )
        },
    },
];

static DEPENDENT_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "an or aan final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::AnAan),
    },
    SuffixRule {
        name: "oon or in final",
        applies: |input| ends_oon_or_in(input.stem),
        resolve: |input| {
            plain(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::OonIn,
            )
        },
    },
];

static IMPERATIVE_AFFIRMATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "an or aan final, second plural",
        applies: |input| input.stem.ends_with("an") && input.pronoun == Pronoun::SecondPlural,
        resolve: |input| {
            plain(
                StemMutation::replace_final(input.stem, "m", StemEdit::SubstituteObjectMarker),
                SuffixSet::AnAan,
            )
        },
    },
    SuffixRule {
        name: "an or aan final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::AnAan),
    },
    SuffixRule {
        name: "oon or in final, second singular",
        applies: |input| ends_oon_or_in(input.stem) && input.pronoun == Pronoun::SecondSingular,
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::OonIn),
    },
    SuffixRule {
        name: "oon or in final",
        applies: |input| ends_oon_or_in(input.stem),
        resolve: |input| {
            plain(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::OonIn,
            )
        },
    },
];

static IMPERATIVE_NEGATIVE: &[SuffixRule] = &[
    SuffixRule {
        name: "an or aan final, second plural",
        applies: |input| input.stem.ends_with("an") && input.pronoun == Pronoun::SecondPlural,
        resolve: |input| {
            plain(
                StemMutation::replace_final(input.stem, "m", StemEdit::SubstituteObjectMarker),
                SuffixSet::AnAan,
            )
        },
    },
    SuffixRule {
        name: "an or aan final",
        applies: |input| input.stem.ends_with("an"),
        resolve: |input| plain(StemMutation::unchanged(input.stem), SuffixSet::AnAan),
    },
    SuffixRule {
        name: "oon or in final",
        applies: |input| ends_oon_or_in(input.stem),
        resolve: |input| {
            plain(
                StemMutation::drop_final(input.stem, StemEdit::DropFinalConsonant),
                SuffixSet::OonIn,
            )
        },
    },
];
