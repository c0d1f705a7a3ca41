//! The rule machinery shared by the three verb-class engines.
//!
//! A rule chain is a fixed-order slice of (predicate, resolver) pairs; the
//! first rule whose predicate accepts the input wins, and a chain with no
//! matching rule is reported to the caller rather than papered over with a
//! default.

use crate::core::lexicon::ExceptionSet;
use crate::core::suffix_table::SuffixSet;
use crate::schema::category::{ObjectNumber, Pronoun};
use crate::schema::request::StemMutation;

/// What a rule predicate sees: the raw stem plus the request fields that
/// influence stem shape.
pub(crate) struct RuleInput<'a> {
    pub stem: &'a str,
    pub pronoun: Pronoun,
    pub object: Option<ObjectNumber>,
    pub exceptions: &'a ExceptionSet,
}

/// What a matching rule produces: the edited stem, the suffix partition to
/// look into, and whether the table key carries the object number.
pub(crate) struct RuleOutcome {
    pub mutation: StemMutation,
    pub set: SuffixSet,
    /// `Some` only where the partition is keyed by object number (the VTI
    /// independent cells).
    pub object_key: Option<ObjectNumber>,
}

/// One ordered rule. `name` only appears in diagnostics.
pub(crate) struct SuffixRule {
    pub name: &'static str,
    pub applies: fn(&RuleInput) -> bool,
    pub resolve: fn(&RuleInput) -> RuleOutcome,
}

/// Runs `chain` over `input`, returning the first match.
pub(crate) fn first_match<'c>(
    chain: &'c [SuffixRule],
    input: &RuleInput,
) -> Option<(&'c SuffixRule, RuleOutcome)> {
    chain
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| (rule, (rule.resolve)(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::ExceptionSet;
    use crate::schema::request::StemEdit;

    fn input<'a>(stem: &'a str, exceptions: &'a ExceptionSet) -> RuleInput<'a> {
        RuleInput {
            stem,
            pronoun: Pronoun::FirstSingular,
            object: None,
            exceptions,
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        static CHAIN: &[SuffixRule] = &[
            SuffixRule {
                name: "never",
                applies: |_| false,
                resolve: |input| RuleOutcome {
                    mutation: StemMutation::unchanged(input.stem),
                    set: SuffixSet::Vowel,
                    object_key: None,
                },
            },
            SuffixRule {
                name: "always",
                applies: |_| true,
                resolve: |input| RuleOutcome {
                    mutation: StemMutation::drop_final(input.stem, StemEdit::DropFinalVowel),
                    set: SuffixSet::NAm,
                    object_key: None,
                },
            },
        ];
        let exceptions = ExceptionSet::default();
        let input = input("nibaa", &exceptions);
        let (rule, outcome) = first_match(CHAIN, &input).unwrap();
        assert_eq!(rule.name, "always");
        assert_eq!(outcome.mutation.stem, "niba");
        assert_eq!(outcome.set, SuffixSet::NAm);
    }

    #[test]
    fn empty_chain_matches_nothing() {
        let exceptions = ExceptionSet::default();
        let input = input("nibaa", &exceptions);
        assert!(first_match(&[], &input).is_none());
    }
}
