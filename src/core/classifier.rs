//! Stem classifier — assigns each stem exactly one word-ending category.
//!
//! The ordered tests mirror the rule chains: irregular lexicon membership
//! first, then specific final consonants, then long vowels, then short
//! vowels. A stem matching none of a class's shapes is a data-quality
//! error, not a silent default.

use thiserror::Error;

use super::lexicon::ExceptionSet;
use super::phonology;
use crate::schema::category::VerbClass;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stem '{stem}' matches no {} ending shape", class.label())]
pub struct UnclassifiedStem {
    pub class: VerbClass,
    pub stem: String,
}

/// VAI stem-final shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaiEnding {
    /// Short- or long-vowel final (one partition for most rules; the
    /// short/long distinction only matters for 1s/2s truncation).
    Vowel,
    /// `n`- or `am`-final.
    NAm,
}

/// VII stem-final shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViiEnding {
    /// Exception-lexicon member (dummy final n).
    IrregularN,
    /// `d`- or `n`-final.
    DN,
    LongVowel,
    ShortVowel,
}

/// VTI stem-final shapes. The regular/irregular split for VTI depends
/// jointly on this ending and the pronoun, so the rule predicates do the
/// rest of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtiEnding {
    Aan,
    An,
    Oon,
    In,
}

/// A classified word ending, tagged by verb class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEnding {
    Vai(VaiEnding),
    Vii(ViiEnding),
    Vti(VtiEnding),
}

/// Assigns the word-ending category for `stem` under `class`.
pub fn classify(
    class: VerbClass,
    stem: &str,
    exceptions: &ExceptionSet,
) -> Result<WordEnding, UnclassifiedStem> {
    let ending = match class {
        VerbClass::Vai => classify_vai(stem).map(WordEnding::Vai),
        VerbClass::Vii => classify_vii(stem, exceptions).map(WordEnding::Vii),
        VerbClass::Vti => classify_vti(stem).map(WordEnding::Vti),
    };
    ending.ok_or_else(|| UnclassifiedStem {
        class,
        stem: stem.to_string(),
    })
}

fn classify_vai(stem: &str) -> Option<VaiEnding> {
    if phonology::ends_in_vowel(stem) {
        Some(VaiEnding::Vowel)
    } else if stem.ends_with('n') || stem.ends_with("am") {
        Some(VaiEnding::NAm)
    } else {
        None
    }
}

fn classify_vii(stem: &str, exceptions: &ExceptionSet) -> Option<ViiEnding> {
    if exceptions.contains(stem) {
        Some(ViiEnding::IrregularN)
    } else if stem.ends_with('d') || stem.ends_with('n') {
        Some(ViiEnding::DN)
    } else if phonology::ends_in_long_vowel(stem) {
        Some(ViiEnding::LongVowel)
    } else if phonology::ends_in_short_vowel(stem) {
        Some(ViiEnding::ShortVowel)
    } else {
        None
    }
}

fn classify_vti(stem: &str) -> Option<VtiEnding> {
    if stem.ends_with("aan") {
        Some(VtiEnding::Aan)
    } else if stem.ends_with("oon") {
        Some(VtiEnding::Oon)
    } else if stem.ends_with("in") {
        Some(VtiEnding::In)
    } else if stem.ends_with("an") {
        Some(VtiEnding::An)
    } else {
        None
    }
}
