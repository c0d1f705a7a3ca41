//! Prefix selection for independent-order verbs: tense preverbs and the
//! personal-prefix allomorphs conditioned on the word-initial sound.
//!
//! The pipeline order matters: the tense preverb attaches first, and the
//! personal prefix then reacts to the preverb's initial sound rather than
//! the bare stem's (so `wiisini` in the past becomes `nigii-wiisini`, not
//! `niwiisini` with a preverb squeezed inside).

use thiserror::Error;

use crate::core::phonology;
use crate::schema::category::{Form, Pronoun, Tense, VerbClass};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefixError {
    #[error("no personal-prefix allomorph for the initial sound of '{word}'")]
    UnmappedInitial { word: String },
}

/// A personally-prefixed word. First-person prefixes vary by community
/// (`in-`, `ni-`, `nin-`, ...), so those come back as the full allomorph
/// list rather than one arbitrary pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefixed {
    One(String),
    Many(Vec<String>),
}

impl Prefixed {
    /// All spellings, in a stable order.
    pub fn variants(&self) -> Vec<&str> {
        match self {
            Self::One(word) => vec![word.as_str()],
            Self::Many(words) => words.iter().map(String::as_str).collect(),
        }
    }
}

/// Attaches the tense preverb. The definitive future splits by person:
/// `ga-` with first and second persons, `da-` with third persons and
/// inanimate subjects.
pub fn tense_prefix(word: &str, pronoun: Pronoun, tense: Tense) -> String {
    let preverb = match tense {
        Tense::Present => return word.to_string(),
        Tense::Past => "gii",
        Tense::Desiderative => "wii",
        Tense::Conditional => "daa",
        Tense::Definitive => match pronoun {
            Pronoun::FirstSingular
            | Pronoun::SecondSingular
            | Pronoun::FirstPluralExclusive
            | Pronoun::FirstPluralInclusive
            | Pronoun::SecondPlural => "ga",
            _ => "da",
        },
    };
    format!("{preverb}-{word}")
}

/// Attaches the personal prefix for an independent-order word.
///
/// Dependent and imperative forms carry person in the suffix alone, VII
/// verbs never take a personal prefix, and third-person VAI subjects are
/// unmarked; all of those come back unchanged. Third-person VTI subjects
/// take the possessive-shaped `o-` prefix.
pub fn pronoun_prefix(
    word: &str,
    class: VerbClass,
    form: Form,
    pronoun: Pronoun,
) -> Result<Prefixed, PrefixError> {
    if form != Form::Independent || class == VerbClass::Vii {
        return Ok(Prefixed::One(word.to_string()));
    }
    let third_person = matches!(pronoun, Pronoun::ThirdSingular | Pronoun::ThirdPlural);
    if third_person && class == VerbClass::Vai {
        return Ok(Prefixed::One(word.to_string()));
    }

    let initial = phonology::initial_sound(word).ok_or_else(|| PrefixError::UnmappedInitial {
        word: word.to_string(),
    })?;
    let allomorphs = match pronoun {
        Pronoun::FirstSingular | Pronoun::FirstPluralExclusive => first_person(initial),
        Pronoun::SecondSingular | Pronoun::FirstPluralInclusive | Pronoun::SecondPlural => {
            second_person(initial)
        }
        Pronoun::ThirdSingular | Pronoun::ThirdPlural => third_person_vti(initial),
        _ => None,
    }
    .ok_or_else(|| PrefixError::UnmappedInitial {
        word: word.to_string(),
    })?;

    let mut words: Vec<String> = allomorphs
        .iter()
        .map(|prefix| format!("{prefix}{word}"))
        .collect();
    if words.len() == 1 {
        Ok(Prefixed::One(words.remove(0)))
    } else {
        Ok(Prefixed::Many(words))
    }
}

/// The full pipeline: tense preverb, then personal prefix.
pub fn prefixed(
    word: &str,
    class: VerbClass,
    form: Form,
    pronoun: Pronoun,
    tense: Tense,
) -> Result<Prefixed, PrefixError> {
    let with_tense = tense_prefix(word, pronoun, tense);
    pronoun_prefix(&with_tense, class, form, pronoun)
}

fn first_person(initial: &str) -> Option<&'static [&'static str]> {
    match initial {
        "b" => Some(&["im", "ni", "nim"]),
        "d" | "g" | "j" | "z" => Some(&["in", "ni", "nin"]),
        "m" | "n" | "w" => Some(&["ni"]),
        "a" | "i" | "aa" | "e" | "ii" | "oo" => Some(&["ind", "nid", "nind"]),
        "o" => Some(&["indo", "nido", "nindo"]),
        _ => None,
    }
}

fn second_person(initial: &str) -> Option<&'static [&'static str]> {
    match initial {
        "b" | "d" | "g" | "j" | "m" | "n" | "w" | "z" => Some(&["gi"]),
        "a" | "i" | "aa" | "e" | "ii" | "oo" => Some(&["gid"]),
        "o" => Some(&["gido"]),
        _ => None,
    }
}

fn third_person_vti(initial: &str) -> Option<&'static [&'static str]> {
    match initial {
        "b" | "d" | "g" | "j" | "m" | "n" | "w" | "z" => Some(&["o"]),
        "a" | "i" | "aa" | "e" | "ii" | "oo" => Some(&["od"]),
        "o" => Some(&["odo"]),
        _ => None,
    }
}
