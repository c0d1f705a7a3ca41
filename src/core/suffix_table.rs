//! The suffix table — one flat mapping over fully-enumerated keys.
//!
//! The paradigm data lives in RON documents (one per verb class, embedded
//! as defaults) as a list of cells keyed by the composite
//! (class, form, polarity, suffix set, pronoun, object?). A flat map with
//! a total key avoids the partial-lookup failure modes of nested tables;
//! `validate` checks at startup that every partition a rule can reach is
//! fully populated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::category::{Form, ObjectNumber, Polarity, Pronoun, VerbClass};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("duplicate suffix cell for {0:?}")]
    DuplicateEntry(SuffixKey),
    #[error("missing suffix cell for {0:?}")]
    MissingEntry(SuffixKey),
}

/// The suffix sub-table a rule selects into. Partition names are scoped by
/// the verb class carried alongside them in the key, so e.g. `Vowel` under
/// VAI and under VII are distinct partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuffixSet {
    /// VAI short-or-long-vowel finals; VII dependent vowel finals.
    Vowel,
    /// VAI `n`/`am` finals.
    NAm,
    /// VII independent affirmative `d`/`n` finals.
    DN,
    /// VII long-vowel finals (also the irregular-plural target).
    LongVowel,
    /// VII short-vowel finals.
    ShortVowel,
    /// VII true-`n` finals (negative and dependent partitions).
    N,
    /// VII dependent affirmative `d` finals.
    D,
    /// VII combined `d`-or-vowel negative partition.
    DOrVowel,
    /// VTI independent affirmative, all endings unified.
    Unified,
    /// VTI `an`/`aan` finals.
    AnAan,
    /// VTI `oon`/`in` finals.
    OonIn,
}

/// Composite lookup key. `object` is populated only for the VTI
/// independent partitions, whose suffixes differ by object number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffixKey {
    pub class: VerbClass,
    pub form: Form,
    pub polarity: Polarity,
    pub set: SuffixSet,
    pub pronoun: Pronoun,
    pub object: Option<ObjectNumber>,
}

/// One table cell: a fixed suffix string, or an allomorph pair
/// disambiguated by object number (the VTI imperative 21 cells).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixCell {
    Fixed(String),
    ByObject { singular: String, plural: String },
}

impl SuffixCell {
    /// Resolves the cell to a suffix string. `ByObject` cells need the
    /// request's object number; a `ByObject` cell outside VTI cannot be
    /// reached through validated requests.
    pub fn resolve(&self, object: Option<ObjectNumber>) -> Option<&str> {
        match self {
            Self::Fixed(s) => Some(s),
            Self::ByObject { singular, plural } => match object? {
                ObjectNumber::Singular => Some(singular),
                ObjectNumber::Plural => Some(plural),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuffixEntry {
    class: VerbClass,
    form: Form,
    polarity: Polarity,
    set: SuffixSet,
    pronoun: Pronoun,
    #[serde(default)]
    object: Option<ObjectNumber>,
    cell: SuffixCell,
}

/// The frozen suffix paradigm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuffixTable {
    cells: FxHashMap<SuffixKey, SuffixCell>,
}

impl SuffixTable {
    /// The paradigm shipped with the crate, merged from the three
    /// per-class data files.
    pub fn builtin() -> Result<Self, TableError> {
        let mut table = Self::default();
        table.merge_ron(include_str!("../../data/vai_suffixes.ron"))?;
        table.merge_ron(include_str!("../../data/vii_suffixes.ron"))?;
        table.merge_ron(include_str!("../../data/vti_suffixes.ron"))?;
        Ok(table)
    }

    /// Parses a RON cell list into a fresh table.
    pub fn parse_ron(input: &str) -> Result<Self, TableError> {
        let mut table = Self::default();
        table.merge_ron(input)?;
        Ok(table)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, TableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Merges a RON cell list into this table. A key already present is a
    /// data error, not an override.
    pub fn merge_ron(&mut self, input: &str) -> Result<(), TableError> {
        let entries: Vec<SuffixEntry> = ron::from_str(input)?;
        for entry in entries {
            let key = SuffixKey {
                class: entry.class,
                form: entry.form,
                polarity: entry.polarity,
                set: entry.set,
                pronoun: entry.pronoun,
                object: entry.object,
            };
            if self.cells.insert(key, entry.cell).is_some() {
                return Err(TableError::DuplicateEntry(key));
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &SuffixKey) -> Option<&SuffixCell> {
        self.cells.get(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SuffixKey, &SuffixCell)> {
        self.cells.iter()
    }

    /// Checks that every (class, form, polarity, set) partition the rule
    /// chains can select has a cell for every pronoun (and, where the
    /// partition is object-split, for both object numbers). Returns the
    /// first missing key.
    pub fn validate(&self) -> Result<(), TableError> {
        match self.missing_cells().into_iter().next() {
            Some(key) => Err(TableError::MissingEntry(key)),
            None => Ok(()),
        }
    }

    /// Every required key without a cell, in partition order. The linter
    /// reports the full list; `validate` only needs the first.
    pub fn missing_cells(&self) -> Vec<SuffixKey> {
        let mut missing = Vec::new();
        for partition in required_partitions() {
            for &pronoun in partition.pronouns {
                for &object in partition.objects {
                    let key = SuffixKey {
                        class: partition.class,
                        form: partition.form,
                        polarity: partition.polarity,
                        set: partition.set,
                        pronoun,
                        object,
                    };
                    if !self.cells.contains_key(&key) {
                        missing.push(key);
                    }
                }
            }
        }
        missing
    }
}

struct Partition {
    class: VerbClass,
    form: Form,
    polarity: Polarity,
    set: SuffixSet,
    pronouns: &'static [Pronoun],
    objects: &'static [Option<ObjectNumber>],
}

const ANIMATE: &[Pronoun] = &[
    Pronoun::FirstSingular,
    Pronoun::SecondSingular,
    Pronoun::ThirdSingular,
    Pronoun::FirstPluralExclusive,
    Pronoun::FirstPluralInclusive,
    Pronoun::SecondPlural,
    Pronoun::ThirdPlural,
];

const COMMANDABLE: &[Pronoun] = &[
    Pronoun::SecondSingular,
    Pronoun::FirstPluralInclusive,
    Pronoun::SecondPlural,
];

const INANIMATE: &[Pronoun] = &[
    Pronoun::InanimateSingular,
    Pronoun::InanimatePlural,
    Pronoun::InanimateSingularObviative,
    Pronoun::InanimatePluralObviative,
];

const INANIMATE_PROXIMATE: &[Pronoun] = &[Pronoun::InanimateSingular, Pronoun::InanimatePlural];

const NO_OBJECT: &[Option<ObjectNumber>] = &[None];
const BOTH_OBJECTS: &[Option<ObjectNumber>] = &[
    Some(ObjectNumber::Singular),
    Some(ObjectNumber::Plural),
];

/// Every partition reachable from a rule chain, with the pronoun set the
/// chain can match into it.
fn required_partitions() -> Vec<Partition> {
    use Form::*;
    use Polarity::*;
    use SuffixSet::*;
    use VerbClass::*;

    let mut partitions = Vec::new();
    let mut push = |class, form, polarity, set, pronouns, objects| {
        partitions.push(Partition {
            class,
            form,
            polarity,
            set,
            pronouns,
            objects,
        });
    };

    // VAI: vowel and n/am partitions in every cell, command pronouns only
    // in the imperative.
    for polarity in [Affirmative, Negative] {
        for set in [Vowel, NAm] {
            push(Vai, Independent, polarity, set, ANIMATE, NO_OBJECT);
            push(Vai, Dependent, polarity, set, ANIMATE, NO_OBJECT);
            push(Vai, Imperative, polarity, set, COMMANDABLE, NO_OBJECT);
        }
    }

    // VII: no imperative; the dependent-affirmative d partition only ever
    // receives proximate pronouns.
    for set in [DN, LongVowel, ShortVowel] {
        push(Vii, Independent, Affirmative, set, INANIMATE, NO_OBJECT);
    }
    push(Vii, Independent, Negative, N, INANIMATE, NO_OBJECT);
    push(Vii, Independent, Negative, DOrVowel, INANIMATE, NO_OBJECT);
    push(Vii, Dependent, Affirmative, D, INANIMATE_PROXIMATE, NO_OBJECT);
    push(Vii, Dependent, Affirmative, N, INANIMATE, NO_OBJECT);
    push(Vii, Dependent, Affirmative, Vowel, INANIMATE, NO_OBJECT);
    push(Vii, Dependent, Negative, N, INANIMATE, NO_OBJECT);
    push(Vii, Dependent, Negative, DOrVowel, INANIMATE, NO_OBJECT);

    // VTI: the independent partitions are split by object number; the
    // dependent and imperative partitions are not (the imperative 21
    // cells carry the object split inside the cell instead).
    push(Vti, Independent, Affirmative, Unified, ANIMATE, BOTH_OBJECTS);
    push(Vti, Independent, Negative, AnAan, ANIMATE, BOTH_OBJECTS);
    push(Vti, Independent, Negative, OonIn, ANIMATE, BOTH_OBJECTS);
    for polarity in [Affirmative, Negative] {
        for set in [AnAan, OonIn] {
            push(Vti, Dependent, polarity, set, ANIMATE, NO_OBJECT);
            push(Vti, Imperative, polarity, set, COMMANDABLE, NO_OBJECT);
        }
    }

    partitions
}
