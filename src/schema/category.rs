use serde::{Deserialize, Serialize};

/// The verb classes covered by the engine.
///
/// Verb class is the most important split in the paradigm: each class has
/// its own stem-shape partitions, rule chains, and suffix sub-tables. The
/// transitive-animate class (VTA) exists in the language but is not
/// implemented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbClass {
    /// Verb, animate intransitive.
    Vai,
    /// Verb, inanimate intransitive.
    Vii,
    /// Verb, transitive inanimate.
    Vti,
}

impl VerbClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vai => "vai",
            Self::Vii => "vii",
            Self::Vti => "vti",
        }
    }
}

/// Clause-type category governing which affix paradigm applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    Independent,
    Dependent,
    Imperative,
}

impl Form {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Dependent => "dependent",
            Self::Imperative => "imperative",
        }
    }
}

/// Affirmative vs. negative inflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Negative)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Affirmative => "affirmative",
            Self::Negative => "negative",
        }
    }
}

/// Subject pronoun: person × number × animacy × obviation.
///
/// The animate set serves VAI and VTI subjects; the inanimate set serves
/// VII subjects. Codes follow the conventional Algonquianist shorthand
/// (`21` is the first-person inclusive "you and I", `0` the inanimate
/// third person, `'` the obviative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pronoun {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPluralExclusive,
    FirstPluralInclusive,
    SecondPlural,
    ThirdPlural,
    InanimateSingular,
    InanimatePlural,
    InanimateSingularObviative,
    InanimatePluralObviative,
}

impl Pronoun {
    /// Conventional shorthand: "1s", "21", "0's", etc.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FirstSingular => "1s",
            Self::SecondSingular => "2s",
            Self::ThirdSingular => "3s",
            Self::FirstPluralExclusive => "1p",
            Self::FirstPluralInclusive => "21",
            Self::SecondPlural => "2p",
            Self::ThirdPlural => "3p",
            Self::InanimateSingular => "0s",
            Self::InanimatePlural => "0p",
            Self::InanimateSingularObviative => "0's",
            Self::InanimatePluralObviative => "0'p",
        }
    }

    /// True for the animate subject set (VAI/VTI).
    pub fn is_animate(&self) -> bool {
        !self.is_inanimate()
    }

    /// True for the inanimate subject set (VII).
    pub fn is_inanimate(&self) -> bool {
        matches!(
            self,
            Self::InanimateSingular
                | Self::InanimatePlural
                | Self::InanimateSingularObviative
                | Self::InanimatePluralObviative
        )
    }

    /// True for the pronouns that can receive a command: 2s, 21, 2p.
    pub fn can_take_imperative(&self) -> bool {
        matches!(
            self,
            Self::SecondSingular | Self::FirstPluralInclusive | Self::SecondPlural
        )
    }
}

impl std::fmt::Display for Pronoun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Grammatical number of a VTI direct object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectNumber {
    Singular,
    Plural,
}

/// Tense preverb category, consumed by the tense-prefix selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Present,
    Past,
    Definitive,
    Desiderative,
    Conditional,
}

/// Display category of a conjugated form, one per (form, polarity) cell.
///
/// The engine emits this tag instead of any formatting codes; the
/// presentation layer owns the mapping to a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    IndependentAffirmative,
    IndependentNegative,
    DependentAffirmative,
    DependentNegative,
    ImperativeAffirmative,
    ImperativeNegative,
}

impl CategoryTag {
    pub fn of(form: Form, polarity: Polarity) -> Self {
        match (form, polarity) {
            (Form::Independent, Polarity::Affirmative) => Self::IndependentAffirmative,
            (Form::Independent, Polarity::Negative) => Self::IndependentNegative,
            (Form::Dependent, Polarity::Affirmative) => Self::DependentAffirmative,
            (Form::Dependent, Polarity::Negative) => Self::DependentNegative,
            (Form::Imperative, Polarity::Affirmative) => Self::ImperativeAffirmative,
            (Form::Imperative, Polarity::Negative) => Self::ImperativeNegative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronoun_codes() {
        assert_eq!(Pronoun::FirstSingular.code(), "1s");
        assert_eq!(Pronoun::FirstPluralInclusive.code(), "21");
        assert_eq!(Pronoun::InanimateSingularObviative.code(), "0's");
    }

    #[test]
    fn pronoun_animacy_split() {
        assert!(Pronoun::FirstSingular.is_animate());
        assert!(Pronoun::ThirdPlural.is_animate());
        assert!(Pronoun::InanimatePlural.is_inanimate());
        assert!(!Pronoun::InanimatePlural.is_animate());
    }

    #[test]
    fn imperative_capable_pronouns() {
        assert!(Pronoun::SecondSingular.can_take_imperative());
        assert!(Pronoun::FirstPluralInclusive.can_take_imperative());
        assert!(Pronoun::SecondPlural.can_take_imperative());
        assert!(!Pronoun::FirstSingular.can_take_imperative());
        assert!(!Pronoun::ThirdPlural.can_take_imperative());
        assert!(!Pronoun::InanimateSingular.can_take_imperative());
    }

    #[test]
    fn tag_covers_every_cell() {
        let forms = [Form::Independent, Form::Dependent, Form::Imperative];
        let polarities = [Polarity::Affirmative, Polarity::Negative];
        let mut seen = std::collections::HashSet::new();
        for form in forms {
            for polarity in polarities {
                seen.insert(CategoryTag::of(form, polarity));
            }
        }
        assert_eq!(seen.len(), 6);
    }
}
