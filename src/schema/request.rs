use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::{CategoryTag, Form, ObjectNumber, Polarity, Pronoun, VerbClass};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{} verbs do not take the {} form", class.label(), form.label())]
    InvalidForm { class: VerbClass, form: Form },
    #[error("pronoun '{pronoun}' cannot take the {} form", form.label())]
    UnsupportedPronoun { form: Form, pronoun: Pronoun },
    #[error("pronoun '{pronoun}' is not a valid {} subject", class.label())]
    PronounMismatch { class: VerbClass, pronoun: Pronoun },
    #[error("{} requests require an object number", class.label())]
    MissingObjectNumber { class: VerbClass },
    #[error("{} requests do not take an object number", class.label())]
    UnexpectedObjectNumber { class: VerbClass },
}

/// A single conjugation request. Owned by the caller, validated on entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationRequest {
    pub class: VerbClass,
    pub form: Form,
    pub stem: String,
    pub pronoun: Pronoun,
    pub polarity: Polarity,
    /// Direct-object number; present iff `class` is VTI.
    pub object: Option<ObjectNumber>,
}

impl ConjugationRequest {
    /// Checks the cross-field invariants: object number iff VTI, pronoun
    /// drawn from the animacy set matching the class, imperative restricted
    /// to 2s/21/2p, and no imperative at all for VII.
    pub fn validate(&self) -> Result<(), RequestError> {
        match self.class {
            VerbClass::Vti => {
                if self.object.is_none() {
                    return Err(RequestError::MissingObjectNumber { class: self.class });
                }
            }
            VerbClass::Vai | VerbClass::Vii => {
                if self.object.is_some() {
                    return Err(RequestError::UnexpectedObjectNumber { class: self.class });
                }
            }
        }

        let animacy_ok = match self.class {
            VerbClass::Vai | VerbClass::Vti => self.pronoun.is_animate(),
            VerbClass::Vii => self.pronoun.is_inanimate(),
        };
        if !animacy_ok {
            return Err(RequestError::PronounMismatch {
                class: self.class,
                pronoun: self.pronoun,
            });
        }

        if self.form == Form::Imperative {
            // Inanimate subjects cannot receive commands at all.
            if self.class == VerbClass::Vii {
                return Err(RequestError::InvalidForm {
                    class: self.class,
                    form: self.form,
                });
            }
            if !self.pronoun.can_take_imperative() {
                return Err(RequestError::UnsupportedPronoun {
                    form: self.form,
                    pronoun: self.pronoun,
                });
            }
        }

        Ok(())
    }
}

/// The record of what edit a rule applied to the stem before suffixation.
///
/// Downstream prefix selection inspects the original stem shape, and tests
/// assert on the edit itself, so the engine reports it rather than only the
/// edited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemEdit {
    None,
    DropFinalVowel,
    DropFinalConsonant,
    AppendEpentheticVowel,
    /// Subject-agreement consonant change (VAI `am` → `n`/`a`).
    SubstituteFinalConsonant,
    /// The VTI direct-object-marking `m`. Its own category: the display
    /// layer marks it, and it signals the object affix rather than
    /// subject agreement.
    SubstituteObjectMarker,
}

/// An edited stem together with the edit that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemMutation {
    pub stem: String,
    pub edit: StemEdit,
}

impl StemMutation {
    pub fn unchanged(stem: &str) -> Self {
        Self {
            stem: stem.to_string(),
            edit: StemEdit::None,
        }
    }

    /// Drops the final letter of the stem.
    pub fn drop_final(stem: &str, edit: StemEdit) -> Self {
        Self {
            stem: trim_final(stem).to_string(),
            edit,
        }
    }

    /// Drops the final letter and appends `replacement`.
    pub fn replace_final(stem: &str, replacement: &str, edit: StemEdit) -> Self {
        Self {
            stem: format!("{}{}", trim_final(stem), replacement),
            edit,
        }
    }

    /// Appends `epenthesis` to the unedited stem.
    pub fn append(stem: &str, epenthesis: &str, edit: StemEdit) -> Self {
        Self {
            stem: format!("{stem}{epenthesis}"),
            edit,
        }
    }
}

fn trim_final(stem: &str) -> &str {
    match stem.char_indices().next_back() {
        Some((idx, _)) => &stem[..idx],
        None => stem,
    }
}

/// A conjugated form: mutated stem, agreement suffix, and display category.
/// Immutable; no identity beyond its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationResult {
    pub stem: String,
    pub suffix: String,
    pub tag: CategoryTag,
    pub edit: StemEdit,
}

impl ConjugationResult {
    /// Stem and suffix joined into the surface word.
    pub fn surface(&self) -> String {
        format!("{}{}", self.stem, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(class: VerbClass, form: Form, pronoun: Pronoun) -> ConjugationRequest {
        ConjugationRequest {
            class,
            form,
            stem: "nibaa".to_string(),
            pronoun,
            polarity: Polarity::Affirmative,
            object: if class == VerbClass::Vti {
                Some(ObjectNumber::Singular)
            } else {
                None
            },
        }
    }

    #[test]
    fn valid_requests_pass() {
        assert!(request(VerbClass::Vai, Form::Independent, Pronoun::FirstSingular)
            .validate()
            .is_ok());
        assert!(request(VerbClass::Vii, Form::Dependent, Pronoun::InanimatePlural)
            .validate()
            .is_ok());
        assert!(request(VerbClass::Vti, Form::Imperative, Pronoun::SecondPlural)
            .validate()
            .is_ok());
    }

    #[test]
    fn object_number_iff_vti() {
        let mut req = request(VerbClass::Vti, Form::Independent, Pronoun::FirstSingular);
        req.object = None;
        assert_eq!(
            req.validate(),
            Err(RequestError::MissingObjectNumber {
                class: VerbClass::Vti
            })
        );

        let mut req = request(VerbClass::Vai, Form::Independent, Pronoun::FirstSingular);
        req.object = Some(ObjectNumber::Plural);
        assert_eq!(
            req.validate(),
            Err(RequestError::UnexpectedObjectNumber {
                class: VerbClass::Vai
            })
        );
    }

    #[test]
    fn pronoun_animacy_enforced() {
        let req = request(VerbClass::Vai, Form::Independent, Pronoun::InanimateSingular);
        assert!(matches!(
            req.validate(),
            Err(RequestError::PronounMismatch { .. })
        ));

        let req = request(VerbClass::Vii, Form::Independent, Pronoun::ThirdPlural);
        assert!(matches!(
            req.validate(),
            Err(RequestError::PronounMismatch { .. })
        ));
    }

    #[test]
    fn imperative_pronoun_restriction() {
        for pronoun in [
            Pronoun::FirstSingular,
            Pronoun::ThirdSingular,
            Pronoun::FirstPluralExclusive,
            Pronoun::ThirdPlural,
        ] {
            let req = request(VerbClass::Vai, Form::Imperative, pronoun);
            assert_eq!(
                req.validate(),
                Err(RequestError::UnsupportedPronoun {
                    form: Form::Imperative,
                    pronoun
                })
            );
        }
    }

    #[test]
    fn vii_rejects_imperative() {
        let req = request(VerbClass::Vii, Form::Imperative, Pronoun::InanimateSingular);
        assert_eq!(
            req.validate(),
            Err(RequestError::InvalidForm {
                class: VerbClass::Vii,
                form: Form::Imperative
            })
        );
    }

    #[test]
    fn mutation_constructors() {
        let m = StemMutation::drop_final("bakaanad", StemEdit::DropFinalConsonant);
        assert_eq!(m.stem, "bakaana");
        assert_eq!(m.edit, StemEdit::DropFinalConsonant);

        let m = StemMutation::replace_final("jiikendam", "n", StemEdit::SubstituteFinalConsonant);
        assert_eq!(m.stem, "jiikendan");

        let m = StemMutation::append("bangishin", "i", StemEdit::AppendEpentheticVowel);
        assert_eq!(m.stem, "bangishini");

        let m = StemMutation::unchanged("nibaa");
        assert_eq!(m.stem, "nibaa");
        assert_eq!(m.edit, StemEdit::None);
    }

    #[test]
    fn surface_joins_stem_and_suffix() {
        let result = ConjugationResult {
            stem: "gisinaa".to_string(),
            suffix: "wan".to_string(),
            tag: CategoryTag::IndependentAffirmative,
            edit: StemEdit::None,
        };
        assert_eq!(result.surface(), "gisinaawan");
    }
}
