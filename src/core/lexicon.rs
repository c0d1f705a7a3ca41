//! Exception lexicon — closed sets of irregular stems.
//!
//! Some stems end in a letter that is not part of the stem proper (the
//! "dummy n" of weather verbs like `zoogipon`) and pluralize as if the
//! stem were vowel-final. Membership is literal string comparison: exact
//! match against `stems`, suffix match against `roots`. No phonological
//! inference happens here.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::category::VerbClass;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// One verb class's irregular stems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExceptionSet {
    /// Whole stems, matched exactly.
    #[serde(default)]
    pub stems: FxHashSet<String>,
    /// Stem-final roots, matched by suffix. The dummy final `n` these
    /// stems carry sits after the root, so the match also runs against
    /// the stem with a final `n` stripped (`dakaagamin` → `dakaagami`
    /// ends with `aagami`).
    #[serde(default)]
    pub roots: Vec<String>,
}

impl ExceptionSet {
    pub fn contains(&self, stem: &str) -> bool {
        if self.stems.contains(stem) {
            return true;
        }
        self.roots.iter().any(|root| {
            stem.ends_with(root.as_str())
                || stem
                    .strip_suffix('n')
                    .is_some_and(|bare| bare.ends_with(root.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty() && self.roots.is_empty()
    }
}

/// The per-class exception sets, frozen after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExceptionLexicon {
    #[serde(default)]
    pub vai: ExceptionSet,
    #[serde(default)]
    pub vii: ExceptionSet,
    #[serde(default)]
    pub vti: ExceptionSet,
}

impl ExceptionLexicon {
    /// The lexicon shipped with the crate (see `data/exceptions.ron` for
    /// provenance).
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::parse_ron(include_str!("../../data/exceptions.ron"))
    }

    pub fn parse_ron(input: &str) -> Result<Self, LexiconError> {
        Ok(ron::from_str(input)?)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn for_class(&self, class: VerbClass) -> &ExceptionSet {
        match class {
            VerbClass::Vai => &self.vai,
            VerbClass::Vii => &self.vii,
            VerbClass::Vti => &self.vti,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_dummy_n_verbs() {
        let lexicon = ExceptionLexicon::builtin().unwrap();
        let vii = lexicon.for_class(VerbClass::Vii);
        assert!(vii.contains("zoogipon"));
        assert!(vii.contains("dagwaagin"));
        assert!(vii.contains("onaagoshin"));
    }

    #[test]
    fn root_membership_is_suffix_match() {
        let lexicon = ExceptionLexicon::builtin().unwrap();
        let vii = lexicon.for_class(VerbClass::Vii);
        // dakaagamin carries the -aagami- root plus dummy n.
        assert!(vii.contains("dakaagamin"));
        assert!(vii.contains("onzaagamin"));
        assert!(!vii.contains("wanisin"));
        assert!(!vii.contains("gimiwan"));
    }

    #[test]
    fn other_classes_are_empty() {
        let lexicon = ExceptionLexicon::builtin().unwrap();
        assert!(lexicon.for_class(VerbClass::Vai).is_empty());
        assert!(lexicon.for_class(VerbClass::Vti).is_empty());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let a = ExceptionLexicon::builtin().unwrap();
        let b = ExceptionLexicon::builtin().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_ron_round_trip() {
        let input = r#"(
            vii: (
                stems: ["zoogipon"],
                roots: ["aagami"],
            ),
        )"#;
        let lexicon = ExceptionLexicon::parse_ron(input).unwrap();
        assert!(lexicon.vii.contains("zoogipon"));
        assert!(lexicon.vii.contains("minwaagami"));
        assert!(lexicon.vai.is_empty());
    }
}
