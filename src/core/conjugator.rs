//! The conjugation engine: validates a request, classifies the stem, runs
//! the class's rule chain, and resolves the suffix cell.

use thiserror::Error;

use crate::core::classifier::{self, UnclassifiedStem};
use crate::core::lexicon::{ExceptionLexicon, LexiconError};
use crate::core::rules::{self, RuleInput};
use crate::core::suffix_table::{SuffixKey, SuffixTable, TableError};
use crate::core::{vai, vii, vti};
use crate::schema::category::{CategoryTag, Form, Polarity, VerbClass};
use crate::schema::request::{ConjugationRequest, ConjugationResult, RequestError};

#[derive(Debug, Error)]
pub enum ConjugateError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Unclassified(#[from] UnclassifiedStem),
    #[error(
        "no {} rule matched stem '{stem}' in the {} {}",
        class.label(), polarity.label(), form.label()
    )]
    NoRuleMatched {
        class: VerbClass,
        form: Form,
        polarity: Polarity,
        stem: String,
    },
    #[error("no suffix cell for {0:?}")]
    MissingSuffix(SuffixKey),
}

/// Errors surfaced while assembling an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// The verb conjugation engine. Construction is fallible (the table is
/// validated up front); conjugation afterwards touches no shared state, so
/// a single engine serves any number of callers.
#[derive(Debug, Clone)]
pub struct Conjugator {
    table: SuffixTable,
    exceptions: ExceptionLexicon,
}

impl Conjugator {
    /// An engine over the built-in paradigm data.
    pub fn new() -> Result<Self, BuildError> {
        Self::builder().build()
    }

    pub fn builder() -> ConjugatorBuilder {
        ConjugatorBuilder::default()
    }

    pub fn table(&self) -> &SuffixTable {
        &self.table
    }

    pub fn exceptions(&self) -> &ExceptionLexicon {
        &self.exceptions
    }

    /// Conjugates one request into a (stem, suffix, category) result.
    pub fn conjugate(
        &self,
        request: &ConjugationRequest,
    ) -> Result<ConjugationResult, ConjugateError> {
        request.validate()?;

        let exceptions = self.exceptions.for_class(request.class);
        // Classification runs first so an unrecognized stem reports as a
        // stem problem, not as a rule-chain miss.
        classifier::classify(request.class, &request.stem, exceptions)?;

        let chain = match request.class {
            VerbClass::Vai => vai::rules(request.form, request.polarity),
            VerbClass::Vii => vii::rules(request.form, request.polarity),
            VerbClass::Vti => vti::rules(request.form, request.polarity),
        };
        let input = RuleInput {
            stem: &request.stem,
            pronoun: request.pronoun,
            object: request.object,
            exceptions,
        };
        let (_, outcome) =
            rules::first_match(chain, &input).ok_or_else(|| ConjugateError::NoRuleMatched {
                class: request.class,
                form: request.form,
                polarity: request.polarity,
                stem: request.stem.clone(),
            })?;

        let key = SuffixKey {
            class: request.class,
            form: request.form,
            polarity: request.polarity,
            set: outcome.set,
            pronoun: request.pronoun,
            object: outcome.object_key,
        };
        let suffix = self
            .table
            .get(&key)
            .and_then(|cell| cell.resolve(request.object))
            .ok_or(ConjugateError::MissingSuffix(key))?;

        Ok(ConjugationResult {
            stem: outcome.mutation.stem,
            suffix: suffix.to_string(),
            tag: CategoryTag::of(request.form, request.polarity),
            edit: outcome.mutation.edit,
        })
    }
}

/// Assembles a [`Conjugator`], defaulting any part not injected to the
/// built-in data. The table is validated for full partition coverage
/// before the engine is handed out.
#[derive(Debug, Default)]
pub struct ConjugatorBuilder {
    table: Option<SuffixTable>,
    exceptions: Option<ExceptionLexicon>,
}

impl ConjugatorBuilder {
    pub fn with_table(mut self, table: SuffixTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_exceptions(mut self, exceptions: ExceptionLexicon) -> Self {
        self.exceptions = Some(exceptions);
        self
    }

    pub fn build(self) -> Result<Conjugator, BuildError> {
        let table = match self.table {
            Some(table) => table,
            None => SuffixTable::builtin()?,
        };
        table.validate()?;
        let exceptions = match self.exceptions {
            Some(exceptions) => exceptions,
            None => ExceptionLexicon::builtin()?,
        };
        Ok(Conjugator { table, exceptions })
    }
}
