pub mod classifier;
pub mod conjugator;
pub mod lexicon;
pub mod phonology;
pub(crate) mod rules;
pub mod suffix_table;
pub(crate) mod vai;
pub(crate) mod vii;
pub(crate) mod vti;

pub use conjugator::{BuildError, ConjugateError, Conjugator, ConjugatorBuilder};
