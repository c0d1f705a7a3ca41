//! Ojibwe Conjugator — inflected verb form generation.
//!
//! Generates the suffixed (and stem-mutated) surface forms of Ojibwe verbs
//! across the animate-intransitive (VAI), inanimate-intransitive (VII), and
//! transitive-inanimate (VTI) classes, for every combination of clause form,
//! polarity, subject pronoun, and (for VTI) object number. The engine is a
//! pure function of its input over tables frozen at construction time.

pub mod core;
pub mod display;
pub mod prefix;
pub mod schema;
