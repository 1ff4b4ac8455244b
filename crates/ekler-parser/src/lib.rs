//! Context-free morphological parsing for Turkish.
//!
//! Given a surface word, [`parser::ContextFreeMorphologicalParser`] produces
//! every admissible decomposition into a lexical root plus an ordered suffix
//! chain, as immutable [`morpheme_container::MorphemeContainer`] values.
//! Ambiguity is a first-class outcome: all complete paths are returned, in
//! an order fully determined by the root-finder order and the grammar's
//! declared transition order.
//!
//! - [`lexicon`] -- dictionary loading, root generation, root lookup table
//! - [`root_finder`] -- pluggable root-candidate suppliers
//! - [`suffix_applier`] -- allomorph matching against the remaining surface
//! - [`morpheme_container`] -- the immutable analysis trace
//! - [`parser`] -- the backtracking traversal
//! - [`formatter`] -- the three textual renderings of an analysis

pub mod formatter;
pub mod lexicon;
pub mod morpheme_container;
pub mod parser;
pub mod root_finder;
pub mod suffix_applier;

pub use morpheme_container::MorphemeContainer;
pub use parser::ContextFreeMorphologicalParser;
