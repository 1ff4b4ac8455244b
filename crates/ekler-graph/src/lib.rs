//! Morphotactic suffix-graph engine.
//!
//! A suffix graph is a finite-state grammar of Turkish word structure:
//! states are morphological positions (noun with agreement, verb with
//! polarity, ...), transitions are labeled by suffixes, and each suffix
//! owns an ordered list of allomorph forms with applicability conditions.
//!
//! # Architecture
//!
//! - [`state`] -- graph states and their kinds
//! - [`suffix`] -- suffixes and allomorph forms
//! - [`conditions`] -- form applicability predicates
//! - [`graph`] -- the immutable graph, its validating builder
//! - [`basic`] -- the hand-authored Turkish grammar
//!
//! The graph is built once through [`graph::SuffixGraphBuilder`], which
//! validates the grammar (no zero-width transition cycle, every state
//! reachable from a root state) and fails before any parsing can start.
//! After `build()` the graph is immutable and freely shared.

pub mod basic;
pub mod conditions;
pub mod graph;
pub mod state;
pub mod suffix;

pub use graph::{SuffixGraph, SuffixGraphBuilder, Transition};
pub use state::{StateId, StateKind, SuffixGraphState};
pub use suffix::{Suffix, SuffixForm, SuffixId, SuffixKind};

/// Error type for grammar construction.
///
/// These are the only failures that cross the engine boundary: a grammar
/// that trips one of them must never serve a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate state name: {0}")]
    DuplicateState(String),

    #[error("duplicate suffix name: {0}")]
    DuplicateSuffix(String),

    #[error("suffix {suffix}: condition references unknown suffix {referenced}")]
    UnknownSuffixReference { suffix: String, referenced: String },

    #[error("zero-width transition cycle through state {0}")]
    EpsilonCycle(String),

    #[error("state {0} is unreachable from every root state")]
    UnreachableState(String),

    #[error("no root states registered")]
    NoRootStates,
}
