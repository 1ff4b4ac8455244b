// Suffix-graph states.

use ekler_core::lexeme::PrimaryPos;

/// Index of a state within its graph.
pub type StateId = usize;

/// What role a state plays in the morphotactics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// An intermediate position; the word may not end here.
    Transfer,
    /// Entering a transition out of this state starts a new inflectional
    /// group (the suffix derives a new stem).
    Derivational,
    /// A complete word may end here.
    Terminal,
}

/// A node of the suffix graph.
///
/// States are created once by the builder and never mutated; everything
/// that refers to a state shares it through an `Arc`.
#[derive(Debug, PartialEq, Eq)]
pub struct SuffixGraphState {
    pub id: StateId,
    pub name: String,
    pub kind: StateKind,
    /// The part of speech a word has while sitting in this state. This is
    /// what the formatters print at the head of an inflectional group.
    pub pos: PrimaryPos,
}

impl SuffixGraphState {
    pub fn is_terminal(&self) -> bool {
        self.kind == StateKind::Terminal
    }

    pub fn is_derivational(&self) -> bool {
        self.kind == StateKind::Derivational
    }
}
