// The immutable suffix graph and its validating builder.

use std::sync::Arc;

use hashbrown::HashMap;

use ekler_core::lexeme::PrimaryPos;

use crate::GraphError;
use crate::state::{StateId, StateKind, SuffixGraphState};
use crate::suffix::{Suffix, SuffixForm, SuffixId, SuffixKind};

/// A directed edge of the graph, labeled by exactly one suffix.
///
/// Transitions share their endpoint states and suffix through `Arc`s, so a
/// cloned transition is two pointer bumps; morpheme containers keep clones
/// of the transitions they walked.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: Arc<SuffixGraphState>,
    pub suffix: Arc<Suffix>,
    pub to: Arc<SuffixGraphState>,
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.from.id == other.from.id
            && self.suffix.id == other.suffix.id
            && self.to.id == other.to.id
    }
}

impl Eq for Transition {}

/// The morphotactic grammar: states, suffixes, and ordered transitions.
///
/// Built once by [`SuffixGraphBuilder::build`], then read-only. The order
/// of a state's outgoing transitions is the declaration order, and it is
/// part of the observable contract: it fixes the order of parse results.
#[derive(Debug)]
pub struct SuffixGraph {
    states: Vec<Arc<SuffixGraphState>>,
    suffixes: Vec<Arc<Suffix>>,
    outgoing: Vec<Vec<Transition>>,
    root_states: HashMap<PrimaryPos, StateId>,
    states_by_name: HashMap<String, StateId>,
    suffixes_by_name: HashMap<String, SuffixId>,
}

impl SuffixGraph {
    pub fn state(&self, id: StateId) -> &Arc<SuffixGraphState> {
        &self.states[id]
    }

    pub fn state_named(&self, name: &str) -> Option<&Arc<SuffixGraphState>> {
        self.states_by_name.get(name).map(|&id| &self.states[id])
    }

    pub fn suffix(&self, id: SuffixId) -> &Arc<Suffix> {
        &self.suffixes[id]
    }

    pub fn suffix_named(&self, name: &str) -> Option<&Arc<Suffix>> {
        self.suffixes_by_name.get(name).map(|&id| &self.suffixes[id])
    }

    /// Outgoing transitions of a state, in declared order.
    pub fn outgoing(&self, state: StateId) -> &[Transition] {
        &self.outgoing[state]
    }

    /// The state roots of the given part of speech start parsing from.
    pub fn root_state(&self, pos: PrimaryPos) -> Option<&Arc<SuffixGraphState>> {
        self.root_states.get(&pos).map(|&id| &self.states[id])
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }
}

/// Accumulates states, suffixes, and transitions, then validates the whole
/// grammar in [`build`](Self::build).
///
/// Registration methods hand back plain ids; nothing is checked until
/// `build`, which performs the fatal grammar validation: duplicate names,
/// dangling condition references, zero-width transition cycles, and
/// unreachable states.
#[derive(Debug, Default)]
pub struct SuffixGraphBuilder {
    states: Vec<SuffixGraphState>,
    suffixes: Vec<Suffix>,
    transitions: Vec<(StateId, SuffixId, StateId)>,
    root_states: Vec<(PrimaryPos, StateId)>,
}

impl SuffixGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state.
    pub fn add_state(&mut self, name: &str, kind: StateKind, pos: PrimaryPos) -> StateId {
        let id = self.states.len();
        self.states.push(SuffixGraphState { id, name: name.to_string(), kind, pos });
        id
    }

    /// Register an ordinary suffix with its ordered allomorph forms.
    pub fn add_suffix(&mut self, name: &str, forms: Vec<SuffixForm>) -> SuffixId {
        self.push_suffix(name, name, SuffixKind::Normal, forms)
    }

    /// Register a suffix whose printed tag differs from its unique name.
    pub fn add_suffix_pretty(
        &mut self,
        name: &str,
        pretty_name: &str,
        forms: Vec<SuffixForm>,
    ) -> SuffixId {
        self.push_suffix(name, pretty_name, SuffixKind::Normal, forms)
    }

    /// Register an epsilon edge label.
    pub fn add_free_transition(&mut self, name: &str) -> SuffixId {
        self.push_suffix(name, name, SuffixKind::FreeTransition, Vec::new())
    }

    fn push_suffix(
        &mut self,
        name: &str,
        pretty_name: &str,
        kind: SuffixKind,
        forms: Vec<SuffixForm>,
    ) -> SuffixId {
        let id = self.suffixes.len();
        self.suffixes.push(Suffix {
            id,
            name: name.to_string(),
            pretty_name: pretty_name.to_string(),
            kind,
            forms,
        });
        id
    }

    /// Add a transition. Declaration order is preserved per source state.
    pub fn add_transition(&mut self, from: StateId, suffix: SuffixId, to: StateId) {
        self.transitions.push((from, suffix, to));
    }

    /// Mark the state roots of the given part of speech start from.
    pub fn set_root_state(&mut self, pos: PrimaryPos, state: StateId) {
        self.root_states.push((pos, state));
    }

    /// Validate the grammar and freeze it into an immutable graph.
    pub fn build(self) -> Result<SuffixGraph, GraphError> {
        let mut states_by_name = HashMap::new();
        for state in &self.states {
            if states_by_name.insert(state.name.clone(), state.id).is_some() {
                return Err(GraphError::DuplicateState(state.name.clone()));
            }
        }

        let mut suffixes_by_name = HashMap::new();
        for suffix in &self.suffixes {
            if suffixes_by_name.insert(suffix.name.clone(), suffix.id).is_some() {
                return Err(GraphError::DuplicateSuffix(suffix.name.clone()));
            }
        }

        if self.root_states.is_empty() {
            return Err(GraphError::NoRootStates);
        }

        // Every suffix name mentioned in a condition must exist.
        for suffix in &self.suffixes {
            for form in &suffix.forms {
                for referenced in form.condition.referenced_suffixes() {
                    if !suffixes_by_name.contains_key(referenced) {
                        return Err(GraphError::UnknownSuffixReference {
                            suffix: suffix.name.clone(),
                            referenced: referenced.to_string(),
                        });
                    }
                }
            }
        }

        self.check_epsilon_acyclic()?;
        self.check_reachability()?;

        let states: Vec<Arc<SuffixGraphState>> =
            self.states.into_iter().map(Arc::new).collect();
        let suffixes: Vec<Arc<Suffix>> = self.suffixes.into_iter().map(Arc::new).collect();

        let mut outgoing: Vec<Vec<Transition>> = vec![Vec::new(); states.len()];
        for (from, suffix, to) in self.transitions {
            outgoing[from].push(Transition {
                from: Arc::clone(&states[from]),
                suffix: Arc::clone(&suffixes[suffix]),
                to: Arc::clone(&states[to]),
            });
        }

        let root_states = self.root_states.into_iter().collect();

        Ok(SuffixGraph {
            states,
            suffixes,
            outgoing,
            root_states,
            states_by_name,
            suffixes_by_name,
        })
    }

    /// Reject any cycle made entirely of zero-width-capable transitions
    /// (free transitions and zero allomorphs). Such a cycle would let the
    /// search revisit a position without consuming input.
    fn check_epsilon_acyclic(&self) -> Result<(), GraphError> {
        let mut zero_edges: Vec<Vec<StateId>> = vec![Vec::new(); self.states.len()];
        for &(from, suffix, to) in &self.transitions {
            if self.suffixes[suffix].can_be_zero_width() {
                zero_edges[from].push(to);
            }
        }

        // Three-color depth-first search.
        #[derive(Clone, Copy, PartialEq)]
        enum Color {
            White,
            Gray,
            Black,
        }
        let mut colors = vec![Color::White; self.states.len()];

        fn visit(
            state: StateId,
            zero_edges: &[Vec<StateId>],
            colors: &mut [Color],
            states: &[SuffixGraphState],
        ) -> Result<(), GraphError> {
            colors[state] = Color::Gray;
            for &next in &zero_edges[state] {
                match colors[next] {
                    Color::Gray => {
                        return Err(GraphError::EpsilonCycle(states[next].name.clone()));
                    }
                    Color::White => visit(next, zero_edges, colors, states)?,
                    Color::Black => {}
                }
            }
            colors[state] = Color::Black;
            Ok(())
        }

        for id in 0..self.states.len() {
            if colors[id] == Color::White {
                visit(id, &zero_edges, &mut colors, &self.states)?;
            }
        }
        Ok(())
    }

    /// Every state must be reachable from some registered root state.
    fn check_reachability(&self) -> Result<(), GraphError> {
        let mut reached = vec![false; self.states.len()];
        let mut queue: Vec<StateId> = Vec::new();
        for &(_, state) in &self.root_states {
            if !reached[state] {
                reached[state] = true;
                queue.push(state);
            }
        }

        while let Some(state) = queue.pop() {
            for &(from, _, to) in &self.transitions {
                if from == state && !reached[to] {
                    reached[to] = true;
                    queue.push(to);
                }
            }
        }

        for (id, state) in self.states.iter().enumerate() {
            if !reached[id] {
                return Err(GraphError::UnreachableState(state.name.clone()));
            }
        }
        Ok(())
    }
}
