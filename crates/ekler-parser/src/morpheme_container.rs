// The morpheme container: an immutable trace of one analysis in progress.
//
// Every search branch extends a container into a new value; the step list
// is a persistent singly-linked list, so an extension is one allocation and
// sibling branches share their common prefix structurally.

use std::sync::Arc;

use ekler_core::lexeme::{PrimaryPos, SecondaryPos};
use ekler_core::phonetics::{PhoneticContext, PhoneticExpectation};
use ekler_core::root::Root;
use ekler_graph::graph::Transition;
use ekler_graph::state::SuffixGraphState;

/// One applied transition: which edge was taken, which allomorph realized
/// it, and the surface text it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub transition: Transition,
    /// Index into the suffix's form list; `None` for free transitions.
    pub form_index: Option<usize>,
    /// The input text this step consumed; empty for zero allomorphs and
    /// free transitions.
    pub surface: String,
}

impl Step {
    /// The template string of the applied allomorph, if any.
    pub fn form_template(&self) -> Option<&str> {
        self.form_index
            .map(|i| self.transition.suffix.forms[i].template.as_str())
    }

    /// Whether this step should appear in analysis output.
    pub fn is_visible(&self) -> bool {
        !self.transition.suffix.is_free_transition()
    }
}

/// A run of visible steps between derivational boundaries, sharing one
/// part-of-speech frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionalGroup {
    /// The part of speech of this group: the lexeme's for the root group,
    /// the derivation target state's for later groups.
    pub pos: PrimaryPos,
    /// Secondary part of speech; only ever set on the root group.
    pub secondary_pos: Option<SecondaryPos>,
    pub steps: Vec<Step>,
}

#[derive(Debug)]
struct StepNode {
    step: Step,
    prev: Option<Arc<StepNode>>,
}

/// An ordered, immutable sequence of parse steps over one root candidate.
///
/// Extension never mutates: [`extended`](Self::extended) returns a new
/// container whose step list shares the existing nodes. The container also
/// caches what the traversal consults at every branch point: the current
/// state, the phonetic context, and pending root expectations.
#[derive(Debug, Clone)]
pub struct MorphemeContainer {
    root: Arc<Root>,
    root_state: Arc<SuffixGraphState>,
    steps: Option<Arc<StepNode>>,
    step_count: usize,
    last_state: Arc<SuffixGraphState>,
    phonetic_context: PhoneticContext,
    expectations: Vec<PhoneticExpectation>,
}

impl MorphemeContainer {
    /// A container holding only its root, positioned at the root state.
    pub fn new(root: Arc<Root>, start_state: Arc<SuffixGraphState>) -> Self {
        let phonetic_context = root.phonetic_context;
        let expectations = root.expectations.clone();
        Self {
            root,
            root_state: Arc::clone(&start_state),
            steps: None,
            step_count: 0,
            last_state: start_state,
            phonetic_context,
            expectations,
        }
    }

    /// A new container with one more step. `clears_expectations` is set
    /// when the applied suffix satisfied the root's pending expectation.
    pub fn extended(
        &self,
        step: Step,
        phonetic_context: PhoneticContext,
        clears_expectations: bool,
    ) -> Self {
        let last_state = Arc::clone(&step.transition.to);
        Self {
            root: Arc::clone(&self.root),
            root_state: Arc::clone(&self.root_state),
            steps: Some(Arc::new(StepNode {
                step,
                prev: self.steps.clone(),
            })),
            step_count: self.step_count + 1,
            last_state,
            phonetic_context,
            expectations: if clears_expectations {
                Vec::new()
            } else {
                self.expectations.clone()
            },
        }
    }

    pub fn root(&self) -> &Arc<Root> {
        &self.root
    }

    pub fn root_state(&self) -> &Arc<SuffixGraphState> {
        &self.root_state
    }

    /// The state the parse currently sits in.
    pub fn last_state(&self) -> &Arc<SuffixGraphState> {
        &self.last_state
    }

    pub fn phonetic_context(&self) -> &PhoneticContext {
        &self.phonetic_context
    }

    pub fn has_pending_expectations(&self) -> bool {
        !self.expectations.is_empty()
    }

    pub fn pending_expectations(&self) -> &[PhoneticExpectation] {
        &self.expectations
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The steps in application order.
    pub fn steps(&self) -> Vec<Step> {
        let mut out = Vec::with_capacity(self.step_count);
        let mut node = self.steps.as_deref();
        while let Some(n) = node {
            out.push(n.step.clone());
            node = n.prev.as_deref();
        }
        out.reverse();
        out
    }

    /// Root text plus every consumed fragment, in order. For a complete
    /// analysis this equals the input word exactly.
    pub fn surface_so_far(&self) -> String {
        let mut surface = self.root.text.clone();
        for step in self.steps() {
            surface.push_str(&step.surface);
        }
        surface
    }

    /// Pretty names of the suffixes applied in the current inflectional
    /// group, i.e. since the most recent derivation boundary (or since the
    /// root). Free transitions are not suffixes and do not appear.
    pub fn suffixes_since_derivation(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut node = self.steps.as_deref();
        while let Some(n) = node {
            if n.step.is_visible() {
                names.push(n.step.transition.suffix.name.as_str());
            }
            if n.step.transition.from.is_derivational() {
                break;
            }
            node = n.prev.as_deref();
        }
        names
    }

    /// The visible steps partitioned into inflectional groups. A new group
    /// starts at every step leaving a derivational state; the root group
    /// comes first even when it has no steps of its own.
    pub fn groups(&self) -> Vec<InflectionalGroup> {
        let mut groups = Vec::new();
        let mut current = InflectionalGroup {
            pos: self.root.lexeme.primary_pos,
            secondary_pos: self.root.lexeme.secondary_pos,
            steps: Vec::new(),
        };
        for step in self.steps() {
            if !step.is_visible() {
                continue;
            }
            if step.transition.from.is_derivational() {
                groups.push(current);
                current = InflectionalGroup {
                    pos: step.transition.to.pos,
                    secondary_pos: None,
                    steps: vec![step],
                };
            } else {
                current.steps.push(step);
            }
        }
        groups.push(current);
        groups
    }
}

impl PartialEq for MorphemeContainer {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.root_state.id == other.root_state.id
            && self.step_count == other.step_count
            && self.steps() == other.steps()
    }
}

impl Eq for MorphemeContainer {}
