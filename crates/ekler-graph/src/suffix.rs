// Suffixes and their allomorph forms.

use crate::conditions::Condition;

/// Index of a suffix within its graph.
pub type SuffixId = usize;

/// Whether a suffix is a real morpheme or a zero-width bookkeeping edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// An ordinary suffix with allomorph forms (possibly zero-surface ones
    /// such as A3sg).
    Normal,
    /// An epsilon edge: consumes nothing, always applies, never printed.
    /// Used to enter derivational states and to reach terminal states with
    /// no overt morpheme in between.
    FreeTransition,
}

/// One allomorph of a suffix: a form template plus the condition under
/// which it may be tried.
///
/// Templates use the archiphoneme language of
/// [`ekler_core::phonetics::resolve_template`]. The empty template is a
/// zero allomorph (A3sg, Pnon, Pos): it consumes no surface but still
/// contributes its suffix tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixForm {
    pub template: String,
    pub condition: Condition,
}

impl SuffixForm {
    /// An unconditional form.
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), condition: Condition::Always }
    }

    /// A form guarded by a condition.
    pub fn when(template: impl Into<String>, condition: Condition) -> Self {
        Self { template: template.into(), condition }
    }

    pub fn is_zero(&self) -> bool {
        self.template.is_empty()
    }
}

/// A morphological category: a named suffix with its ordered allomorphs.
///
/// Form order is part of the grammar: the applier tries forms in declared
/// order and takes the first that matches.
///
/// `name` is unique within a graph (conditions refer to it); `pretty_name`
/// is what analysis output prints. They differ only where the same tag
/// appears in two paradigms (the verbal A3sg versus the nominal A3sg).
#[derive(Debug, PartialEq, Eq)]
pub struct Suffix {
    pub id: SuffixId,
    pub name: String,
    pub pretty_name: String,
    pub kind: SuffixKind,
    pub forms: Vec<SuffixForm>,
}

impl Suffix {
    pub fn is_free_transition(&self) -> bool {
        self.kind == SuffixKind::FreeTransition
    }

    /// Whether some form of this suffix can consume nothing. Free
    /// transitions and zero allomorphs make a transition zero-width
    /// capable, which is what the epsilon-cycle validation walks.
    pub fn can_be_zero_width(&self) -> bool {
        self.is_free_transition() || self.forms.iter().any(SuffixForm::is_zero)
    }
}
