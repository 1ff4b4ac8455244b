// Suffix application: matching one transition against the remaining input.
//
// "Does not apply" is the ordinary outcome here, not an error; it is the
// pruning signal the traversal uses to abandon a branch.

use log::trace;

use ekler_core::alphabet;
use ekler_core::phonetics::{self, PhoneticContext};
use ekler_graph::conditions::ConditionContext;
use ekler_graph::graph::Transition;

use crate::morpheme_container::MorphemeContainer;

/// A successful application of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuffix {
    /// Index of the matched allomorph; `None` for free transitions.
    pub form_index: Option<usize>,
    /// The input text consumed. May differ from the resolved template in
    /// its final letter when stem-final voicing applied (cIk consumed as
    /// "çığ" before a vowel).
    pub surface: String,
    /// Number of input characters consumed.
    pub consumed: usize,
    /// Phonetic context after the consumed text.
    pub context: PhoneticContext,
}

/// Try to apply `transition` to the parse in `container` against the
/// not-yet-consumed input `remaining`.
///
/// Free transitions always succeed with zero consumption. Otherwise the
/// suffix's allomorphs are tried in declared order and the first that
/// matches wins: its condition must hold, its resolved surface must be a
/// prefix of `remaining`, and an overt form must satisfy any phonetic
/// expectation the root still carries.
pub fn apply(
    transition: &Transition,
    container: &MorphemeContainer,
    remaining: &[char],
) -> Option<AppliedSuffix> {
    let suffix = &transition.suffix;

    if suffix.is_free_transition() {
        return Some(AppliedSuffix {
            form_index: None,
            surface: String::new(),
            consumed: 0,
            context: *container.phonetic_context(),
        });
    }

    let since = container.suffixes_since_derivation();
    let condition_ctx = ConditionContext {
        phonetics: container.phonetic_context(),
        root: container.root().as_ref(),
        suffixes_since_derivation: &since,
    };

    for (form_index, form) in suffix.forms.iter().enumerate() {
        if !form.condition.allowed(&condition_ctx) {
            continue;
        }

        let resolved = phonetics::resolve_template(&form.template, container.phonetic_context());

        if resolved.is_empty() {
            // Zero allomorph: contributes its tag only. It neither
            // satisfies nor violates a pending expectation.
            return Some(AppliedSuffix {
                form_index: Some(form_index),
                surface: String::new(),
                consumed: 0,
                context: *container.phonetic_context(),
            });
        }

        let first = match resolved.chars().next() {
            Some(c) => c,
            None => continue,
        };
        if !container
            .pending_expectations()
            .iter()
            .all(|e| e.satisfied_by(first))
        {
            continue;
        }

        if let Some(surface) = match_resolved(&resolved, remaining) {
            let consumed = surface.chars().count();
            let context = container.phonetic_context().advanced_by(&surface);
            trace!(
                "applied {}({}) as '{}'",
                suffix.name, form.template, surface
            );
            return Some(AppliedSuffix {
                form_index: Some(form_index),
                surface,
                consumed,
                context,
            });
        }
    }

    None
}

/// Match a resolved allomorph against the remaining input.
///
/// Besides the exact prefix match, a form ending in a voiceless stop also
/// matches its voiced counterpart when a vowel follows in the input: the
/// diminutive cIk is consumed as "çığ" in kitapçığa, the future +yAcAk as
/// "acağ" in yapacağım. The returned surface is what the input actually
/// shows.
fn match_resolved(resolved: &str, remaining: &[char]) -> Option<String> {
    let resolved_chars: Vec<char> = resolved.chars().collect();
    let n = resolved_chars.len();
    if remaining.len() < n {
        return None;
    }

    if remaining[..n] == resolved_chars[..] {
        return Some(resolved.to_string());
    }

    // Voiced-final variant before a vowel.
    let last = resolved_chars[n - 1];
    if alphabet::is_voiceless_stop(last)
        && remaining.len() > n
        && remaining[..n - 1] == resolved_chars[..n - 1]
        && Some(remaining[n - 1]) == alphabet::voice(last)
        && alphabet::is_vowel(remaining[n])
    {
        return Some(remaining[..n].iter().collect());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ekler_core::lexeme::{Lexeme, PrimaryPos};
    use ekler_core::phonetics::PhoneticExpectation;
    use ekler_core::root::Root;
    use ekler_graph::conditions::Condition;
    use ekler_graph::state::{StateKind, SuffixGraphState};
    use ekler_graph::suffix::{Suffix, SuffixForm, SuffixKind};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn state(id: usize, name: &str) -> Arc<SuffixGraphState> {
        Arc::new(SuffixGraphState {
            id,
            name: name.to_string(),
            kind: StateKind::Transfer,
            pos: PrimaryPos::Noun,
        })
    }

    fn transition(suffix: Suffix) -> Transition {
        Transition {
            from: state(0, "FROM"),
            suffix: Arc::new(suffix),
            to: state(1, "TO"),
        }
    }

    fn normal_suffix(name: &str, forms: Vec<SuffixForm>) -> Suffix {
        Suffix {
            id: 0,
            name: name.to_string(),
            pretty_name: name.to_string(),
            kind: SuffixKind::Normal,
            forms,
        }
    }

    fn container_for(root_text: &str) -> MorphemeContainer {
        let lexeme = Arc::new(Lexeme::new(root_text, root_text, PrimaryPos::Noun));
        MorphemeContainer::new(Arc::new(Root::original(&lexeme)), state(0, "NOUN_ROOT"))
    }

    fn expecting_container(original: &str, variant: &str) -> MorphemeContainer {
        let lexeme = Arc::new(Lexeme::new(original, original, PrimaryPos::Noun));
        let root = Root::variant(
            &lexeme,
            variant.to_string(),
            vec![PhoneticExpectation::VowelStart],
        );
        MorphemeContainer::new(Arc::new(root), state(0, "NOUN_ROOT"))
    }

    #[test]
    fn free_transition_always_applies() {
        let free = Suffix {
            id: 0,
            name: "Noun_Free_Transition".to_string(),
            pretty_name: "Noun_Free_Transition".to_string(),
            kind: SuffixKind::FreeTransition,
            forms: Vec::new(),
        };
        let t = transition(free);
        let c = container_for("kitap");
        let applied = apply(&t, &c, &chars("")).unwrap();
        assert_eq!(applied.consumed, 0);
        assert_eq!(applied.form_index, None);
        assert!(applied.surface.is_empty());
    }

    #[test]
    fn matching_overt_form_consumes_a_prefix() {
        // Locative dA devoices to "ta" after the voiceless stem-final p.
        let loc = normal_suffix("Loc", vec![SuffixForm::new("dA")]);
        let t = transition(loc);
        let c = container_for("kitap");
        let applied = apply(&t, &c, &chars("ta")).unwrap();
        assert_eq!(applied.surface, "ta");
        assert_eq!(applied.consumed, 2);
        assert_eq!(applied.context.last_letter, Some('a'));
    }

    #[test]
    fn non_matching_surface_is_not_an_error() {
        let dat = normal_suffix("Dat", vec![SuffixForm::new("+yA")]);
        let t = transition(dat);
        let c = container_for("kitap");
        assert!(apply(&t, &c, &chars("lar")).is_none());
    }

    #[test]
    fn zero_allomorph_consumes_nothing() {
        let a3sg = normal_suffix("A3sg", vec![SuffixForm::new("")]);
        let t = transition(a3sg);
        let c = container_for("kitap");
        let applied = apply(&t, &c, &chars("ta")).unwrap();
        assert_eq!(applied.consumed, 0);
        assert_eq!(applied.form_index, Some(0));
    }

    #[test]
    fn forms_are_tried_in_declared_order() {
        let inf = normal_suffix("Inf", vec![SuffixForm::new("mAk"), SuffixForm::new("mA")]);
        let t = transition(inf);

        let c = container_for("yap");
        let applied = apply(&t, &c, &chars("mak")).unwrap();
        assert_eq!(applied.form_index, Some(0));

        let applied = apply(&t, &c, &chars("mayı")).unwrap();
        assert_eq!(applied.form_index, Some(1));
        assert_eq!(applied.surface, "ma");
    }

    #[test]
    fn condition_gates_the_form() {
        let aor = normal_suffix(
            "Aor",
            vec![
                SuffixForm::when("z", Condition::comes_after("Neg")),
                SuffixForm::when("+Ir", Condition::doesnt_come_after("Neg")),
            ],
        );
        let t = transition(aor);
        let c = container_for("gel");
        // No Neg applied: the z form is skipped even though "z..." would match.
        assert!(apply(&t, &c, &chars("z")).is_none());
        let applied = apply(&t, &c, &chars("ir")).unwrap();
        assert_eq!(applied.surface, "ir");
    }

    #[test]
    fn pending_expectation_blocks_consonant_initial_suffix() {
        let loc = normal_suffix("Loc", vec![SuffixForm::new("dA")]);
        let t = transition(loc);
        let c = expecting_container("kitap", "kitab");
        assert!(apply(&t, &c, &chars("da")).is_none());
    }

    #[test]
    fn pending_expectation_satisfied_by_vowel_initial_suffix() {
        let dat = normal_suffix("Dat", vec![SuffixForm::new("+yA")]);
        let t = transition(dat);
        let c = expecting_container("kitap", "kitab");
        let applied = apply(&t, &c, &chars("a")).unwrap();
        assert_eq!(applied.surface, "a");
    }

    #[test]
    fn final_stop_voices_before_a_vowel() {
        let dim = normal_suffix("Dim", vec![SuffixForm::new("cIk")]);
        let t = transition(dim);
        let c = container_for("kitap");
        // kitapçığa: the diminutive surfaces as çığ before the dative vowel.
        let applied = apply(&t, &c, &chars("çığa")).unwrap();
        assert_eq!(applied.surface, "çığ");
        assert_eq!(applied.consumed, 3);
        assert_eq!(applied.context.last_letter, Some('ğ'));
    }

    #[test]
    fn final_stop_does_not_voice_before_a_consonant() {
        let dim = normal_suffix("Dim", vec![SuffixForm::new("cIk")]);
        let t = transition(dim);
        let c = container_for("kitap");
        assert!(apply(&t, &c, &chars("çığd")).is_none());
    }
}
