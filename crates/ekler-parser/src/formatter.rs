// The three textual renderings of a morpheme container.
//
// All three are pure functions of the container. Free transitions never
// print; zero allomorphs print their tag but no surface.

use std::fmt::Write;

use crate::morpheme_container::{InflectionalGroup, MorphemeContainer};

/// Tags of one group, joined with `+`. The root group leads with the
/// lexeme's root text and part of speech; derived groups lead with the
/// derived part of speech.
fn group_tags(container: &MorphemeContainer, group: &InflectionalGroup, is_root: bool) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if is_root {
        parts.push(&container.root().lexeme.root);
    }
    parts.push(group.pos.as_str());
    if let Some(secondary) = group.secondary_pos {
        parts.push(secondary.as_str());
    }
    for step in &group.steps {
        parts.push(&step.transition.suffix.pretty_name);
    }
    parts.join("+")
}

/// Numbered, quoted groups: `(1,"kitap+Noun+A3sg+Pnon+Dat")`, with one
/// parenthesized element per inflectional group.
pub fn format_simple_parseset(container: &MorphemeContainer) -> String {
    let mut out = String::new();
    for (index, group) in container.groups().iter().enumerate() {
        let _ = write!(
            out,
            "({},\"{}\")",
            index + 1,
            group_tags(container, group, index == 0)
        );
    }
    out
}

/// All group tags concatenated with `+`, no numbering:
/// `kitap+Noun+A3sg+Pnon+Dat`.
pub fn format_parseset(container: &MorphemeContainer) -> String {
    let groups = container.groups();
    let mut parts = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        parts.push(group_tags(container, group, index == 0));
    }
    parts.join("+")
}

/// The verbose rendering used by test fixtures: root surface with the
/// lemma in parentheses, and each overt suffix with its template and
/// realized allomorph: `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])`.
pub fn format_for_tests(container: &MorphemeContainer) -> String {
    let root = container.root();
    let mut out = format!("{}({})", root.text, root.lexeme.lemma);

    for (index, group) in container.groups().iter().enumerate() {
        out.push('+');
        out.push_str(group.pos.as_str());
        if index == 0 {
            if let Some(secondary) = group.secondary_pos {
                out.push('+');
                out.push_str(secondary.as_str());
            }
        }
        for step in &group.steps {
            out.push('+');
            out.push_str(&step.transition.suffix.pretty_name);
            if !step.surface.is_empty() {
                if let Some(template) = step.form_template() {
                    let _ = write!(out, "({}[{}])", template, step.surface);
                }
            }
        }
    }
    out
}
