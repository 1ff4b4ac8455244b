// The basic Turkish suffix graph.
//
// States and transitions are declared in a fixed order; that order decides
// the order of parse results, so reordering lines here is an observable
// grammar change, not a cleanup.

use ekler_core::lexeme::{PrimaryPos, RootAttribute};

use crate::GraphError;
use crate::conditions::Condition;
use crate::graph::{SuffixGraph, SuffixGraphBuilder};
use crate::state::StateKind;
use crate::suffix::SuffixForm;

/// Build the standard grammar: noun inflection (agreement, possession,
/// case) with the buffer-n alternants, diminutive and relative-ki noun
/// derivations, adjectives with zero derivation to noun, and verbs with
/// polarity, causative/passive stem derivation, five tense/aspect
/// suffixes, person agreement, and the infinitive and -ArAk derivations.
///
/// Inflectional suffixes with no overt surface (A3sg, Pnon, Nom, Pos) are
/// ordinary suffixes with a zero allomorph; derivational states are entered
/// through free transitions, which never surface in analysis output.
pub fn basic_suffix_graph() -> Result<SuffixGraph, GraphError> {
    let mut b = SuffixGraphBuilder::new();

    // -- States --------------------------------------------------------

    let noun_root = b.add_state("NOUN_ROOT", StateKind::Transfer, PrimaryPos::Noun);
    let noun_agreement =
        b.add_state("NOUN_WITH_AGREEMENT", StateKind::Transfer, PrimaryPos::Noun);
    let noun_possession =
        b.add_state("NOUN_WITH_POSSESSION", StateKind::Transfer, PrimaryPos::Noun);
    let noun_case = b.add_state("NOUN_WITH_CASE", StateKind::Transfer, PrimaryPos::Noun);
    let noun_terminal = b.add_state("NOUN_TERMINAL", StateKind::Terminal, PrimaryPos::Noun);
    let noun_deriv = b.add_state("NOUN_DERIV", StateKind::Derivational, PrimaryPos::Noun);

    let adj_root = b.add_state("ADJ_ROOT", StateKind::Transfer, PrimaryPos::Adjective);
    let adj_terminal =
        b.add_state("ADJ_TERMINAL", StateKind::Terminal, PrimaryPos::Adjective);
    let adj_deriv = b.add_state("ADJ_DERIV", StateKind::Derivational, PrimaryPos::Adjective);

    let verb_root = b.add_state("VERB_ROOT", StateKind::Transfer, PrimaryPos::Verb);
    let verb_polarity =
        b.add_state("VERB_WITH_POLARITY", StateKind::Transfer, PrimaryPos::Verb);
    let verb_tense = b.add_state("VERB_WITH_TENSE", StateKind::Transfer, PrimaryPos::Verb);
    let verb_terminal = b.add_state("VERB_TERMINAL", StateKind::Terminal, PrimaryPos::Verb);
    let verb_plain_deriv =
        b.add_state("VERB_PLAIN_DERIV", StateKind::Derivational, PrimaryPos::Verb);
    let verb_polarity_deriv =
        b.add_state("VERB_POLARITY_DERIV", StateKind::Derivational, PrimaryPos::Verb);

    let adv_root = b.add_state("ADV_ROOT", StateKind::Transfer, PrimaryPos::Adverb);
    let adv_terminal =
        b.add_state("ADV_TERMINAL", StateKind::Terminal, PrimaryPos::Adverb);

    b.set_root_state(PrimaryPos::Noun, noun_root);
    b.set_root_state(PrimaryPos::Adjective, adj_root);
    b.set_root_state(PrimaryPos::Verb, verb_root);
    b.set_root_state(PrimaryPos::Adverb, adv_root);

    // -- Nominal suffixes ----------------------------------------------

    let a3sg = b.add_suffix("A3sg", vec![SuffixForm::new("")]);
    let a3pl = b.add_suffix("A3pl", vec![SuffixForm::new("lAr")]);

    let pnon = b.add_suffix("Pnon", vec![SuffixForm::new("")]);
    let p1sg = b.add_suffix("P1sg", vec![SuffixForm::new("+Im")]);
    let p2sg = b.add_suffix("P2sg", vec![SuffixForm::new("+In")]);
    let p3sg = b.add_suffix("P3sg", vec![SuffixForm::new("+sI")]);
    let p1pl = b.add_suffix("P1pl", vec![SuffixForm::new("+ImIz")]);
    let p2pl = b.add_suffix("P2pl", vec![SuffixForm::new("+InIz")]);
    let p3pl = b.add_suffix("P3pl", vec![SuffixForm::new("lArI")]);

    // Cases take a buffer n after a third-person possessive.
    let after_p3 =
        || Condition::comes_after("P3sg").or(Condition::comes_after("P3pl"));
    let not_after_p3 = || after_p3().negated();

    let nom = b.add_suffix("Nom", vec![SuffixForm::new("")]);
    let acc = b.add_suffix(
        "Acc",
        vec![
            SuffixForm::when("+yI", not_after_p3()),
            SuffixForm::when("nI", after_p3()),
        ],
    );
    let dat = b.add_suffix(
        "Dat",
        vec![
            SuffixForm::when("+yA", not_after_p3()),
            SuffixForm::when("nA", after_p3()),
        ],
    );
    let loc = b.add_suffix(
        "Loc",
        vec![
            SuffixForm::when("dA", not_after_p3()),
            SuffixForm::when("ndA", after_p3()),
        ],
    );
    let abl = b.add_suffix(
        "Abl",
        vec![
            SuffixForm::when("dAn", not_after_p3()),
            SuffixForm::when("ndAn", after_p3()),
        ],
    );
    let genitive = b.add_suffix("Gen", vec![SuffixForm::new("+nIn")]);
    let ins = b.add_suffix("Ins", vec![SuffixForm::new("+ylA")]);

    let dim = b.add_suffix(
        "Dim",
        vec![SuffixForm::when("cIk", Condition::comes_after("Nom"))],
    );
    let rel = b.add_suffix(
        "Rel",
        vec![SuffixForm::when(
            "ki",
            Condition::comes_after("Loc").or(Condition::comes_after("Gen")),
        )],
    );

    let zero = b.add_suffix("Zero", vec![SuffixForm::new("")]);

    // -- Verbal suffixes -----------------------------------------------

    let pos = b.add_suffix("Pos", vec![SuffixForm::new("")]);
    let neg = b.add_suffix("Neg", vec![SuffixForm::new("mA")]);

    // -t after a vowel or l/r, -dIr elsewhere; the suffix may repeat.
    let caus = b.add_suffix(
        "Caus",
        vec![
            SuffixForm::when(
                "t",
                Condition::LastLetterVowel.or(Condition::LastLetterOneOf(vec!['l', 'r'])),
            ),
            SuffixForm::new("dIr"),
        ],
    );
    let pass = b.add_suffix(
        "Pass",
        vec![
            SuffixForm::when(
                "+In",
                Condition::LastLetterVowel.or(Condition::LastLetterOneOf(vec!['l'])),
            ),
            SuffixForm::new("Il"),
        ],
    );

    let past = b.add_suffix("Past", vec![SuffixForm::new("dI")]);
    let narr = b.add_suffix("Narr", vec![SuffixForm::new("mIş")]);
    let fut = b.add_suffix("Fut", vec![SuffixForm::new("+yAcAk")]);
    let prog = b.add_suffix("Prog", vec![SuffixForm::new("Iyor")]);
    let aor = b.add_suffix(
        "Aor",
        vec![
            SuffixForm::when("z", Condition::comes_after("Neg")),
            SuffixForm::when(
                "+Ar",
                Condition::RootHasAttribute(RootAttribute::AoristA)
                    .and(Condition::doesnt_come_after("Neg")),
            ),
            SuffixForm::when("+Ir", Condition::doesnt_come_after("Neg")),
        ],
    );

    // Person agreement after tense; past tense takes the short forms.
    // The unique names carry a _Verb marker to keep them apart from the
    // nominal agreement tags; output prints the pretty name.
    let a1sg_verb = b.add_suffix_pretty(
        "A1sg_Verb",
        "A1sg",
        vec![
            SuffixForm::when("m", Condition::comes_after("Past")),
            SuffixForm::new("+yIm"),
        ],
    );
    let a2sg_verb = b.add_suffix_pretty(
        "A2sg_Verb",
        "A2sg",
        vec![
            SuffixForm::when("n", Condition::comes_after("Past")),
            SuffixForm::new("sIn"),
        ],
    );
    let a3sg_verb = b.add_suffix_pretty("A3sg_Verb", "A3sg", vec![SuffixForm::new("")]);
    let a1pl_verb = b.add_suffix_pretty(
        "A1pl_Verb",
        "A1pl",
        vec![
            SuffixForm::when("k", Condition::comes_after("Past")),
            SuffixForm::new("+yIz"),
        ],
    );
    let a2pl_verb = b.add_suffix_pretty(
        "A2pl_Verb",
        "A2pl",
        vec![
            SuffixForm::when("nIz", Condition::comes_after("Past")),
            SuffixForm::new("sInIz"),
        ],
    );
    let a3pl_verb = b.add_suffix_pretty("A3pl_Verb", "A3pl", vec![SuffixForm::new("lAr")]);

    let inf = b.add_suffix("Inf", vec![SuffixForm::new("mAk"), SuffixForm::new("mA")]);
    let by_doing_so = b.add_suffix("ByDoingSo", vec![SuffixForm::new("+yArAk")]);

    // -- Free transitions ----------------------------------------------

    let noun_case_to_terminal = b.add_free_transition("Noun_Free_Transition");
    let noun_case_to_deriv = b.add_free_transition("Noun_Deriv_Transition");
    let adj_to_terminal = b.add_free_transition("Adj_Free_Transition");
    let adj_to_deriv = b.add_free_transition("Adj_Deriv_Transition");
    let verb_to_plain_deriv = b.add_free_transition("Verb_Plain_Deriv_Transition");
    let verb_to_polarity_deriv = b.add_free_transition("Verb_Polarity_Deriv_Transition");
    let adv_to_terminal = b.add_free_transition("Adv_Free_Transition");

    // -- Noun transitions ----------------------------------------------

    b.add_transition(noun_root, a3sg, noun_agreement);
    b.add_transition(noun_root, a3pl, noun_agreement);

    b.add_transition(noun_agreement, pnon, noun_possession);
    b.add_transition(noun_agreement, p1sg, noun_possession);
    b.add_transition(noun_agreement, p2sg, noun_possession);
    b.add_transition(noun_agreement, p3sg, noun_possession);
    b.add_transition(noun_agreement, p1pl, noun_possession);
    b.add_transition(noun_agreement, p2pl, noun_possession);
    b.add_transition(noun_agreement, p3pl, noun_possession);

    b.add_transition(noun_possession, nom, noun_case);
    b.add_transition(noun_possession, acc, noun_case);
    b.add_transition(noun_possession, dat, noun_case);
    b.add_transition(noun_possession, loc, noun_case);
    b.add_transition(noun_possession, abl, noun_case);
    b.add_transition(noun_possession, genitive, noun_case);
    b.add_transition(noun_possession, ins, noun_case);

    b.add_transition(noun_case, noun_case_to_terminal, noun_terminal);
    b.add_transition(noun_case, noun_case_to_deriv, noun_deriv);

    b.add_transition(noun_deriv, dim, noun_root);
    b.add_transition(noun_deriv, rel, adj_root);

    // -- Adjective transitions -----------------------------------------

    b.add_transition(adj_root, adj_to_terminal, adj_terminal);
    b.add_transition(adj_root, adj_to_deriv, adj_deriv);
    b.add_transition(adj_deriv, zero, noun_root);

    // -- Verb transitions ----------------------------------------------

    b.add_transition(verb_root, pos, verb_polarity);
    b.add_transition(verb_root, neg, verb_polarity);
    b.add_transition(verb_root, verb_to_plain_deriv, verb_plain_deriv);

    b.add_transition(verb_plain_deriv, caus, verb_root);
    b.add_transition(verb_plain_deriv, pass, verb_root);

    b.add_transition(verb_polarity, past, verb_tense);
    b.add_transition(verb_polarity, narr, verb_tense);
    b.add_transition(verb_polarity, fut, verb_tense);
    b.add_transition(verb_polarity, prog, verb_tense);
    b.add_transition(verb_polarity, aor, verb_tense);
    b.add_transition(verb_polarity, verb_to_polarity_deriv, verb_polarity_deriv);

    b.add_transition(verb_polarity_deriv, inf, noun_root);
    b.add_transition(verb_polarity_deriv, by_doing_so, adv_root);

    b.add_transition(verb_tense, a1sg_verb, verb_terminal);
    b.add_transition(verb_tense, a2sg_verb, verb_terminal);
    b.add_transition(verb_tense, a3sg_verb, verb_terminal);
    b.add_transition(verb_tense, a1pl_verb, verb_terminal);
    b.add_transition(verb_tense, a2pl_verb, verb_terminal);
    b.add_transition(verb_tense, a3pl_verb, verb_terminal);

    // -- Adverb transitions --------------------------------------------

    b.add_transition(adv_root, adv_to_terminal, adv_terminal);

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_passes_validation() {
        let graph = basic_suffix_graph().unwrap();
        assert_eq!(graph.state_count(), 17);
        assert!(graph.suffix_count() > 30);
    }

    #[test]
    fn root_states_for_all_parts_of_speech() {
        let graph = basic_suffix_graph().unwrap();
        assert_eq!(
            graph.root_state(PrimaryPos::Noun).unwrap().name,
            "NOUN_ROOT"
        );
        assert_eq!(
            graph.root_state(PrimaryPos::Verb).unwrap().name,
            "VERB_ROOT"
        );
        assert_eq!(
            graph.root_state(PrimaryPos::Adjective).unwrap().name,
            "ADJ_ROOT"
        );
        assert_eq!(
            graph.root_state(PrimaryPos::Adverb).unwrap().name,
            "ADV_ROOT"
        );
    }

    #[test]
    fn possession_transitions_in_declared_order() {
        let graph = basic_suffix_graph().unwrap();
        let agreement = graph.state_named("NOUN_WITH_AGREEMENT").unwrap();
        let names: Vec<&str> = graph
            .outgoing(agreement.id)
            .iter()
            .map(|t| t.suffix.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Pnon", "P1sg", "P2sg", "P3sg", "P1pl", "P2pl", "P3pl"]
        );
    }

    #[test]
    fn case_state_fans_out_through_free_transitions() {
        let graph = basic_suffix_graph().unwrap();
        let case = graph.state_named("NOUN_WITH_CASE").unwrap();
        let out = graph.outgoing(case.id);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.suffix.is_free_transition()));
        assert_eq!(out[0].to.name, "NOUN_TERMINAL");
        assert!(out[0].to.is_terminal());
        assert_eq!(out[1].to.name, "NOUN_DERIV");
        assert!(out[1].to.is_derivational());
    }

    #[test]
    fn causative_prefers_t_after_liquids() {
        let graph = basic_suffix_graph().unwrap();
        let caus = graph.suffix_named("Caus").unwrap();
        assert_eq!(caus.forms[0].template, "t");
        assert_eq!(caus.forms[1].template, "dIr");
    }
}
