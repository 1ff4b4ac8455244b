// The context-free morphological parser: depth-first backtracking over
// root candidates and suffix-graph paths.

use std::sync::Arc;

use log::debug;

use ekler_graph::SuffixGraph;
use ekler_graph::state::StateId;

use crate::morpheme_container::{MorphemeContainer, Step};
use crate::root_finder::RootFinder;
use crate::suffix_applier;

/// Parses one word at a time against an immutable grammar and lexicon.
///
/// `parse` never fails: a word with no analysis yields an empty vector.
/// The result order is fully determined by the order of the root finders
/// and the declared transition order of the graph, so repeated calls on
/// the same input are identical.
///
/// The parser holds only shared immutable state; concurrent `parse` calls
/// from multiple threads need no locking.
pub struct ContextFreeMorphologicalParser {
    graph: Arc<SuffixGraph>,
    root_finders: Vec<Box<dyn RootFinder>>,
}

impl ContextFreeMorphologicalParser {
    pub fn new(graph: Arc<SuffixGraph>, root_finders: Vec<Box<dyn RootFinder>>) -> Self {
        Self { graph, root_finders }
    }

    pub fn graph(&self) -> &Arc<SuffixGraph> {
        &self.graph
    }

    /// Produce every complete analysis of `word`, in deterministic order.
    pub fn parse(&self, word: &str) -> Vec<MorphemeContainer> {
        let chars: Vec<char> = word.chars().collect();
        let mut results = Vec::new();
        if chars.is_empty() {
            return results;
        }

        for finder in &self.root_finders {
            for candidate in finder.find_candidates(&chars) {
                let root = candidate.root;
                let Some(start) = self.graph.root_state(root.lexeme.primary_pos) else {
                    // The grammar has no entry point for this part of
                    // speech; the candidate cannot start a parse.
                    continue;
                };
                debug!(
                    "root candidate '{}' ({}) at {}",
                    root.text, root.lexeme.lemma, start.name
                );
                let consumed = root.char_len();
                let container = MorphemeContainer::new(root, Arc::clone(start));
                let mut visited: Vec<(StateId, usize)> = Vec::new();
                self.traverse(&container, &chars[consumed..], &mut visited, &mut results);
            }
        }

        debug!("'{}' -> {} analyses", word, results.len());
        results
    }

    /// Depth-first search from the container's current state.
    ///
    /// `visited` holds (state, remaining-length) pairs for the
    /// zero-consumption steps taken on the current path; it blocks the
    /// search from re-entering a state without having consumed input,
    /// which together with the graph's epsilon-acyclicity bounds the
    /// depth by input length plus the longest zero-width run.
    fn traverse(
        &self,
        container: &MorphemeContainer,
        remaining: &[char],
        visited: &mut Vec<(StateId, usize)>,
        results: &mut Vec<MorphemeContainer>,
    ) {
        let state = container.last_state();

        if state.is_terminal() && remaining.is_empty() && !container.has_pending_expectations() {
            results.push(container.clone());
        }

        for transition in self.graph.outgoing(state.id) {
            let Some(applied) = suffix_applier::apply(transition, container, remaining) else {
                continue;
            };

            let step = Step {
                transition: transition.clone(),
                form_index: applied.form_index,
                surface: applied.surface,
            };
            let satisfied_expectation = container.has_pending_expectations()
                && applied.consumed > 0;
            let next = container.extended(step, applied.context, satisfied_expectation);

            if applied.consumed == 0 {
                let key = (transition.to.id, remaining.len());
                if visited.contains(&key) {
                    continue;
                }
                let mark = visited.len();
                visited.push(key);
                self.traverse(&next, remaining, visited, results);
                visited.truncate(mark);
            } else {
                let mark = visited.len();
                self.traverse(&next, &remaining[applied.consumed..], visited, results);
                visited.truncate(mark);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ekler_graph::basic::basic_suffix_graph;

    use crate::lexicon::loader;
    use crate::lexicon::root_generator::{self, RootMap};
    use crate::root_finder::WordRootFinder;

    fn parser_for(lines: &[&str]) -> ContextFreeMorphologicalParser {
        let lexemes = loader::load_from_lines(lines.iter().copied()).unwrap();
        let mut roots = Vec::new();
        for lexeme in &lexemes {
            roots.extend(root_generator::generate(lexeme));
        }
        let root_map = Arc::new(RootMap::build(roots));
        let graph = Arc::new(basic_suffix_graph().unwrap());
        ContextFreeMorphologicalParser::new(
            graph,
            vec![Box::new(WordRootFinder::new(root_map))],
        )
    }

    #[test]
    fn no_candidates_yields_empty_result() {
        let parser = parser_for(&["kitap"]);
        assert!(parser.parse("zzzqq").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let parser = parser_for(&["kitap"]);
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn prefix_only_match_yields_no_result_for_that_root() {
        // "kitapx": the root kitap matches a prefix but nothing consumes "x".
        let parser = parser_for(&["kitap"]);
        assert!(parser.parse("kitapx").is_empty());
    }

    #[test]
    fn bare_noun_parses_with_zero_suffixes() {
        let parser = parser_for(&["kitap"]);
        let results = parser.parse("kitap");
        assert_eq!(results.len(), 1);
        let names: Vec<String> = results[0]
            .steps()
            .iter()
            .filter(|s| s.is_visible())
            .map(|s| s.transition.suffix.name.clone())
            .collect();
        assert_eq!(names, vec!["A3sg", "Pnon", "Nom"]);
    }

    #[test]
    fn voiced_variant_alone_is_not_a_word() {
        let parser = parser_for(&["kitap"]);
        assert!(parser.parse("kitab").is_empty());
    }

    #[test]
    fn surface_coverage_invariant_holds() {
        let parser = parser_for(&["kitap", "yapmak", "ev"]);
        for word in ["kitaba", "kitaplar", "evleri", "yaptı", "yapılır"] {
            for analysis in parser.parse(word) {
                assert_eq!(analysis.surface_so_far(), word, "word {word}");
            }
        }
    }

    #[test]
    fn terminal_invariant_holds() {
        let parser = parser_for(&["kitap", "yapmak", "ev"]);
        for word in ["kitaba", "evden", "yapmak", "yaparak"] {
            for analysis in parser.parse(word) {
                assert!(analysis.last_state().is_terminal(), "word {word}");
            }
        }
    }

    #[test]
    fn parse_is_deterministic() {
        let parser = parser_for(&["kitap", "yapmak", "ev"]);
        let first = parser.parse("evleri");
        let second = parser.parse("evleri");
        assert_eq!(first, second);
    }

    #[test]
    fn famous_three_way_ambiguity_of_evleri() {
        // ev+A3pl+P3sg (their house / his houses), ev+A3sg+P3pl,
        // ev+A3pl+Pnon+Acc (the houses, accusative).
        let parser = parser_for(&["ev"]);
        let results = parser.parse("evleri");
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn ambiguous_analyses_are_all_returned_in_graph_order() {
        let parser = parser_for(&["ev"]);
        let tags: Vec<String> = parser
            .parse("evleri")
            .iter()
            .map(|c| {
                c.steps()
                    .iter()
                    .filter(|s| s.is_visible())
                    .map(|s| s.transition.suffix.name.clone())
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect();
        // Declared order: A3sg row before A3pl rows, Pnon before P3pl.
        assert_eq!(
            tags,
            vec!["A3sg+P3pl+Nom", "A3pl+Pnon+Acc", "A3pl+P3sg+Nom"]
        );
    }

    #[test]
    fn causative_chain_parses_once() {
        let parser = parser_for(&["kitap", "yapmak"]);
        let results = parser.parse("yaptırtmayı");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn passive_parses() {
        let parser = parser_for(&["yapmak"]);
        // yap + Il (passive) + Pos + Aor(+Ir) + A3sg: yapılır.
        let results = parser.parse("yapılır");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn future_first_person_voices_the_suffix_stop() {
        let parser = parser_for(&["yapmak"]);
        // yap + Pos + Fut(+yAcAk as "acağ") + A1sg(+yIm as "ım").
        let results = parser.parse("yapacağım");
        assert_eq!(results.len(), 1);
    }
}
