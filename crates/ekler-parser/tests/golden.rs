//! Golden-corpus test: parse a word list against a fixed lexicon and
//! compare every analysis, in order, with the recorded expectations in
//! tests/golden/analyses.json.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use ekler_graph::basic::basic_suffix_graph;
use ekler_parser::formatter;
use ekler_parser::lexicon::loader;
use ekler_parser::lexicon::root_generator::{self, RootMap};
use ekler_parser::parser::ContextFreeMorphologicalParser;
use ekler_parser::root_finder::WordRootFinder;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    lexicon: Vec<String>,
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    word: String,
    analyses: Vec<String>,
}

fn load_golden() -> GoldenFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/analyses.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn golden_corpus_matches() {
    let golden = load_golden();

    let lexemes = loader::load_from_lines(&golden.lexicon).expect("golden lexicon");
    let mut roots = Vec::new();
    for lexeme in &lexemes {
        roots.extend(root_generator::generate(lexeme));
    }
    let root_map = Arc::new(RootMap::build(roots));
    let parser = ContextFreeMorphologicalParser::new(
        Arc::new(basic_suffix_graph().expect("grammar")),
        vec![Box::new(WordRootFinder::new(root_map))],
    );

    for case in &golden.cases {
        let actual: Vec<String> = parser
            .parse(&case.word)
            .iter()
            .map(formatter::format_parseset)
            .collect();
        assert_eq!(
            actual, case.analyses,
            "analyses for '{}' diverge from the golden corpus",
            case.word
        );
    }
}

#[test]
fn golden_corpus_respects_surface_coverage() {
    let golden = load_golden();

    let lexemes = loader::load_from_lines(&golden.lexicon).expect("golden lexicon");
    let mut roots = Vec::new();
    for lexeme in &lexemes {
        roots.extend(root_generator::generate(lexeme));
    }
    let root_map = Arc::new(RootMap::build(roots));
    let parser = ContextFreeMorphologicalParser::new(
        Arc::new(basic_suffix_graph().expect("grammar")),
        vec![Box::new(WordRootFinder::new(root_map))],
    );

    for case in &golden.cases {
        for analysis in parser.parse(&case.word) {
            assert_eq!(analysis.surface_so_far(), case.word);
        }
    }
}
