// Root finders: pluggable suppliers of root candidates for a word.
//
// The parser queries each finder in the order supplied and concatenates
// their candidates without deduplication; coinciding candidates simply
// yield coinciding analyses, which is the caller's business to collapse.

use std::sync::Arc;

use ekler_core::alphabet;
use ekler_core::lexeme::{Lexeme, PrimaryPos, SecondaryPos};
use ekler_core::root::Root;

use crate::lexicon::root_generator::RootMap;

/// One candidate: a root whose surface text is a prefix of the word being
/// parsed. The parser resumes after `root.char_len()` characters.
#[derive(Debug, Clone)]
pub struct RootCandidate {
    pub root: Arc<Root>,
}

/// A strategy for locating candidate roots in a word.
///
/// Finders are shared read-only by concurrent parses, hence the `Send +
/// Sync` bound.
pub trait RootFinder: Send + Sync {
    /// All roots matching a prefix of `word`, in this finder's own order.
    fn find_candidates(&self, word: &[char]) -> Vec<RootCandidate>;
}

/// Dictionary lookup: every prefix of the word that is a known root
/// surface text, shortest first.
pub struct WordRootFinder {
    root_map: Arc<RootMap>,
}

impl WordRootFinder {
    pub fn new(root_map: Arc<RootMap>) -> Self {
        Self { root_map }
    }
}

impl RootFinder for WordRootFinder {
    fn find_candidates(&self, word: &[char]) -> Vec<RootCandidate> {
        let mut candidates = Vec::new();
        let mut prefix = String::new();
        for &c in word {
            prefix.push(c);
            for root in self.root_map.get(&prefix) {
                candidates.push(RootCandidate { root: Arc::clone(root) });
            }
        }
        candidates
    }
}

/// Proper-noun root before an apostrophe: Ali'ye parses as the proper noun
/// Ali plus suffixes. The root's surface text includes the apostrophe, so
/// consumed fragments still concatenate to the input exactly.
pub struct ProperNounFromApostropheRootFinder;

impl RootFinder for ProperNounFromApostropheRootFinder {
    fn find_candidates(&self, word: &[char]) -> Vec<RootCandidate> {
        let Some(apostrophe) = word.iter().position(|&c| c == '\'') else {
            return Vec::new();
        };
        if apostrophe == 0 || !alphabet::is_upper(word[0]) {
            return Vec::new();
        }
        let lemma: String = word[..apostrophe].iter().collect();
        let surface: String = word[..=apostrophe].iter().collect();
        vec![RootCandidate {
            root: Arc::new(Root::variant(&proper_lexeme(lemma), surface, Vec::new())),
        }]
    }
}

/// Capitalized words without an apostrophe: every prefix is offered as a
/// potential proper-noun root, since nothing marks where the name ends.
pub struct ProperNounWithoutApostropheRootFinder;

impl RootFinder for ProperNounWithoutApostropheRootFinder {
    fn find_candidates(&self, word: &[char]) -> Vec<RootCandidate> {
        if word.is_empty()
            || !alphabet::is_upper(word[0])
            || word.contains(&'\'')
        {
            return Vec::new();
        }
        (1..=word.len())
            .map(|end| {
                let text: String = word[..end].iter().collect();
                RootCandidate {
                    root: Arc::new(Root::variant(
                        &proper_lexeme(text.clone()),
                        text,
                        Vec::new(),
                    )),
                }
            })
            .collect()
    }
}

fn proper_lexeme(lemma: String) -> Arc<Lexeme> {
    let mut lexeme = Lexeme::new(lemma.clone(), lemma, PrimaryPos::Noun);
    lexeme.secondary_pos = Some(SecondaryPos::ProperNoun);
    Arc::new(lexeme)
}
