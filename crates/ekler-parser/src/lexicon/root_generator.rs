// Root generation: the phonetic surface variants of a lexeme's stem, and
// the prefix-indexed table the word root finder looks them up in.

use std::sync::Arc;

use hashbrown::HashMap;

use ekler_core::lexeme::{Lexeme, RootAttribute};
use ekler_core::phonetics::PhoneticExpectation;
use ekler_core::root::Root;

/// Generate every root variant of a lexeme.
///
/// The unmodified stem always comes first. Variants produced by stem
/// alternation (final-stop voicing, consonant doubling, vowel drop) carry
/// a vowel-start expectation: they only occur before vowel-initial
/// suffixes and are not complete words on their own.
pub fn generate(lexeme: &Arc<Lexeme>) -> Vec<Root> {
    let mut roots = vec![Root::original(lexeme)];

    if lexeme.has_attribute(RootAttribute::Voicing) {
        if let Some(text) = voiced_variant(&lexeme.root) {
            roots.push(Root::variant(
                lexeme,
                text,
                vec![PhoneticExpectation::VowelStart],
            ));
        }
    }

    if lexeme.has_attribute(RootAttribute::Doubling) {
        if let Some(last) = lexeme.root.chars().last() {
            let mut text = lexeme.root.clone();
            text.push(last);
            roots.push(Root::variant(
                lexeme,
                text,
                vec![PhoneticExpectation::VowelStart],
            ));
        }
    }

    if lexeme.has_attribute(RootAttribute::LastVowelDrop) {
        if let Some(text) = vowel_dropped_variant(&lexeme.root) {
            roots.push(Root::variant(
                lexeme,
                text,
                vec![PhoneticExpectation::VowelStart],
            ));
        }
    }

    roots
}

/// The stem with its final voiceless stop voiced: kitap → kitab,
/// ağaç → ağac, renk → reng (k after n goes to g, not ğ).
fn voiced_variant(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let (&last, rest) = chars.split_last()?;
    let voiced = if last == 'k' && rest.last() == Some(&'n') {
        'g'
    } else {
        ekler_core::alphabet::voice(last)?
    };
    let mut out: String = rest.iter().collect();
    out.push(voiced);
    Some(out)
}

/// The stem with its last vowel dropped: burun → burn, oğul → oğl.
fn vowel_dropped_variant(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let last_vowel = chars
        .iter()
        .rposition(|&c| ekler_core::alphabet::is_vowel(c))?;
    Some(
        chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != last_vowel)
            .map(|(_, &c)| c)
            .collect(),
    )
}

/// The prefix-indexed root lookup table.
///
/// Keys are root surface texts; values keep insertion order, so lookup
/// results are deterministic for a given generation order. Built once,
/// then shared read-only.
#[derive(Debug, Default)]
pub struct RootMap {
    map: HashMap<String, Vec<Arc<Root>>>,
}

impl RootMap {
    /// Index the given roots by their surface text.
    pub fn build(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut map: HashMap<String, Vec<Arc<Root>>> = HashMap::new();
        for root in roots {
            map.entry(root.text.clone()).or_default().push(Arc::new(root));
        }
        Self { map }
    }

    /// All roots whose surface text is exactly `text`.
    pub fn get(&self, text: &str) -> &[Arc<Root>] {
        self.map.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct root surface texts.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader;

    fn lexeme(line: &str) -> Arc<Lexeme> {
        Arc::clone(&loader::load_from_lines([line]).unwrap()[0])
    }

    #[test]
    fn voicing_noun_generates_both_variants() {
        let roots = generate(&lexeme("kitap"));
        let texts: Vec<&str> = roots.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["kitap", "kitab"]);
        assert!(roots[0].expectations.is_empty());
        assert_eq!(roots[1].expectations, vec![PhoneticExpectation::VowelStart]);
    }

    #[test]
    fn verb_generates_single_stem_root() {
        let roots = generate(&lexeme("yapmak"));
        let texts: Vec<&str> = roots.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["yap"]);
    }

    #[test]
    fn nk_voices_to_ng() {
        let roots = generate(&lexeme("renk"));
        let texts: Vec<&str> = roots.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["renk", "reng"]);
    }

    #[test]
    fn doubling_appends_the_final_consonant() {
        let roots = generate(&lexeme("hak [P:Noun; A:Doubling, NoVoicing]"));
        let texts: Vec<&str> = roots.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["hak", "hakk"]);
    }

    #[test]
    fn last_vowel_drop_removes_the_final_vowel() {
        let roots = generate(&lexeme("burun [P:Noun; A:LastVowelDrop]"));
        let texts: Vec<&str> = roots.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["burun", "burn"]);
    }

    #[test]
    fn root_map_indexes_by_surface_text() {
        let mut roots = Vec::new();
        for line in ["kitap", "yapmak"] {
            roots.extend(generate(&lexeme(line)));
        }
        let map = RootMap::build(roots);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("kitab").len(), 1);
        assert_eq!(map.get("kitab")[0].lexeme.lemma, "kitap");
        assert_eq!(map.get("yap").len(), 1);
        assert!(map.get("kedi").is_empty());
    }

    #[test]
    fn homographs_share_a_key_in_insertion_order() {
        let mut roots = Vec::new();
        // yüz the noun (face) and yüzmek the verb (swim) collide on "yüz".
        roots.extend(generate(&lexeme("yüz [P:Noun; A:NoVoicing]")));
        roots.extend(generate(&lexeme("yüzmek")));
        let map = RootMap::build(roots);
        let hits = map.get("yüz");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].lexeme.lemma, "yüz");
        assert_eq!(hits[1].lexeme.lemma, "yüzmek");
    }
}
