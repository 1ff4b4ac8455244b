// Dictionary-line parsing into lexeme records.
//
// One line, one lexeme:
//
//   kitap
//   yapmak
//   mavi [P:Adj]
//   Ankara [P:Noun, Prop]
//   saat [P:Noun; A:InverseHarmony, NoVoicing]
//
// Markers are optional; part of speech and phonological attributes not
// written in the dictionary are inferred from the lemma's shape. Malformed
// lines fail here, at load time, never during parsing.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use ekler_core::alphabet;
use ekler_core::lexeme::{
    Lexeme, PrimaryPos, RootAttribute, SecondaryPos, UnknownMarker,
};

/// Error type for lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("line {line}: empty lemma")]
    EmptyLemma { line: usize },

    #[error("line {line}: malformed marker section")]
    MalformedMarkers { line: usize },

    #[error("line {line}: {source}")]
    UnknownMarker {
        line: usize,
        #[source]
        source: UnknownMarker,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load lexemes from dictionary lines. Blank lines and `#` comments are
/// skipped; line numbers in errors are 1-based.
pub fn load_from_lines<I>(lines: I) -> Result<Vec<Arc<Lexeme>>, LexiconError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut lexemes = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let text = line.as_ref().trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        lexemes.push(Arc::new(parse_line(text, line_no)?));
    }
    Ok(lexemes)
}

/// Load lexemes from a dictionary file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Arc<Lexeme>>, LexiconError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_lines(contents.lines())
}

fn parse_line(text: &str, line: usize) -> Result<Lexeme, LexiconError> {
    let (lemma, markers) = match text.find('[') {
        Some(open) => {
            let (head, tail) = text.split_at(open);
            let tail = tail
                .strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .ok_or(LexiconError::MalformedMarkers { line })?;
            (head.trim(), Some(tail))
        }
        None => (text, None),
    };

    if lemma.is_empty() {
        return Err(LexiconError::EmptyLemma { line });
    }

    let mut explicit_pos: Option<PrimaryPos> = None;
    let mut secondary_pos: Option<SecondaryPos> = None;
    let mut attributes: Vec<RootAttribute> = Vec::new();

    if let Some(markers) = markers {
        for clause in markers.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            if let Some(value) = clause.strip_prefix("P:") {
                let mut tokens = value.split(',').map(str::trim);
                match tokens.next() {
                    Some(token) if !token.is_empty() => {
                        explicit_pos = Some(
                            PrimaryPos::from_str(token)
                                .map_err(|source| LexiconError::UnknownMarker { line, source })?,
                        );
                    }
                    _ => return Err(LexiconError::MalformedMarkers { line }),
                }
                if let Some(token) = tokens.next() {
                    secondary_pos = Some(
                        SecondaryPos::from_str(token)
                            .map_err(|source| LexiconError::UnknownMarker { line, source })?,
                    );
                }
            } else if let Some(value) = clause.strip_prefix("A:") {
                for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    attributes.push(
                        RootAttribute::from_str(token)
                            .map_err(|source| LexiconError::UnknownMarker { line, source })?,
                    );
                }
            } else {
                return Err(LexiconError::MalformedMarkers { line });
            }
        }
    }

    // Part of speech: explicit marker, else -mak/-mek means verb, else noun.
    let infinitive_stem = strip_infinitive(lemma);
    let primary_pos = explicit_pos.unwrap_or(match infinitive_stem {
        Some(_) => PrimaryPos::Verb,
        None => PrimaryPos::Noun,
    });

    let root = if primary_pos == PrimaryPos::Verb {
        infinitive_stem.unwrap_or(lemma).to_string()
    } else {
        lemma.to_string()
    };

    infer_attributes(primary_pos, &root, &mut attributes);

    Ok(Lexeme {
        lemma: lemma.to_string(),
        root,
        primary_pos,
        secondary_pos,
        attributes,
    })
}

/// The stem of a -mak/-mek infinitive, if the lemma is one.
fn strip_infinitive(lemma: &str) -> Option<&str> {
    let stem = lemma.strip_suffix("mak").or_else(|| lemma.strip_suffix("mek"))?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// Fill in the attributes the dictionary leaves implicit.
fn infer_attributes(pos: PrimaryPos, root: &str, attributes: &mut Vec<RootAttribute>) {
    match pos {
        PrimaryPos::Verb => {
            // Aorist class defaults by syllable count; the dictionary marks
            // the exceptions (gel, al, ...).
            if !attributes.contains(&RootAttribute::AoristA)
                && !attributes.contains(&RootAttribute::AoristI)
            {
                if alphabet::vowel_count(root) == 1 {
                    attributes.push(RootAttribute::AoristA);
                } else {
                    attributes.push(RootAttribute::AoristI);
                }
            }
        }
        _ => {
            // Polysyllabic nominals ending in a voiceless stop voice it
            // before vowel-initial suffixes; monosyllables usually do not.
            let voices = !attributes.contains(&RootAttribute::Voicing)
                && !attributes.contains(&RootAttribute::NoVoicing)
                && alphabet::vowel_count(root) > 1
                && root.chars().last().is_some_and(alphabet::is_voiceless_stop);
            if voices {
                attributes.push(RootAttribute::Voicing);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_one(line: &str) -> Arc<Lexeme> {
        let lexemes = load_from_lines([line]).unwrap();
        assert_eq!(lexemes.len(), 1);
        Arc::clone(&lexemes[0])
    }

    #[test]
    fn bare_noun_line() {
        let lexeme = load_one("kitap");
        assert_eq!(lexeme.lemma, "kitap");
        assert_eq!(lexeme.root, "kitap");
        assert_eq!(lexeme.primary_pos, PrimaryPos::Noun);
        assert!(lexeme.has_attribute(RootAttribute::Voicing));
    }

    #[test]
    fn infinitive_becomes_verb_with_stripped_root() {
        let lexeme = load_one("yapmak");
        assert_eq!(lexeme.primary_pos, PrimaryPos::Verb);
        assert_eq!(lexeme.root, "yap");
        assert_eq!(lexeme.lemma, "yapmak");
        assert!(lexeme.has_attribute(RootAttribute::AoristA));
    }

    #[test]
    fn polysyllabic_verb_defaults_to_aorist_i() {
        let lexeme = load_one("bildirmek");
        assert_eq!(lexeme.root, "bildir");
        assert!(lexeme.has_attribute(RootAttribute::AoristI));
    }

    #[test]
    fn monosyllabic_noun_does_not_voice() {
        let lexeme = load_one("top");
        assert!(!lexeme.has_attribute(RootAttribute::Voicing));
    }

    #[test]
    fn explicit_pos_marker() {
        let lexeme = load_one("mavi [P:Adj]");
        assert_eq!(lexeme.primary_pos, PrimaryPos::Adjective);
        assert_eq!(lexeme.root, "mavi");
    }

    #[test]
    fn secondary_pos_marker() {
        let lexeme = load_one("Ankara [P:Noun, Prop]");
        assert_eq!(lexeme.primary_pos, PrimaryPos::Noun);
        assert_eq!(lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
    }

    #[test]
    fn attribute_markers_override_inference() {
        let lexeme = load_one("saat [P:Noun; A:InverseHarmony, NoVoicing]");
        assert!(lexeme.has_attribute(RootAttribute::InverseHarmony));
        assert!(lexeme.has_attribute(RootAttribute::NoVoicing));
        assert!(!lexeme.has_attribute(RootAttribute::Voicing));
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let lexemes = load_from_lines(["", "# dictionary", "ev", "  "]).unwrap();
        assert_eq!(lexemes.len(), 1);
        assert_eq!(lexemes[0].lemma, "ev");
    }

    #[test]
    fn unbalanced_brackets_fail_with_line_number() {
        let err = load_from_lines(["ev", "kitap [P:Noun"]).unwrap_err();
        assert!(matches!(err, LexiconError::MalformedMarkers { line: 2 }));
    }

    #[test]
    fn unknown_pos_fails_with_line_number() {
        let err = load_from_lines(["kitap [P:Interj]"]).unwrap_err();
        match err {
            LexiconError::UnknownMarker { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_clause_fails() {
        let err = load_from_lines(["kitap [X:Foo]"]).unwrap_err();
        assert!(matches!(err, LexiconError::MalformedMarkers { line: 1 }));
    }
}
