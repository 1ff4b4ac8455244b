// Dictionary entry model: lemma, part of speech, root attributes.

use std::fmt;
use std::str::FromStr;

/// Primary part of speech of a lexeme, and of every suffix-graph state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Verb,
    Adverb,
}

impl PrimaryPos {
    /// The tag used in analysis output ("Noun", "Adj", "Verb", "Adv").
    pub fn as_str(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Adverb => "Adv",
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryPos {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Noun" => Ok(PrimaryPos::Noun),
            "Adj" => Ok(PrimaryPos::Adjective),
            "Verb" => Ok(PrimaryPos::Verb),
            "Adv" => Ok(PrimaryPos::Adverb),
            other => Err(UnknownMarker::pos(other)),
        }
    }
}

/// Secondary part of speech, refining the primary one in analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryPos {
    ProperNoun,
}

impl SecondaryPos {
    pub fn as_str(self) -> &'static str {
        match self {
            SecondaryPos::ProperNoun => "Prop",
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecondaryPos {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prop" => Ok(SecondaryPos::ProperNoun),
            other => Err(UnknownMarker::secondary_pos(other)),
        }
    }
}

/// Lexical attributes steering root generation and allomorph selection.
///
/// Some are written in the dictionary, others inferred at load time from
/// the shape of the lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAttribute {
    /// Stem-final voiceless stop voices before vowel-initial suffixes
    /// (kitap → kitab-).
    Voicing,
    /// Suppresses voicing inference (top → topu, never tobu).
    NoVoicing,
    /// Stem-final consonant doubles before vowel-initial suffixes
    /// (hak → hakk-).
    Doubling,
    /// The last stem vowel drops before vowel-initial suffixes
    /// (burun → burn-).
    LastVowelDrop,
    /// Suffix vowels harmonize against the flipped stem vowel
    /// (saat → saati).
    InverseHarmony,
    /// The aorist takes the A form (yap → yapar).
    AoristA,
    /// The aorist takes the I form (bildir → bildirir).
    AoristI,
}

impl RootAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            RootAttribute::Voicing => "Voicing",
            RootAttribute::NoVoicing => "NoVoicing",
            RootAttribute::Doubling => "Doubling",
            RootAttribute::LastVowelDrop => "LastVowelDrop",
            RootAttribute::InverseHarmony => "InverseHarmony",
            RootAttribute::AoristA => "Aorist_A",
            RootAttribute::AoristI => "Aorist_I",
        }
    }
}

impl fmt::Display for RootAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RootAttribute {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Voicing" => Ok(RootAttribute::Voicing),
            "NoVoicing" => Ok(RootAttribute::NoVoicing),
            "Doubling" => Ok(RootAttribute::Doubling),
            "LastVowelDrop" => Ok(RootAttribute::LastVowelDrop),
            "InverseHarmony" => Ok(RootAttribute::InverseHarmony),
            "Aorist_A" => Ok(RootAttribute::AoristA),
            "Aorist_I" => Ok(RootAttribute::AoristI),
            other => Err(UnknownMarker::attribute(other)),
        }
    }
}

/// An unrecognized marker token in a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} marker: {token}")]
pub struct UnknownMarker {
    kind: &'static str,
    token: String,
}

impl UnknownMarker {
    fn pos(token: &str) -> Self {
        Self { kind: "part-of-speech", token: token.to_string() }
    }

    fn secondary_pos(token: &str) -> Self {
        Self { kind: "secondary part-of-speech", token: token.to_string() }
    }

    fn attribute(token: &str) -> Self {
        Self { kind: "attribute", token: token.to_string() }
    }
}

/// A dictionary entry.
///
/// `lemma` is the citation form as written in the dictionary ("yapmak");
/// `root` is the stem suffixes attach to ("yap"). For non-verbs the two
/// coincide. Lexemes are built once by the lexicon loader and shared
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub lemma: String,
    pub root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: Option<SecondaryPos>,
    pub attributes: Vec<RootAttribute>,
}

impl Lexeme {
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        primary_pos: PrimaryPos,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            root: root.into(),
            primary_pos,
            secondary_pos: None,
            attributes: Vec::new(),
        }
    }

    pub fn has_attribute(&self, attribute: RootAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}
