// Phonetic context tracking and suffix-template resolution.
//
// A suffix is authored as a template ("+yA", "dIr", "lArI"). Resolution
// turns the template into the concrete letters it contributes after a given
// stem: archiphonemes pick their harmony variant, optional letters are kept
// or dropped by what the stem ends with, and a voiced initial obstruent
// assimilates to a voiceless stem-final consonant.

use crate::alphabet;

/// A constraint a root surface variant places on the first overt suffix
/// attached to it.
///
/// The voiced variant of a voicing root (kitab for kitap) only occurs before
/// vowel-initial suffixes; until such a suffix is applied the variant is not
/// a complete word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticExpectation {
    /// The next overt suffix must begin with a vowel.
    VowelStart,
    /// The next overt suffix must begin with a consonant.
    ConsonantStart,
}

impl PhoneticExpectation {
    /// Check whether a suffix beginning with `first` satisfies the expectation.
    pub fn satisfied_by(self, first: char) -> bool {
        match self {
            PhoneticExpectation::VowelStart => alphabet::is_vowel(first),
            PhoneticExpectation::ConsonantStart => !alphabet::is_vowel(first),
        }
    }
}

/// The phonetic state of the surface assembled so far.
///
/// Only two letters matter for Turkish suffixation: the last letter (vowel
/// versus consonant, voiceless or not) and the last vowel (frontness and
/// rounding for harmony). The context advances letter by letter as suffixes
/// are applied; it is a small `Copy` value, so every search branch carries
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhoneticContext {
    pub last_letter: Option<char>,
    pub last_vowel: Option<char>,
}

impl PhoneticContext {
    /// Compute the context of a complete surface string.
    pub fn of(surface: &str) -> Self {
        surface.chars().fold(Self::default(), |ctx, c| ctx.advanced(c))
    }

    /// The context after appending one letter.
    ///
    /// The orthographic apostrophe of proper-noun suffixation (Ali'ye) is
    /// not a phone and leaves the context unchanged.
    pub fn advanced(self, c: char) -> Self {
        if c == '\'' {
            return self;
        }
        Self {
            last_letter: Some(c),
            last_vowel: if alphabet::is_vowel(c) { Some(c) } else { self.last_vowel },
        }
    }

    /// The context after appending a whole fragment. A zero-length fragment
    /// leaves the context unchanged.
    pub fn advanced_by(self, fragment: &str) -> Self {
        fragment.chars().fold(self, |ctx, c| ctx.advanced(c))
    }

    /// Replace the harmony vowel with its front/back counterpart.
    ///
    /// Applied to root contexts of lexemes with the inverse-harmony
    /// attribute (saat takes front suffixes: saati, not saatı).
    pub fn with_flipped_harmony(self) -> Self {
        Self {
            last_letter: self.last_letter,
            last_vowel: self.last_vowel.map(alphabet::flip_harmony),
        }
    }

    pub fn ends_with_vowel(&self) -> bool {
        self.last_letter.map(alphabet::is_vowel).unwrap_or(false)
    }

    pub fn last_letter_voiceless(&self) -> bool {
        self.last_letter.map(alphabet::is_voiceless).unwrap_or(false)
    }

    pub fn last_vowel_frontal(&self) -> bool {
        self.last_vowel.map(alphabet::is_front_vowel).unwrap_or(false)
    }

    pub fn last_vowel_rounded(&self) -> bool {
        self.last_vowel.map(alphabet::is_rounded_vowel).unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Template resolution
// ---------------------------------------------------------------------------

/// Resolve a suffix form template against a stem context, producing the
/// concrete letters the suffix contributes.
///
/// Template language:
/// - a lowercase letter stands for itself;
/// - `A` resolves to a/e by the frontness of the last vowel;
/// - `I` resolves to ı/i/u/ü by frontness and rounding of the last vowel;
/// - `+X` marks X optional: an optional vowel is dropped after a vowel-final
///   stem, an optional consonant is kept only after a vowel-final stem;
/// - the first emitted letter, if it is b/c/d/g, devoices after a voiceless
///   stem-final consonant (dA on kitap gives "ta").
///
/// The running context advances over the emitted letters, so a later
/// archiphoneme harmonizes with an earlier resolved vowel of the same
/// suffix (lArI on kedi gives "leri").
pub fn resolve_template(template: &str, stem: &PhoneticContext) -> String {
    let mut out = String::new();
    let mut running = *stem;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let (symbol, optional) = if c == '+' {
            match chars.next() {
                Some(next) => (next, true),
                None => break,
            }
        } else {
            (c, false)
        };

        if optional {
            let vocalic = is_vowel_symbol(symbol);
            // Optional vowel after a vowel, or optional consonant after a
            // consonant: the letter is not realized.
            if vocalic == running.ends_with_vowel() {
                continue;
            }
        }

        let mut resolved = match symbol {
            'A' => {
                if running.last_vowel_frontal() { 'e' } else { 'a' }
            }
            'I' => match (running.last_vowel_frontal(), running.last_vowel_rounded()) {
                (false, false) => '\u{0131}', // ı
                (false, true) => 'u',
                (true, false) => 'i',
                (true, true) => '\u{00FC}',   // ü
            },
            other => other,
        };

        if out.is_empty() && stem.last_letter_voiceless() {
            if let Some(devoiced) = alphabet::devoice(resolved) {
                resolved = devoiced;
            }
        }

        out.push(resolved);
        running = running.advanced(resolved);
    }

    out
}

/// Whether a template symbol stands for a vowel (archiphoneme or literal).
fn is_vowel_symbol(symbol: char) -> bool {
    symbol == 'A' || symbol == 'I' || alphabet::is_vowel(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(surface: &str) -> PhoneticContext {
        PhoneticContext::of(surface)
    }

    #[test]
    fn context_tracks_last_letter_and_vowel() {
        let c = ctx("kitab");
        assert_eq!(c.last_letter, Some('b'));
        assert_eq!(c.last_vowel, Some('a'));
        assert!(!c.ends_with_vowel());
        assert!(!c.last_vowel_frontal());
    }

    #[test]
    fn empty_fragment_leaves_context_unchanged() {
        let c = ctx("kedi");
        assert_eq!(c.advanced_by(""), c);
    }

    #[test]
    fn dative_after_consonant_and_vowel() {
        assert_eq!(resolve_template("+yA", &ctx("kitab")), "a");
        assert_eq!(resolve_template("+yA", &ctx("kedi")), "ye");
    }

    #[test]
    fn accusative_four_way_harmony() {
        assert_eq!(resolve_template("+yI", &ctx("kitab")), "ı");
        assert_eq!(resolve_template("+yI", &ctx("kedi")), "yi");
        assert_eq!(resolve_template("+yI", &ctx("okul")), "u");
        assert_eq!(resolve_template("+yI", &ctx("göz")), "ü");
    }

    #[test]
    fn initial_devoicing_after_voiceless_stem() {
        assert_eq!(resolve_template("dA", &ctx("kitap")), "ta");
        assert_eq!(resolve_template("dA", &ctx("kitab")), "da");
        assert_eq!(resolve_template("dIr", &ctx("yap")), "tır");
        assert_eq!(resolve_template("cIk", &ctx("kitap")), "çık");
    }

    #[test]
    fn devoicing_touches_only_the_first_letter() {
        assert_eq!(resolve_template("dAn", &ctx("sepet")), "ten");
    }

    #[test]
    fn running_context_feeds_later_archiphonemes() {
        assert_eq!(resolve_template("lArI", &ctx("kedi")), "leri");
        assert_eq!(resolve_template("lArI", &ctx("kitab")), "ları");
    }

    #[test]
    fn optional_vowel_dropped_after_vowel() {
        assert_eq!(resolve_template("+Im", &ctx("kitab")), "ım");
        assert_eq!(resolve_template("+Im", &ctx("kedi")), "m");
        assert_eq!(resolve_template("+ImIz", &ctx("kedi")), "miz");
    }

    #[test]
    fn optional_consonant_kept_only_after_vowel() {
        assert_eq!(resolve_template("+nIn", &ctx("kedi")), "nin");
        assert_eq!(resolve_template("+nIn", &ctx("kitab")), "ın");
        assert_eq!(resolve_template("+ylA", &ctx("kitap")), "la");
        assert_eq!(resolve_template("+ylA", &ctx("kedi")), "yle");
    }

    #[test]
    fn future_after_consonant_drops_buffer_y() {
        assert_eq!(resolve_template("+yAcAk", &ctx("yap")), "acak");
        assert_eq!(resolve_template("+yAcAk", &ctx("bekle")), "yecek");
    }

    #[test]
    fn empty_template_resolves_to_empty() {
        assert_eq!(resolve_template("", &ctx("kitap")), "");
    }

    #[test]
    fn inverse_harmony_flips_the_harmony_vowel() {
        let c = ctx("saat").with_flipped_harmony();
        assert_eq!(resolve_template("+I", &c), "i");
        assert_eq!(resolve_template("dA", &c), "te");
    }

    #[test]
    fn expectations() {
        assert!(PhoneticExpectation::VowelStart.satisfied_by('a'));
        assert!(!PhoneticExpectation::VowelStart.satisfied_by('d'));
        assert!(PhoneticExpectation::ConsonantStart.satisfied_by('d'));
    }
}
