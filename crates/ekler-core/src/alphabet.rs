// Turkish alphabet and per-letter phonological classification.

// ---------------------------------------------------------------------------
// Turkish phonological constants
// ---------------------------------------------------------------------------

/// Turkish vowels (lowercase): a e ı i o ö u ü
pub const VOWELS: &[char] = &['a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}'];

/// Front vowels, selecting front allomorphs under vowel harmony: e i ö ü
pub const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}'];

/// Rounded vowels: o ö u ü
pub const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}'];

/// Voiceless consonants: ç f h k p s ş t
pub const VOICELESS_CONSONANTS: &[char] =
    &['\u{00E7}', 'f', 'h', 'k', 'p', 's', '\u{015F}', 't'];

/// Voiceless stops, the subset that alternates with a voiced counterpart
/// at morpheme boundaries: ç k p t
pub const VOICELESS_STOPS: &[char] = &['\u{00E7}', 'k', 'p', 't'];

/// Check whether a character is a Turkish vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a character is a front (palatal) vowel.
pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

/// Check whether a character is a rounded (labial) vowel.
pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(&c)
}

/// Check whether a character is a voiceless consonant.
pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&c)
}

/// Check whether a character is a voiceless stop (ç, k, p, t).
pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOPS.contains(&c)
}

/// Voice a stem-final voiceless stop: p→b, ç→c, t→d, k→ğ.
///
/// Returns `None` for letters that do not alternate. The k→g variant after
/// `n` (renk → rengi) is handled by the caller, which sees the whole stem.
pub fn voice(c: char) -> Option<char> {
    match c {
        'p' => Some('b'),
        '\u{00E7}' => Some('c'),          // ç → c
        't' => Some('d'),
        'k' => Some('\u{011F}'),          // k → ğ
        _ => None,
    }
}

/// Devoice a suffix-initial voiced obstruent: b→p, c→ç, d→t, g→k, ğ→k.
///
/// Returns `None` for letters that do not alternate.
pub fn devoice(c: char) -> Option<char> {
    match c {
        'b' => Some('p'),
        'c' => Some('\u{00E7}'),          // c → ç
        'd' => Some('t'),
        'g' => Some('k'),
        '\u{011F}' => Some('k'),          // ğ → k
        _ => None,
    }
}

/// The front-harmony counterpart of a vowel (and back again): a↔e, ı↔i,
/// o↔ö, u↔ü. Used for roots carrying the inverse-harmony attribute.
pub fn flip_harmony(c: char) -> char {
    match c {
        'a' => 'e',
        'e' => 'a',
        '\u{0131}' => 'i',
        'i' => '\u{0131}',
        'o' => '\u{00F6}',
        '\u{00F6}' => 'o',
        'u' => '\u{00FC}',
        '\u{00FC}' => 'u',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Case handling
// ---------------------------------------------------------------------------

/// Lowercase a single character under Turkish casing rules.
///
/// Differs from Unicode default lowercasing for the two I's:
/// dotless `I` → `ı`, dotted `İ` → `i`.
pub fn to_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',                // I → ı
        '\u{0130}' => 'i',                // İ → i
        other => other.to_lowercase().next().unwrap_or(other),
    }
}

/// Lowercase a whole word under Turkish casing rules.
pub fn lower_word(word: &str) -> String {
    word.chars().map(to_lower).collect()
}

/// Check whether a character is an uppercase letter under Turkish casing.
pub fn is_upper(c: char) -> bool {
    c == '\u{0130}' || c.is_uppercase()
}

// ---------------------------------------------------------------------------
// Syllable structure
// ---------------------------------------------------------------------------

/// Count the vowels of a word, which for Turkish equals its syllable count.
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}
