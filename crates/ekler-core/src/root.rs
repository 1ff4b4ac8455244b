// Root: one phonetic surface variant of a lexeme's stem.

use std::sync::Arc;

use crate::lexeme::Lexeme;
use crate::phonetics::{PhoneticContext, PhoneticExpectation};

/// A phonetic surface variant of a lexeme's stem, as stored in the root
/// lookup table.
///
/// One lexeme may yield several roots (kitap → kitap, kitab). A root is
/// immutable; parse candidates and morpheme containers share it through the
/// `Arc` rather than copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    /// The surface text of this variant.
    pub text: String,
    /// The lexeme this variant belongs to.
    pub lexeme: Arc<Lexeme>,
    /// Phonetic state at the end of the variant text, with any
    /// inverse-harmony adjustment already applied.
    pub phonetic_context: PhoneticContext,
    /// Constraints the variant places on the first overt suffix. Empty for
    /// the original stem.
    pub expectations: Vec<PhoneticExpectation>,
}

impl Root {
    /// Build the plain root for a lexeme's unmodified stem text.
    pub fn original(lexeme: &Arc<Lexeme>) -> Self {
        Self::variant(lexeme, lexeme.root.clone(), Vec::new())
    }

    /// Build a modified surface variant carrying phonetic expectations.
    pub fn variant(
        lexeme: &Arc<Lexeme>,
        text: String,
        expectations: Vec<PhoneticExpectation>,
    ) -> Self {
        use crate::lexeme::RootAttribute;

        let mut context = PhoneticContext::of(&text);
        if lexeme.has_attribute(RootAttribute::InverseHarmony) {
            context = context.with_flipped_harmony();
        }
        Self {
            text,
            lexeme: Arc::clone(lexeme),
            phonetic_context: context,
            expectations,
        }
    }

    /// Number of characters in the variant text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
