// Allomorph applicability conditions.
//
// A condition gates whether a form may even be tried; the resolved surface
// still has to match the input. Conditions therefore err on the permissive
// side: an over-admitting condition can only produce analyses for
// non-words, never a wrong analysis for a real word.

use ekler_core::lexeme::RootAttribute;
use ekler_core::phonetics::PhoneticContext;
use ekler_core::root::Root;

/// What a condition is evaluated against: the phonetic state of the parse,
/// the candidate root, and the suffixes applied since the last derivation
/// boundary (or since the root, if none).
pub struct ConditionContext<'a> {
    pub phonetics: &'a PhoneticContext,
    pub root: &'a Root,
    pub suffixes_since_derivation: &'a [&'a str],
}

/// Applicability predicate over a [`ConditionContext`].
///
/// The combinator shape mirrors how the grammar is authored: small named
/// predicates joined with `and`/`or`/`not`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// The surface assembled so far ends with a vowel.
    LastLetterVowel,
    /// The surface assembled so far ends with a consonant.
    LastLetterConsonant,
    /// The surface assembled so far ends with one of the given letters.
    LastLetterOneOf(Vec<char>),
    /// The candidate root's lexeme carries the given attribute.
    RootHasAttribute(RootAttribute),
    /// The named suffix occurs in the current inflectional group.
    ComesAfter(String),
    /// The named suffix does not occur in the current inflectional group.
    DoesntComeAfter(String),
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn comes_after(suffix_name: &str) -> Self {
        Condition::ComesAfter(suffix_name.to_string())
    }

    pub fn doesnt_come_after(suffix_name: &str) -> Self {
        Condition::DoesntComeAfter(suffix_name.to_string())
    }

    pub fn and(self, other: Condition) -> Self {
        Condition::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Condition) -> Self {
        Condition::Or(Box::new(self), Box::new(other))
    }

    pub fn negated(self) -> Self {
        Condition::Not(Box::new(self))
    }

    /// Evaluate the condition.
    pub fn allowed(&self, ctx: &ConditionContext<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::LastLetterVowel => ctx.phonetics.ends_with_vowel(),
            Condition::LastLetterConsonant => {
                ctx.phonetics.last_letter.is_some() && !ctx.phonetics.ends_with_vowel()
            }
            Condition::LastLetterOneOf(letters) => ctx
                .phonetics
                .last_letter
                .map(|c| letters.contains(&c))
                .unwrap_or(false),
            Condition::RootHasAttribute(attribute) => {
                ctx.root.lexeme.has_attribute(*attribute)
            }
            Condition::ComesAfter(name) => {
                ctx.suffixes_since_derivation.contains(&name.as_str())
            }
            Condition::DoesntComeAfter(name) => {
                !ctx.suffixes_since_derivation.contains(&name.as_str())
            }
            Condition::And(a, b) => a.allowed(ctx) && b.allowed(ctx),
            Condition::Or(a, b) => a.allowed(ctx) || b.allowed(ctx),
            Condition::Not(inner) => !inner.allowed(ctx),
        }
    }

    /// Every suffix name this condition refers to, for build-time
    /// validation of the grammar.
    pub fn referenced_suffixes(&self) -> Vec<&str> {
        match self {
            Condition::ComesAfter(name) | Condition::DoesntComeAfter(name) => {
                vec![name.as_str()]
            }
            Condition::And(a, b) | Condition::Or(a, b) => {
                let mut names = a.referenced_suffixes();
                names.extend(b.referenced_suffixes());
                names
            }
            Condition::Not(inner) => inner.referenced_suffixes(),
            _ => Vec::new(),
        }
    }
}
