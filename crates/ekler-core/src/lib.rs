//! Shared types and Turkish phonology primitives.
//!
//! This crate holds the value types every other `ekler` crate builds on:
//!
//! - [`alphabet`] -- the Turkish alphabet and per-letter classification
//! - [`phonetics`] -- phonetic context tracking and suffix-template resolution
//! - [`lexeme`] -- dictionary entries, part-of-speech and root attributes
//! - [`root`] -- phonetic surface variants of a lexeme's stem
//!
//! Everything here is plain immutable data. Construction happens once at
//! startup (lexicon load, root generation); after that the types are shared
//! read-only across any number of concurrent parses.

pub mod alphabet;
pub mod lexeme;
pub mod phonetics;
pub mod root;
