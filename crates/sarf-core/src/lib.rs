//! Shared types for the sarf Arabic morphological analyzer.
//!
//! This crate holds the leaf building blocks used by the dictionary and
//! analyzer crates:
//!
//! - [`buckwalter`] -- transliteration between Arabic script and the
//!   Buckwalter ASCII working alphabet
//! - [`character`] -- Arabic script character classification
//! - [`entry`] -- immutable dictionary records
//! - [`solution`] -- one validated prefix+stem+suffix analysis of a word

pub mod buckwalter;
pub mod character;
pub mod entry;
pub mod solution;

pub use entry::DictionaryEntry;
pub use solution::Solution;
