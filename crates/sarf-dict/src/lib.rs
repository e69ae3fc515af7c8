//! In-memory dictionary for Arabic morphological analysis.
//!
//! The dictionary is built once at startup from three lexicons
//! (prefixes, stems, suffixes) and three pairwise category
//! compatibility tables, and is strictly read-only afterwards. Load
//! failures are fatal: a partial dictionary is never served.
//!
//! - [`lexicon`] -- lexicon file parsing and part-of-speech resolution
//! - [`compat`] -- category-pair compatibility tables
//! - [`store`] -- the assembled [`DictionaryStore`] and the
//!   [`Dictionary`] lookup trait

pub mod compat;
pub mod lexicon;
pub mod store;

pub use store::{Dictionary, DictionaryStore};

/// Fatal dictionary load errors. Any of these aborts initialization;
/// runtime lookups on a loaded dictionary never fail.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("{name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} line {line}: entry does not have 4 tab-separated fields")]
    MalformedEntry { name: String, line: usize },

    #[error("{name} line {line}: lemma {lemma} is not unique")]
    DuplicateLemma {
        name: String,
        line: usize,
        lemma: String,
    },

    #[error("{name} line {line}: no part of speech can be deduced from category {category}")]
    UnknownCategory {
        name: String,
        line: usize,
        category: String,
    },

    #[error("{name}: key {key} exceeds {limit} entries")]
    TooManyEntries {
        name: String,
        key: String,
        limit: usize,
    },
}
