//! Dictionary-based morphological analysis of Arabic word-forms.
//!
//! Given a surface word, the analyzer decides whether it decomposes
//! into a known prefix + stem + suffix combination licensed by the
//! dictionary's pairwise compatibility tables, and returns every such
//! decomposition with its lemma, vocalization, grammatical category
//! and English gloss.
//!
//! The pipeline: the word is romanized into the Buckwalter working
//! alphabet, the per-word cache is consulted, and on a miss the
//! brute-force segmentation search runs against the dictionary. When
//! the literal form yields nothing, alternative spellings covering
//! common orthographic confusions are generated and each is searched
//! in turn.
//!
//! ```
//! use sarf::{ArabicAnalyzer, DictionaryStore};
//! use sarf_core::DictionaryEntry;
//! use sarf_dict::compat::CompatTable;
//!
//! let dict = DictionaryStore::from_entries(
//!     vec![DictionaryEntry::new("", "", "", "NoPref", "", "")],
//!     vec![DictionaryEntry::new("ktb", "ktb", "kataba", "V", "write", "kataba/V")],
//!     vec![DictionaryEntry::new("", "", "", "NoSuff", "", "")],
//!     CompatTable::from_pairs([("NoPref", "V")]),
//!     CompatTable::from_pairs([("NoPref", "NoSuff")]),
//!     CompatTable::from_pairs([("V", "NoSuff")]),
//! );
//! let analyzer = ArabicAnalyzer::new(dict);
//! assert!(analyzer.analyze("ktb"));
//! ```

pub mod analyzer;
pub mod cache;
pub mod segmentation;
pub mod spelling;
pub mod tokenizer;

pub use analyzer::{ArabicAnalyzer, RunStats};
pub use cache::SolutionCache;
pub use segmentation::{SegmentationEngine, SegmentationLimits};

pub use sarf_core::{DictionaryEntry, Solution};
pub use sarf_dict::{DictError, Dictionary, DictionaryStore};
