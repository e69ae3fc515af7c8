// The assembled in-memory dictionary.

use std::path::Path;
use std::sync::Arc;

use sarf_core::DictionaryEntry;

use crate::DictError;
use crate::compat::CompatTable;
use crate::lexicon::{Lexicon, parse_lexicon};

/// File names of the six dictionary resources inside a dictionary
/// directory.
pub const PREFIXES_FILE: &str = "dictPrefixes";
pub const STEMS_FILE: &str = "dictStems";
pub const SUFFIXES_FILE: &str = "dictSuffixes";
pub const PREFIX_STEM_TABLE: &str = "tableAB";
pub const PREFIX_SUFFIX_TABLE: &str = "tableAC";
pub const STEM_SUFFIX_TABLE: &str = "tableBC";

static NO_ENTRIES: &[Arc<DictionaryEntry>] = &[];

/// Read-only lookup interface the segmentation engine runs against.
///
/// The `has_*` probes exist so a candidate partition can be rejected
/// before its per-key entry lists are walked; the default
/// implementations just check the entry lists.
pub trait Dictionary {
    /// All prefix entries stored under `surface`. Empty for absent keys.
    fn prefix_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>];

    /// All stem entries stored under `surface`. Empty for absent keys.
    fn stem_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>];

    /// All suffix entries stored under `surface`. Empty for absent keys.
    fn suffix_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>];

    fn has_prefix(&self, surface: &str) -> bool {
        !self.prefix_entries(surface).is_empty()
    }

    fn has_stem(&self, surface: &str) -> bool {
        !self.stem_entries(surface).is_empty()
    }

    fn has_suffix(&self, surface: &str) -> bool {
        !self.suffix_entries(surface).is_empty()
    }

    fn prefix_stem_compatible(&self, prefix_cat: &str, stem_cat: &str) -> bool;

    fn prefix_suffix_compatible(&self, prefix_cat: &str, suffix_cat: &str) -> bool;

    fn stem_suffix_compatible(&self, stem_cat: &str, suffix_cat: &str) -> bool;
}

/// The in-memory dictionary: three lexicons and three compatibility
/// tables, loaded once and immutable afterwards.
#[derive(Debug)]
pub struct DictionaryStore {
    prefixes: Lexicon,
    stems: Lexicon,
    suffixes: Lexicon,
    prefix_stem: CompatTable,
    prefix_suffix: CompatTable,
    stem_suffix: CompatTable,
}

impl DictionaryStore {
    /// Build a dictionary from the raw bytes of the six resources.
    pub fn from_bytes(
        prefixes: &[u8],
        stems: &[u8],
        suffixes: &[u8],
        prefix_stem: &[u8],
        prefix_suffix: &[u8],
        stem_suffix: &[u8],
    ) -> Result<Self, DictError> {
        Ok(Self {
            prefixes: parse_lexicon(PREFIXES_FILE, prefixes)?,
            stems: parse_lexicon(STEMS_FILE, stems)?,
            suffixes: parse_lexicon(SUFFIXES_FILE, suffixes)?,
            prefix_stem: CompatTable::parse(prefix_stem),
            prefix_suffix: CompatTable::parse(prefix_suffix),
            stem_suffix: CompatTable::parse(stem_suffix),
        })
    }

    /// Load all six resources from a dictionary directory.
    pub fn load_dir(dir: &Path) -> Result<Self, DictError> {
        let read = |name: &str| {
            std::fs::read(dir.join(name)).map_err(|source| DictError::Io {
                name: name.to_string(),
                source,
            })
        };
        Self::from_bytes(
            &read(PREFIXES_FILE)?,
            &read(STEMS_FILE)?,
            &read(SUFFIXES_FILE)?,
            &read(PREFIX_STEM_TABLE)?,
            &read(PREFIX_SUFFIX_TABLE)?,
            &read(STEM_SUFFIX_TABLE)?,
        )
    }

    /// Assemble a dictionary from pre-built entries and tables,
    /// bypassing file parsing. Intended for tests and benchmarks.
    pub fn from_entries(
        prefixes: Vec<DictionaryEntry>,
        stems: Vec<DictionaryEntry>,
        suffixes: Vec<DictionaryEntry>,
        prefix_stem: CompatTable,
        prefix_suffix: CompatTable,
        stem_suffix: CompatTable,
    ) -> Self {
        let index = |entries: Vec<DictionaryEntry>| {
            let mut lexicon = Lexicon::new();
            for entry in entries {
                lexicon
                    .entry(entry.surface.clone())
                    .or_default()
                    .push(Arc::new(entry));
            }
            lexicon
        };
        Self {
            prefixes: index(prefixes),
            stems: index(stems),
            suffixes: index(suffixes),
            prefix_stem,
            prefix_suffix,
            stem_suffix,
        }
    }

    /// Number of distinct prefix surface keys.
    pub fn prefix_key_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Number of distinct stem surface keys.
    pub fn stem_key_count(&self) -> usize {
        self.stems.len()
    }

    /// Number of distinct suffix surface keys.
    pub fn suffix_key_count(&self) -> usize {
        self.suffixes.len()
    }
}

impl Dictionary for DictionaryStore {
    fn prefix_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>] {
        self.prefixes.get(surface).map_or(NO_ENTRIES, Vec::as_slice)
    }

    fn stem_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>] {
        self.stems.get(surface).map_or(NO_ENTRIES, Vec::as_slice)
    }

    fn suffix_entries(&self, surface: &str) -> &[Arc<DictionaryEntry>] {
        self.suffixes.get(surface).map_or(NO_ENTRIES, Vec::as_slice)
    }

    fn prefix_stem_compatible(&self, prefix_cat: &str, stem_cat: &str) -> bool {
        self.prefix_stem.contains(prefix_cat, stem_cat)
    }

    fn prefix_suffix_compatible(&self, prefix_cat: &str, suffix_cat: &str) -> bool {
        self.prefix_suffix.contains(prefix_cat, suffix_cat)
    }

    fn stem_suffix_compatible(&self, stem_cat: &str, suffix_cat: &str) -> bool {
        self.stem_suffix.contains(stem_cat, suffix_cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &[u8] = b"\t\tPref-0\t\nw\twa\tPref-Wa\tand <pos>wa/CONJ</pos>\n";
    const STEMS: &[u8] = b";; ktb_1\nktb\tkatab\tPV\twrite\nktb\taktub\tIV\twrite\n";
    const SUFFIXES: &[u8] = b"\t\tSuff-0\t\nt\tat\tNSuff-at\t<pos>at/NSUFF_FEM_SG</pos>\n";
    const AB: &[u8] = b"Pref-0 PV\nPref-Wa PV\n";
    const AC: &[u8] = b"Pref-0 Suff-0\nPref-Wa Suff-0\n";
    const BC: &[u8] = b"PV Suff-0\n";

    fn store() -> DictionaryStore {
        DictionaryStore::from_bytes(PREFIXES, STEMS, SUFFIXES, AB, AC, BC).unwrap()
    }

    #[test]
    fn lookups_hit_loaded_entries() {
        let dict = store();
        assert!(dict.has_prefix(""));
        assert!(dict.has_prefix("w"));
        assert!(dict.has_stem("ktb"));
        assert!(dict.has_suffix(""));
        assert_eq!(dict.stem_entries("ktb").len(), 2);
    }

    #[test]
    fn absent_keys_yield_empty_slices() {
        let dict = store();
        assert!(!dict.has_stem("xyz"));
        assert!(dict.stem_entries("xyz").is_empty());
        assert!(dict.prefix_entries("zz").is_empty());
    }

    #[test]
    fn compatibility_tables_are_directional() {
        let dict = store();
        assert!(dict.prefix_stem_compatible("Pref-Wa", "PV"));
        assert!(!dict.prefix_stem_compatible("PV", "Pref-Wa"));
        assert!(dict.stem_suffix_compatible("PV", "Suff-0"));
        assert!(!dict.stem_suffix_compatible("IV", "Suff-0"));
    }

    #[test]
    fn key_counts_reflect_distinct_surfaces() {
        let dict = store();
        assert_eq!(dict.prefix_key_count(), 2);
        assert_eq!(dict.stem_key_count(), 1);
        assert_eq!(dict.suffix_key_count(), 2);
    }

    #[test]
    fn from_entries_builds_a_working_dictionary() {
        let dict = DictionaryStore::from_entries(
            vec![DictionaryEntry::new("", "", "", "NoPref", "", "")],
            vec![DictionaryEntry::new("ktb", "ktb", "kataba", "V", "write", "kataba/V")],
            vec![DictionaryEntry::new("", "", "", "NoSuff", "", "")],
            CompatTable::from_pairs([("NoPref", "V")]),
            CompatTable::from_pairs([("NoPref", "NoSuff")]),
            CompatTable::from_pairs([("V", "NoSuff")]),
        );
        assert!(dict.has_stem("ktb"));
        assert!(dict.prefix_stem_compatible("NoPref", "V"));
    }

    #[test]
    fn load_dir_reports_missing_files() {
        let err = DictionaryStore::load_dir(Path::new("/nonexistent-dict-dir")).unwrap_err();
        assert!(matches!(err, DictError::Io { .. }));
    }
}
