// One validated analysis of a word.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::buckwalter;
use crate::entry::DictionaryEntry;

/// One validated (prefix, stem, suffix) decomposition of a word,
/// carrying the three dictionary entries that license it.
///
/// Equality and hashing cover the three entries only: the sequence
/// number is a display-order artifact assigned during the segmentation
/// search and two solutions over the same entries are the same
/// solution.
#[derive(Debug, Clone)]
pub struct Solution {
    seq: u32,
    prefix: Arc<DictionaryEntry>,
    stem: Arc<DictionaryEntry>,
    suffix: Arc<DictionaryEntry>,
}

impl Solution {
    pub fn new(
        seq: u32,
        prefix: Arc<DictionaryEntry>,
        stem: Arc<DictionaryEntry>,
        suffix: Arc<DictionaryEntry>,
    ) -> Self {
        Self { seq, prefix, stem, suffix }
    }

    /// Display-order sequence number. Not stable across dictionary
    /// iteration order changes; carries no linguistic meaning.
    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub fn prefix(&self) -> &DictionaryEntry {
        &self.prefix
    }

    pub fn stem(&self) -> &DictionaryEntry {
        &self.stem
    }

    pub fn suffix(&self) -> &DictionaryEntry {
        &self.suffix
    }

    /// The dictionary lemma, with the disambiguating `_n` / `-n`
    /// counter dropped. Lemma IDs are not formatted consistently
    /// across the stem lexicon, hence the two separators.
    pub fn lemma(&self) -> &str {
        let id = &self.stem.lemma_id;
        match id.find(['_', '-']) {
            Some(i) => &id[..i],
            None => id,
        }
    }

    /// Fully vocalized word in the Buckwalter alphabet.
    pub fn word_vocalization(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix.vocalization, self.stem.vocalization, self.suffix.vocalization
        )
    }

    /// Fully vocalized word in Arabic script.
    pub fn arabized_vocalization(&self) -> String {
        buckwalter::arabize(&self.word_vocalization())
    }

    /// Per-segment morphological categories, one labeled line per
    /// non-empty segment.
    pub fn word_morphology(&self) -> String {
        self.labeled_lines(|e| &e.category)
    }

    /// Per-segment part-of-speech report, one labeled line per
    /// non-empty segment.
    pub fn word_pos(&self) -> String {
        self.labeled_lines(|e| &e.pos)
    }

    /// Per-segment glosses, one labeled line per non-empty segment.
    pub fn word_glosses(&self) -> String {
        self.labeled_lines(|e| &e.gloss)
    }

    /// The [`Display`](fmt::Display) rendering with the vocalization
    /// in Arabic script instead of the Buckwalter alphabet.
    pub fn to_arabized_string(&self) -> String {
        format!(
            "SOLUTION #{}\n\
             Lemma  : \t{}\n\
             Vocalized as : \t{}\n\
             Morphology : \n{}\
             Grammatical category : \n{}\
             Glossed as : \n{}",
            self.seq,
            self.lemma(),
            self.arabized_vocalization(),
            self.word_morphology(),
            self.word_pos(),
            self.word_glosses(),
        )
    }

    fn labeled_lines<'a>(&'a self, field: impl Fn(&'a DictionaryEntry) -> &'a str) -> String {
        let mut out = String::new();
        let segments = [
            ("Prefix", &self.prefix),
            ("Stem", &self.stem),
            ("Suffix", &self.suffix),
        ];
        for (label, entry) in segments {
            let value = field(entry);
            if !value.is_empty() {
                out.push_str(&format!("\t{label} : {value}\n"));
            }
        }
        out
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.stem == other.stem && self.suffix == other.suffix
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
        self.stem.hash(state);
        self.suffix.hash(state);
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SOLUTION #{}\n\
             Lemma  : \t{}\n\
             Vocalized as : \t{}\n\
             Morphology : \n{}\
             Grammatical category : \n{}\
             Glossed as : \n{}",
            self.seq,
            self.lemma(),
            self.word_vocalization(),
            self.word_morphology(),
            self.word_pos(),
            self.word_glosses(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(
        surface: &str,
        lemma: &str,
        voc: &str,
        cat: &str,
        gloss: &str,
        pos: &str,
    ) -> Arc<DictionaryEntry> {
        Arc::new(DictionaryEntry::new(surface, lemma, voc, cat, gloss, pos))
    }

    fn sample() -> Solution {
        Solution::new(
            1,
            arc("w", "", "wa", "Pref-Wa", "and", "wa/CONJ"),
            arc("ktb", "ktb_1", "katab", "PV", "write", "katab/VERB_PERFECT"),
            arc("", "", "", "Suff-0", "", ""),
        )
    }

    #[test]
    fn lemma_drops_underscore_counter() {
        assert_eq!(sample().lemma(), "ktb");
    }

    #[test]
    fn lemma_drops_hyphen_counter() {
        let s = Solution::new(
            1,
            arc("", "", "", "Pref-0", "", ""),
            arc("qr", "qr-2a", "qara", "PV", "read", "qara/VERB_PERFECT"),
            arc("", "", "", "Suff-0", "", ""),
        );
        assert_eq!(s.lemma(), "qr");
    }

    #[test]
    fn lemma_without_counter_is_whole_id() {
        let s = Solution::new(
            1,
            arc("", "", "", "Pref-0", "", ""),
            arc("hw", "hw", "huwa", "FW", "he", "huwa/FUNC_WORD"),
            arc("", "", "", "Suff-0", "", ""),
        );
        assert_eq!(s.lemma(), "hw");
    }

    #[test]
    fn word_vocalization_concatenates_segments() {
        assert_eq!(sample().word_vocalization(), "wakatab");
    }

    #[test]
    fn morphology_report_skips_empty_segments() {
        let report = sample().word_morphology();
        assert!(report.contains("Prefix : Pref-Wa"));
        assert!(report.contains("Stem : PV"));
        assert!(report.contains("Suffix : Suff-0"));
    }

    #[test]
    fn pos_report_skips_empty_segments() {
        let report = sample().word_pos();
        assert!(report.contains("Prefix : wa/CONJ"));
        assert!(report.contains("Stem : katab/VERB_PERFECT"));
        assert!(!report.contains("Suffix"));
    }

    #[test]
    fn equality_ignores_sequence_number() {
        let a = sample();
        let mut b = sample();
        b.seq = 99;
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_solutions_collapse_in_a_set() {
        let mut set = std::collections::HashSet::new();
        set.insert(sample());
        let mut dup = sample();
        dup.seq = 7;
        set.insert(dup);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_includes_lemma_and_vocalization() {
        let text = sample().to_string();
        assert!(text.starts_with("SOLUTION #1"));
        assert!(text.contains("Lemma  : \tktb"));
        assert!(text.contains("Vocalized as : \twakatab"));
    }

    #[test]
    fn arabized_vocalization_is_arabic_script() {
        let s = sample();
        assert!(s.arabized_vocalization().starts_with('\u{0648}')); // waw
    }
}
