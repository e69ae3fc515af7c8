// Brute-force segmentation search.
//
// Every (prefix, stem, suffix) partition of the romanized word within
// the affix length bounds is enumerated, then each partition whose
// three substrings are all dictionary keys is expanded into the cross
// product of its entry lists, gated by the three pairwise category
// compatibility tables. Whatever survives all three gates is a
// solution.

use hashbrown::HashSet;
use sarf_core::Solution;
use sarf_dict::Dictionary;

/// Affix length bounds for the partition enumeration.
///
/// The defaults are empirical: no prefix in the shipped lexicons is
/// longer than 4 glyphs and no suffix longer than 6. They are plain
/// configuration, so a dictionary with longer affixes can widen them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationLimits {
    pub max_prefix_len: usize,
    pub max_suffix_len: usize,
}

impl Default for SegmentationLimits {
    fn default() -> Self {
        Self {
            max_prefix_len: 4,
            max_suffix_len: 6,
        }
    }
}

/// One candidate partition of a word. The three slices borrow the
/// word and concatenate back to it; only the stem is guaranteed
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segmentation<'a> {
    pub prefix: &'a str,
    pub stem: &'a str,
    pub suffix: &'a str,
}

/// Enumerate every partition of `word` within `limits`. Lengths are
/// counted in characters, and slicing respects character boundaries,
/// so unmapped non-ASCII glyphs that survived romanization cannot
/// split a codepoint.
pub fn partitions(word: &str, limits: SegmentationLimits) -> Vec<Segmentation<'_>> {
    // Byte offset of each character boundary, including the end.
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut out = Vec::new();
    for prefix_len in 0..=limits.max_prefix_len.min(n) {
        let mut stem_len = n - prefix_len;
        let mut suffix_len = 0;
        while stem_len >= 1 && suffix_len <= limits.max_suffix_len {
            let stem_end = prefix_len + stem_len;
            out.push(Segmentation {
                prefix: &word[..bounds[prefix_len]],
                stem: &word[bounds[prefix_len]..bounds[stem_end]],
                suffix: &word[bounds[stem_end]..],
            });
            stem_len -= 1;
            suffix_len += 1;
        }
    }
    out
}

/// The segmentation search over one dictionary.
pub struct SegmentationEngine<'d, D: Dictionary> {
    dict: &'d D,
    limits: SegmentationLimits,
}

impl<'d, D: Dictionary> SegmentationEngine<'d, D> {
    pub fn new(dict: &'d D, limits: SegmentationLimits) -> Self {
        Self { dict, limits }
    }

    /// All solutions for a romanized word. Duplicate entry triples
    /// collapse; the sequence numbers on the survivors reflect the
    /// order candidates were produced in and carry no meaning beyond
    /// display.
    pub fn solutions(&self, word: &str) -> HashSet<Solution> {
        let mut solutions = HashSet::new();
        let mut seq = 0;
        for seg in partitions(word, self.limits) {
            if !self.dict.has_prefix(seg.prefix)
                || !self.dict.has_stem(seg.stem)
                || !self.dict.has_suffix(seg.suffix)
            {
                continue;
            }
            for prefix in self.dict.prefix_entries(seg.prefix) {
                for stem in self.dict.stem_entries(seg.stem) {
                    if !self.dict.prefix_stem_compatible(&prefix.category, &stem.category) {
                        continue;
                    }
                    for suffix in self.dict.suffix_entries(seg.suffix) {
                        if self.dict.prefix_suffix_compatible(&prefix.category, &suffix.category)
                            && self.dict.stem_suffix_compatible(&stem.category, &suffix.category)
                        {
                            seq += 1;
                            solutions.insert(Solution::new(
                                seq,
                                prefix.clone(),
                                stem.clone(),
                                suffix.clone(),
                            ));
                        }
                    }
                }
            }
        }
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::DictionaryEntry;
    use sarf_dict::DictionaryStore;
    use sarf_dict::compat::CompatTable;

    fn entry(surface: &str, voc: &str, cat: &str, gloss: &str) -> DictionaryEntry {
        DictionaryEntry::new(surface, surface, voc, cat, gloss, format!("{voc}/X"))
    }

    fn small_dict() -> DictionaryStore {
        DictionaryStore::from_entries(
            vec![entry("", "", "NoPref", ""), entry("w", "wa", "Pref-Wa", "and")],
            vec![
                DictionaryEntry::new("ktb", "ktb", "kataba", "V", "write", "kataba/V"),
                entry("ktbw", "katabuw", "V", "they wrote"),
            ],
            vec![entry("", "", "NoSuff", ""), entry("w", "uw", "Suff-w", "they")],
            CompatTable::from_pairs([("NoPref", "V"), ("Pref-Wa", "V")]),
            CompatTable::from_pairs([
                ("NoPref", "NoSuff"),
                ("NoPref", "Suff-w"),
                ("Pref-Wa", "NoSuff"),
                ("Pref-Wa", "Suff-w"),
            ]),
            CompatTable::from_pairs([("V", "NoSuff"), ("V", "Suff-w")]),
        )
    }

    #[test]
    fn partitions_of_short_word_cover_all_splits() {
        let parts = partitions("ab", SegmentationLimits::default());
        // prefix 0: (",ab,") (",a,b"); prefix 1: ("a,b,")
        assert_eq!(parts.len(), 3);
        assert!(parts.contains(&Segmentation { prefix: "", stem: "ab", suffix: "" }));
        assert!(parts.contains(&Segmentation { prefix: "", stem: "a", suffix: "b" }));
        assert!(parts.contains(&Segmentation { prefix: "a", stem: "b", suffix: "" }));
    }

    #[test]
    fn partitions_respect_affix_bounds() {
        for seg in partitions("abcdefghijkl", SegmentationLimits::default()) {
            assert!(seg.prefix.chars().count() <= 4);
            assert!(seg.suffix.chars().count() <= 6);
            assert!(!seg.stem.is_empty());
        }
    }

    #[test]
    fn partitions_concatenate_back_to_the_word() {
        let word = "wktbw";
        for seg in partitions(word, SegmentationLimits::default()) {
            assert_eq!(format!("{}{}{}", seg.prefix, seg.stem, seg.suffix), word);
        }
    }

    #[test]
    fn single_char_word_has_one_partition() {
        let parts = partitions("k", SegmentationLimits::default());
        assert_eq!(parts, vec![Segmentation { prefix: "", stem: "k", suffix: "" }]);
    }

    #[test]
    fn empty_word_has_no_partition() {
        assert!(partitions("", SegmentationLimits::default()).is_empty());
    }

    #[test]
    fn partitions_split_on_char_boundaries() {
        // An unmapped two-byte character must stay whole.
        let parts = partitions("kéb", SegmentationLimits::default());
        assert!(parts.contains(&Segmentation { prefix: "k", stem: "é", suffix: "b" }));
    }

    #[test]
    fn custom_limits_narrow_the_enumeration() {
        let limits = SegmentationLimits { max_prefix_len: 0, max_suffix_len: 0 };
        let parts = partitions("abc", limits);
        assert_eq!(parts, vec![Segmentation { prefix: "", stem: "abc", suffix: "" }]);
    }

    #[test]
    fn bare_stem_resolves_with_null_affixes() {
        let dict = small_dict();
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        let sols = engine.solutions("ktb");
        assert_eq!(sols.len(), 1);
        let sol = sols.iter().next().unwrap();
        assert_eq!(sol.lemma(), "ktb");
        assert_eq!(sol.word_vocalization(), "kataba");
    }

    #[test]
    fn ambiguous_word_yields_multiple_solutions() {
        // "ktbw" parses as the stem katabuw and as ktb + suffix w.
        let dict = small_dict();
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        let sols = engine.solutions("ktbw");
        let vocs: HashSet<String> = sols.iter().map(Solution::word_vocalization).collect();
        assert_eq!(vocs.len(), 2);
        assert!(vocs.contains("katabuw"));
        assert!(vocs.contains("katabauw"));
    }

    #[test]
    fn prefixed_word_resolves() {
        let dict = small_dict();
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        let sols = engine.solutions("wktb");
        assert!(sols.iter().any(|s| s.word_vocalization() == "wakataba"));
    }

    #[test]
    fn unknown_word_yields_nothing() {
        let dict = small_dict();
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        assert!(engine.solutions("xyz").is_empty());
    }

    #[test]
    fn incompatible_pair_is_gated_out() {
        let dict = DictionaryStore::from_entries(
            vec![entry("", "", "NoPref", ""), entry("w", "wa", "Pref-Wa", "and")],
            vec![entry("ktb", "kataba", "V", "write")],
            vec![entry("", "", "NoSuff", "")],
            // Pref-Wa deliberately not declared compatible with V.
            CompatTable::from_pairs([("NoPref", "V")]),
            CompatTable::from_pairs([("NoPref", "NoSuff"), ("Pref-Wa", "NoSuff")]),
            CompatTable::from_pairs([("V", "NoSuff")]),
        );
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        assert!(engine.solutions("wktb").is_empty());
        assert_eq!(engine.solutions("ktb").len(), 1);
    }

    #[test]
    fn all_three_gates_must_pass() {
        let prefixes = vec![entry("", "", "NoPref", "")];
        let stems = vec![entry("ktb", "kataba", "V", "write")];
        let suffixes = vec![entry("", "", "NoSuff", "")];
        // Missing stem-suffix pair.
        let dict = DictionaryStore::from_entries(
            prefixes.clone(),
            stems.clone(),
            suffixes.clone(),
            CompatTable::from_pairs([("NoPref", "V")]),
            CompatTable::from_pairs([("NoPref", "NoSuff")]),
            CompatTable::from_pairs([]),
        );
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        assert!(engine.solutions("ktb").is_empty());
        // Missing prefix-suffix pair.
        let dict = DictionaryStore::from_entries(
            prefixes,
            stems,
            suffixes,
            CompatTable::from_pairs([("NoPref", "V")]),
            CompatTable::from_pairs([]),
            CompatTable::from_pairs([("V", "NoSuff")]),
        );
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        assert!(engine.solutions("ktb").is_empty());
    }

    #[test]
    fn duplicate_triples_collapse() {
        // Two identical stem entries under one key produce equal
        // solutions which must collapse in the set.
        let dict = DictionaryStore::from_entries(
            vec![entry("", "", "NoPref", "")],
            vec![entry("ktb", "kataba", "V", "write"), entry("ktb", "kataba", "V", "write")],
            vec![entry("", "", "NoSuff", "")],
            CompatTable::from_pairs([("NoPref", "V")]),
            CompatTable::from_pairs([("NoPref", "NoSuff")]),
            CompatTable::from_pairs([("V", "NoSuff")]),
        );
        let engine = SegmentationEngine::new(&dict, SegmentationLimits::default());
        assert_eq!(engine.solutions("ktb").len(), 1);
    }
}
