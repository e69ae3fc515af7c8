// The analyzer facade.
//
// Ties the pieces together: romanize the token, consult the cache,
// run the segmentation search, fall back to alternative spellings,
// record the outcome. A word is searched at most once per process
// lifetime; everything after the first sighting is a cache lookup.

use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashSet;
use sarf_core::{Solution, buckwalter, character};
use sarf_dict::{Dictionary, DictionaryStore};

use crate::cache::{SolutionCache, lock};
use crate::segmentation::{SegmentationEngine, SegmentationLimits};
use crate::spelling::alternative_spellings;
use crate::tokenizer::{ScriptClass, script_runs};

/// Counters accumulated over the analyzer's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub lines_processed: u64,
    pub arabic_tokens: u64,
    pub non_arabic_tokens: u64,
    /// Distinct words with at least one solution.
    pub found_words: usize,
    /// Distinct words with no solution.
    pub not_found_words: usize,
}

/// A morphological analyzer over one dictionary.
///
/// Shared-reference methods only; the analyzer is safe to use from
/// several threads at once. Generic over the dictionary so tests can
/// substitute instrumented implementations.
pub struct ArabicAnalyzer<D: Dictionary = DictionaryStore> {
    dict: D,
    limits: SegmentationLimits,
    cache: SolutionCache,
    lines_processed: AtomicU64,
    arabic_tokens: AtomicU64,
    non_arabic_tokens: AtomicU64,
}

impl<D: Dictionary> ArabicAnalyzer<D> {
    pub fn new(dict: D) -> Self {
        Self::with_limits(dict, SegmentationLimits::default())
    }

    pub fn with_limits(dict: D, limits: SegmentationLimits) -> Self {
        Self {
            dict,
            limits,
            cache: SolutionCache::new(),
            lines_processed: AtomicU64::new(0),
            arabic_tokens: AtomicU64::new(0),
            non_arabic_tokens: AtomicU64::new(0),
        }
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Romanize Arabic text into the Buckwalter working alphabet.
    pub fn romanize(&self, text: &str) -> String {
        buckwalter::romanize(text)
    }

    /// Convert Buckwalter text back to Arabic script.
    pub fn arabize(&self, text: &str) -> String {
        buckwalter::arabize(text)
    }

    /// Analyze one word, given in Arabic script or already romanized.
    /// True iff the word has at least one solution, directly or
    /// through an alternative spelling that does.
    pub fn analyze(&self, word: &str) -> bool {
        self.analyze_word(&buckwalter::romanize(word))
    }

    /// Analyze one token of tokenized input. A token made entirely of
    /// Arabic letters is analyzed; anything else is counted as
    /// non-Arabic material, one count per whitespace-separated piece,
    /// and reported unsolvable.
    pub fn analyze_token(&self, token: &str) -> bool {
        if is_arabic_token(token) {
            self.arabic_tokens.fetch_add(1, Ordering::Relaxed);
            self.analyze_word(&buckwalter::romanize(token))
        } else {
            let pieces = token.split_whitespace().filter(|p| !p.is_empty()).count();
            self.non_arabic_tokens
                .fetch_add(pieces as u64, Ordering::Relaxed);
            false
        }
    }

    /// Analyze a line of running text: split it into script runs and
    /// feed each through [`analyze_token`](Self::analyze_token).
    /// Returns how many Arabic tokens on the line resolved.
    pub fn analyze_line(&self, line: &str) -> usize {
        self.lines_processed.fetch_add(1, Ordering::Relaxed);
        let mut resolved = 0;
        for (class, run) in script_runs(line) {
            if self.analyze_token(run) && class == ScriptClass::Arabic {
                resolved += 1;
            }
        }
        resolved
    }

    /// All solutions for a word: the direct ones plus those of every
    /// alternative spelling that resolves. Empty when the word has no
    /// solution at all. Analyzes the word first if it has not been
    /// seen yet.
    pub fn solutions(&self, word: &str) -> HashSet<Solution> {
        let romanized = buckwalter::romanize(word);
        if !self.analyze_word(&romanized) {
            return HashSet::new();
        }
        let mut out = HashSet::new();
        if let Some(direct) = self.cache.solutions(&romanized) {
            out.extend(direct.iter().cloned());
        }
        if let Some(alternatives) = self.cache.alternatives(&romanized) {
            for alt in alternatives.iter() {
                if let Some(sols) = self.cache.solutions(alt) {
                    out.extend(sols.iter().cloned());
                }
            }
        }
        out
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            lines_processed: self.lines_processed.load(Ordering::Relaxed),
            arabic_tokens: self.arabic_tokens.load(Ordering::Relaxed),
            non_arabic_tokens: self.non_arabic_tokens.load(Ordering::Relaxed),
            found_words: self.cache.found_count(),
            not_found_words: self.cache.not_found_count(),
        }
    }

    /// Resolve a romanized word: cache lookup, direct search, then
    /// the alternative-spelling fallback. Holds the word's lock across
    /// the whole sequence so the search runs at most once per word.
    fn analyze_word(&self, word: &str) -> bool {
        let word_lock = self.cache.word_lock(word);
        let _guard = lock(&word_lock);

        if let Some(outcome) = self.cache.record_seen(word) {
            return outcome;
        }

        if self.feed_word_solutions(word) {
            self.cache.mark_found(word);
            return true;
        }

        // Every candidate is searched, not just until the first hit:
        // solutions() later unions across all of them.
        let alternatives: HashSet<String> =
            alternative_spellings(word).into_iter().collect();
        let mut rescued = false;
        for alt in &alternatives {
            rescued |= self.feed_word_solutions(alt);
        }
        if !alternatives.is_empty() {
            self.cache.store_alternatives(word, alternatives);
        }

        if rescued {
            self.cache.mark_found(word);
        } else {
            self.cache.mark_not_found(word);
        }
        rescued
    }

    /// Run the segmentation search for one romanized form, memoized.
    /// Only non-empty solution sets are stored. The form's search lock
    /// covers the whole check-search-store, so a form reached both
    /// directly and as another word's alternative spelling is still
    /// searched only once.
    fn feed_word_solutions(&self, word: &str) -> bool {
        let search_lock = self.cache.search_lock(word);
        let _guard = lock(&search_lock);
        if self.cache.has_solutions(word) {
            return true;
        }
        let solutions = SegmentationEngine::new(&self.dict, self.limits).solutions(word);
        if solutions.is_empty() {
            false
        } else {
            self.cache.store_solutions(word, solutions);
            true
        }
    }
}

fn is_arabic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(character::is_arabic_script)
}
