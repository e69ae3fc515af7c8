// Per-word memoization of analysis outcomes.
//
// Each word is analyzed at most once per process lifetime. The cache
// records the terminal outcome (found or not found) with a hit
// counter, the solution sets, and the generated alternative
// spellings. All maps are append-only; nothing is ever evicted, and
// unbounded growth with the input vocabulary is accepted.

use std::sync::{Arc, Mutex, MutexGuard};

use hashbrown::{HashMap, HashSet};
use sarf_core::Solution;

/// Lock a mutex, recovering the guard if a previous holder panicked.
/// The cache's maps are append-only, so a poisoned guard still holds
/// consistent data.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug, Default)]
struct CacheInner {
    found: HashMap<String, u64>,
    not_found: HashMap<String, u64>,
    solutions: HashMap<String, Arc<HashSet<Solution>>>,
    alternatives: HashMap<String, Arc<HashSet<String>>>,
    word_locks: HashMap<String, Arc<Mutex<()>>>,
    search_locks: HashMap<String, Arc<Mutex<()>>>,
}

/// The memoization store. Clone-free and thread-safe; per-word locks
/// serialize first-time analysis of one word without blocking other
/// words.
#[derive(Debug, Default)]
pub struct SolutionCache {
    inner: Mutex<CacheInner>,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex serializing analysis of `word`. Callers hold its
    /// guard across the whole check-compute-store sequence so two
    /// threads cannot both compute the same word.
    pub fn word_lock(&self, word: &str) -> Arc<Mutex<()>> {
        let mut inner = lock(&self.inner);
        inner
            .word_locks
            .entry(word.to_string())
            .or_default()
            .clone()
    }

    /// The mutex serializing the segmentation search for one romanized
    /// form. Distinct from [`word_lock`](Self::word_lock): a word's
    /// fallback searches its alternative spellings while still holding
    /// its own word lock, and that alternative may simultaneously be
    /// another thread's primary word, or the other way round. Search
    /// locks are leaf locks, held only across one check-search-store
    /// and never while waiting on any other lock, so the pairing
    /// cannot deadlock.
    pub fn search_lock(&self, word: &str) -> Arc<Mutex<()>> {
        let mut inner = lock(&self.inner);
        inner
            .search_locks
            .entry(word.to_string())
            .or_default()
            .clone()
    }

    /// Record a repeat sighting of an already-classified word.
    /// Returns the cached outcome, or `None` for an unseen word.
    ///
    /// Panics if the word is classified both ways; the one-way state
    /// transition makes that an internal logic error, not an input
    /// error.
    pub fn record_seen(&self, word: &str) -> Option<bool> {
        let mut inner = lock(&self.inner);
        let in_found = inner.found.contains_key(word);
        let in_not_found = inner.not_found.contains_key(word);
        assert!(
            !(in_found && in_not_found),
            "word {word:?} classified as both found and not found"
        );
        if let Some(count) = inner.found.get_mut(word) {
            *count += 1;
            Some(true)
        } else if let Some(count) = inner.not_found.get_mut(word) {
            *count += 1;
            Some(false)
        } else {
            None
        }
    }

    /// Classify an unseen word as found. Panics if the word already
    /// has a classification.
    pub fn mark_found(&self, word: &str) {
        let mut inner = lock(&self.inner);
        assert!(
            !inner.not_found.contains_key(word),
            "word {word:?} already marked not found"
        );
        let prev = inner.found.insert(word.to_string(), 1);
        assert!(prev.is_none(), "word {word:?} already marked found");
    }

    /// Classify an unseen word as not found. Panics if the word
    /// already has a classification.
    pub fn mark_not_found(&self, word: &str) {
        let mut inner = lock(&self.inner);
        assert!(
            !inner.found.contains_key(word),
            "word {word:?} already marked found"
        );
        let prev = inner.not_found.insert(word.to_string(), 1);
        assert!(prev.is_none(), "word {word:?} already marked not found");
    }

    /// Whether a solution set has been stored for `word`. Distinct
    /// from the found/not-found classification: alternative spellings
    /// of a not-found word may have solution sets of their own.
    pub fn has_solutions(&self, word: &str) -> bool {
        lock(&self.inner).solutions.contains_key(word)
    }

    pub fn solutions(&self, word: &str) -> Option<Arc<HashSet<Solution>>> {
        lock(&self.inner).solutions.get(word).cloned()
    }

    /// Store a word's solution set. Only non-empty sets are stored;
    /// `has_solutions` doubling as the recomputation guard relies on
    /// that.
    pub fn store_solutions(&self, word: &str, solutions: HashSet<Solution>) {
        debug_assert!(!solutions.is_empty());
        lock(&self.inner)
            .solutions
            .insert(word.to_string(), Arc::new(solutions));
    }

    pub fn has_alternatives(&self, word: &str) -> bool {
        lock(&self.inner).alternatives.contains_key(word)
    }

    pub fn alternatives(&self, word: &str) -> Option<Arc<HashSet<String>>> {
        lock(&self.inner).alternatives.get(word).cloned()
    }

    pub fn store_alternatives(&self, word: &str, alternatives: HashSet<String>) {
        lock(&self.inner)
            .alternatives
            .insert(word.to_string(), Arc::new(alternatives));
    }

    /// Number of distinct words classified as found.
    pub fn found_count(&self) -> usize {
        lock(&self.inner).found.len()
    }

    /// Number of distinct words classified as not found.
    pub fn not_found_count(&self) -> usize {
        lock(&self.inner).not_found.len()
    }

    /// Total sightings of `word`, classified either way. Zero for an
    /// unseen word.
    pub fn sighting_count(&self, word: &str) -> u64 {
        let inner = lock(&self.inner);
        inner
            .found
            .get(word)
            .or_else(|| inner.not_found.get(word))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc as StdArc;

    use sarf_core::DictionaryEntry;

    fn solution() -> Solution {
        let e = |cat: &str| {
            StdArc::new(DictionaryEntry::new("k", "k_1", "ka", cat, "g", "ka/X"))
        };
        Solution::new(1, e("P"), e("S"), e("X"))
    }

    #[test]
    fn unseen_word_has_no_outcome() {
        let cache = SolutionCache::new();
        assert_eq!(cache.record_seen("ktb"), None);
        assert_eq!(cache.sighting_count("ktb"), 0);
    }

    #[test]
    fn found_outcome_is_remembered_and_counted() {
        let cache = SolutionCache::new();
        cache.mark_found("ktb");
        assert_eq!(cache.record_seen("ktb"), Some(true));
        assert_eq!(cache.record_seen("ktb"), Some(true));
        assert_eq!(cache.sighting_count("ktb"), 3);
        assert_eq!(cache.found_count(), 1);
        assert_eq!(cache.not_found_count(), 0);
    }

    #[test]
    fn not_found_outcome_is_remembered_and_counted() {
        let cache = SolutionCache::new();
        cache.mark_not_found("xyz");
        assert_eq!(cache.record_seen("xyz"), Some(false));
        assert_eq!(cache.sighting_count("xyz"), 2);
        assert_eq!(cache.not_found_count(), 1);
    }

    #[test]
    #[should_panic(expected = "already marked found")]
    fn reclassifying_found_as_not_found_panics() {
        let cache = SolutionCache::new();
        cache.mark_found("ktb");
        cache.mark_not_found("ktb");
    }

    #[test]
    #[should_panic(expected = "already marked not found")]
    fn reclassifying_not_found_as_found_panics() {
        let cache = SolutionCache::new();
        cache.mark_not_found("ktb");
        cache.mark_found("ktb");
    }

    #[test]
    fn solutions_are_stored_and_shared() {
        let cache = SolutionCache::new();
        assert!(!cache.has_solutions("ktb"));
        let mut set = HashSet::new();
        set.insert(solution());
        cache.store_solutions("ktb", set);
        assert!(cache.has_solutions("ktb"));
        assert_eq!(cache.solutions("ktb").unwrap().len(), 1);
    }

    #[test]
    fn alternatives_are_stored_independently_of_outcome() {
        let cache = SolutionCache::new();
        cache.mark_not_found("mdrsh");
        let mut alts = HashSet::new();
        alts.insert("mdrsp".to_string());
        cache.store_alternatives("mdrsh", alts);
        assert!(cache.has_alternatives("mdrsh"));
        assert_eq!(cache.alternatives("mdrsh").unwrap().len(), 1);
        assert!(!cache.has_alternatives("ktb"));
    }

    #[test]
    fn word_lock_is_stable_per_word() {
        let cache = SolutionCache::new();
        let a = cache.word_lock("ktb");
        let b = cache.word_lock("ktb");
        assert!(StdArc::ptr_eq(&a, &b));
        let c = cache.word_lock("qrA");
        assert!(!StdArc::ptr_eq(&a, &c));
    }

    #[test]
    fn search_lock_is_stable_and_distinct_from_word_lock() {
        let cache = SolutionCache::new();
        let word = cache.word_lock("ktb");
        let search = cache.search_lock("ktb");
        assert!(!StdArc::ptr_eq(&word, &search));
        assert!(StdArc::ptr_eq(&search, &cache.search_lock("ktb")));
    }

    #[test]
    fn word_locks_serialize_concurrent_analysis() {
        let cache = StdArc::new(SolutionCache::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = StdArc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                let word_lock = cache.word_lock("ktb");
                let _guard = word_lock.lock().unwrap();
                if cache.record_seen("ktb").is_none() {
                    cache.mark_found("ktb");
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cache.found_count(), 1);
        assert_eq!(cache.sighting_count("ktb"), 8);
    }
}
