// Category-pair compatibility tables.

use hashbrown::HashSet;

/// One pairwise compatibility table, an exact-string set of allowed
/// ordered category pairs. Three of these gate the segmentation
/// search: prefix-stem, prefix-suffix and stem-suffix.
///
/// Membership is exact. The pair key is built with a single space, so
/// table files are whitespace-normalized at load time.
#[derive(Debug, Default)]
pub struct CompatTable {
    pairs: HashSet<String>,
}

impl CompatTable {
    /// Parse a table file. Lines starting with `;` are comments; data
    /// lines carry two categories separated by whitespace, collapsed
    /// to a single space on load. Empty lines are skipped.
    pub fn parse(bytes: &[u8]) -> Self {
        let mut pairs = HashSet::new();
        for line in crate::lexicon::latin1_lines(bytes) {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let normalized: Vec<&str> = line.split_whitespace().collect();
            pairs.insert(normalized.join(" "));
        }
        Self { pairs }
    }

    /// Build a table from explicit pairs. Used by tests and synthetic
    /// dictionaries.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(a, b)| format!("{a} {b}"))
                .collect(),
        }
    }

    /// True when the ordered pair `(a, b)` is declared compatible.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&format!("{a} {b}"))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
