// Immutable dictionary records.

/// A dictionary record for one morphological segment (prefix, stem or
/// suffix).
///
/// Entries are produced once at dictionary load time, never mutated,
/// and shared read-only (behind `Arc`) by every lookup and every
/// [`Solution`](crate::Solution) that references them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// Diacritic-free surface form, the lookup key.
    pub surface: String,
    /// Lemma the entry belongs to. Empty in lexicons that declare no
    /// lemma headers (the affix lexicons).
    pub lemma_id: String,
    /// Fully vocalized form in the Buckwalter alphabet.
    pub vocalization: String,
    /// Morphological category; the key used in the compatibility tables.
    pub category: String,
    /// Normalized English gloss.
    pub gloss: String,
    /// Part of speech, rendered `vocalization/TAG`. Empty for the null
    /// prefix and suffix.
    pub pos: String,
}

impl DictionaryEntry {
    pub fn new(
        surface: impl Into<String>,
        lemma_id: impl Into<String>,
        vocalization: impl Into<String>,
        category: impl Into<String>,
        gloss: impl Into<String>,
        pos: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma_id: lemma_id.into(),
            vocalization: vocalization.into(),
            category: category.into(),
            gloss: gloss.into(),
            pos: pos.into(),
        }
    }

    /// The bare part-of-speech tag, without the vocalization prefix.
    pub fn pos_tag(&self) -> &str {
        match self.pos.rfind('/') {
            Some(i) => &self.pos[i + 1..],
            None => &self.pos,
        }
    }

    /// The gloss split into its individual senses. Lexicon glosses
    /// separate senses with `/` and parenthesized qualifiers.
    pub fn gloss_list(&self) -> Vec<&str> {
        self.gloss
            .split(['/', '(', ')'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
