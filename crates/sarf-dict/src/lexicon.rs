// Lexicon file parsing.
//
// Lexicon files are Latin-1 text. A line starting with ";; " opens a
// new lemma (its ID must be unique within the file), a line starting
// with ";" is a comment, and every other line must carry exactly four
// tab-separated fields: surface form, vocalization, morphological
// category, gloss-or-POS. The last field is split into a gloss and a
// part of speech here, so the stored entry carries five data fields
// for the four on disk.

use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use sarf_core::DictionaryEntry;

use crate::DictError;

/// Upper bound on entries sharing one surface key. The segmentation
/// search is a nested product over per-key entry lists, so a runaway
/// key would make a single partition disproportionately expensive;
/// the largest key in the reference stem lexicon stays well under
/// this. Exceeding it is a fatal load error.
pub const MAX_ENTRIES_PER_KEY: usize = 1024;

/// A multi-valued lexicon: one surface key maps to every entry sharing
/// that diacritic-free form. Iteration order of the entry lists is not
/// meaningful.
pub(crate) type Lexicon = HashMap<String, Vec<Arc<DictionaryEntry>>>;

/// Parse one lexicon file. All validation failures are fatal.
pub(crate) fn parse_lexicon(name: &str, bytes: &[u8]) -> Result<Lexicon, DictError> {
    let mut lexicon = Lexicon::new();
    let mut lemmas: HashSet<String> = HashSet::new();
    let mut lemma_id = String::new();

    for (idx, line) in latin1_lines(bytes).into_iter().enumerate() {
        let line_no = idx + 1;

        if let Some(id) = line.strip_prefix(";; ") {
            if !lemmas.insert(id.to_string()) {
                return Err(DictError::DuplicateLemma {
                    name: name.to_string(),
                    line: line_no,
                    lemma: id.to_string(),
                });
            }
            lemma_id = id.to_string();
            continue;
        }
        if line.starts_with(';') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [surface, vocalization, category, gloss_pos] = fields.as_slice() else {
            return Err(DictError::MalformedEntry {
                name: name.to_string(),
                line: line_no,
            });
        };

        let pos = match extract_pos_marker(gloss_pos) {
            Some(explicit) => explicit.to_string(),
            None => deduce_pos(category, vocalization, gloss_pos).ok_or_else(|| {
                DictError::UnknownCategory {
                    name: name.to_string(),
                    line: line_no,
                    category: category.to_string(),
                }
            })?,
        };
        let gloss = normalize_gloss(gloss_pos);

        let entry = Arc::new(DictionaryEntry::new(
            *surface,
            lemma_id.as_str(),
            *vocalization,
            *category,
            gloss,
            pos,
        ));
        let bucket = lexicon.entry(surface.to_string()).or_default();
        if bucket.len() >= MAX_ENTRIES_PER_KEY {
            return Err(DictError::TooManyEntries {
                name: name.to_string(),
                key: surface.to_string(),
                limit: MAX_ENTRIES_PER_KEY,
            });
        }
        bucket.push(entry);
    }

    Ok(lexicon)
}

/// Decode Latin-1 bytes into lines. A trailing newline does not
/// produce a final empty line.
pub(crate) fn latin1_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = bytes
        .split(|&b| b == b'\n')
        .map(|raw| {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            raw.iter().map(|&b| b as char).collect()
        })
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Extract an explicit `<pos>...</pos>` marker from the gloss field,
/// if present and non-empty.
fn extract_pos_marker(gloss_pos: &str) -> Option<&str> {
    let start = gloss_pos.find("<pos>")? + "<pos>".len();
    let end = start + gloss_pos[start..].find("</pos>")?;
    let inner = &gloss_pos[start..end];
    (!inner.is_empty()).then_some(inner)
}

/// Deduce a part of speech from the morphological category. The null
/// affix categories carry no POS; the verb and function-word families
/// are keyed by category prefix; nouns with a capitalized gloss are
/// taken as proper nouns (an educated guess the source lexicons rely
/// on). Returns `None` when nothing can be deduced.
fn deduce_pos(category: &str, vocalization: &str, gloss: &str) -> Option<String> {
    if category == "Pref-0" || category == "Suff-0" {
        return Some(String::new());
    }
    let tag = if category.starts_with('F') {
        "FUNC_WORD"
    } else if category.starts_with("IV") {
        "VERB_IMPERFECT"
    } else if category.starts_with("PV") {
        "VERB_PERFECT"
    } else if category.starts_with("CV") {
        "VERB_IMPERATIVE"
    } else if category.starts_with('N') {
        if gloss.starts_with(|c: char| c.is_ascii_uppercase()) {
            "NOUN_PROP"
        } else {
            "NOUN"
        }
    } else {
        return None;
    };
    Some(format!("{vocalization}/{tag}"))
}

/// Normalize a gloss: drop the first `<pos>` marker, trim, turn `;`
/// into `/`, and fold the Latin-1 accented characters that do not
/// survive re-encoding to plain ASCII. This folding is independent of
/// the Arabic transliteration codec.
fn normalize_gloss(gloss_pos: &str) -> String {
    let stripped = match (gloss_pos.find("<pos>"), gloss_pos.find("</pos>")) {
        (Some(start), Some(end)) if end >= start => {
            format!("{}{}", &gloss_pos[..start], &gloss_pos[end + "</pos>".len()..])
        }
        _ => gloss_pos.to_string(),
    };

    let mut out = String::with_capacity(stripped.len());
    for c in stripped.trim().chars() {
        if c == ';' {
            out.push('/');
        } else if let Some(folded) = fold_latin1(c) {
            out.push_str(folded);
        } else {
            out.push(c);
        }
    }
    out
}

/// ASCII folding for the accented Latin-1 set seen in lexicon glosses.
fn fold_latin1(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'Æ' => "AE",
        'æ' => "ae",
        'ß' => "ss",
        'Š' => "Sh",
        'š' => "sh",
        'Ž' => "Zh",
        'ž' => "zh",
        _ => return None,
    };
    Some(folded)
}
