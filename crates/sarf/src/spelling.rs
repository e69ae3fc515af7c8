// Alternative spelling generation.
//
// When a word yields no direct analysis, common orthographic
// confusions are tried: alef maksura written for yeh, a hamza carrier
// dropped to the line after waw, and the final heh / teh marbuta
// mix-up. The rules form a priority chain keyed on the word's ending,
// most specific ending first; exactly one rule fires per word.

/// One suffix-triggered rule. `suffix` selects the rule, `expand`
/// produces the candidate spellings for it.
struct SpellingRule {
    suffix: &'static str,
    expand: fn(&str) -> Vec<String>,
}

/// The priority chain. Order matters: a word ending in `y'` must not
/// fall through to the bare `y` rule.
const RULES: &[SpellingRule] = &[
    SpellingRule { suffix: "Y'", expand: expand_final_maksura_hamza },
    SpellingRule { suffix: "y'", expand: expand_final_yeh_hamza },
    SpellingRule { suffix: "y", expand: expand_final_yeh },
    SpellingRule { suffix: "h", expand: expand_final_heh },
    SpellingRule { suffix: "p", expand: expand_final_teh_marbuta },
];

/// Generate the alternative spellings of a romanized word, in rule
/// order with duplicates removed. An empty result is a normal outcome
/// for words none of the substitutions apply to.
pub fn alternative_spellings(word: &str) -> Vec<String> {
    let mut candidates = match RULES.iter().find(|r| word.ends_with(r.suffix)) {
        Some(rule) => (rule.expand)(word),
        None => expand_generic(word),
    };
    let mut seen = hashbrown::HashSet::new();
    candidates.retain(|c| seen.insert(c.clone()));
    candidates
}

// === Single-character substitutions ===

/// Rewrite every alef maksura as yeh.
fn maksura_to_yeh(word: &str) -> String {
    word.replace('Y', "y")
}

/// Move the first hamza-on-the-line after waw onto the waw. `None`
/// when the word has no such cluster.
fn waw_hamza(word: &str) -> Option<String> {
    word.contains("w'").then(|| word.replacen("w'", "&", 1))
}

fn swap_suffix(word: &str, from: &str, to: &str) -> String {
    match word.strip_suffix(from) {
        Some(head) => format!("{head}{to}"),
        None => word.to_string(),
    }
}

// === Rule bodies ===
//
// Each body mirrors the same shape: try the alef maksura rewrite, try
// the waw-hamza rewrite, then apply the rule's own final-character
// substitution and try waw-hamza on that as well. The ending rules
// restart from the maksura-rewritten base for the final substitution;
// the heh and teh marbuta rules accumulate instead, so their final
// swap applies on top of whatever already changed.

fn expand_final_maksura_hamza(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let base = maksura_to_yeh(word);
    out.push(base.clone());
    if let Some(w) = waw_hamza(&base) {
        out.push(w);
    }
    let merged = swap_suffix(&base, "y'", "}");
    let merged_waw = waw_hamza(&merged);
    out.push(merged);
    out.extend(merged_waw);
    out
}

fn expand_final_yeh_hamza(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let base = maksura_to_yeh(word);
    if base != word {
        out.push(base.clone());
    }
    if let Some(w) = waw_hamza(&base) {
        out.push(w);
    }
    let merged = swap_suffix(&base, "y'", "}");
    let merged_waw = waw_hamza(&merged);
    out.push(merged);
    out.extend(merged_waw);
    out
}

fn expand_final_yeh(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let base = maksura_to_yeh(word);
    if let Some(w) = waw_hamza(&base) {
        out.push(w);
    }
    let swapped = swap_suffix(&base, "y", "Y");
    out.push(swapped.clone());
    if let Some(w) = waw_hamza(&swapped) {
        out.push(w);
    }
    out
}

fn expand_final_heh(word: &str) -> Vec<String> {
    expand_accumulating(word, "h", "p")
}

fn expand_final_teh_marbuta(word: &str) -> Vec<String> {
    expand_accumulating(word, "p", "h")
}

fn expand_accumulating(word: &str, from: &str, to: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = word.to_string();
    let base = maksura_to_yeh(word);
    if base != cur {
        out.push(base.clone());
        cur = base;
    }
    if let Some(w) = waw_hamza(&cur) {
        out.push(w.clone());
        cur = w;
    }
    out.push(swap_suffix(&cur, from, to));
    out
}

/// No ending rule matched. Try the two generic substitutions; a final
/// alef maksura additionally forces the full maksura rewrite.
fn expand_generic(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if word.ends_with('Y') {
        let base = maksura_to_yeh(word);
        out.push(base.clone());
        if let Some(w) = waw_hamza(&base) {
            out.push(w);
        }
    } else {
        let base = maksura_to_yeh(word);
        if base != word {
            out.push(base.clone());
            if let Some(w) = waw_hamza(&base) {
                out.push(w);
            }
        } else if let Some(w) = waw_hamza(word) {
            out.push(w);
        }
    }
    out
}
