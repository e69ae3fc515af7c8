// Splitting raw text into script runs.

use sarf_core::character::is_arabic_script;

/// Classification of one maximal run of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// Every character is in the analyzable Arabic letter range.
    Arabic,
    /// Everything else: whitespace, punctuation, Latin text, digits.
    Other,
}

/// Split a line into maximal contiguous runs of one script class.
/// Concatenating the runs restores the input.
pub fn script_runs(text: &str) -> Vec<(ScriptClass, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<ScriptClass> = None;
    for (i, c) in text.char_indices() {
        let class = if is_arabic_script(c) {
            ScriptClass::Arabic
        } else {
            ScriptClass::Other
        };
        match current {
            Some(prev) if prev == class => {}
            Some(prev) => {
                runs.push((prev, &text[start..i]));
                start = i;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }
    if let Some(class) = current {
        runs.push((class, &text[start..]));
    }
    runs
}
