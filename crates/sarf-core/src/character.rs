// Arabic script character classification.

/// Check whether a character belongs to the Arabic script subset the
/// analyzer understands: the base letter block (hamza through ghain,
/// feh through sukun) plus the four extended letters peh, tcheh, jeh
/// and gaf.
///
/// Tatweel (U+0640) is deliberately excluded: it never contributes to
/// an analysis and a run containing only elongation marks is not an
/// Arabic token.
pub fn is_arabic_script(c: char) -> bool {
    matches!(c,
        '\u{0621}'..='\u{063A}'
        | '\u{0641}'..='\u{0652}'
        | '\u{067E}'
        | '\u{0686}'
        | '\u{0698}'
        | '\u{06AF}')
}
