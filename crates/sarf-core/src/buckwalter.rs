// Buckwalter transliteration: Arabic script <-> ASCII working alphabet.
//
// All dictionary lookups operate on the romanized form, so `romanize`
// deliberately discards everything that carries no morphological
// information: the short vowels, tanwin, shadda, sukun and tatweel.
// `arabize` is the exact inverse of the letter subset and additionally
// restores the diacritic glyphs, which makes the two functions
// asymmetric: `arabize(romanize(x))` loses x's vocalization, while
// `romanize(arabize(y)) == y` holds for any y over the mapped
// non-diacritic glyphs.

/// One-to-one mappings between Arabic letters/punctuation and their
/// Buckwalter ASCII glyphs. Used by both directions of the codec.
const LETTERS: &[(char, char)] = &[
    ('\u{0621}', '\''), // hamza
    ('\u{0622}', '|'),  // alef with madda above
    ('\u{0623}', '>'),  // alef with hamza above
    ('\u{0624}', '&'),  // waw with hamza above
    ('\u{0625}', '<'),  // alef with hamza below
    ('\u{0626}', '}'),  // yeh with hamza above
    ('\u{0627}', 'A'),  // alef
    ('\u{0628}', 'b'),  // beh
    ('\u{0629}', 'p'),  // teh marbuta
    ('\u{062A}', 't'),  // teh
    ('\u{062B}', 'v'),  // theh
    ('\u{062C}', 'j'),  // jeem
    ('\u{062D}', 'H'),  // hah
    ('\u{062E}', 'x'),  // khah
    ('\u{062F}', 'd'),  // dal
    ('\u{0630}', '*'),  // thal
    ('\u{0631}', 'r'),  // reh
    ('\u{0632}', 'z'),  // zain
    ('\u{0633}', 's'),  // seen
    ('\u{0634}', '$'),  // sheen
    ('\u{0635}', 'S'),  // sad
    ('\u{0636}', 'D'),  // dad
    ('\u{0637}', 'T'),  // tah
    ('\u{0638}', 'Z'),  // zah
    ('\u{0639}', 'E'),  // ain
    ('\u{063A}', 'g'),  // ghain
    ('\u{0641}', 'f'),  // feh
    ('\u{0642}', 'q'),  // qaf
    ('\u{0643}', 'k'),  // kaf
    ('\u{0644}', 'l'),  // lam
    ('\u{0645}', 'm'),  // meem
    ('\u{0646}', 'n'),  // noon
    ('\u{0647}', 'h'),  // heh
    ('\u{0648}', 'w'),  // waw
    ('\u{0649}', 'Y'),  // alef maksura
    ('\u{064A}', 'y'),  // yeh
    ('\u{067E}', 'P'),  // peh
    ('\u{0686}', 'J'),  // tcheh
    ('\u{06A4}', 'V'),  // veh
    ('\u{06AF}', 'G'),  // gaf
    ('\u{0698}', 'R'),  // jeh
    ('\u{060C}', ','),  // Arabic comma
    ('\u{061B}', ';'),  // Arabic semicolon
    ('\u{061F}', '?'),  // Arabic question mark
];

/// Vowel marks and other signs that are deleted by `romanize` and
/// restored by `arabize`.
///
/// Superscript alef and alef wasla are stripped on romanization as a
/// known simplification; correct handling of these two marks is an
/// open question in the source dictionaries and is kept as-is here.
const DIACRITICS: &[(char, char)] = &[
    ('\u{064B}', 'F'), // fathatan
    ('\u{064C}', 'N'), // dammatan
    ('\u{064D}', 'K'), // kasratan
    ('\u{064E}', 'a'), // fatha
    ('\u{064F}', 'u'), // damma
    ('\u{0650}', 'i'), // kasra
    ('\u{0651}', '~'), // shadda
    ('\u{0652}', 'o'), // sukun
    ('\u{0640}', '_'), // tatweel
    ('\u{0670}', '`'), // superscript alef
    ('\u{0671}', '{'), // alef wasla
];

/// Romanize an Arabic word into the Buckwalter working alphabet.
///
/// Deterministic, total, per-codepoint. Vowel marks, tatweel,
/// superscript alef and alef wasla are discarded; characters with no
/// mapping pass through unchanged.
pub fn romanize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if DIACRITICS.iter().any(|&(arabic, _)| arabic == c) {
            continue;
        }
        match LETTERS.iter().find(|&&(arabic, _)| arabic == c) {
            Some(&(_, glyph)) => out.push(glyph),
            None => out.push(c),
        }
    }
    out
}

/// Convert a Buckwalter-romanized word back to Arabic script.
///
/// Inverse of [`romanize`] on the letter subset; diacritic glyphs
/// (`F N K a u i ~ o`, backtick, `{`, `_`) are mapped back to their
/// Arabic marks. Characters with no mapping pass through unchanged.
pub fn arabize(word: &str) -> String {
    let mut out = String::new();
    for c in word.chars() {
        if let Some(&(arabic, _)) = LETTERS.iter().find(|&&(_, glyph)| glyph == c) {
            out.push(arabic);
        } else if let Some(&(arabic, _)) = DIACRITICS.iter().find(|&&(_, glyph)| glyph == c) {
            out.push(arabic);
        } else {
            out.push(c);
        }
    }
    out
}
