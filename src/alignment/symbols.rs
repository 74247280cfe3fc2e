/*!
 * Phonetic symbol substitution and tokenization.
 */

/// Markup wrapped around each tone digit
pub const SUPERSCRIPT_OPEN: &str = "<super>";
pub const SUPERSCRIPT_CLOSE: &str = "</super>";

/// Literal replacements applied, in order, before tokenizing.
///
/// The first three encode diacritics in plain ASCII, the rest mark
/// emphasised initials.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("e`", "é"),
    ("e^", "ê"),
    ("u:", "ü"),
    ("dd", "<u><b>d</b></u>"),
    ("gg", "<u><b>g</b></u>"),
    ("mm", "<u><b>m</b></u>"),
    ("bb", "<u><b>b</b></u>"),
];

/// Apply the substitution table to a raw symbol block
pub fn substitute(block: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(block.to_string(), |acc, (pattern, replacement)| acc.replace(pattern, replacement))
}

/// Split a substituted symbol block into tone-terminated tokens.
///
/// Every ASCII digit closes a token made of the characters since the
/// previous token plus the digit as a superscript. Characters after the last
/// digit are dropped.
pub fn tokenize(symbols: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, ch) in symbols.char_indices() {
        if ch.is_ascii_digit() {
            tokens.push(format!(
                "{}{}{}{}",
                &symbols[start..idx],
                SUPERSCRIPT_OPEN,
                ch,
                SUPERSCRIPT_CLOSE
            ));
            start = idx + ch.len_utf8();
        }
    }

    tokens
}

/// Split a word block into one cell per character
pub fn split_words(words: &str) -> Vec<String> {
    words.chars().map(String::from).collect()
}
