use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize text for matching.
///
/// Lowercases, decomposes (NFD) and drops combining marks so accented letters
/// fold to their base letter, then drops everything that is neither a word
/// character (alphanumeric or `_`) nor whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
