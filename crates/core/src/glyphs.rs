//! Target glyphs for every punctuation concept the rules emit.

/// Opening curly double quote.
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
/// Closing curly double quote.
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
/// Opening curly single quote.
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Closing curly single quote, also used as the apostrophe.
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Prime (feet, arc-minutes).
pub const PRIME: char = '\u{2032}';
/// Double prime (inches, arc-seconds).
pub const DOUBLE_PRIME: char = '\u{2033}';
/// Triple prime.
pub const TRIPLE_PRIME: char = '\u{2034}';
/// En dash, used for numeric ranges.
pub const EN_DASH: char = '\u{2013}';
/// Em dash, used for parenthetical breaks.
pub const EM_DASH: char = '\u{2014}';
/// Horizontal ellipsis.
pub const ELLIPSIS: char = '\u{2026}';
/// Hair space.
pub const HAIR_SPACE: char = '\u{200A}';
/// Non-breaking space.
pub const NBSP: char = '\u{00A0}';

/// Marks that bind to the word following them.
pub const LEADING_PUNCTUATION: &[char] = &['«', '¿', '¡'];
/// Marks that bind to the word preceding them.
pub const TRAILING_PUNCTUATION: &[char] = &['!', '?', ':', ';', '.', ',', '‽', '»'];

/// Returns true for the ASCII word characters `[A-Za-z0-9_]`.
///
/// Quote direction is decided against this class rather than Unicode
/// alphanumerics, so accented letters count as boundaries.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Regex character-class body matching any of `chars`.
pub(crate) fn char_class(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars_are_ascii_only() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('é'));
        assert!(!is_word_char(RIGHT_SINGLE_QUOTE));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn char_class_escapes_metacharacters() {
        assert_eq!(char_class(LEADING_PUNCTUATION), "«¿¡");
        assert_eq!(char_class(&['.', '?', '‽']), r"\.\?‽");
    }
}
