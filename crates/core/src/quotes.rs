//! Straight quote disambiguation: curly quotes, apostrophes and primes.
//!
//! The rules run in a fixed order and each one sees the output of the
//! previous one. Later rules only look at characters the earlier rules left
//! straight, so reordering them changes results.

use crate::glyphs::{
    DOUBLE_PRIME, LEFT_DOUBLE_QUOTE, LEFT_SINGLE_QUOTE, PRIME, RIGHT_DOUBLE_QUOTE,
    RIGHT_SINGLE_QUOTE, TRAILING_PUNCTUATION, TRIPLE_PRIME, char_class, is_word_char,
};
use crate::pipeline::{TextTransform, replace_all, replace_literal};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static OPENING_DOUBLE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"([^A-Za-z0-9_]|^)"([^\s{}])"#,
        char_class(TRAILING_PUNCTUATION)
    );
    Regex::new(&pattern).expect("opening double quote pattern")
});
static CLOSING_DOUBLE: Lazy<Regex> = Lazy::new(|| {
    let open = LEFT_DOUBLE_QUOTE;
    Regex::new(&format!(r#"({open}[^"]*)"([^"]*$|[^{open}"]*{open})"#))
        .expect("closing double quote pattern")
});
static TRAILING_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^0-9])""#).expect("trailing double quote pattern"));
static OPENING_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^A-Za-z0-9_]|^)'(\S)").expect("opening single quote pattern"));
static MEDIAL_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z])'([A-Za-z])").expect("medial apostrophe pattern"));
static CLOSING_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({LEFT_SINGLE_QUOTE}[^']*|[A-Za-z])'([^0-9]|$)"))
        .expect("closing single quote pattern")
});
static CLIPPED_YEAR: Lazy<Regex> = Lazy::new(|| {
    let (open, close) = (LEFT_SINGLE_QUOTE, RIGHT_SINGLE_QUOTE);
    Regex::new(&format!(
        r"{open}([0-9]{{2}}[^{close}]*)({open}(?:[^0-9]|$)|$|{close}[A-Za-z])"
    ))
    .expect("clipped year pattern")
});

/// Escaped glyphs and the straight text they stand for.
static ESCAPES: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    [
        (LEFT_DOUBLE_QUOTE, "\""),
        (RIGHT_DOUBLE_QUOTE, "\""),
        (RIGHT_SINGLE_QUOTE, "'"),
        (LEFT_SINGLE_QUOTE, "'"),
        (TRIPLE_PRIME, "'''"),
        (DOUBLE_PRIME, "\""),
        (PRIME, "'"),
    ]
    .into_iter()
    .map(|(glyph, straight)| (format!("\\{glyph}"), straight))
    .collect()
});

/// Quote stage as a pipeline transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quotes;

impl TextTransform for Quotes {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        replace_quotes(input)
    }
}

/// Replaces straight quotes (and `&#39;` / `&quot;`) with curly quotes,
/// apostrophes and primes.
///
/// A backslash in front of a quote keeps it straight: `\"` and `\'` come out
/// as `"` and `'` with the backslash removed.
///
/// ```
/// use typeset_core::quotes::replace_quotes;
///
/// assert_eq!(replace_quotes(r#""Hello," said the fox."#), "“Hello,” said the fox.");
/// assert_eq!(replace_quotes("don&#39;t"), "don’t");
/// ```
pub fn replace_quotes(input: &str) -> Cow<'_, str> {
    if !input.contains(['"', '\'', '&', '\\', LEFT_SINGLE_QUOTE]) {
        return Cow::Borrowed(input);
    }

    let mut text = Cow::Borrowed(input);
    text = replace_literal(text, "&#39;", "'");
    text = replace_literal(text, "&quot;", "\"");

    text = replace_all(text, &OPENING_DOUBLE, |caps: &Captures<'_>| {
        format!("{}{LEFT_DOUBLE_QUOTE}{}", &caps[1], &caps[2])
    });
    text = replace_all(text, &CLOSING_DOUBLE, |caps: &Captures<'_>| {
        format!("{}{RIGHT_DOUBLE_QUOTE}{}", &caps[1], &caps[2])
    });
    text = replace_all(text, &TRAILING_DOUBLE, |caps: &Captures<'_>| {
        format!("{}{RIGHT_DOUBLE_QUOTE}", &caps[1])
    });
    text = replace_all(text, &OPENING_SINGLE, |caps: &Captures<'_>| {
        format!("{}{LEFT_SINGLE_QUOTE}{}", &caps[1], &caps[2])
    });
    // Contractions first, so "don't" is never read as a closing quote.
    text = replace_all(text, &MEDIAL_APOSTROPHE, |caps: &Captures<'_>| {
        format!("{}{RIGHT_SINGLE_QUOTE}{}", &caps[1], &caps[2])
    });
    text = replace_all(text, &CLOSING_SINGLE, |caps: &Captures<'_>| {
        format!("{}{RIGHT_SINGLE_QUOTE}{}", &caps[1], &caps[2])
    });
    text = replace_all(text, &CLIPPED_YEAR, |caps: &Captures<'_>| {
        format!("{RIGHT_SINGLE_QUOTE}{}{}", &caps[1], &caps[2])
    });
    if let Some(corrected) = correct_backwards_apostrophes(&text) {
        text = Cow::Owned(corrected);
    }

    // Whatever is still straight is a measurement.
    let mut buf = [0; 4];
    text = replace_literal(text, "'''", TRIPLE_PRIME.encode_utf8(&mut buf));
    text = replace_literal(text, "\"", DOUBLE_PRIME.encode_utf8(&mut buf));
    text = replace_literal(text, "''", DOUBLE_PRIME.encode_utf8(&mut buf));
    text = replace_literal(text, "'", PRIME.encode_utf8(&mut buf));

    for (escaped, straight) in ESCAPES.iter() {
        text = replace_literal(text, escaped, straight);
    }

    text
}

/// Turns opening single quotes that start an elision ("’Twas", "’em") into
/// apostrophes.
///
/// An opening quote not preceded by a word character is an apostrophe when the
/// text after it reads as zero or more `…’x` segments (closing quote glued to
/// a following word character) and then either runs to the end without another
/// curly single quote, or reaches a non-word character followed by a curly
/// single quote glued to a word character. Every quote is judged against the
/// input as a whole, not against earlier corrections.
fn correct_backwards_apostrophes(text: &str) -> Option<String> {
    if !text.contains(LEFT_SINGLE_QUOTE) {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    let elision = elision_starts(&chars);
    let mut changed = false;
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let after_word = i > 0 && is_word_char(chars[i - 1]);
        if c == LEFT_SINGLE_QUOTE && !after_word && elision[i + 1] {
            out.push(RIGHT_SINGLE_QUOTE);
            changed = true;
        } else {
            out.push(c);
        }
    }

    changed.then_some(out)
}

/// For every position, whether the text from there on reads as an elision
/// body. Filled right to left in one pass: a position either ends in an
/// elision tail or skips one `…’x` segment to the position after that
/// closing quote, which is already known.
fn elision_starts(chars: &[char]) -> Vec<bool> {
    let mut reads = vec![false; chars.len() + 1];
    let mut next_close = None;
    let mut next_curly = None;
    for pos in (0..=chars.len()).rev() {
        if let Some(&c) = chars.get(pos) {
            if c == RIGHT_SINGLE_QUOTE {
                next_close = Some(pos);
            }
            if is_curly_single(c) {
                next_curly = Some(pos);
            }
        }

        let tail = match next_curly {
            None => true,
            Some(quote) => {
                // Either a non-word character right before the first curly
                // quote, or the first curly quote itself acting as that
                // character for a second one.
                let before_first =
                    quote > pos && !is_word_char(chars[quote - 1]) && word_at(chars, quote + 1);
                let doubled = chars.get(quote + 1).copied().is_some_and(is_curly_single)
                    && word_at(chars, quote + 2);
                before_first || doubled
            }
        };
        // Only the first closing quote can end a segment.
        reads[pos] = tail
            || next_close.is_some_and(|close| word_at(chars, close + 1) && reads[close + 1]);
    }
    reads
}

fn word_at(chars: &[char], index: usize) -> bool {
    chars.get(index).copied().is_some_and(is_word_char)
}

fn is_curly_single(c: char) -> bool {
    c == LEFT_SINGLE_QUOTE || c == RIGHT_SINGLE_QUOTE
}
