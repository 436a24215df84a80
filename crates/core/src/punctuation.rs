//! Dashes, ellipses and non-breaking spaces around punctuation.

use crate::glyphs::{
    ELLIPSIS, EM_DASH, EN_DASH, LEADING_PUNCTUATION, NBSP, TRAILING_PUNCTUATION, char_class,
};
use crate::options::{EmDashReplacement, PunctuationOptions};
use crate::pipeline::{TextTransform, replace_all, replace_literal};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Each pass runs on the output of the one before, so `1-2&ndash;3` becomes
/// `1–2–3` even though the first pass consumed the `2`.
static NUMERIC_RANGES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        "-".to_string(),
        "&ndash;|&#8211;|&#x2013;".to_string(),
        format!("{EM_DASH}|&mdash;|&#8212;|&#x2014;"),
    ]
    .map(|dash| {
        Regex::new(&format!(r"([0-9]+\s?)(?:{dash})(\s?[0-9]+)")).expect("numeric range pattern")
    })
});
static LEADING_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("([{}]) ", char_class(LEADING_PUNCTUATION)))
        .expect("leading punctuation pattern")
});
static TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(" ([{}])", char_class(TRAILING_PUNCTUATION)))
        .expect("trailing punctuation pattern")
});

/// Punctuation stage as a pipeline transform.
#[derive(Debug, Clone, Default)]
pub struct Punctuation {
    options: PunctuationOptions,
}

impl Punctuation {
    /// Create the stage with the given options.
    pub fn new(options: PunctuationOptions) -> Self {
        Self { options }
    }
}

impl TextTransform for Punctuation {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        replace_punctuation(input, &self.options)
    }
}

/// Normalizes numeric ranges, hyphen runs and ellipses, and binds
/// punctuation to its word with non-breaking spaces.
///
/// Numeric ranges are detected before hyphen runs are converted, so an em
/// dash produced from `--` is never turned into an en dash.
///
/// ```
/// use typeset_core::options::PunctuationOptions;
/// use typeset_core::punctuation::replace_punctuation;
///
/// let options = PunctuationOptions::default();
/// assert_eq!(replace_punctuation("1880-1912", &options), "1880–1912");
/// assert_eq!(replace_punctuation("Wait for it...", &options), "Wait for it…");
/// ```
pub fn replace_punctuation<'a>(input: &'a str, options: &PunctuationOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(input);

    for range in NUMERIC_RANGES.iter() {
        text = replace_all(text, range, |caps: &Captures<'_>| {
            format!("{}{EN_DASH}{}", &caps[1], &caps[2])
        });
    }

    let mut buf = [0; 4];
    match options.em_dash_replacement {
        EmDashReplacement::Double => {
            text = replace_literal(text, "--", EM_DASH.encode_utf8(&mut buf));
        }
        EmDashReplacement::Triple => {
            text = replace_literal(text, "---", EM_DASH.encode_utf8(&mut buf));
            text = replace_literal(text, "--", EN_DASH.encode_utf8(&mut buf));
        }
    }

    text = replace_literal(text, "...", ELLIPSIS.encode_utf8(&mut buf));

    text = replace_all(text, &LEADING_SPACE, |caps: &Captures<'_>| {
        format!("{}{NBSP}", &caps[1])
    });
    text = replace_all(text, &TRAILING_SPACE, |caps: &Captures<'_>| {
        format!("{NBSP}{}", &caps[1])
    });

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punctuate(input: &str) -> String {
        replace_punctuation(input, &PunctuationOptions::default()).into_owned()
    }

    #[test]
    fn numeric_ranges_use_en_dash() {
        assert_eq!(punctuate("1880-1912"), "1880–1912");
        assert_eq!(punctuate("pages 12 - 14"), "pages 12 – 14");
    }

    #[test]
    fn every_range_spelling_is_unified() {
        let expected = "1880 – 1912";
        assert_eq!(punctuate("1880 - 1912"), expected);
        assert_eq!(punctuate("1880 &ndash; 1912"), expected);
        assert_eq!(punctuate("1880 &#8211; 1912"), expected);
        assert_eq!(punctuate("1880 — 1912"), expected);
        assert_eq!(punctuate("1880 &mdash; 1912"), expected);
        assert_eq!(punctuate("1880 &#8212; 1912"), expected);
        assert_eq!(punctuate("1880 &#x2014; 1912"), expected);
    }

    #[test]
    fn mixed_range_spellings_chain() {
        assert_eq!(punctuate("1-2&ndash;3"), "1–2–3");
    }

    #[test]
    fn double_hyphen_between_digits_stays_an_em_dash() {
        assert_eq!(punctuate("1880--1912"), "1880—1912");
    }

    #[test]
    fn double_hyphen_is_em_dash() {
        assert_eq!(punctuate("I believe I shall -- no"), "I believe I shall — no");
    }

    #[test]
    fn triple_mode_splits_dashes() {
        let options = PunctuationOptions {
            em_dash_replacement: EmDashReplacement::Triple,
        };
        assert_eq!(
            replace_punctuation("wait --- no -- maybe", &options),
            "wait — no – maybe"
        );
    }

    #[test]
    fn single_hyphens_in_words_survive() {
        assert_eq!(punctuate("well-known"), "well-known");
    }

    #[test]
    fn triple_period_is_ellipsis() {
        assert_eq!(punctuate("Wait for it..."), "Wait for it…");
    }

    #[test]
    fn binds_punctuation_with_nbsp() {
        assert_eq!(punctuate("« Bonjour »"), "«\u{00A0}Bonjour\u{00A0}»");
        assert_eq!(punctuate("¿ Qué ?"), "¿\u{00A0}Qué\u{00A0}?");
        assert_eq!(punctuate("Attention : danger !"), "Attention\u{00A0}: danger\u{00A0}!");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(
            replace_punctuation("no dashes here", &PunctuationOptions::default()),
            Cow::Borrowed(_)
        ));
    }
}
