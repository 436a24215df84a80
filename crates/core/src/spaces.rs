//! Hair-space padding around dashes and operators.

use crate::glyphs::{EM_DASH, EN_DASH, HAIR_SPACE};
use crate::options::{EnDashSpacing, SpacesOptions};
use crate::pipeline::{TextTransform, replace_all, replace_literal};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static EN_DASH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([0-9]+)\s?{EN_DASH}\s?([0-9]+)")).expect("en dash range pattern")
});

/// Spaced glyphs and their hair-spaced replacements.
static PADDED: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    [EM_DASH, '×', '/']
        .into_iter()
        .map(|glyph| (format!(" {glyph} "), format!("{HAIR_SPACE}{glyph}{HAIR_SPACE}")))
        .collect()
});

/// Spacing stage as a pipeline transform.
#[derive(Debug, Clone, Default)]
pub struct Spaces {
    options: SpacesOptions,
}

impl Spaces {
    /// Create the stage with the given options.
    pub fn new(options: SpacesOptions) -> Self {
        Self { options }
    }
}

impl TextTransform for Spaces {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        replace_spaces(input, &self.options)
    }
}

/// Swaps plain spaces around en dashes in numeric ranges, em dashes,
/// multiplication signs and slashes for hair spaces.
///
/// Expects dashes to already be glyphs; raw hyphens are not recognized.
///
/// ```
/// use typeset_core::options::SpacesOptions;
/// use typeset_core::spaces::replace_spaces;
///
/// let out = replace_spaces("4 × 4 = 16", &SpacesOptions::default());
/// assert_eq!(out, "4\u{200A}×\u{200A}4 = 16");
/// ```
pub fn replace_spaces<'a>(input: &'a str, options: &SpacesOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(input);

    let spacing = match options.en_dash_spacing {
        EnDashSpacing::Open => Some(HAIR_SPACE),
        EnDashSpacing::Closed => None,
    };
    text = replace_all(text, &EN_DASH_RANGE, |caps: &Captures<'_>| match spacing {
        Some(space) => format!("{}{space}{EN_DASH}{space}{}", &caps[1], &caps[2]),
        None => format!("{}{EN_DASH}{}", &caps[1], &caps[2]),
    });

    for (spaced, padded) in PADDED.iter() {
        text = replace_literal(text, spaced, padded);
    }

    text
}
