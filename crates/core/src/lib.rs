#![deny(missing_docs)]
//! typeset core: rewrites ASCII punctuation in text fragments into typographic
//! glyphs (curly quotes, primes, dashes, ellipses, hair and non-breaking spaces).
//!
//! The engine is a pure string-to-string function. It knows nothing about
//! documents; callers hand it one complete text fragment at a time.
//!
//! ```
//! assert_eq!(
//!     typeset_core::transform(r#""Hello," said the fox."#),
//!     "“Hello,” said the fox."
//! );
//! ```

/// Typesetting error types.
pub mod error;
/// Glyph table.
pub mod glyphs;
/// Stage configuration.
pub mod options;
/// The ordered stage pipeline.
pub mod pipeline;
/// Dash, ellipsis and non-breaking space rules.
pub mod punctuation;
/// Quote disambiguation rules.
pub mod quotes;
/// Hair-space rules.
pub mod spaces;

pub use error::{SourceLocation, TypesetError};
pub use options::{
    EmDashReplacement, EnDashSpacing, PunctuationOptions, QuotesOptions, SpacesOptions,
    TypesetOptions,
};
pub use pipeline::{TextTransform, Typesetter};
pub use punctuation::replace_punctuation;
pub use quotes::replace_quotes;
pub use spaces::replace_spaces;

use once_cell::sync::Lazy;

static DEFAULT_TYPESETTER: Lazy<Typesetter> = Lazy::new(Typesetter::default);

/// Transforms one text fragment with every stage enabled at its defaults.
///
/// Total and deterministic: any input, including the empty string, yields a
/// string.
pub fn transform(fragment: &str) -> String {
    DEFAULT_TYPESETTER.transform(fragment)
}
