//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options accepted by every typeset entry point.
///
/// Omitted stage flags default to enabled.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct TypesetConfig {
    /// Curly quotes, apostrophes and primes.
    pub quotes: Option<bool>,
    /// Dashes, ellipses and non-breaking spaces.
    pub punctuation: Option<bool>,
    /// Hair-space padding around dashes and operators.
    pub spaces: Option<bool>,
    /// `"double"` (`--` is an em dash) or `"triple"` (`---` is an em dash,
    /// `--` an en dash).
    pub em_dash_replacement: Option<String>,
    /// `"open"` or `"closed"` spacing around en dashes in numeric ranges.
    pub en_dash_spacing: Option<String>,
    /// Element names whose content is left verbatim. Replaces the default
    /// `script`, `style`, `pre`, `code` set when given.
    pub ignored_elements: Option<Vec<String>>,
}

/// What kind of source a batch input holds.
#[napi(string_enum)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// An HTML document or fragment.
    #[default]
    Html,
    /// GitHub Flavored Markdown, rendered to HTML first.
    Markdown,
    /// A bare text fragment with no markup.
    Text,
}
