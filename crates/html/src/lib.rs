#![deny(missing_docs)]
//! typeset HTML adapter: runs the typesetting engine over the text nodes of an
//! HTML document, leaving verbatim containers untouched.

/// Markdown entry point.
pub mod markdown;
/// Adapter options and the ignored-element set.
pub mod options;
/// Streaming HTML rewriter.
pub mod rewriter;

pub use markdown::typeset_markdown;
pub use options::{DEFAULT_IGNORED_ELEMENTS, HtmlOptions};
pub use rewriter::typeset_html;
pub use typeset_core::{TypesetError, TypesetOptions};
