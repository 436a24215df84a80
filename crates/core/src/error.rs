use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised at the fallible edges around the typesetting engine.
///
/// The engine itself never fails; these come from option parsing, the HTML
/// rewriter, and the Markdown renderer.
#[derive(Debug, Error)]
pub enum TypesetError {
    /// Options could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// The HTML rewriter rejected the document.
    #[error("Rewrite error: {0}")]
    Rewrite(String),
    /// Markdown could not be rendered to HTML.
    #[error("Markdown error at {location}: {message}")]
    Markdown {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
}

impl TypesetError {
    /// Create a markdown error with location
    pub fn markdown(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Markdown {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }
}

impl From<serde_json::Error> for TypesetError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}
