//! Batch processing types and utilities for parallel typesetting.

use crate::convert::to_napi_error;
use crate::types::{InputFormat, TypesetConfig};
use napi_derive::napi;
use typeset_core::{TypesetError, Typesetter};
use typeset_html::{HtmlOptions, typeset_html, typeset_markdown};

/// Input for batch processing - a single document to typeset.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// Source content.
    pub source: String,
    /// Source kind. Defaults to HTML.
    pub format: Option<InputFormat>,
}

/// Result for a single document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Document identifier matching the input.
    pub id: String,
    /// Typeset output (present on success).
    pub output: Option<String>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of documents submitted.
    pub total: u32,
    /// Number of documents typeset successfully.
    pub succeeded: u32,
    /// Number of documents that failed.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Typeset configuration to use for all documents.
    pub config: Option<TypesetConfig>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Typesets one batch input according to its format.
pub(crate) fn process_one(
    input: &BatchInput,
    options: &HtmlOptions,
    typesetter: &Typesetter,
) -> Result<String, TypesetError> {
    match input.format.unwrap_or_default() {
        InputFormat::Html => typeset_html(&input.source, options),
        InputFormat::Markdown => typeset_markdown(&input.source, options),
        InputFormat::Text => Ok(typesetter.transform(&input.source)),
    }
}

impl BatchResult {
    pub(crate) fn from_outcome(id: String, outcome: Result<String, TypesetError>) -> Self {
        match outcome {
            Ok(output) => Self {
                id,
                output: Some(output),
                error: None,
            },
            Err(err) => Self {
                id,
                output: None,
                error: Some(to_napi_error(err).reason),
            },
        }
    }
}
