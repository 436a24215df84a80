#![deny(missing_docs)]
//! Node.js bindings that surface typeset's Rust implementation.

use napi_derive::napi;
use typeset_core::Typesetter;

/// Batch processing types and functions.
pub mod batch;
/// Conversion between JS-facing config and Rust options.
pub mod convert;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
use convert::{to_html_options, to_napi_error};
pub use types::*;

/// Typesets the text nodes of an HTML document or fragment.
///
/// Content of `script`, `style`, `pre` and `code` elements (or of
/// `config.ignoredElements`) is left untouched.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { typeset } = require('typeset-napi');
///
/// typeset('<p>"Hello," said the fox.</p>');
/// // '<p>“Hello,” said the fox.</p>'
/// ```
#[napi]
pub fn typeset(html: String, config: Option<TypesetConfig>) -> napi::Result<String> {
    let options = to_html_options(config)?;
    typeset_html::typeset_html(&html, &options).map_err(to_napi_error)
}

/// Typesets a bare text fragment with no markup awareness.
#[napi(js_name = "typesetText")]
pub fn typeset_text(text: String, config: Option<TypesetConfig>) -> napi::Result<String> {
    let options = to_html_options(config)?;
    Ok(Typesetter::new(&options.typeset).transform(&text))
}

/// Renders GitHub Flavored Markdown to HTML and typesets the result.
#[napi(js_name = "typesetMarkdown")]
pub fn typeset_markdown(markdown: String, config: Option<TypesetConfig>) -> napi::Result<String> {
    let options = to_html_options(config)?;
    typeset_html::typeset_markdown(&markdown, &options).map_err(to_napi_error)
}

/// Typesets multiple documents in parallel.
///
/// Each input is processed independently; failures are reported per input
/// in `error` unless `continueOnError` is false, in which case processing
/// stops (sequentially) at the first failure.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { typesetBatch } = require('typeset-napi');
///
/// const inputs = [
///   { id: 'a.html', source: '<p>"a" -- b</p>' },
///   { id: 'b.md', source: '"b"...', format: 'Markdown' },
/// ];
///
/// const result = typesetBatch(inputs, { continueOnError: true });
/// console.log(`Processed ${result.stats.total} files in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "typesetBatch")]
pub fn typeset_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let html_options = to_html_options(opts.config)?;
    let typesetter = Typesetter::new(&html_options.typeset);

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let outcome = batch::process_one(&input, &html_options, &typesetter);
        if outcome.is_ok() {
            succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            failed.fetch_add(1, Ordering::Relaxed);
        }
        BatchResult::from_outcome(input.id, outcome)
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                log::debug!("stopping batch after first failure");
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, source: &str, format: InputFormat) -> BatchInput {
        BatchInput {
            id: id.to_string(),
            source: source.to_string(),
            format: Some(format),
        }
    }

    fn bad_names() -> Option<TypesetConfig> {
        Some(TypesetConfig {
            ignored_elements: Some(vec!["not a tag".to_string()]),
            ..TypesetConfig::default()
        })
    }

    #[test]
    fn batch_keeps_input_order_and_counts() {
        let inputs = (0..64)
            .map(|i| input(&format!("doc-{i}"), "<p>'a' -- b</p>", InputFormat::Html))
            .collect();
        let result = typeset_batch(
            inputs,
            Some(BatchOptions {
                max_threads: Some(2),
                ..BatchOptions::default()
            }),
        )
        .unwrap();

        let ids: Vec<_> = result.results.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<_> = (0..64).map(|i| format!("doc-{i}")).collect();
        assert_eq!(ids, expected);
        assert!(result.results.iter().all(|r| {
            r.output.as_deref() == Some("<p>‘a’\u{200A}—\u{200A}b</p>") && r.error.is_none()
        }));
        assert_eq!(result.stats.total, 64);
        assert_eq!(result.stats.succeeded, 64);
        assert_eq!(result.stats.failed, 0);
    }

    #[test]
    fn batch_reports_errors_per_document() {
        let inputs = vec![
            input("html", "<p>x</p>", InputFormat::Html),
            input("text", "a...", InputFormat::Text),
            input("md", "x", InputFormat::Markdown),
        ];
        let result = typeset_batch(
            inputs,
            Some(BatchOptions {
                config: bad_names(),
                ..BatchOptions::default()
            }),
        )
        .unwrap();

        assert_eq!(result.results.len(), 3);
        assert!(result.results[0].error.as_deref().unwrap().contains("Invalid options"));
        assert_eq!(result.results[1].output.as_deref(), Some("a…"));
        assert!(result.results[2].error.is_some());
        assert_eq!(result.stats.succeeded, 1);
        assert_eq!(result.stats.failed, 2);
    }

    #[test]
    fn batch_stops_at_first_failure_when_asked() {
        let inputs = vec![
            input("first", "a...", InputFormat::Text),
            input("broken", "<p>x</p>", InputFormat::Html),
            input("skipped", "b...", InputFormat::Text),
        ];
        let result = typeset_batch(
            inputs,
            Some(BatchOptions {
                continue_on_error: Some(false),
                config: bad_names(),
                ..BatchOptions::default()
            }),
        )
        .unwrap();

        let ids: Vec<_> = result.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "broken"]);
        assert_eq!(result.stats.total, 3);
        assert_eq!(result.stats.succeeded, 1);
        assert_eq!(result.stats.failed, 1);
    }

    #[test]
    fn invalid_config_fails_the_whole_batch() {
        let err = typeset_batch(
            vec![input("doc", "x", InputFormat::Text)],
            Some(BatchOptions {
                config: Some(TypesetConfig {
                    em_dash_replacement: Some("quadruple".to_string()),
                    ..TypesetConfig::default()
                }),
                ..BatchOptions::default()
            }),
        )
        .unwrap_err();
        assert!(err.reason.contains("quadruple"));
    }
}
