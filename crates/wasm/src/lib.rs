use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use typeset_core::{TypesetError, Typesetter};
use typeset_html::{DEFAULT_IGNORED_ELEMENTS, HtmlOptions};

// ============================================================================
// Config
// ============================================================================

/// Reads options from a plain JS object.
///
/// Accepts the same shape as the JSON options: `quotes`, `punctuation` and
/// `spaces` may each be `true`, `false` or an options object, and
/// `ignoredElements` replaces the default ignored set. `undefined` and
/// `null` select the defaults.
fn parse_config(config: JsValue) -> Result<HtmlOptions, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(HtmlOptions::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| to_js_error(TypesetError::InvalidOptions(e.to_string())))
}

fn to_js_error(err: TypesetError) -> JsError {
    JsError::new(&err.to_string())
}

// ============================================================================
// Typeset API
// ============================================================================

/// Typesets the text nodes of an HTML document or fragment.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { typeset } from './typeset_wasm';
///
/// typeset('<p>"Hello," said the fox.</p>');
/// // '<p>“Hello,” said the fox.</p>'
///
/// typeset('<p>1880-1912</p>', { spaces: { enDashSpacing: 'closed' } });
/// // '<p>1880–1912</p>'
/// ```
#[wasm_bindgen]
pub fn typeset(html: &str, config: JsValue) -> Result<String, JsError> {
    let options = parse_config(config)?;
    typeset_html::typeset_html(html, &options).map_err(to_js_error)
}

/// Typesets a bare text fragment with no markup awareness.
///
/// `ignoredElements` is accepted but has no effect here.
#[wasm_bindgen(js_name = typesetText)]
pub fn typeset_text(text: &str, config: JsValue) -> Result<String, JsError> {
    let options = parse_config(config)?;
    Ok(Typesetter::new(&options.typeset).transform(text))
}

/// Renders GitHub Flavored Markdown to HTML and typesets the result.
#[wasm_bindgen(js_name = typesetMarkdown)]
pub fn typeset_markdown(markdown: &str, config: JsValue) -> Result<String, JsError> {
    let options = parse_config(config)?;
    typeset_html::typeset_markdown(markdown, &options).map_err(to_js_error)
}

/// Returns the element names skipped when `ignoredElements` is not given.
#[wasm_bindgen(js_name = defaultIgnoredElements)]
pub fn default_ignored_elements() -> js_sys::Array {
    DEFAULT_IGNORED_ELEMENTS
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}
