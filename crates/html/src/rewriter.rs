//! Rewrites the text nodes of an HTML document with the typesetting engine.
//!
//! Text is handed to the engine one whole text node at a time. Chunks of a
//! node are buffered until lol_html reports the last one, so rules that look
//! ahead always see the complete node. Nothing inside an ignored element
//! (`code`, `pre`, `script`, `style` by default) reaches the engine.
//!
//! Character references in ordinary text are decoded before the engine sees
//! the node, so `&#x27;` and `'` are typeset alike. A node the engine leaves
//! unchanged is emitted exactly as written.

use crate::options::HtmlOptions;
use lol_html::html_content::{ContentType, EndTag, TextChunk, TextType};
use lol_html::{
    ElementContentHandlers, EndTagHandler, HandlerResult, RewriteStrSettings, Selector, doc_text,
    element, rewrite_str,
};
use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;
use typeset_core::{TypesetError, Typesetter};

/// Typesets every text node of `html` outside the ignored elements.
///
/// Markup, attributes, comments and character references that the rules do
/// not recognize come out byte for byte as they went in.
///
/// ```
/// use typeset_html::{HtmlOptions, typeset_html};
///
/// let out = typeset_html(r#"<p>"Hello," said the fox.</p>"#, &HtmlOptions::default()).unwrap();
/// assert_eq!(out, "<p>“Hello,” said the fox.</p>");
/// ```
pub fn typeset_html(html: &str, options: &HtmlOptions) -> Result<String, TypesetError> {
    let ignored = options.ignored_tag_names()?;
    if options.typeset.is_noop() {
        log::debug!("all typeset stages disabled, returning input unchanged");
        return Ok(html.to_string());
    }

    let typesetter = Typesetter::new(&options.typeset);
    let depth = Rc::new(Cell::new(0usize));
    let element_content_handlers = ignored_element_handlers(&ignored, &depth);

    let open_ignored = Rc::clone(&depth);
    let mut text_node = TextNode::default();
    let settings = RewriteStrSettings {
        element_content_handlers,
        document_content_handlers: vec![doc_text!(move |chunk| {
            text_node.push(chunk, depth.get() > 0, &typesetter)
        })],
        ..RewriteStrSettings::default()
    };

    let output =
        rewrite_str(html, settings).map_err(|err| TypesetError::Rewrite(err.to_string()))?;
    if open_ignored.get() > 0 {
        log::warn!(
            "{} ignored element(s) never closed; text after them was left unchanged",
            open_ignored.get()
        );
    }
    Ok(output)
}

/// Handlers that raise `depth` while the rewriter is inside an ignored element.
fn ignored_element_handlers(
    names: &[String],
    depth: &Rc<Cell<usize>>,
) -> Vec<(Cow<'static, Selector>, ElementContentHandlers<'static>)> {
    names
        .iter()
        .map(|name| {
            let depth = Rc::clone(depth);
            element!(name.as_str(), move |el| {
                let tag = el.tag_name();
                // Void and self-closing elements hold no text to protect.
                if let Some(handlers) = el.end_tag_handlers() {
                    log::trace!("entering verbatim <{tag}>");
                    depth.set(depth.get() + 1);
                    let depth = Rc::clone(&depth);
                    let leave: EndTagHandler<'static> =
                        Box::new(move |_end: &mut EndTag<'_>| -> HandlerResult {
                            depth.set(depth.get().saturating_sub(1));
                            Ok(())
                        });
                    handlers.push(leave);
                }
                Ok(())
            })
        })
        .collect()
}

/// Buffers the chunks of one text node.
#[derive(Default)]
struct TextNode {
    pending: String,
    split: bool,
}

impl TextNode {
    fn push(
        &mut self,
        chunk: &mut TextChunk<'_>,
        verbatim: bool,
        typesetter: &Typesetter,
    ) -> HandlerResult {
        if verbatim {
            return Ok(());
        }

        self.pending.push_str(chunk.as_str());
        if !chunk.last_in_text_node() {
            // Re-emitted with the last chunk.
            chunk.remove();
            self.split = true;
            return Ok(());
        }

        let text = std::mem::take(&mut self.pending);
        let split = std::mem::take(&mut self.split);
        // Script and style text is raw: it holds no character references.
        let escaped = matches!(chunk.text_type(), TextType::Data | TextType::RCData);
        let rewritten = if escaped {
            let decoded = html_escape::decode_html_entities(&text);
            match typesetter.transform_cow(&decoded) {
                Cow::Owned(out) => Some(html_escape::encode_text(&out).into_owned()),
                Cow::Borrowed(_) => None,
            }
        } else {
            match typesetter.transform_cow(&text) {
                Cow::Owned(out) => Some(out),
                Cow::Borrowed(_) => None,
            }
        };

        match rewritten {
            Some(out) => chunk.replace(&out, ContentType::Html),
            None if split => chunk.replace(&text, ContentType::Html),
            None => {}
        }
        Ok(())
    }
}
