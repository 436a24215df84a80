//! Markdown entry point: render GFM to HTML, then typeset the HTML.

use crate::options::HtmlOptions;
use crate::rewriter::typeset_html;
use markdown::message::{Message, Place};
use typeset_core::{SourceLocation, TypesetError};

/// Renders `source` as GitHub Flavored Markdown and typesets the resulting
/// HTML.
///
/// Code spans and fenced blocks render to `code`/`pre` and are skipped like
/// any other ignored element. Raw HTML in the source is escaped, as with
/// markdown-rs's safe defaults.
pub fn typeset_markdown(source: &str, options: &HtmlOptions) -> Result<String, TypesetError> {
    let html = markdown::to_html_with_options(source, &markdown::Options::gfm()).map_err(
        |message| TypesetError::Markdown {
            message: message.reason.clone(),
            location: message_location(&message),
        },
    )?;
    typeset_html(&html, options)
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
