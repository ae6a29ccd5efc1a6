//! Accordion HTML loader
//!
//! Builds an `accordion-dom` document from HTML5 markup, so demo pages and
//! test fixtures can be written as plain HTML.

mod parser;

pub use parser::HtmlParser;

use accordion_dom::Document;

/// Parse an HTML string into a document
pub fn parse<L>(html: &str) -> Result<Document<L>, HtmlError> {
    HtmlParser::new().parse(html)
}

/// HTML loading error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build DOM: {0}")]
    Dom(#[from] accordion_dom::DomError),
}
