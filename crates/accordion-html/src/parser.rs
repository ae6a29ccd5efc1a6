//! HTML5 Parser implementation
//!
//! Parses with html5ever into its RcDom, then copies the result into the
//! arena DOM.

use accordion_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser {
    /// Keep text nodes that contain only whitespace
    keep_whitespace: bool,
}

impl HtmlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    /// Parse HTML string into a Document
    pub fn parse<L>(&self, html: &str) -> Result<Document<L>, HtmlError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty();
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node and its subtree
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), HtmlError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if self.keep_whitespace || !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, &attr.value);
                    }
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            // Doctype and processing instructions carry nothing the widget needs
            _ => {}
        }
        Ok(())
    }
}
