//! Accordion DOM - in-memory Document Object Model
//!
//! Arena-based element tree with attributes, class lists, simple selector
//! queries, listener tables and focus tracking. Enough of a browser
//! document to host accordion widgets outside a browser.

mod attributes;
mod classlist;
mod document;
mod events;
mod node;
mod operations;
mod selector;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use document::Document;
pub use events::{EventKind, InputEvent, Listener};
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use selector::{Compound, Selector};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
