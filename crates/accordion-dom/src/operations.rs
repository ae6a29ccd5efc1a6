//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    /// Inserting a node under itself or one of its descendants
    #[error("Hierarchy request error: {child} cannot be appended to {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    /// Element sits in a collapsed (aria-hidden) region and is not rendered
    #[error("Node {0} is not focusable")]
    NotFocusable(NodeId),

    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),
}
