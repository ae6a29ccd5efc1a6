//! Document - High-level document API
//!
//! Wraps the tree with element helpers, selector queries, a listener table
//! and the focused element. `L` is the listener payload chosen by whoever
//! registers listeners.

use accordion_a11y::{AriaAttributes, TabIndex, aria};

use crate::{DomError, DomResult, DomTree, ElementData, EventKind, InputEvent, Listener, NodeId, Selector};

/// Tags that take part in sequential focus navigation without a tabindex
const NATIVELY_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea", "summary"];

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document<L = ()> {
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    listeners: Vec<Listener<L>>,
    focused: Option<NodeId>,
}

impl<L> Document<L> {
    /// Create a document with `<html><head/><body/></html>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        let root = tree.root();

        // Freshly created nodes cannot form a cycle
        let _ = tree.append_child(root, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            body_element: body,
            listeners: Vec::new(),
            focused: None,
        }
    }

    /// Create an empty document (no structure). Call [`finalize`](Self::finalize)
    /// after filling the tree.
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            listeners: Vec::new(),
            focused: None,
        }
    }

    /// Locate `<html>` and `<body>` after the tree was built externally
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self
            .tree
            .children(root)
            .find(|(_, n)| n.is_element())
            .map_or(NodeId::NONE, |(id, _)| id);
        self.body_element = self
            .tree
            .children(self.html_element)
            .find(|(_, n)| n.as_element().is_some_and(|e| e.tag == "body"))
            .map_or(self.html_element, |(id, _)| id);
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    fn element(&self, node: NodeId) -> DomResult<&ElementData> {
        self.tree
            .get(node)
            .ok_or(DomError::NotFound(node))?
            .as_element()
            .ok_or(DomError::NotAnElement(node))
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut ElementData> {
        self.tree
            .get_mut(node)
            .ok_or(DomError::NotFound(node))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(node))
    }

    /// Create an element with the given class attribute and append it
    pub fn append_element(&mut self, parent: NodeId, tag: &str, class: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        if !class.is_empty() {
            self.element_mut(id)?.set_attr("class", class);
        }
        self.tree.append_child(parent, id)
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).ok().map(|e| e.tag.as_str())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).ok()?.get_attr(name)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    /// ARIA role and states of an element
    pub fn aria(&self, node: NodeId) -> AriaAttributes {
        self.element(node).map_or_else(
            |_| AriaAttributes::new(),
            |e| AriaAttributes::from_attributes(e.attributes().iter().map(|a| (a.name.as_str(), a.value.as_str()))),
        )
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_ok_and(|e| e.has_class(class))
    }

    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> DomResult<bool> {
        Ok(self.element_mut(node)?.toggle_class(class, force))
    }

    /// `ancestor` contains `node` (inclusive, like `Node.contains`)
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.is_inclusive_ancestor(ancestor, node)
    }

    /// Elements under `scope` matching `selector`, in document order
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .tree
            .descendants(scope)
            .into_iter()
            .filter(|&id| selector.matches(&self.tree, id))
            .collect())
    }

    pub fn query_selector(&self, scope: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .tree
            .descendants(scope)
            .into_iter()
            .find(|&id| selector.matches(&self.tree, id)))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&n| self.element(n).is_ok_and(|e| e.id() == Some(id)))
    }

    /// Register a listener
    pub fn add_event_listener(&mut self, target: NodeId, kind: EventKind, payload: L) {
        tracing::debug!("{} listener added on {}", kind.as_str(), target);
        self.listeners.push(Listener { target, kind, payload });
    }

    pub fn listeners(&self) -> &[Listener<L>] {
        &self.listeners
    }

    /// Listeners an event reaches, in bubbling order (target first)
    pub fn propagation_path(&self, event: &InputEvent) -> Vec<(NodeId, L)>
    where
        L: Clone,
    {
        let path = if event.bubbles {
            self.tree.ancestors_inclusive(event.target)
        } else {
            vec![event.target]
        };

        let listeners = &self.listeners;
        let kind = event.kind;
        path.into_iter()
            .flat_map(move |node| {
                listeners
                    .iter()
                    .filter(move |l| l.target == node && l.kind == kind)
                    .map(move |l| (node, l.payload.clone()))
            })
            .collect()
    }

    /// Move input focus. Elements inside a collapsed region cannot take
    /// focus, and focus stays where it was.
    pub fn focus(&mut self, node: NodeId) -> DomResult<()> {
        self.element(node)?;
        if self.is_aria_hidden(node) {
            return Err(DomError::NotFocusable(node));
        }
        tracing::debug!("focus -> {}", node);
        self.focused = Some(node);
        Ok(())
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Hidden from assistive technology by an inclusive ancestor
    pub fn is_aria_hidden(&self, node: NodeId) -> bool {
        self.tree
            .ancestors_inclusive(node)
            .into_iter()
            .any(|n| self.get_attribute(n, aria::ARIA_HIDDEN) == Some("true"))
    }

    /// Reachable by Tab: natively focusable or tabindex >= 0, and not inside
    /// a collapsed (aria-hidden) region
    pub fn is_sequentially_focusable(&self, node: NodeId) -> bool {
        let Ok(elem) = self.element(node) else {
            return false;
        };
        let tabbable = match elem.get_attr("tabindex").map(TabIndex::parse) {
            Some(Ok(index)) => index.is_sequential(),
            _ => {
                (NATIVELY_FOCUSABLE.contains(&elem.tag.as_str())
                    || (elem.tag == "a" && elem.get_attr("href").is_some()))
                    && elem.get_attr("disabled").is_none()
            }
        };
        tabbable && !self.is_aria_hidden(node)
    }

    /// Tab / Shift+Tab default action. Returns the newly focused element, or
    /// `None` when focus would leave the document (focus is kept).
    pub fn focus_sequential(&mut self, reverse: bool) -> Option<NodeId> {
        let order = self.tree.descendants(self.tree.root());
        let position = self.focused.and_then(|f| order.iter().position(|&n| n == f));

        let target = if reverse {
            let end = position.unwrap_or(order.len());
            order[..end].iter().rev().copied().find(|&n| self.is_sequentially_focusable(n))
        } else {
            let start = position.map_or(0, |p| p + 1);
            order[start..].iter().copied().find(|&n| self.is_sequentially_focusable(n))
        }?;

        self.focused = Some(target);
        Some(target)
    }
}

impl<L> Default for Document<L> {
    fn default() -> Self {
        Self::new()
    }
}
