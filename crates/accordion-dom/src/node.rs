//! DOM Node
//!
//! Nodes link to each other by `NodeId` instead of pointers.

use crate::{DOMTokenList, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    pub fn comment(content: &str) -> Self {
        Self::with_data(NodeData::Comment(content.to_string()))
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    attrs: NamedNodeMap,
    /// Mirrors the `class` attribute
    classes: DOMTokenList,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            classes: DOMTokenList::new(),
        }
    }

    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attrs
    }

    pub fn class_list(&self) -> &DOMTokenList {
        &self.classes
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = DOMTokenList::from_string(value);
        }
        self.attrs.set_attribute(name, value);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Toggle a class token and rewrite the `class` attribute
    pub fn toggle_class(&mut self, class: &str, force: Option<bool>) -> bool {
        let on = self.classes.toggle(class, force);
        let value = self.classes.value();
        self.attrs.set_attribute("class", &value);
        on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attribute_stays_in_sync() {
        let mut elem = ElementData::new("BUTTON");
        assert_eq!(elem.tag, "button");

        elem.set_attr("class", "accordion-header");
        assert!(elem.has_class("accordion-header"));

        elem.toggle_class("is-active", None);
        assert_eq!(elem.get_attr("class"), Some("accordion-header is-active"));

        elem.toggle_class("is-active", None);
        assert_eq!(elem.get_attr("class"), Some("accordion-header"));

        elem.set_attr("class", "accordion-content");
        assert!(!elem.has_class("accordion-header"));
        assert_eq!(elem.class_list().value(), "accordion-content");
    }
}
