//! Recording DOM for unit tests

use std::collections::BTreeMap;

use accordion_a11y::Key;

use crate::{DomAccess, EventType, ListenerRoute, UiEvent};

#[derive(Debug, thiserror::Error)]
#[error("unsupported selector {0:?}")]
pub struct FakeError(String);

/// Flat element table; element 0 is `<html>`. Elements must be added in
/// document order.
#[derive(Debug)]
pub struct FakeDom {
    parents: Vec<Option<usize>>,
    classes: Vec<Vec<String>>,
    attrs: Vec<BTreeMap<String, String>>,
    pub listeners: Vec<(usize, EventType, ListenerRoute)>,
    pub focused: Option<usize>,
    pub attribute_writes: usize,
}

impl FakeDom {
    pub fn new() -> Self {
        Self {
            parents: vec![None],
            classes: vec![Vec::new()],
            attrs: vec![BTreeMap::new()],
            listeners: Vec::new(),
            focused: None,
            attribute_writes: 0,
        }
    }

    pub fn add(&mut self, parent: usize, class: &str) -> usize {
        self.parents.push(Some(parent));
        self.classes.push(class.split_whitespace().map(String::from).collect());
        self.attrs.push(BTreeMap::new());
        self.parents.len() - 1
    }

    pub fn attr(&self, element: usize, name: &str) -> Option<&str> {
        self.attrs[element].get(name).map(String::as_str)
    }

    pub fn has_class(&self, element: usize, class: &str) -> bool {
        self.classes[element].iter().any(|c| c == class)
    }

    /// Build `container > (header, panel > label)*`, returning
    /// `(container, [(header, panel, label)])`
    pub fn group(&mut self, parent: usize, items: usize) -> (usize, Vec<(usize, usize, usize)>) {
        let container = self.add(parent, "accordion");
        let mut out = Vec::new();
        for _ in 0..items {
            let header = self.add(container, "accordion-header");
            let panel = self.add(container, "accordion-content");
            let label = self.add(panel, "accordion-label");
            out.push((header, panel, label));
        }
        (container, out)
    }
}

impl DomAccess for FakeDom {
    type Element = usize;
    type Error = FakeError;

    fn document_element(&self) -> Option<usize> {
        Some(0)
    }

    fn query_elements(&self, scope: Option<usize>, selector: &str) -> Result<Vec<usize>, FakeError> {
        let class = selector
            .strip_prefix('.')
            .filter(|c| !c.is_empty() && !c.contains([' ', '.', '>']))
            .ok_or_else(|| FakeError(selector.to_string()))?;

        Ok((1..self.parents.len())
            .filter(|&e| scope.is_none_or(|s| s != e && self.contains(s, e)))
            .filter(|&e| self.has_class(e, class))
            .collect())
    }

    fn contains(&self, ancestor: usize, node: usize) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parents[n];
        }
        false
    }

    fn get_attribute(&self, element: usize, name: &str) -> Option<String> {
        self.attr(element, name).map(String::from)
    }

    fn set_attribute(&mut self, element: usize, name: &str, value: &str) {
        self.attribute_writes += 1;
        self.attrs[element].insert(name.to_string(), value.to_string());
    }

    fn set_class(&mut self, element: usize, class: &str, on: bool) {
        let classes = &mut self.classes[element];
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
    }

    fn add_event_listener(&mut self, element: usize, event: EventType, route: ListenerRoute) {
        self.listeners.push((element, event, route));
    }

    fn focus(&mut self, element: usize) {
        self.focused = Some(element);
    }
}

#[derive(Debug)]
pub struct FakeEvent {
    pub target: usize,
    pub key: Option<Key>,
    pub prevented: bool,
}

impl FakeEvent {
    pub fn click(target: usize) -> Self {
        Self { target, key: None, prevented: false }
    }

    pub fn key_down(target: usize, key: Key) -> Self {
        Self { target, key: Some(key), prevented: false }
    }
}

impl UiEvent<usize> for FakeEvent {
    fn target(&self) -> usize {
        self.target
    }

    fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}
