//! Selector matching
//!
//! Supports compound selectors (`tag`, `*`, `.class`, `#id`), descendant
//! and child combinators, and comma-separated selector lists.

use crate::{DomError, DomResult, DomTree, ElementData, NodeId};

/// One compound selector, e.g. `div.accordion#faq`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// `None` is the universal selector
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
}

impl Compound {
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.tag.as_deref().is_none_or(|t| elem.tag == t)
            && self.ids.iter().all(|id| elem.id() == Some(id.as_str()))
            && self.classes.iter().all(|c| elem.has_class(c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    parts: Vec<Compound>,
    /// `combinators[i]` joins `parts[i]` and `parts[i + 1]`
    combinators: Vec<Combinator>,
}

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

impl Selector {
    pub fn parse(source: &str) -> DomResult<Self> {
        let invalid = || DomError::InvalidSelector(source.to_string());
        let mut alternatives = Vec::new();

        for part in source.split(',') {
            alternatives.push(parse_complex(part).ok_or_else(invalid)?);
        }
        Ok(Self { alternatives })
    }

    /// Check whether `node` matches any alternative
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|c| matches_at(tree, c, c.parts.len() - 1, node))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_complex(source: &str) -> Option<Complex> {
    let mut parts = Vec::new();
    let mut combinators = Vec::new();
    let mut pending: Option<Combinator> = None;
    let mut chars = source.trim().chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            pending.get_or_insert(Combinator::Descendant);
            continue;
        }
        if c == '>' {
            chars.next();
            if parts.is_empty() || pending == Some(Combinator::Child) {
                return None;
            }
            pending = Some(Combinator::Child);
            continue;
        }

        if !parts.is_empty() {
            combinators.push(pending.take()?);
        } else if pending.is_some() {
            return None;
        }

        let mut compound = Compound::default();
        let mut seen_any = false;
        if c == '*' {
            chars.next();
            seen_any = true;
        } else if is_ident_char(c) {
            let mut tag = String::new();
            while let Some(&c) = chars.peek().filter(|c| is_ident_char(**c)) {
                tag.push(c.to_ascii_lowercase());
                chars.next();
            }
            compound.tag = Some(tag);
            seen_any = true;
        }
        while let Some(&marker) = chars.peek().filter(|c| **c == '.' || **c == '#') {
            chars.next();
            let mut name = String::new();
            while let Some(&c) = chars.peek().filter(|c| is_ident_char(**c)) {
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return None;
            }
            if marker == '.' {
                compound.classes.push(name);
            } else {
                compound.ids.push(name);
            }
            seen_any = true;
        }
        if !seen_any {
            return None;
        }
        parts.push(compound);
    }

    if parts.is_empty() || pending == Some(Combinator::Child) {
        return None;
    }
    Some(Complex { parts, combinators })
}

fn matches_at(tree: &DomTree, complex: &Complex, idx: usize, node: NodeId) -> bool {
    let Some(elem) = tree.get(node).and_then(|n| n.as_element()) else {
        return false;
    };
    if !complex.parts[idx].matches(elem) {
        return false;
    }
    if idx == 0 {
        return true;
    }

    match complex.combinators[idx - 1] {
        Combinator::Child => tree
            .parent(node)
            .is_some_and(|p| matches_at(tree, complex, idx - 1, p)),
        Combinator::Descendant => {
            let mut cur = tree.parent(node);
            while let Some(ancestor) = cur {
                if matches_at(tree, complex, idx - 1, ancestor) {
                    return true;
                }
                cur = tree.parent(ancestor);
            }
            false
        }
    }
}
