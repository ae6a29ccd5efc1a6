//! DOM capability
//!
//! Everything the accordion needs from its host document. The core never
//! touches a concrete DOM; hosts implement [`DomAccess`] and hand the
//! [`ListenerRoute`]s they were given back to
//! [`Accordion::handle_event`](crate::Accordion::handle_event).

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use accordion_a11y::Key;

/// Events the accordion listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
}

/// Identity of one accordion handle, unique per process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u32);

impl InstanceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accordion#{}", self.0)
    }
}

/// What a registered listener does when its event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAction {
    /// Click on a header: toggle that item
    Toggle { group: usize, item: usize },
    /// Keydown inside a group: roving focus among its headers
    Navigate { group: usize },
}

/// Listener payload: which accordion, which action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerRoute {
    pub instance: InstanceId,
    pub action: RouteAction,
}

/// Host document access.
///
/// Write operations are infallible by contract: the accordion only writes
/// to elements the host returned from [`query_elements`](Self::query_elements).
pub trait DomAccess {
    /// Element handle
    type Element: Copy + Eq + fmt::Debug;
    /// Query failure (bad selector syntax)
    type Error: std::error::Error + Send + Sync + 'static;

    /// `<html>`, if the document has one
    fn document_element(&self) -> Option<Self::Element>;

    /// Elements matching `selector` in document order; descendants of
    /// `scope`, or the whole document for `None`
    fn query_elements(
        &self,
        scope: Option<Self::Element>,
        selector: &str,
    ) -> Result<Vec<Self::Element>, Self::Error>;

    /// `ancestor` is `node` or contains it
    fn contains(&self, ancestor: Self::Element, node: Self::Element) -> bool;

    fn get_attribute(&self, element: Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// Add (`on`) or remove a class token
    fn set_class(&mut self, element: Self::Element, class: &str, on: bool);

    fn add_event_listener(&mut self, element: Self::Element, event: EventType, route: ListenerRoute);

    /// Move input focus
    fn focus(&mut self, element: Self::Element);
}

/// The parts of a dispatched event the accordion reads or changes
pub trait UiEvent<E> {
    fn target(&self) -> E;

    /// Key for keydown events
    fn key(&self) -> Option<&Key>;

    fn prevent_default(&mut self);
}
