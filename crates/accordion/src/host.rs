//! In-memory host
//!
//! [`DomAccess`] over an `accordion-dom` document, plus [`Page`], which
//! dispatches clicks and key presses through the document's listener table
//! and runs the browser default actions the accordion relies on.

use accordion_a11y::Key;
use accordion_dom::{Document, DomError, EventKind, InputEvent, NodeId};

use crate::{Accordion, Config, DomAccess, EventOutcome, EventType, InstanceId, ListenerRoute, Result, UiEvent};

/// Document whose listeners carry accordion routes
pub type HostDocument = Document<ListenerRoute>;

impl From<EventType> for EventKind {
    fn from(event: EventType) -> Self {
        match event {
            EventType::Click => EventKind::Click,
            EventType::KeyDown => EventKind::KeyDown,
        }
    }
}

impl DomAccess for Document<ListenerRoute> {
    type Element = NodeId;
    type Error = DomError;

    fn document_element(&self) -> Option<NodeId> {
        Some(Document::document_element(self)).filter(|id| id.is_valid())
    }

    fn query_elements(&self, scope: Option<NodeId>, selector: &str) -> std::result::Result<Vec<NodeId>, DomError> {
        self.query_selector_all(scope.unwrap_or(self.tree().root()), selector)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        Document::contains(self, ancestor, node)
    }

    fn get_attribute(&self, element: NodeId, name: &str) -> Option<String> {
        Document::get_attribute(self, element, name).map(str::to_string)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Err(err) = Document::set_attribute(self, element, name, value) {
            tracing::warn!("set {}={:?} on {}: {}", name, value, element, err);
        }
    }

    fn set_class(&mut self, element: NodeId, class: &str, on: bool) {
        if let Err(err) = self.toggle_class(element, class, Some(on)) {
            tracing::warn!("class {:?} on {}: {}", class, element, err);
        }
    }

    fn add_event_listener(&mut self, element: NodeId, event: EventType, route: ListenerRoute) {
        Document::add_event_listener(self, element, event.into(), route);
    }

    fn focus(&mut self, element: NodeId) {
        match Document::focus(self, element) {
            Ok(()) => {}
            // Closing a panel hides its label; focus stays on the header
            Err(DomError::NotFocusable(_)) => tracing::debug!("{} is collapsed, focus unchanged", element),
            Err(err) => tracing::warn!("focus {}: {}", element, err),
        }
    }
}

impl UiEvent<NodeId> for InputEvent {
    fn target(&self) -> NodeId {
        self.target
    }

    fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    fn prevent_default(&mut self) {
        InputEvent::prevent_default(self);
    }
}

/// A document together with the accordions wired into it
#[derive(Debug)]
pub struct Page {
    document: HostDocument,
    accordions: Vec<Accordion<NodeId>>,
}

impl Page {
    pub fn new(document: HostDocument) -> Self {
        Self {
            document,
            accordions: Vec::new(),
        }
    }

    pub fn document(&self) -> &HostDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut HostDocument {
        &mut self.document
    }

    /// Initialize accordions on this page. On error nothing is registered.
    pub fn create_accordion(&mut self, selector: Option<&str>, config: Config) -> Result<InstanceId> {
        let accordion = Accordion::create(&mut self.document, selector, config)?;
        let id = accordion.instance();
        self.accordions.push(accordion);
        Ok(id)
    }

    pub fn accordion(&self, id: InstanceId) -> Option<&Accordion<NodeId>> {
        self.accordions.iter().find(|a| a.instance() == id)
    }

    /// Run every listener on the event's propagation path. Default actions
    /// are not performed; see [`click`](Self::click) and
    /// [`key_down`](Self::key_down).
    pub fn dispatch(&mut self, mut event: InputEvent) -> InputEvent {
        for (node, route) in self.document.propagation_path(&event) {
            event.current_target = Some(node);

            let Some(accordion) = self.accordions.iter_mut().find(|a| a.instance() == route.instance) else {
                continue;
            };
            let outcome = accordion.handle_event(&mut self.document, route, &mut event);
            if outcome != EventOutcome::Ignored {
                tracing::debug!("{} on {} at {}: {:?}", event.kind.as_str(), event.target, node, outcome);
            }
        }
        event.current_target = None;
        event
    }

    /// Mouse click on `target`. A focusable target takes focus before the
    /// click listeners run.
    pub fn click(&mut self, target: NodeId) -> InputEvent {
        if self.document.is_sequentially_focusable(target) {
            DomAccess::focus(&mut self.document, target);
        }
        self.dispatch(InputEvent::click(target))
    }

    /// Key press on `target`. Unless a listener prevented it, Enter/Space on
    /// a `<button>` clicks it and Tab moves focus forward.
    pub fn key_down(&mut self, target: NodeId, key: Key) -> InputEvent {
        let event = self.dispatch(InputEvent::key_down(target, key));
        if event.is_default_prevented() {
            return event;
        }

        match event.key.as_ref() {
            Some(key) if key.is_activation() && self.document.tag_name(target) == Some("button") => {
                self.click(target);
            }
            Some(Key::Tab) => {
                self.document.focus_sequential(false);
            }
            _ => {}
        }
        event
    }

    /// Key press on the focused element (the body when nothing has focus)
    pub fn press(&mut self, key: Key) -> InputEvent {
        let target = self.document.focused().unwrap_or(self.document.body());
        self.key_down(target, key)
    }

    /// Tab or Shift+Tab. Returns the element holding focus afterwards.
    pub fn tab(&mut self, reverse: bool) -> Option<NodeId> {
        if !reverse {
            self.press(Key::Tab);
            return self.document.focused();
        }

        let target = self.document.focused().unwrap_or(self.document.body());
        let event = self.dispatch(InputEvent::key_down(target, Key::Tab));
        if !event.is_default_prevented() {
            self.document.focus_sequential(true);
        }
        self.document.focused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `<div.accordion>` with `items` button headers and labelled panels
    fn page(items: usize) -> (Page, NodeId, Vec<(NodeId, NodeId, NodeId)>) {
        let mut doc = HostDocument::new();
        let body = doc.body();
        let container = doc.append_element(body, "div", "accordion").unwrap();
        let mut pairs = Vec::new();
        for _ in 0..items {
            let header = doc.append_element(container, "button", "accordion-header").unwrap();
            let panel = doc.append_element(container, "div", "accordion-content").unwrap();
            let label = doc.append_element(panel, "h2", "accordion-label").unwrap();
            pairs.push((header, panel, label));
        }
        (Page::new(doc), container, pairs)
    }

    #[test]
    fn test_dom_access_writes_through() {
        let (mut page, container, pairs) = page(1);
        let doc = page.document_mut();
        let (header, _, _) = pairs[0];

        assert_eq!(DomAccess::query_elements(&*doc, Some(container), ".accordion-header").unwrap(), vec![header]);
        DomAccess::set_class(&mut *doc, header, "is-active", true);
        DomAccess::set_attribute(&mut *doc, header, "aria-expanded", "true");
        assert_eq!(DomAccess::get_attribute(&*doc, header, "aria-expanded").as_deref(), Some("true"));
        assert_eq!(doc.get_attribute(header, "class"), Some("accordion-header is-active"));

        DomAccess::set_class(&mut *doc, header, "is-active", false);
        assert!(!doc.has_class(header, "is-active"));
        assert!(DomAccess::query_elements(&*doc, None, "..").is_err());
    }

    #[test]
    fn test_click_dispatch_toggles() {
        let (mut page, _, pairs) = page(2);
        let id = page.create_accordion(Some(".accordion"), Config::new()).unwrap();
        let (header, panel, label) = pairs[0];

        let event = page.click(header);
        assert!(event.is_default_prevented());
        assert_eq!(page.document().get_attribute(header, "aria-expanded"), Some("true"));
        assert_eq!(page.document().get_attribute(panel, "aria-hidden"), Some("false"));
        assert_eq!(page.document().focused(), Some(label));
        assert_eq!(page.accordion(id).and_then(|a| a.is_open(0, 0)), Some(true));
    }

    #[test]
    fn test_click_focuses_button_before_toggle() {
        let (mut page, container, pairs) = page(1);
        page.create_accordion(Some(".accordion"), Config::new()).unwrap();
        let (header, _, label) = pairs[0];

        page.click(header);
        assert_eq!(page.document().focused(), Some(label));

        // Closing hides the label, so focus stays on the clicked header
        page.click(header);
        assert_eq!(page.document().get_attribute(header, "aria-expanded"), Some("false"));
        assert_eq!(page.document().focused(), Some(header));

        page.click(container);
        assert_eq!(page.document().focused(), Some(header));
    }

    #[test]
    fn test_enter_on_button_clicks() {
        let (mut page, _, pairs) = page(1);
        page.create_accordion(Some(".accordion"), Config::new()).unwrap();
        let (header, panel, _) = pairs[0];

        page.key_down(header, Key::Enter);
        assert_eq!(page.document().get_attribute(panel, "aria-hidden"), Some("false"));
        page.key_down(header, Key::Space);
        assert_eq!(page.document().get_attribute(panel, "aria-hidden"), Some("true"));
    }

    #[test]
    fn test_arrow_keys_are_consumed() {
        let (mut page, _, pairs) = page(3);
        page.create_accordion(Some(".accordion"), Config::new()).unwrap();

        let event = page.key_down(pairs[0].0, Key::ArrowUp);
        assert!(event.is_default_prevented());
        assert_eq!(page.document().focused(), Some(pairs[2].0));

        let event = page.press(Key::Home);
        assert!(event.is_default_prevented());
        assert_eq!(page.document().focused(), Some(pairs[0].0));
    }

    #[test]
    fn test_tab_walks_visible_focusables() {
        let (mut page, _, pairs) = page(2);
        page.create_accordion(Some(".accordion"), Config::new()).unwrap();

        assert_eq!(page.tab(false), Some(pairs[0].0));
        assert_eq!(page.tab(false), Some(pairs[1].0));
        assert_eq!(page.tab(true), Some(pairs[0].0));
    }
}
