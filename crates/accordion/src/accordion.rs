//! Accordion handle
//!
//! Owns every group discovered by one initialization call and routes host
//! events back to the toggle engine and the keyboard navigator.

use crate::{
    AccordionError, AccordionGroup, AccordionItem, AccordionRegistry, Config, DomAccess,
    InstanceId, KeyboardNavigator, ListenerRoute, Result, RouteAction, ToggleEngine, UiEvent,
};

/// What handling a routed event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome<E> {
    Toggled { group: usize, item: usize, open: bool },
    Focused(E),
    Ignored,
}

/// All accordion groups wired by one [`create_accordion`] call
#[derive(Debug)]
pub struct Accordion<E> {
    instance: InstanceId,
    groups: Vec<AccordionGroup<E>>,
    config: Config,
}

/// Initialize every accordion area matching `selector`
pub fn create_accordion<D: DomAccess>(
    dom: &mut D,
    selector: Option<&str>,
    config: Config,
) -> Result<Accordion<D::Element>> {
    Accordion::create(dom, selector, config)
}

impl<E: Copy + Eq + std::fmt::Debug> Accordion<E> {
    /// See [`AccordionRegistry::initialize`]
    pub fn create<D: DomAccess<Element = E>>(dom: &mut D, selector: Option<&str>, config: Config) -> Result<Self> {
        AccordionRegistry::initialize(dom, selector, config)
    }

    pub(crate) fn from_parts(instance: InstanceId, groups: Vec<AccordionGroup<E>>, config: Config) -> Self {
        Self { instance, groups, config }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn groups(&self) -> &[AccordionGroup<E>] {
        &self.groups
    }

    pub fn item(&self, group: usize, item: usize) -> Option<&AccordionItem<E>> {
        self.groups.get(group)?.items.get(item)
    }

    pub fn is_open(&self, group: usize, item: usize) -> Option<bool> {
        self.item(group, item).map(AccordionItem::is_open)
    }

    /// Every header tagged with its group index, in group order
    pub fn headers(&self) -> Vec<(usize, E)> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().map(move |i| (g.group_index, i.header)))
            .collect()
    }

    /// Toggle one item as if its header had been activated
    pub fn toggle<D: DomAccess<Element = E>>(&mut self, dom: &mut D, group: usize, item: usize) -> Result<bool> {
        let entry = self
            .groups
            .get_mut(group)
            .and_then(|g| g.items.get_mut(item))
            .ok_or(AccordionError::UnknownItem { group, item })?;
        Ok(ToggleEngine::new(&self.config.settings, &mut self.config.callbacks).toggle(dom, entry))
    }

    /// Run the action behind a listener this accordion registered.
    ///
    /// Routes belonging to another instance are ignored.
    pub fn handle_event<D, Ev>(&mut self, dom: &mut D, route: ListenerRoute, event: &mut Ev) -> EventOutcome<E>
    where
        D: DomAccess<Element = E>,
        Ev: UiEvent<E>,
    {
        if route.instance != self.instance {
            return EventOutcome::Ignored;
        }

        match route.action {
            RouteAction::Toggle { group, item } => {
                event.prevent_default();
                match self.toggle(dom, group, item) {
                    Ok(open) => EventOutcome::Toggled { group, item, open },
                    Err(err) => {
                        tracing::warn!("{}: stale route: {}", self.instance, err);
                        EventOutcome::Ignored
                    }
                }
            }
            RouteAction::Navigate { group } => {
                let Some(group) = self.groups.get(group) else {
                    return EventOutcome::Ignored;
                };
                // Keydowns bubbling out of nested groups or panel content
                // are not ours
                let headers = group.headers();
                if !headers.contains(&event.target()) {
                    return EventOutcome::Ignored;
                }
                match KeyboardNavigator::navigate(dom, &headers, event) {
                    Some(target) => EventOutcome::Focused(target),
                    None => EventOutcome::Ignored,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDom, FakeEvent};
    use accordion_a11y::Key;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn route_for(dom: &FakeDom, element: usize) -> ListenerRoute {
        dom.listeners
            .iter()
            .find(|l| l.0 == element)
            .map(|l| l.2)
            .unwrap()
    }

    #[test]
    fn test_click_route_toggles_and_prevents_default() {
        let mut dom = FakeDom::new();
        let (_, pairs) = dom.group(0, 2);
        let mut accordion = create_accordion(&mut dom, Some(".accordion"), Config::new()).unwrap();

        let header = pairs[1].0;
        let route = route_for(&dom, header);
        let mut click = FakeEvent::click(header);
        let outcome = accordion.handle_event(&mut dom, route, &mut click);

        assert_eq!(outcome, EventOutcome::Toggled { group: 0, item: 1, open: true });
        assert!(click.prevented);
        assert_eq!(accordion.is_open(0, 1), Some(true));
        assert_eq!(accordion.is_open(0, 0), Some(false));
        assert_eq!(dom.focused, Some(pairs[1].2));
    }

    #[test]
    fn test_navigate_route_ignores_foreign_targets() {
        let mut dom = FakeDom::new();
        let (container, pairs) = dom.group(0, 2);
        let mut accordion = create_accordion(&mut dom, Some(".accordion"), Config::new()).unwrap();
        let route = route_for(&dom, container);

        let mut from_label = FakeEvent::key_down(pairs[0].2, Key::ArrowDown);
        assert_eq!(accordion.handle_event(&mut dom, route, &mut from_label), EventOutcome::Ignored);
        assert!(!from_label.prevented);

        let mut from_header = FakeEvent::key_down(pairs[0].0, Key::ArrowDown);
        assert_eq!(
            accordion.handle_event(&mut dom, route, &mut from_header),
            EventOutcome::Focused(pairs[1].0)
        );
        assert!(from_header.prevented);
    }

    #[test]
    fn test_foreign_instance_is_ignored() {
        let mut dom = FakeDom::new();
        let (_, pairs) = dom.group(0, 1);
        let mut first = create_accordion(&mut dom, Some(".accordion"), Config::new()).unwrap();
        let second = create_accordion(&mut dom, Some(".accordion"), Config::new()).unwrap();
        assert_ne!(first.instance(), second.instance());

        let foreign = ListenerRoute {
            instance: second.instance(),
            action: RouteAction::Toggle { group: 0, item: 0 },
        };
        let mut click = FakeEvent::click(pairs[0].0);
        assert_eq!(first.handle_event(&mut dom, foreign, &mut click), EventOutcome::Ignored);
        assert_eq!(first.is_open(0, 0), Some(false));
    }

    #[test]
    fn test_programmatic_toggle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (open_log, close_log) = (Rc::clone(&log), Rc::clone(&log));
        let config = Config::new()
            .on_open(move || open_log.borrow_mut().push("open"))
            .on_close(move || close_log.borrow_mut().push("close"));

        let mut dom = FakeDom::new();
        let (_, pairs) = dom.group(0, 2);
        let mut accordion = create_accordion(&mut dom, Some(".accordion"), config).unwrap();

        assert!(accordion.toggle(&mut dom, 0, 0).unwrap());
        assert!(!accordion.toggle(&mut dom, 0, 0).unwrap());
        assert_eq!(*log.borrow(), vec!["open", "close"]);
        assert_eq!(dom.attr(pairs[0].0, "aria-expanded"), Some("false"));

        let err = accordion.toggle(&mut dom, 0, 7).unwrap_err();
        assert!(matches!(err, AccordionError::UnknownItem { group: 0, item: 7 }));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_headers_are_tagged_by_group() {
        let mut dom = FakeDom::new();
        let (_, outer) = dom.group(0, 2);
        let (_, inner) = dom.group(outer[1].1, 1);
        let accordion = create_accordion(&mut dom, Some(".accordion"), Config::new()).unwrap();

        assert_eq!(
            accordion.headers(),
            vec![(0, outer[0].0), (0, outer[1].0), (1, inner[0].0)]
        );
    }
}
