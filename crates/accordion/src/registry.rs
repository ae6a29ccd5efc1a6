//! Accordion registry
//!
//! Discovers accordion areas through the host, pairs headers with panels,
//! runs one-time attribute setup and registers listeners.

use crate::config::Notification;
use crate::{
    Accordion, AccordionError, AccordionGroup, AccordionItem, AttributeSynchronizer, Config,
    DomAccess, EventType, InstanceId, ListenerRoute, Result, RouteAction,
};

pub struct AccordionRegistry;

impl AccordionRegistry {
    /// Wire every accordion area matching `selector`.
    ///
    /// Configuration errors (selector or settings) are logged and returned;
    /// the document is left untouched in that case.
    pub fn initialize<D: DomAccess>(
        dom: &mut D,
        selector: Option<&str>,
        config: Config,
    ) -> Result<Accordion<D::Element>> {
        let result = Self::discover(dom, selector, config);
        if let Err(err) = &result {
            tracing::error!("Accordion: {}", err);
        }
        result
    }

    fn discover<D: DomAccess>(
        dom: &mut D,
        selector: Option<&str>,
        mut config: Config,
    ) -> Result<Accordion<D::Element>> {
        let selector = selector
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AccordionError::MissingTarget)?;
        config.settings.validate()?;

        let roots = query(dom, None, selector)?;
        if roots.is_empty() {
            return Err(AccordionError::TargetNotFound(selector.to_string()));
        }

        let instance = InstanceId::next();
        let mut groups = Vec::with_capacity(roots.len());
        for (group_index, &root) in roots.iter().enumerate() {
            let group = Self::setup_group(dom, &config, &roots, group_index, root)?;
            Self::register_listeners(dom, instance, &group);
            groups.push(group);
        }

        if let Some(html) = dom.document_element() {
            dom.set_class(html, &config.settings.scripted_class, true);
        }

        tracing::info!(
            "{} initialized: {} group(s), {} item(s) for {:?}",
            instance,
            groups.len(),
            groups.iter().map(|g| g.items.len()).sum::<usize>(),
            selector
        );

        config.callbacks.notify(Notification::Create);
        Ok(Accordion::from_parts(instance, groups, config))
    }

    fn setup_group<D: DomAccess>(
        dom: &mut D,
        config: &Config,
        roots: &[D::Element],
        group_index: usize,
        root: D::Element,
    ) -> Result<AccordionGroup<D::Element>> {
        let settings = &config.settings;
        let headers = own_elements(dom, roots, root, &settings.header_class)?;
        let panels = own_elements(dom, roots, root, &settings.content_class)?;

        if headers.len() != panels.len() {
            tracing::warn!(
                "accordion area {} has {} header(s) but {} panel(s); unpaired elements are left inert",
                group_index,
                headers.len(),
                panels.len()
            );
        }

        let sync = AttributeSynchronizer::new(settings);
        let mut items = Vec::with_capacity(headers.len().min(panels.len()));
        for (item_index, (&header, &panel)) in headers.iter().zip(&panels).enumerate() {
            let label = own_elements(dom, roots, panel, &settings.label_class)?.first().copied();
            if label.is_none() {
                tracing::debug!("panel{}-{} has no .{}", group_index, item_index, settings.label_class);
            }
            let item = AccordionItem::new(group_index, item_index, header, panel, label);
            sync.setup(dom, &item);
            items.push(item);
        }

        Ok(AccordionGroup { group_index, root, items })
    }

    fn register_listeners<D: DomAccess>(dom: &mut D, instance: InstanceId, group: &AccordionGroup<D::Element>) {
        let group_index = group.group_index;
        dom.add_event_listener(
            group.root,
            EventType::KeyDown,
            ListenerRoute { instance, action: RouteAction::Navigate { group: group_index } },
        );
        for item in &group.items {
            dom.add_event_listener(
                item.header,
                EventType::Click,
                ListenerRoute {
                    instance,
                    action: RouteAction::Toggle { group: group_index, item: item.item_index },
                },
            );
        }
    }
}

fn query<D: DomAccess>(dom: &D, scope: Option<D::Element>, selector: &str) -> Result<Vec<D::Element>> {
    dom.query_elements(scope, selector)
        .map_err(|source| AccordionError::InvalidSelector {
            selector: selector.to_string(),
            source: Box::new(source),
        })
}

/// Elements under `scope` carrying `class`, minus those inside another
/// accordion area nested below `scope`
fn own_elements<D: DomAccess>(
    dom: &D,
    roots: &[D::Element],
    scope: D::Element,
    class: &str,
) -> Result<Vec<D::Element>> {
    let nested: Vec<D::Element> = roots
        .iter()
        .copied()
        .filter(|&r| r != scope && dom.contains(scope, r))
        .collect();

    Ok(query(dom, Some(scope), &format!(".{class}"))?
        .into_iter()
        .filter(|&el| !nested.iter().any(|&r| dom.contains(r, el)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::testing::FakeDom;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_missing_target_is_configuration_error() {
        let mut dom = FakeDom::new();
        for selector in [None, Some(""), Some("   ")] {
            let err = AccordionRegistry::initialize(&mut dom, selector, Config::new()).unwrap_err();
            assert!(matches!(err, AccordionError::MissingTarget));
            assert!(err.is_configuration());
        }
        assert!(!dom.has_class(0, "js"));
    }

    #[test]
    fn test_zero_matches_is_reported() {
        let mut dom = FakeDom::new();
        let created = Rc::new(Cell::new(false));
        let flag = Rc::clone(&created);
        let config = Config::new().on_create(move || flag.set(true));

        let err = AccordionRegistry::initialize(&mut dom, Some(".accordion"), config).unwrap_err();
        assert!(matches!(err, AccordionError::TargetNotFound(ref s) if s == ".accordion"));
        assert!(!created.get());
        assert!(dom.listeners.is_empty());
    }

    #[test]
    fn test_bad_selector_surfaces_host_error() {
        let mut dom = FakeDom::new();
        dom.group(0, 1);
        let err = AccordionRegistry::initialize(&mut dom, Some("div.accordion"), Config::new()).unwrap_err();
        assert!(matches!(err, AccordionError::InvalidSelector { .. }));
        assert!(err.to_string().contains("div.accordion"));
    }

    #[test]
    fn test_invalid_settings_rejected_before_any_write() {
        let mut dom = FakeDom::new();
        let (_, pairs) = dom.group(0, 1);
        let settings = Settings { header_class: "accordion.header".to_string(), ..Settings::default() };

        let err = AccordionRegistry::initialize(&mut dom, Some(".accordion"), Config::new().with_settings(settings))
            .unwrap_err();
        assert!(matches!(err, AccordionError::InvalidClass { setting: "header_class", .. }));
        assert!(!dom.has_class(0, "js"));
        assert_eq!(dom.attr(pairs[0].0, "id"), None);
        assert!(dom.listeners.is_empty());
    }

    #[test]
    fn test_setup_and_listeners() {
        let mut dom = FakeDom::new();
        let (container, pairs) = dom.group(0, 2);
        let created = Rc::new(Cell::new(0));
        let count = Rc::clone(&created);
        let config = Config::new().on_create(move || count.set(count.get() + 1));

        let accordion = AccordionRegistry::initialize(&mut dom, Some(".accordion"), config).unwrap();
        assert_eq!(created.get(), 1);
        assert!(dom.has_class(0, "js"));
        assert_eq!(accordion.groups().len(), 1);

        let (h1, p1, l1) = pairs[1];
        assert_eq!(dom.attr(h1, "id"), Some("tab0-1"));
        assert_eq!(dom.attr(p1, "aria-labelledby"), Some("tab0-1"));
        assert_eq!(accordion.item(0, 1).and_then(|i| i.label), Some(l1));

        let keydowns: Vec<_> = dom.listeners.iter().filter(|l| l.1 == EventType::KeyDown).collect();
        assert_eq!(keydowns.len(), 1);
        assert_eq!(keydowns[0].0, container);
        let clicks: Vec<_> = dom.listeners.iter().filter(|l| l.1 == EventType::Click).map(|l| l.0).collect();
        assert_eq!(clicks, vec![pairs[0].0, h1]);
    }

    #[test]
    fn test_nested_groups_are_disjoint() {
        let mut dom = FakeDom::new();
        let (_, outer) = dom.group(0, 2);
        let (_, inner) = dom.group(outer[0].1, 2);

        let accordion = AccordionRegistry::initialize(&mut dom, Some(".accordion"), Config::new()).unwrap();
        let groups = accordion.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].headers(), vec![outer[0].0, outer[1].0]);
        assert_eq!(groups[1].headers(), vec![inner[0].0, inner[1].0]);

        // The outer panel's label is its own, not the nested one
        assert_eq!(groups[0].items[0].label, Some(outer[0].2));
        assert_eq!(dom.attr(inner[1].0, "id"), Some("tab1-1"));
        assert_eq!(dom.attr(outer[1].0, "id"), Some("tab0-1"));
    }

    #[test]
    fn test_unpaired_header_is_left_inert() {
        let mut dom = FakeDom::new();
        let (container, _) = dom.group(0, 1);
        let stray = dom.add(container, "accordion-header");

        let accordion = AccordionRegistry::initialize(&mut dom, Some(".accordion"), Config::new()).unwrap();
        assert_eq!(accordion.groups()[0].items.len(), 1);
        assert_eq!(dom.attr(stray, "id"), None);
        assert!(!dom.listeners.iter().any(|l| l.0 == stray));
    }
}
