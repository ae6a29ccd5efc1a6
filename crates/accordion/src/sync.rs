//! Attribute synchronization
//!
//! Static setup runs once per item at registration; [`apply`] runs on
//! every toggle and only writes the state-dependent attributes.
//!
//! [`apply`]: AttributeSynchronizer::apply

use accordion_a11y::{AriaRole, aria, bool_attr};

use crate::{AccordionItem, DomAccess, Settings};

/// Writes ARIA state for accordion items
#[derive(Debug, Clone, Copy)]
pub struct AttributeSynchronizer<'a> {
    settings: &'a Settings,
}

impl<'a> AttributeSynchronizer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// One-time identifiers, roles and the closed initial state
    pub fn setup<D: DomAccess>(&self, dom: &mut D, item: &AccordionItem<D::Element>) {
        let header_id = item.header_id();
        let panel_id = item.panel_id();

        dom.set_attribute(item.header, "id", &header_id);
        dom.set_attribute(item.header, aria::ARIA_CONTROLS, &panel_id);
        dom.set_attribute(item.header, aria::ROLE, AriaRole::Tab.as_str());

        dom.set_attribute(item.panel, "id", &panel_id);
        dom.set_attribute(item.panel, aria::ARIA_LABELLEDBY, &header_id);
        dom.set_attribute(item.panel, aria::ROLE, AriaRole::TabPanel.as_str());

        self.apply(dom, item, item.is_open());
    }

    /// Mirror `is_open` onto header and panel. Idempotent.
    pub fn apply<D: DomAccess>(&self, dom: &mut D, item: &AccordionItem<D::Element>, is_open: bool) {
        dom.set_attribute(item.header, aria::ARIA_SELECTED, bool_attr(is_open));
        dom.set_attribute(item.header, aria::ARIA_EXPANDED, bool_attr(is_open));
        dom.set_attribute(item.panel, aria::ARIA_HIDDEN, bool_attr(!is_open));

        dom.set_class(item.header, &self.settings.active_class, is_open);
        dom.set_class(item.panel, &self.settings.active_class, is_open);
    }
}
