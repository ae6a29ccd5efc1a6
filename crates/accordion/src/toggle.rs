//! Toggle engine
//!
//! Flips one item, syncs its attributes, moves focus, then notifies.

use accordion_a11y::TabIndex;

use crate::config::{Callbacks, FocusTarget, Notification, Settings};
use crate::{AccordionItem, AttributeSynchronizer, DomAccess};

pub struct ToggleEngine<'a> {
    settings: &'a Settings,
    callbacks: &'a mut Callbacks,
}

impl<'a> ToggleEngine<'a> {
    pub fn new(settings: &'a Settings, callbacks: &'a mut Callbacks) -> Self {
        Self { settings, callbacks }
    }

    /// Toggle `item` and return its new state.
    ///
    /// All DOM writes and the focus move happen before any callback runs.
    /// `on_toggle` fires on every call, followed by exactly one of
    /// `on_open` / `on_close`.
    pub fn toggle<D: DomAccess>(&mut self, dom: &mut D, item: &mut AccordionItem<D::Element>) -> bool {
        item.is_open = !item.is_open;
        let is_open = item.is_open;

        AttributeSynchronizer::new(self.settings).apply(dom, item, is_open);
        self.move_focus(dom, item);

        tracing::debug!(
            "{} {}",
            item.header_id(),
            if is_open { "opened" } else { "closed" }
        );

        self.callbacks.notify(Notification::Toggle);
        self.callbacks.notify(if is_open { Notification::Open } else { Notification::Close });
        is_open
    }

    fn move_focus<D: DomAccess>(&self, dom: &mut D, item: &AccordionItem<D::Element>) {
        match self.settings.focus_target {
            FocusTarget::Header => dom.focus(item.header),
            FocusTarget::PanelLabel => match item.label {
                Some(label) => {
                    dom.set_attribute(label, "tabindex", &TabIndex::Programmatic.to_string());
                    dom.focus(label);
                }
                None => {
                    tracing::debug!("{} has no label, focus stays put", item.panel_id());
                }
            },
        }
    }
}
