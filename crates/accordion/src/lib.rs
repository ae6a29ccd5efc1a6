//! Accordion - accessible disclosure widget core
//!
//! Turns marked-up header/panel pairs into an accessible accordion:
//! - Click on a header toggles its panel and syncs ARIA state
//! - Arrow keys, Home and End move focus among a group's headers
//! - Nested accordions are discovered as independent groups
//!
//! The host document is reached only through [`DomAccess`]. With the
//! default `dom` feature, [`host`] provides it for `accordion-dom`
//! documents along with a [`Page`](host::Page) event driver.

mod accordion;
mod config;
mod dom_access;
mod error;
mod model;
mod navigator;
mod registry;
mod sync;
mod toggle;

#[cfg(feature = "dom")]
pub mod host;

#[cfg(test)]
mod testing;

pub use accordion::{Accordion, EventOutcome, create_accordion};
pub use config::{Callbacks, Config, FocusTarget, Notification, Settings};
pub use dom_access::{DomAccess, EventType, InstanceId, ListenerRoute, RouteAction, UiEvent};
pub use error::{AccordionError, Result};
pub use model::{AccordionGroup, AccordionItem};
pub use navigator::KeyboardNavigator;
pub use registry::AccordionRegistry;
pub use sync::AttributeSynchronizer;
pub use toggle::ToggleEngine;

#[cfg(feature = "dom")]
pub use host::{HostDocument, Page};
