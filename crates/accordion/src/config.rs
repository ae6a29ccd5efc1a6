//! Accordion Configuration
//!
//! `Config` carries the lifecycle callbacks and the markup [`Settings`].

use std::fmt;

use crate::{AccordionError, Result};

/// Where keyboard focus lands after an item is toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The label inside the panel (made focusable with `tabindex="-1"`)
    #[default]
    PanelLabel,
    /// The header that was activated
    Header,
}

/// Markup contract and behavior switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Marker class of header elements
    pub header_class: String,
    /// Marker class of panel elements
    pub content_class: String,
    /// Marker class of the focus target inside a panel
    pub label_class: String,
    /// State class mirrored on open headers and panels
    pub active_class: String,
    /// Class added to the document element once widgets are wired
    pub scripted_class: String,
    pub focus_target: FocusTarget,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_class: "accordion-header".to_string(),
            content_class: "accordion-content".to_string(),
            label_class: "accordion-label".to_string(),
            active_class: "is-active".to_string(),
            scripted_class: "js".to_string(),
            focus_target: FocusTarget::PanelLabel,
        }
    }
}

impl Settings {
    /// Check that every class is a single plain class token, so it can be
    /// written to `class` and queried as `.{class}` verbatim
    pub fn validate(&self) -> Result<()> {
        let classes = [
            ("header_class", &self.header_class),
            ("content_class", &self.content_class),
            ("label_class", &self.label_class),
            ("active_class", &self.active_class),
            ("scripted_class", &self.scripted_class),
        ];
        for (setting, value) in classes {
            if !is_class_token(value) {
                return Err(AccordionError::InvalidClass { setting, value: value.clone() });
            }
        }
        Ok(())
    }
}

fn is_class_token(class: &str) -> bool {
    !class.is_empty() && class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lifecycle notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Create,
    Open,
    Close,
    Toggle,
}

type Callback = Box<dyn FnMut()>;

/// Optional zero-argument callbacks
#[derive(Default)]
pub struct Callbacks {
    on_create: Option<Callback>,
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    on_toggle: Option<Callback>,
}

impl Callbacks {
    /// Invoke the callback registered for `notification`, if any
    pub fn notify(&mut self, notification: Notification) {
        let slot = match notification {
            Notification::Create => &mut self.on_create,
            Notification::Open => &mut self.on_open,
            Notification::Close => &mut self.on_close,
            Notification::Toggle => &mut self.on_toggle,
        };
        if let Some(callback) = slot.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_create", &self.on_create.is_some())
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_toggle", &self.on_toggle.is_some())
            .finish()
    }
}

/// Accordion configuration options
#[derive(Debug, Default)]
pub struct Config {
    pub settings: Settings,
    pub callbacks: Callbacks,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Called once after every group is wired
    pub fn on_create(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_create = Some(Box::new(callback));
        self
    }

    /// Called when an item opens
    pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_open = Some(Box::new(callback));
        self
    }

    /// Called when an item closes
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_close = Some(Box::new(callback));
        self
    }

    /// Called on every toggle
    pub fn on_toggle(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_toggle = Some(Box::new(callback));
        self
    }
}
