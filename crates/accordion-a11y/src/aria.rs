//! ARIA Support
//!
//! Roles, states, and the attribute names an accordion writes.

use std::collections::HashMap;
use std::fmt;

use crate::A11yError;

pub const ROLE: &str = "role";
pub const ARIA_SELECTED: &str = "aria-selected";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";

/// Render a boolean ARIA state value
#[inline]
pub fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Tab,
    TabPanel,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Result<Self, A11yError> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "tab" => Self::Tab,
            "tabpanel" => Self::TabPanel,
            _ => return Err(A11yError::InvalidRole(s.to_string())),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::TabPanel => "tabpanel",
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ARIA state/property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Expanded(bool),
    Hidden(bool),
    Selected(bool),
    Controls(String),
    LabelledBy(Vec<String>),
}

/// ARIA attributes on an element
#[derive(Debug, Clone, Default)]
pub struct AriaAttributes {
    pub role: Option<AriaRole>,
    pub states: HashMap<String, AriaState>,
}

impl AriaAttributes {
    pub fn new() -> Self { Self::default() }

    /// Parse from element attributes
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut aria = Self::new();

        for (key, value) in attrs {
            if key == ROLE {
                aria.role = AriaRole::parse(value).ok();
            } else if let Some(name) = key.strip_prefix("aria-") {
                if let Some(state) = Self::parse_state(name, value) {
                    aria.states.insert(name.to_string(), state);
                }
            }
        }

        aria
    }

    fn parse_state(name: &str, value: &str) -> Option<AriaState> {
        Some(match name {
            "expanded" => AriaState::Expanded(value == "true"),
            "hidden" => AriaState::Hidden(value == "true"),
            "selected" => AriaState::Selected(value == "true"),
            "controls" => AriaState::Controls(value.to_string()),
            "labelledby" => AriaState::LabelledBy(value.split_whitespace().map(String::from).collect()),
            _ => return None,
        })
    }

    fn flag(&self, name: &str) -> Option<bool> {
        match self.states.get(name)? {
            AriaState::Expanded(v) | AriaState::Hidden(v) | AriaState::Selected(v) => Some(*v),
            _ => None,
        }
    }

    /// Check if expanded
    pub fn is_expanded(&self) -> Option<bool> {
        self.flag("expanded")
    }

    pub fn is_hidden(&self) -> Option<bool> {
        self.flag("hidden")
    }

    pub fn is_selected(&self) -> Option<bool> {
        self.flag("selected")
    }

    pub fn controls(&self) -> Option<&str> {
        match self.states.get("controls")? {
            AriaState::Controls(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AriaRole::parse("tab"), Ok(AriaRole::Tab));
        assert_eq!(AriaRole::parse("TabPanel"), Ok(AriaRole::TabPanel));
        assert!(AriaRole::parse("region").is_err());
        assert!(AriaRole::parse("banana").is_err());
    }

    #[test]
    fn test_role_round_trips_through_display() {
        for role in [AriaRole::Tab, AriaRole::TabPanel] {
            assert_eq!(AriaRole::parse(&role.to_string()), Ok(role));
        }
    }

    #[test]
    fn test_aria_attributes() {
        let attrs = [
            ("role", "tab"),
            ("aria-expanded", "true"),
            ("aria-selected", "false"),
            ("aria-controls", "panel0-1"),
            ("class", "accordion-header"),
        ];

        let aria = AriaAttributes::from_attributes(attrs);
        assert_eq!(aria.role, Some(AriaRole::Tab));
        assert_eq!(aria.is_expanded(), Some(true));
        assert_eq!(aria.is_selected(), Some(false));
        assert_eq!(aria.is_hidden(), None);
        assert_eq!(aria.controls(), Some("panel0-1"));
    }

    #[test]
    fn test_bool_attr() {
        assert_eq!(bool_attr(true), "true");
        assert_eq!(bool_attr(false), "false");
    }
}
