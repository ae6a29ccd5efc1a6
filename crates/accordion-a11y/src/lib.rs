//! Accordion Accessibility
//!
//! Accessibility building blocks for accordion widgets.
//!
//! Features:
//! - ARIA roles, states, attribute names
//! - Tab index handling
//! - Keyboard navigation (roving focus)

pub mod aria;
pub mod focus;
pub mod keyboard_nav;

pub use aria::{AriaRole, AriaState, AriaAttributes, bool_attr};
pub use focus::TabIndex;
pub use keyboard_nav::{Key, NavAction, RovingFocus};

/// Accessibility error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Invalid tabindex value: {0:?}")]
    InvalidTabIndex(String),
}
