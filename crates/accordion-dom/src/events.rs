//! Input Events
//!
//! Click and keydown events plus the listener table entries that receive
//! them during bubbling.

use accordion_a11y::Key;

use crate::NodeId;

/// Event types hosts dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
        }
    }
}

/// Registered listener. `payload` tells the owner what to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener<L> {
    pub target: NodeId,
    pub kind: EventKind,
    pub payload: L,
}

/// A dispatched click or keydown
#[derive(Debug, Clone)]
pub struct InputEvent {
    pub kind: EventKind,
    pub target: NodeId,
    /// Node whose listener is currently running
    pub current_target: Option<NodeId>,
    /// Set for keydown events
    pub key: Option<Key>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

impl InputEvent {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            current_target: None,
            key: None,
            bubbles: true,
            cancelable: true,
            default_prevented: false,
        }
    }

    pub fn key_down(target: NodeId, key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key: Some(key),
            ..Self::click(target)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
