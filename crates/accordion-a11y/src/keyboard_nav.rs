//! Keyboard Navigation
//!
//! Key values and roving focus arithmetic over an ordered set of
//! focus targets.

/// Key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End,

    // Activation / focus
    Enter, Space, Tab, Escape,

    Unidentified(String),
}

impl Key {
    /// Parse from a `KeyboardEvent.key` string
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified(s.to_string()),
                }
            }
        }
    }

    /// Map a legacy `KeyboardEvent.which` code
    pub fn from_key_code(code: u32) -> Self {
        match code {
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Space,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            code => match char::from_u32(code) {
                Some(c) if c.is_ascii_alphanumeric() => Self::Character(c.to_ascii_lowercase()),
                _ => Self::Unidentified(format!("keyCode {code}")),
            },
        }
    }

    /// Roving focus movement bound to this key, if any
    pub fn nav_action(&self) -> Option<NavAction> {
        match self {
            Self::End => Some(NavAction::Last),
            Self::Home => Some(NavAction::First),
            Self::ArrowUp | Self::ArrowLeft => Some(NavAction::Previous),
            Self::ArrowDown | Self::ArrowRight => Some(NavAction::Next),
            _ => None,
        }
    }

    /// Keys that activate a focused button
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Focus movement within one ordered set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Last,
    Previous,
    Next,
}

/// Roving focus over `len` ordered targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RovingFocus {
    len: usize,
}

impl RovingFocus {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index that receives focus after `action` from `current`.
    ///
    /// Previous/Next wrap at both ends. Returns `None` for an empty set or
    /// an out of range `current`.
    pub fn target(&self, current: usize, action: NavAction) -> Option<usize> {
        if current >= self.len {
            return None;
        }
        let last = self.len - 1;

        Some(match action {
            NavAction::First => 0,
            NavAction::Last => last,
            NavAction::Previous => if current == 0 { last } else { current - 1 },
            NavAction::Next => if current == last { 0 } else { current + 1 },
        })
    }
}
