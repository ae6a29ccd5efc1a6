//! Tab index handling

use std::fmt;

use crate::A11yError;

/// Parsed `tabindex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// tabindex < 0: focusable from script, skipped by Tab
    Programmatic,
    /// tabindex >= 0: part of sequential navigation
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: &str) -> Result<Self, A11yError> {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Ok(Self::Programmatic),
            Ok(n) => Ok(Self::Sequential(n)),
            Err(_) => Err(A11yError::InvalidTabIndex(value.to_string())),
        }
    }

    /// Whether Tab/Shift+Tab can reach the element
    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Programmatic => f.write_str("-1"),
            Self::Sequential(n) => write!(f, "{n}"),
        }
    }
}
