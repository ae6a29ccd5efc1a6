//! Accordion errors

/// Result alias for accordion operations
pub type Result<T> = std::result::Result<T, AccordionError>;

/// Errors reported by accordion setup and programmatic control.
///
/// None of these are fatal to the host: a failed initialization leaves the
/// page untouched apart from the log entry.
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    #[error("No target supplied. A valid target (accordion area) must be used.")]
    MissingTarget,

    #[error("Target not found. {0:?} matched no accordion area.")]
    TargetNotFound(String),

    #[error("Invalid target selector {selector:?}: {source}")]
    InvalidSelector {
        selector: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Invalid {setting} {value:?}: class names use only ASCII letters, digits, '-' and '_'")]
    InvalidClass { setting: &'static str, value: String },

    #[error("No accordion item {item} in group {group}")]
    UnknownItem { group: usize, item: usize },
}

impl AccordionError {
    /// Errors caused by the selector, settings or markup handed to
    /// initialization
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnknownItem { .. })
    }
}
