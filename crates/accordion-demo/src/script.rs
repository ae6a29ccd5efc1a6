//! Interaction scripts
//!
//! One step per argument: `click <selector>`, `key <Key>`, `tab`,
//! `shift-tab`.

use std::fmt;

use accordion::Page;
use accordion_a11y::Key;
use anyhow::{Context, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Click(String),
    Key(Key),
    Tab { reverse: bool },
}

impl Step {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let source = source.trim();
        let (verb, rest) = source.split_once(char::is_whitespace).unwrap_or((source, ""));
        let rest = rest.trim();

        Ok(match verb {
            "click" if !rest.is_empty() => Self::Click(rest.to_string()),
            "key" if !rest.is_empty() => match Key::parse(rest) {
                Key::Unidentified(name) => bail!("unknown key {name:?}"),
                key => Self::Key(key),
            },
            "tab" if rest.is_empty() => Self::Tab { reverse: false },
            "shift-tab" if rest.is_empty() => Self::Tab { reverse: true },
            _ => bail!("cannot parse step {source:?} (expected `click <selector>`, `key <Key>`, `tab` or `shift-tab`)"),
        })
    }

    /// Apply the step to `page`
    pub fn run(&self, page: &mut Page) -> anyhow::Result<()> {
        match self {
            Self::Click(selector) => {
                let root = page.document().tree().root();
                let target = page
                    .document()
                    .query_selector(root, selector)?
                    .with_context(|| format!("{selector:?} matched nothing"))?;
                page.click(target);
            }
            Self::Key(key) => {
                page.press(key.clone());
            }
            Self::Tab { reverse } => {
                page.tab(*reverse);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(selector) => write!(f, "click {selector}"),
            Self::Key(key) => write!(f, "key {key:?}"),
            Self::Tab { reverse: false } => write!(f, "tab"),
            Self::Tab { reverse: true } => write!(f, "shift-tab"),
        }
    }
}
