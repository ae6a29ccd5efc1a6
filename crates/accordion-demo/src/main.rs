//! Accordion Demo - Main Entry Point
//!
//! ```text
//! accordion-demo [--target <selector>] <page.html> [step ...]
//! ```
//!
//! Loads the page, wires accordions on `<selector>` (default `.accordion`),
//! replays the steps and prints the resulting ARIA state.

mod script;

use accordion::{Config, HostDocument, Page};
use accordion_a11y::bool_attr;
use accordion_dom::NodeId;
use anyhow::{Context, bail};
use script::Step;
use tracing_subscriber::EnvFilter;

const DEFAULT_TARGET: &str = ".accordion";

struct Args {
    target: String,
    page: String,
    steps: Vec<Step>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut target = DEFAULT_TARGET.to_string();
    let mut page = None;
    let mut steps = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--target" => target = args.next().context("--target needs a selector")?,
            _ if page.is_none() => page = Some(arg),
            _ => steps.push(Step::parse(&arg)?),
        }
    }

    let Some(page) = page else {
        bail!("usage: accordion-demo [--target <selector>] <page.html> [step ...]");
    };
    Ok(Args { target, page, steps })
}

fn attr<'a>(doc: &'a HostDocument, node: NodeId, name: &str) -> &'a str {
    doc.get_attribute(node, name).unwrap_or("-")
}

fn flag(state: Option<bool>) -> &'static str {
    state.map_or("-", bool_attr)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let markup = std::fs::read_to_string(&args.page).with_context(|| format!("reading {}", args.page))?;
    let mut page = Page::new(accordion_html::parse(&markup)?);

    let config = Config::new()
        .on_open(|| tracing::info!("panel opened"))
        .on_close(|| tracing::info!("panel closed"));
    let id = page.create_accordion(Some(args.target.as_str()), config)?;

    for step in &args.steps {
        tracing::info!("> {}", step);
        step.run(&mut page)?;
    }

    let accordion = page.accordion(id).context("accordion handle vanished")?;
    let doc = page.document();
    println!("{:<10} {:<12} {:<9} {:<9} {:<12} {:<8}", "header", "controls", "expanded", "selected", "panel", "hidden");
    for group in accordion.groups() {
        for item in &group.items {
            let header = doc.aria(item.header);
            let panel = doc.aria(item.panel);
            println!(
                "{:<10} {:<12} {:<9} {:<9} {:<12} {:<8}",
                attr(doc, item.header, "id"),
                header.controls().unwrap_or("-"),
                flag(header.is_expanded()),
                flag(header.is_selected()),
                attr(doc, item.panel, "id"),
                flag(panel.is_hidden()),
            );
        }
    }

    let focused = doc
        .focused()
        .map(|node| {
            let tag = doc.tag_name(node).unwrap_or("?");
            match doc.get_attribute(node, "id") {
                Some(id) => format!("<{tag}#{id}>"),
                None => format!("<{tag}> {}", doc.tree().text_content(node)),
            }
        })
        .unwrap_or_else(|| "nothing".to_string());
    println!("focus: {focused}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["--target", "#faq", "page.html", "tab", "key Enter"]).unwrap();
        assert_eq!(parsed.target, "#faq");
        assert_eq!(parsed.page, "page.html");
        assert_eq!(parsed.steps.len(), 2);

        let defaults = args(&["page.html"]).unwrap();
        assert_eq!(defaults.target, DEFAULT_TARGET);
        assert!(defaults.steps.is_empty());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["--target"]).is_err());
        assert!(args(&["page.html", "jump"]).is_err());
    }
}
