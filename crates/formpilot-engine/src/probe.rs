//! Dropdown probing: open a custom choice control, harvest the rendered
//! options, and close it again.
//!
//! The open option menu is a single piece of globally visible UI state
//! shared by the whole page, so only one probe may be in flight at a time
//! per document. The `&mut Document` receiver enforces that statically.
//! Probing never fails: a menu that does not render, or renders nothing
//! recognizable, yields an empty list.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::time::sleep;
use tracing::debug;

use crate::dom::{Document, EventKind, NodeId, SyntheticEvent};
use crate::scan::matcher;

/// Option menus are frequently portaled to the document root, so matches
/// are collected document-wide: elements whose id ends in `-option`, or
/// whose class tokens carry a known option-row fingerprint.
const OPTION_ID_SUFFIX: &str = "-option";

static OPTION_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|-)option(?:-|$)|(?:^|-)menu-?item(?:-|$)").expect("valid fingerprint")
});

/// Probe timing.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Wait after the open interaction, for asynchronous menu rendering.
    pub settle_open: Duration,
    /// Wait after the close sequence, for the close animation.
    pub settle_close: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            settle_open: Duration::from_millis(500),
            settle_close: Duration::from_millis(500),
        }
    }
}

/// Open the control's option menu via a simulated interaction, collect the
/// rendered option texts in document order, then force the menu closed.
/// The document's visible state is unchanged on return.
pub async fn probe_options(
    doc: &mut Document,
    control: NodeId,
    config: &ProbeConfig,
) -> Vec<String> {
    let target = focus_target(doc, control);
    doc.focus(target);

    // Full hover/press/release/click cycle: some widget libraries only
    // open on a complete press-release pair, not on a synthetic click.
    for kind in [
        EventKind::MouseOver,
        EventKind::MouseDown,
        EventKind::MouseUp,
        EventKind::Click,
    ] {
        doc.dispatch(target, &SyntheticEvent::bubbling(kind));
    }

    sleep(config.settle_open).await;

    let options = collect_option_texts(doc);
    debug!("Probe harvested {} options", options.len());

    // Close through two independent mechanisms; we cannot know whether the
    // menu closes on escape-key or on outside-click.
    doc.dispatch(
        control,
        &SyntheticEvent::bubbling(EventKind::KeyDown("Escape".to_string())),
    );
    let root = doc.root();
    doc.dispatch(root, &SyntheticEvent::bubbling(EventKind::Click));

    sleep(config.settle_close).await;

    options
}

/// The most plausible interactive element for the open interaction: the
/// control itself when it accepts text entry, otherwise the nearest
/// ancestor container's embedded input.
fn focus_target(doc: &Document, control: NodeId) -> NodeId {
    if matcher::is_text_entry(doc, control) {
        return control;
    }
    for ancestor in doc.ancestors(control) {
        if let Some(input) = doc.find_in(ancestor, |d, n| d.node(n).tag == "input") {
            return input;
        }
    }
    control
}

fn collect_option_texts(doc: &Document) -> Vec<String> {
    doc.walk()
        .into_iter()
        .filter(|n| is_option_row(doc, *n))
        .map(|n| doc.text_content(n))
        .collect()
}

fn is_option_row(doc: &Document, id: NodeId) -> bool {
    let attrs = &doc.node(id).attributes;
    if let Some(elem_id) = attrs.id.as_deref() {
        if elem_id.ends_with(OPTION_ID_SUFFIX) {
            return true;
        }
    }
    attrs.class_token(|t| OPTION_CLASS_RE.is_match(t))
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
