//! Field write-back: resolve a label to a live control and apply a value
//! with the change-notification semantics a real user action would have.
//!
//! Writers act on the live document, keyed by label text; the form model a
//! caller may hold is a read-only snapshot that can have gone stale.

use tracing::{debug, warn};

use formpilot_protocols::message::FieldWrite;
use formpilot_protocols::model::FieldValue;

use crate::dom::{Document, EventKind, NodeId, SyntheticEvent};
use crate::scan::matcher;

/// Write one value into the control labeled `label`.
///
/// Resolution: the first label element in document order whose trimmed
/// text equals `label` exactly; the control is the first data-entry
/// element inside the label's next sibling container. A miss is a silent
/// no-op returning `false` - partial form coverage is expected and normal.
pub fn write(doc: &mut Document, label: &str, value: &FieldValue) -> bool {
    let Some(control) = resolve_control(doc, label) else {
        warn!("No write target found for label {:?}", label);
        return false;
    };

    apply_value(doc, control, value);

    // A raw property assignment is invisible to reactive pages; the
    // bubbling change notification is what framework state bindings
    // actually observe.
    doc.dispatch(control, &SyntheticEvent::bubbling(EventKind::Change));
    debug!("Wrote {:?} into {:?}", value, label);
    true
}

/// Apply a batch of writes in the given order. No atomicity: a miss does
/// not block or roll back the others. Returns the labels that were not
/// found, in order, for caller-level reporting.
pub fn write_all(doc: &mut Document, writes: &[FieldWrite]) -> Vec<String> {
    let mut missed = Vec::new();
    for entry in writes {
        if !write(doc, &entry.label, &entry.value) {
            missed.push(entry.label.clone());
        }
    }
    if !missed.is_empty() {
        warn!("{} of {} writes had no target", missed.len(), writes.len());
    }
    missed
}

fn resolve_control(doc: &Document, label: &str) -> Option<NodeId> {
    let label_node = doc.find(|d, n| {
        matcher::is_label_like(d, n) && d.text_content(n) == label
    })?;
    let container = doc.next_sibling(label_node)?;
    doc.find_in(container, |d, n| matcher::is_input_like(d, n))
}

fn apply_value(doc: &mut Document, control: NodeId, value: &FieldValue) {
    let node = doc.node(control);
    let is_boolean_control = node.tag == "input"
        && matches!(
            node.attributes.input_type.as_deref(),
            Some("checkbox") | Some("radio")
        );

    let node = doc.node_mut(control);
    if is_boolean_control {
        node.checked = value.is_truthy();
    } else {
        // Assigned verbatim; no coercion or validation against the
        // field's declared type.
        node.attributes.value = Some(value.as_text());
    }
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
