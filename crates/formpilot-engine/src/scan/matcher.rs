//! Marker predicates and the label/control pairing heuristic.
//!
//! These are deliberately named, documented heuristics rather than hidden
//! implementation details, so the tie-break behavior can be pinned by
//! tests. Both the section and the field test look one level down (a
//! heading-like or label-like *direct child*): a subtree-wide containment
//! test would let the outermost ancestor claim the first marker in the
//! whole document during pre-order traversal, collapsing sections and
//! mis-pairing globally instead of locally.

use crate::dom::{Document, NodeId};

/// Tags that can render as heading/label typography.
const LABEL_STYLED_TAGS: &[&str] = &["span", "label", "p", "legend", "h1", "h2", "h3", "h4"];

/// Input kinds that act as buttons, not data entry.
const BUTTON_INPUT_TYPES: &[&str] = &["submit", "button", "reset"];

/// A label-styled element carrying a "body" or "subheading" role or class
/// token.
pub(crate) fn is_heading_like(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    if !LABEL_STYLED_TAGS.contains(&node.tag.as_str()) {
        return false;
    }
    if let Some(role) = node.attributes.role.as_deref() {
        if role == "body" || role == "subheading" {
            return true;
        }
    }
    node.attributes
        .class_token(|t| t.contains("body") || t.contains("subheading"))
}

/// An element that labels a control.
pub(crate) fn is_label_like(doc: &Document, id: NodeId) -> bool {
    doc.node(id).tag == "label"
}

/// A data-entry control: native input/textarea/select (buttons excluded),
/// or a custom element with the combobox role.
pub(crate) fn is_input_like(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    match node.tag.as_str() {
        "input" => !node
            .attributes
            .input_type
            .as_deref()
            .map(|t| BUTTON_INPUT_TYPES.contains(&t))
            .unwrap_or(false),
        "textarea" | "select" => true,
        _ => node.attributes.role.as_deref() == Some("combobox"),
    }
}

/// A control the prober can focus and type into directly.
pub(crate) fn is_text_entry(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    node.tag == "input" || node.tag == "textarea"
}

/// Section marker: the first heading-like direct child of `id`, if any,
/// yields the section title.
pub(crate) fn section_title(doc: &Document, id: NodeId) -> Option<String> {
    doc.children(id)
        .iter()
        .copied()
        .find(|c| is_heading_like(doc, *c))
        .map(|heading| doc.text_content(heading))
}

/// Field marker: first-match pairing of a label-like direct child with the
/// first input-like control in the subtree (pre-order). Nested or
/// ambiguous structures may mis-pair; that trade of precision for
/// simplicity is intentional.
pub(crate) fn match_field(doc: &Document, id: NodeId) -> Option<(NodeId, NodeId)> {
    let label = doc
        .children(id)
        .iter()
        .copied()
        .find(|c| is_label_like(doc, *c))?;
    let control = doc.find_in(id, |d, n| is_input_like(d, n))?;
    Some((label, control))
}
