//! Field classification: control -> semantic type, value, required flag.

use formpilot_protocols::model::{Field, FieldType, FieldValue};

use crate::dom::{Document, NodeId};

/// Marker character in label text that flags a required field. This is a
/// textual heuristic over the label, not a document-semantics check.
const REQUIRED_MARKER: char = '*';

/// Classify a control into a field.
///
/// Type resolution priority: combobox role, then a native or nested
/// date-typed control, then number, then the control's own declared kind
/// with `text` as the fallback. The options list for dropdown-style types
/// is attached by the scanner after probing; here it starts empty.
pub fn classify(doc: &Document, control: NodeId, label_text: &str) -> Field {
    let field_type = resolve_type(doc, control);
    let value = resolve_value(doc, control, &field_type);
    let required = label_text.contains(REQUIRED_MARKER);

    let mut field = Field::new(label_text, field_type, value, required);
    if field.field_type.has_options() {
        field = field.with_options(Vec::new());
    }
    field
}

fn resolve_type(doc: &Document, control: NodeId) -> FieldType {
    let node = doc.node(control);

    if node.attributes.role.as_deref() == Some("combobox") {
        return FieldType::Dropdown;
    }
    if nests_input_of_type(doc, control, "date") {
        return FieldType::Date;
    }
    if nests_input_of_type(doc, control, "number") {
        return FieldType::Number;
    }

    match node.tag.as_str() {
        "select" => FieldType::SelectOne,
        "textarea" => FieldType::Textarea,
        "input" => match node.attributes.input_type.as_deref() {
            None | Some("text") => FieldType::Text,
            Some("checkbox") => FieldType::Checkbox,
            Some("radio") => FieldType::Radio,
            Some("file") => FieldType::File,
            Some(other) => FieldType::Other(other.to_string()),
        },
        _ => FieldType::Text,
    }
}

fn resolve_value(doc: &Document, control: NodeId, field_type: &FieldType) -> FieldValue {
    match field_type {
        // Never echo a file path.
        FieldType::File => FieldValue::empty(),
        FieldType::Dropdown => FieldValue::Text(doc.text_content(control)),
        FieldType::Checkbox | FieldType::Radio => FieldValue::Bool(doc.node(control).checked),
        _ => FieldValue::Text(
            doc.node(control)
                .attributes
                .value
                .clone()
                .unwrap_or_default(),
        ),
    }
}

/// True when the control itself is, or its subtree contains, an input of
/// the given declared kind.
fn nests_input_of_type(doc: &Document, control: NodeId, kind: &str) -> bool {
    doc.subtree(control).into_iter().any(|n| {
        let node = doc.node(n);
        node.tag == "input" && node.attributes.input_type.as_deref() == Some(kind)
    })
}
