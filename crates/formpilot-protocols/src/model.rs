//! Form model types: the serializable result of one document scan.
//!
//! A [`FormModel`] is an ordered sequence of sections, each an ordered
//! sequence of fields, in document discovery order. It is produced fresh on
//! every scan, handed across the process boundary as a value, and never
//! mutated afterwards - writers act on the live document, not on the model.

use serde::{Deserialize, Serialize};

/// Title of the synthetic section that collects fields discovered outside
/// any heading-delimited section.
pub const GENERAL_SECTION_TITLE: &str = "General";

/// Semantic type of a discovered field.
///
/// Serialized as the historical lowercase strings; `SelectOne` keeps the
/// hyphenated `"select-one"` spelling native select controls report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Checkbox,
    Radio,
    Date,
    Number,
    Dropdown,
    #[serde(rename = "select-one")]
    SelectOne,
    File,
    /// Any other declared input kind (email, tel, password, ...).
    #[serde(untagged)]
    Other(String),
}

impl FieldType {
    /// Whether fields of this type carry an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Dropdown | FieldType::SelectOne)
    }

    /// Whether the control holds a checked/unchecked state rather than text.
    pub fn is_boolean(&self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::Radio)
    }
}

/// Current value of a field: text for most controls, a boolean for
/// checkbox/radio controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Empty text value.
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Boolean coercion used when writing into checkbox/radio controls:
    /// an actual boolean, or the literal string `"true"`.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => s == "true",
        }
    }

    /// The value as text; booleans render as `"true"` / `"false"`.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Convert a raw JSON value into a field value. Strings and booleans
    /// map directly; numbers render as text; null becomes the empty string.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::String(s) => FieldValue::Text(s),
            serde_json::Value::Number(n) => FieldValue::Text(n.to_string()),
            serde_json::Value::Null => FieldValue::empty(),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// One discovered label+control pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Raw label text, trimmed. Doubles as the field's identity for
    /// deduplication and write-back resolution.
    pub label: String,

    /// Resolved semantic type.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Current value at scan time.
    pub value: FieldValue,

    /// Derived from a `*` marker in the label text, not from document
    /// semantics.
    pub required: bool,

    /// Choice list, present iff the type carries options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Field {
    /// Create a field with no options list.
    pub fn new(
        label: impl Into<String>,
        field_type: FieldType,
        value: FieldValue,
        required: bool,
    ) -> Self {
        Self {
            label: label.into(),
            field_type,
            value,
            required,
            options: None,
        }
    }

    /// Attach an options list.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

/// A titled grouping of fields, delimited by heading-like markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }
}

/// The discovered, ordered section/field structure for one scan.
///
/// Crosses the transport boundary as a bare JSON array of sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormModel {
    pub sections: Vec<Section>,
}

impl FormModel {
    /// Total number of fields across all sections.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Find a field by exact label text.
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.label == label)
    }

    /// Iterate over all fields in discovery order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
