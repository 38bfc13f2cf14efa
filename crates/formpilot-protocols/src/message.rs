//! Transport message shapes.
//!
//! The `action` tag values are a compatibility contract with the existing
//! UI surface and must not change spelling.

use serde::{Deserialize, Serialize};

use crate::model::{FieldValue, FormModel};

/// One label/value pair in a batch write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWrite {
    pub label: String,
    pub value: FieldValue,
}

impl FieldWrite {
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Request from the UI surface to the document-side service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Scan the document and return the current form model.
    GetFormFields,

    /// Write one value into the control resolved by label text.
    UpdateField { label: String, value: FieldValue },

    /// Apply a batch of label/value writes in order.
    FillFormFields { fields: Vec<FieldWrite> },

    /// Flat-map variant of the batch write.
    AutofillForm {
        #[serde(rename = "formData")]
        form_data: serde_json::Map<String, serde_json::Value>,
    },
}

/// Response to a [`Request`].
///
/// Untagged: a form model crosses the wire as a bare section array, write
/// acknowledgements as `{"success": bool}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    FormFields(FormModel),
    Ack { success: bool },
}

impl Response {
    pub fn ack(success: bool) -> Self {
        Response::Ack { success }
    }
}

/// One-way push notification from the document side to the UI surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Notification {
    /// The eager on-load scan finished; the model is safe to pull.
    FormFieldsReady,
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
