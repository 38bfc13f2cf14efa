//! Document nodes and their attributes.

use serde::{Deserialize, Serialize};

/// Index of a node in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, for diagnostics.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Attribute subset the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Element ID attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Space-separated class names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// ARIA role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Declared input kind (`type` attribute).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// Current value for inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Name attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl NodeAttributes {
    /// Test whether any whitespace-separated class token satisfies the
    /// predicate.
    pub fn class_token(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.class
            .as_deref()
            .map(|c| c.split_whitespace().any(|t| predicate(t)))
            .unwrap_or(false)
    }
}

/// One element in the document tree.
///
/// Text is carried directly on the element rather than as separate text
/// nodes; `text_content` on the document concatenates a subtree's text in
/// document order.
#[derive(Debug, Clone)]
pub struct DomNode {
    /// Tag name (lowercase).
    pub tag: String,

    /// Node attributes.
    pub attributes: NodeAttributes,

    /// Direct text of this element (not from children).
    pub text: String,

    /// Checked state for checkbox/radio controls.
    pub checked: bool,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl DomNode {
    /// Create an element with no attributes, text, or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: NodeAttributes::default(),
            text: String::new(),
            checked: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attributes.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attributes.class = Some(class.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.attributes.role = Some(role.into());
        self
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.attributes.input_type = Some(input_type.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.attributes.value = Some(value.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Parent node, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
