//! The document arena: tree structure, queries, and event dispatch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use formpilot_protocols::error::DocumentError;

use super::events::{EventKind, PageScript, SyntheticEvent};
use super::node::{DomNode, NodeAttributes, NodeId};

/// Nested fixture form of a document, used by tests and the host binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default)]
    pub attrs: NodeAttributes,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// An already-rendered document, owned by the engine as the single shared
/// mutable resource. The prober and writer both mutate it directly; the
/// `&mut` receiver on mutating operations is what provides their mutual
/// exclusion.
pub struct Document {
    nodes: Vec<DomNode>,
    script: Option<Arc<dyn PageScript>>,
    focused: Option<NodeId>,
}

impl Document {
    /// Create a document with an empty `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![DomNode::element("body")],
            script: None,
            focused: None,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node as the last child of `parent`, returning its id.
    pub fn append_child(&mut self, parent: NodeId, mut node: DomNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach a subtree from its parent. The nodes stay in the arena
    /// (ids remain valid) but are no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    pub fn node(&self, id: NodeId) -> &DomNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut DomNode {
        &mut self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The sibling immediately after `id` in its parent's child list.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|c| *c == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Pre-order traversal of the subtree rooted at `id`, including `id`.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            for child in self.children(node).iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Pre-order traversal of the whole document.
    pub fn walk(&self) -> Vec<NodeId> {
        self.subtree(self.root())
    }

    /// Concatenated text of the subtree in document order, trimmed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.subtree(id) {
            out.push_str(&self.nodes[node.0].text);
        }
        out.trim().to_string()
    }

    /// First node in the subtree (pre-order) satisfying the predicate.
    pub fn find_in(&self, root: NodeId, predicate: impl Fn(&Document, NodeId) -> bool) -> Option<NodeId> {
        self.subtree(root).into_iter().find(|n| predicate(self, *n))
    }

    /// First node in the whole document (pre-order) satisfying the
    /// predicate.
    pub fn find(&self, predicate: impl Fn(&Document, NodeId) -> bool) -> Option<NodeId> {
        self.find_in(self.root(), predicate)
    }

    /// Register the host page's reactive logic.
    pub fn set_script(&mut self, script: Arc<dyn PageScript>) {
        self.script = Some(script);
    }

    /// Move focus to a node and deliver a non-bubbling focus event.
    pub fn focus(&mut self, id: NodeId) {
        self.focused = Some(id);
        self.dispatch(id, &SyntheticEvent::direct(EventKind::Focus));
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Dispatch a synthetic event at `target`, invoking the page script at
    /// the target and - when the event bubbles - at each ancestor in turn.
    /// Without a registered script this is a no-op.
    pub fn dispatch(&mut self, target: NodeId, event: &SyntheticEvent) {
        let Some(script) = self.script.clone() else {
            return;
        };
        let mut current = Some(target);
        while let Some(node) = current {
            script.on_event(self, target, node, event);
            if !event.bubbles {
                break;
            }
            current = self.parent(node);
        }
    }

    /// Build a document from its nested fixture form.
    pub fn from_spec(spec: &NodeSpec) -> Self {
        let mut doc = Self::new();
        {
            let root = doc.root();
            let node = doc.node_mut(root);
            node.tag = spec.tag.clone();
            node.attributes = spec.attrs.clone();
            node.text = spec.text.clone();
            node.checked = spec.checked;
        }
        let root = doc.root();
        for child in &spec.children {
            doc.append_spec(root, child);
        }
        doc
    }

    /// Parse a JSON fixture into a document.
    pub fn from_json(raw: &str) -> Result<Self, DocumentError> {
        let spec: NodeSpec =
            serde_json::from_str(raw).map_err(|e| DocumentError::ParseFailed(e.to_string()))?;
        Ok(Self::from_spec(&spec))
    }

    fn append_spec(&mut self, parent: NodeId, spec: &NodeSpec) {
        let node = DomNode {
            tag: spec.tag.clone(),
            attributes: spec.attrs.clone(),
            text: spec.text.clone(),
            checked: spec.checked,
            parent: None,
            children: Vec::new(),
        };
        let id = self.append_child(parent, node);
        for child in &spec.children {
            self.append_spec(id, child);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
