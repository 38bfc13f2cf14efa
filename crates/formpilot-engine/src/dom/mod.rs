//! Arena document tree.
//!
//! The live document is represented as an explicit arena with parent
//! pointers, so sibling and ancestor queries stay O(1)-ish instead of
//! ad-hoc upward walks. Nodes are addressed by [`NodeId`] indices that
//! stay valid for the lifetime of the document (detached subtrees remain
//! in the arena, unreachable from the root).

mod document;
mod events;
mod node;

pub use document::{Document, NodeSpec};
pub use events::{EventKind, PageScript, SyntheticEvent};
pub use node::{DomNode, NodeAttributes, NodeId};

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
