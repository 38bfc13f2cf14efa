//! Synthetic events and the host-page reactive hook.

use super::document::Document;
use super::node::NodeId;

/// Kind of a synthetic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    MouseOver,
    MouseDown,
    MouseUp,
    Click,
    /// Key-down with the key name ("Escape", "Enter", ...).
    KeyDown(String),
    Change,
    Focus,
}

/// A synthetic event dispatched at a node.
///
/// Dispatch with `bubbles` invokes the page script at the target and then
/// at each ancestor up to the root; this is the only externally observable
/// side effect the engine relies on. Assigning a value and dispatching a
/// bubbling [`EventKind::Change`] is the engine's definition of
/// "equivalent to user input".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticEvent {
    pub kind: EventKind,
    pub bubbles: bool,
}

impl SyntheticEvent {
    /// Event that propagates to ancestors.
    pub fn bubbling(kind: EventKind) -> Self {
        Self { kind, bubbles: true }
    }

    /// Event delivered to the target only.
    pub fn direct(kind: EventKind) -> Self {
        Self {
            kind,
            bubbles: false,
        }
    }
}

/// The host page's reactive logic.
///
/// A document carries at most one script, which acts as a listener
/// delegated to every node: dispatching an event invokes it once per node
/// on the propagation path, with `target` the node the event originated at
/// and `at` the current propagation position (so an outside-click handler
/// can check target containment the way real pages do). The script may
/// mutate the document - open an option menu, close it, flip state. A
/// document with no script treats dispatch as a no-op, the degenerate case
/// of a static page.
pub trait PageScript: Send + Sync {
    fn on_event(&self, doc: &mut Document, target: NodeId, at: NodeId, event: &SyntheticEvent);
}
