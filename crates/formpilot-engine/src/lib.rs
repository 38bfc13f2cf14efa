//! Form discovery and write-back engine.
//!
//! Discovers the logical structure of an already-rendered document -
//! grouping scattered input controls into labeled sections and fields -
//! and later writes values back into those controls so that the host
//! page's own reactive logic observes the update.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   scan    ┌─────────────────────────────┐
//! │ Document  │ ────────► │ Scanner ─ Classifier ─ Probe │ ──► FormModel
//! │  (arena)  │           └─────────────────────────────┘      (snapshot)
//! │           │   write   ┌─────────────┐
//! │           │ ◄──────── │ FieldWriter │ ◄── label/value pairs
//! └───────────┘           └─────────────┘
//! ```
//!
//! The scanner walks the tree pre-order, assigns fields to the nearest
//! heading-delimited section, and - in eager mode - opens each custom
//! dropdown in place to harvest its options before moving on. The writer
//! resolves labels against the *live* document, which may have changed
//! since the scan: the model is a value snapshot, never the write target.
//!
//! All structural failure modes degrade to empty or false results; no
//! operation here is fatal to the hosting process.

pub mod dom;
pub mod probe;
pub mod scan;
pub mod service;
pub mod write;

pub use dom::{Document, DomNode, EventKind, NodeAttributes, NodeId, NodeSpec, PageScript, SyntheticEvent};
pub use probe::{probe_options, ProbeConfig};
pub use scan::{classify, ProbeMode, ScanConfig, Scanner};
pub use service::FormService;
pub use write::{write, write_all};
