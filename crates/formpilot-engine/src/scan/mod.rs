//! Document traversal and section grouping.
//!
//! The scanner walks the document pre-order, opening a section wherever a
//! heading-delimited container starts and pairing labels with controls via
//! the first-match heuristic. Each node independently re-tests its subtree
//! for markers, so cost grows with node count times average subtree size;
//! quadratic on pathological wide/shallow trees and accepted for typical
//! form pages.

mod classifier;
pub(crate) mod matcher;

pub use classifier::classify;

use std::collections::HashSet;

use tracing::debug;

use formpilot_protocols::model::{Field, FormModel, Section, GENERAL_SECTION_TITLE};

use crate::dom::{Document, NodeId};
use crate::probe::{probe_options, ProbeConfig};

/// Whether a scan opens custom dropdowns to harvest their options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Structure only; option lists stay empty.
    None,
    /// Probe each dropdown as it is classified, awaited in place.
    #[default]
    Eager,
}

/// Scan configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub probing: ProbeMode,
    pub probe: ProbeConfig,
}

/// Per-scan context: output sections, the synthetic catch-all, and the
/// processed-label set that enforces the one-field-per-label invariant.
struct ScanSession {
    sections: Vec<Section>,
    general: Option<usize>,
    seen: HashSet<String>,
}

impl ScanSession {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            general: None,
            seen: HashSet::new(),
        }
    }

    fn open_section(&mut self, title: String) -> usize {
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    /// First occurrence wins; returns false for labels already recorded.
    /// Empty text is a valid key, so multiple unlabeled fields collapse.
    fn mark_seen(&mut self, label: &str) -> bool {
        self.seen.insert(label.to_string())
    }

    fn push_field(&mut self, active: Option<usize>, field: Field) {
        let index = match active {
            Some(index) => index,
            None => match self.general {
                Some(index) => index,
                None => {
                    let index = self.open_section(GENERAL_SECTION_TITLE.to_string());
                    self.general = Some(index);
                    index
                }
            },
        };
        self.sections[index].fields.push(field);
    }

    fn into_model(self) -> FormModel {
        FormModel {
            sections: self.sections,
        }
    }
}

/// Discovers the form structure of a document.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the whole document, honoring the configured probe mode.
    /// Probing is strictly sequential: the open option menu is global UI
    /// state, so each probe is awaited before the walk moves on, and field
    /// order always matches document order regardless of probe timing.
    pub async fn scan(&self, doc: &mut Document) -> FormModel {
        let root = doc.root();
        self.scan_from(doc, root).await
    }

    /// Scan the subtree rooted at `root`.
    pub async fn scan_from(&self, doc: &mut Document, root: NodeId) -> FormModel {
        match self.config.probing {
            ProbeMode::None => self.scan_static_from(doc, root),
            ProbeMode::Eager => self.scan_probing(doc, root).await,
        }
    }

    /// Synchronous scan without dropdown probing.
    pub fn scan_static(&self, doc: &Document) -> FormModel {
        self.scan_static_from(doc, doc.root())
    }

    /// Synchronous scan of a subtree without dropdown probing.
    pub fn scan_static_from(&self, doc: &Document, root: NodeId) -> FormModel {
        let mut session = ScanSession::new();
        // Pre-order walk; each stack entry carries the active-section
        // context its subtree inherits.
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(root, None)];
        while let Some((node, mut active)) = stack.pop() {
            if let Some((field, _control)) = Self::visit(doc, node, &mut active, &mut session) {
                session.push_field(active, field);
            }
            for child in doc.children(node).iter().rev() {
                stack.push((*child, active));
            }
        }
        let model = session.into_model();
        debug!(
            "Static scan found {} fields in {} sections",
            model.field_count(),
            model.sections.len()
        );
        model
    }

    async fn scan_probing(&self, doc: &mut Document, root: NodeId) -> FormModel {
        let mut session = ScanSession::new();
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(root, None)];
        while let Some((node, mut active)) = stack.pop() {
            if let Some((mut field, control)) = Self::visit(doc, node, &mut active, &mut session) {
                if field.field_type.has_options() {
                    let options = probe_options(doc, control, &self.config.probe).await;
                    if options.is_empty() {
                        debug!("No options rendered for {:?}", field.label);
                    }
                    field.options = Some(options);
                }
                session.push_field(active, field);
            }
            // Children are gathered after any probe so menu cleanup is
            // reflected in the continued walk.
            for child in doc.children(node).iter().rev() {
                stack.push((*child, active));
            }
        }
        let model = session.into_model();
        debug!(
            "Probing scan found {} fields in {} sections",
            model.field_count(),
            model.sections.len()
        );
        model
    }

    /// Apply the section and field marker tests at one node. A discovered
    /// field is returned rather than pushed so the probing walk can await
    /// the option harvest before recording it.
    fn visit(
        doc: &Document,
        node: NodeId,
        active: &mut Option<usize>,
        session: &mut ScanSession,
    ) -> Option<(Field, NodeId)> {
        if active.is_none() {
            if let Some(title) = matcher::section_title(doc, node) {
                *active = Some(session.open_section(title));
            }
        }

        let (label, control) = matcher::match_field(doc, node)?;
        let label_text = doc.text_content(label);
        if !session.mark_seen(&label_text) {
            return None;
        }

        let field = classify(doc, control, &label_text);
        Some((field, control))
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
