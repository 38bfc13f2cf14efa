//! Document-side request dispatcher.
//!
//! Owns the live document and serves the transport actions against it:
//! scans on demand, single and batch writes, and the eager on-load scan
//! that announces itself with a `formFieldsReady` push.

use tracing::{debug, info, warn};

use formpilot_protocols::error::{ServiceError, TransportError};
use formpilot_protocols::message::{FieldWrite, Notification, Request, Response};
use formpilot_protocols::model::{FieldValue, FormModel};
use formpilot_protocols::transport::Transport;

use crate::dom::Document;
use crate::scan::{ScanConfig, Scanner};
use crate::write;

/// Serves form-discovery and write-back requests against one document.
pub struct FormService {
    document: Document,
    scanner: Scanner,
    cached: Option<FormModel>,
}

impl FormService {
    pub fn new(document: Document, config: ScanConfig) -> Self {
        Self {
            document,
            scanner: Scanner::new(config),
            cached: None,
        }
    }

    /// Handle one request. Never fails: structural misses are reported in
    /// the response value.
    pub async fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::GetFormFields => {
                // Models are fresh per scan; the cache only serves the
                // push-notified snapshot.
                let model = self.scanner.scan(&mut self.document).await;
                self.cached = Some(model.clone());
                Response::FormFields(model)
            }
            Request::UpdateField { label, value } => {
                let found = write::write(&mut self.document, &label, &value);
                Response::ack(found)
            }
            Request::FillFormFields { fields } => {
                let missed = write::write_all(&mut self.document, &fields);
                if !missed.is_empty() {
                    warn!("Batch fill missed labels: {:?}", missed);
                }
                // Best-effort batch: partial application still acknowledges.
                Response::ack(true)
            }
            Request::AutofillForm { form_data } => {
                let writes: Vec<FieldWrite> = form_data
                    .into_iter()
                    .map(|(label, value)| FieldWrite {
                        label,
                        value: FieldValue::from_json(value),
                    })
                    .collect();
                let missed = write::write_all(&mut self.document, &writes);
                if !missed.is_empty() {
                    warn!("Autofill missed labels: {:?}", missed);
                }
                Response::ack(true)
            }
        }
    }

    /// Decode and handle a raw JSON request.
    pub async fn handle_json(&mut self, raw: &str) -> Result<Response, ServiceError> {
        let request: Request =
            serde_json::from_str(raw).map_err(|e| ServiceError::InvalidRequest(e.to_string()))?;
        debug!("Dispatching {:?}", request);
        Ok(self.handle(request).await)
    }

    /// Scan triggered automatically on load: caches the model, then pushes
    /// `formFieldsReady` so the UI surface knows the snapshot is safe to
    /// pull.
    pub async fn run_eager_scan(&mut self, transport: &dyn Transport) -> Result<(), TransportError> {
        let model = self.scanner.scan(&mut self.document).await;
        info!(
            "Eager scan complete: {} fields in {} sections",
            model.field_count(),
            model.sections.len()
        );
        self.cached = Some(model);
        transport.notify(Notification::FormFieldsReady).await
    }

    /// The snapshot produced by the most recent scan, if any. May be stale
    /// with respect to the live document.
    pub fn cached_model(&self) -> Option<&FormModel> {
        self.cached.as_ref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
