use std::sync::Mutex;

use async_trait::async_trait;

use formpilot_protocols::error::TransportError;
use formpilot_protocols::message::{FieldWrite, Notification, Request, Response};
use formpilot_protocols::model::{FieldValue, FieldType};
use formpilot_protocols::transport::Transport;

use super::*;
use crate::dom::DomNode;
use crate::scan::ProbeMode;

struct MockTransport {
    sent: Mutex<Vec<Notification>>,
    fail: bool,
}

impl MockTransport {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn notify(&self, notification: Notification) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::Closed);
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

fn sample_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let section = doc.append_child(root, DomNode::element("div"));
    doc.append_child(
        section,
        DomNode::element("span").with_role("body").with_text("Shipping"),
    );
    let field = doc.append_child(section, DomNode::element("div"));
    doc.append_child(field, DomNode::element("label").with_text("Port *"));
    let wrap = doc.append_child(field, DomNode::element("div"));
    doc.append_child(wrap, DomNode::element("input").with_input_type("text"));

    let notify = doc.append_child(root, DomNode::element("div"));
    doc.append_child(notify, DomNode::element("label").with_text("Notify"));
    let wrap = doc.append_child(notify, DomNode::element("div"));
    doc.append_child(wrap, DomNode::element("input").with_input_type("checkbox"));

    doc
}

fn service() -> FormService {
    FormService::new(
        sample_document(),
        ScanConfig {
            probing: ProbeMode::None,
            ..ScanConfig::default()
        },
    )
}

#[tokio::test]
async fn test_get_form_fields() {
    let mut service = service();
    let response = service.handle(Request::GetFormFields).await;

    let Response::FormFields(model) = response else {
        panic!("Expected a form model response");
    };
    assert_eq!(model.sections.len(), 2);
    assert_eq!(model.sections[0].title, "Shipping");
    assert!(model.field("Port *").unwrap().required);
    assert_eq!(
        model.field("Notify").unwrap().field_type,
        FieldType::Checkbox
    );
}

#[tokio::test]
async fn test_update_field_reports_outcome() {
    let mut service = service();

    let hit = service
        .handle(Request::UpdateField {
            label: "Port *".to_string(),
            value: FieldValue::Text("Alexandria".to_string()),
        })
        .await;
    assert_eq!(hit, Response::ack(true));

    let miss = service
        .handle(Request::UpdateField {
            label: "Nonexistent".to_string(),
            value: FieldValue::Text("x".to_string()),
        })
        .await;
    assert_eq!(miss, Response::ack(false));
}

#[tokio::test]
async fn test_fill_form_fields_is_best_effort() {
    let mut service = service();

    let response = service
        .handle(Request::FillFormFields {
            fields: vec![
                FieldWrite::new("Missing", "ignored"),
                FieldWrite::new("Port *", "Sokhna"),
            ],
        })
        .await;

    // Partial coverage still acknowledges; the hit landed.
    assert_eq!(response, Response::ack(true));
    let Response::FormFields(model) = service.handle(Request::GetFormFields).await else {
        panic!("Expected a form model response");
    };
    assert_eq!(
        model.field("Port *").unwrap().value,
        FieldValue::Text("Sokhna".to_string())
    );
}

#[tokio::test]
async fn test_autofill_form_flat_map() {
    let mut service = service();

    let mut form_data = serde_json::Map::new();
    form_data.insert("Port *".to_string(), serde_json::json!("Damietta"));
    form_data.insert("Notify".to_string(), serde_json::json!(true));

    let response = service.handle(Request::AutofillForm { form_data }).await;
    assert_eq!(response, Response::ack(true));

    let Response::FormFields(model) = service.handle(Request::GetFormFields).await else {
        panic!("Expected a form model response");
    };
    assert_eq!(
        model.field("Port *").unwrap().value,
        FieldValue::Text("Damietta".to_string())
    );
    assert_eq!(model.field("Notify").unwrap().value, FieldValue::Bool(true));
}

#[tokio::test]
async fn test_eager_scan_pushes_ready_and_caches() {
    let mut service = service();
    let transport = MockTransport::new();

    assert!(service.cached_model().is_none());
    service.run_eager_scan(&transport).await.unwrap();

    assert_eq!(
        *transport.sent.lock().unwrap(),
        vec![Notification::FormFieldsReady]
    );
    let cached = service.cached_model().expect("model cached after scan");
    assert_eq!(cached.field_count(), 2);
}

#[tokio::test]
async fn test_eager_scan_surfaces_transport_failure() {
    let mut service = service();
    let transport = MockTransport {
        sent: Mutex::new(Vec::new()),
        fail: true,
    };

    let result = service.run_eager_scan(&transport).await;
    assert!(result.is_err());
    // The scan itself does not depend on the transport succeeding.
    assert!(service.cached_model().is_some());
}

#[tokio::test]
async fn test_handle_json_round_trip() {
    let mut service = service();
    let response = service
        .handle_json(r#"{"action":"getFormFields"}"#)
        .await
        .unwrap();
    assert!(matches!(response, Response::FormFields(_)));
}

#[tokio::test]
async fn test_handle_json_rejects_unknown_action() {
    let mut service = service();
    let result = service.handle_json(r#"{"action":"explodePage"}"#).await;
    assert!(result.is_err());
}
