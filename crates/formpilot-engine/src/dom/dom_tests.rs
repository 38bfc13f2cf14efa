use std::sync::{Arc, Mutex};

use super::*;

fn small_doc() -> (Document, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let section = doc.append_child(root, DomNode::element("div").with_class("section"));
    let label = doc.append_child(section, DomNode::element("label").with_text("Port *"));
    let wrap = doc.append_child(section, DomNode::element("div"));
    let input = doc.append_child(wrap, DomNode::element("input").with_input_type("text"));
    let _ = label;
    (doc, section, wrap, input)
}

#[test]
fn test_preorder_walk() {
    let (doc, section, wrap, input) = small_doc();
    let order = doc.walk();
    assert_eq!(order[0], doc.root());
    assert_eq!(order[1], section);
    // label comes before the wrapper and its input
    assert_eq!(order[3], wrap);
    assert_eq!(order[4], input);
}

#[test]
fn test_next_sibling() {
    let (doc, section, wrap, _) = small_doc();
    let label = doc.children(section)[0];
    assert_eq!(doc.next_sibling(label), Some(wrap));
    assert_eq!(doc.next_sibling(wrap), None);
    assert_eq!(doc.next_sibling(doc.root()), None);
}

#[test]
fn test_ancestors_nearest_first() {
    let (doc, section, wrap, input) = small_doc();
    assert_eq!(doc.ancestors(input), vec![wrap, section, doc.root()]);
}

#[test]
fn test_text_content_concatenates_and_trims() {
    let mut doc = Document::new();
    let root = doc.root();
    let span = doc.append_child(root, DomNode::element("span").with_text("  Port"));
    doc.append_child(span, DomNode::element("span").with_text(" *  "));
    assert_eq!(doc.text_content(span), "Port *");
}

#[test]
fn test_detach_unreachable_from_root() {
    let (mut doc, section, _, _) = small_doc();
    doc.detach(section);
    assert_eq!(doc.walk(), vec![doc.root()]);
    // The arena entry stays valid.
    assert_eq!(doc.node(section).tag, "div");
    assert_eq!(doc.parent(section), None);
}

#[test]
fn test_class_token_predicate() {
    let node = DomNode::element("span").with_class("MuiTypography-root MuiTypography-body2");
    assert!(node.attributes.class_token(|t| t.contains("body")));
    assert!(!node.attributes.class_token(|t| t.contains("subheading")));
}

struct Recorder {
    seen: Mutex<Vec<(NodeId, EventKind)>>,
}

impl PageScript for Recorder {
    fn on_event(&self, _doc: &mut Document, _target: NodeId, at: NodeId, event: &SyntheticEvent) {
        self.seen.lock().unwrap().push((at, event.kind.clone()));
    }
}

#[test]
fn test_bubbling_dispatch_reaches_ancestors() {
    let (mut doc, section, wrap, input) = small_doc();
    let recorder = Arc::new(Recorder {
        seen: Mutex::new(Vec::new()),
    });
    doc.set_script(recorder.clone());

    doc.dispatch(input, &SyntheticEvent::bubbling(EventKind::Change));

    let seen = recorder.seen.lock().unwrap();
    let path: Vec<NodeId> = seen.iter().map(|(n, _)| *n).collect();
    assert_eq!(path, vec![input, wrap, section, doc.root()]);
    assert!(seen.iter().all(|(_, k)| *k == EventKind::Change));
}

#[test]
fn test_direct_dispatch_stops_at_target() {
    let (mut doc, _, _, input) = small_doc();
    let recorder = Arc::new(Recorder {
        seen: Mutex::new(Vec::new()),
    });
    doc.set_script(recorder.clone());

    doc.dispatch(input, &SyntheticEvent::direct(EventKind::Click));

    assert_eq!(recorder.seen.lock().unwrap().len(), 1);
}

#[test]
fn test_dispatch_without_script_is_noop() {
    let (mut doc, _, _, input) = small_doc();
    doc.dispatch(input, &SyntheticEvent::bubbling(EventKind::Click));
}

#[test]
fn test_focus_tracks_and_notifies() {
    let (mut doc, _, _, input) = small_doc();
    let recorder = Arc::new(Recorder {
        seen: Mutex::new(Vec::new()),
    });
    doc.set_script(recorder.clone());

    doc.focus(input);

    assert_eq!(doc.focused(), Some(input));
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], (input, EventKind::Focus));
}

#[test]
fn test_from_spec_round_trip() {
    let raw = r#"{
        "tag": "body",
        "children": [
            {
                "tag": "div",
                "attrs": {"class": "field"},
                "children": [
                    {"tag": "label", "text": "Notify"},
                    {"tag": "div", "children": [
                        {"tag": "input", "attrs": {"type": "checkbox"}, "checked": true}
                    ]}
                ]
            }
        ]
    }"#;

    let doc = Document::from_json(raw).unwrap();
    let checkbox = doc
        .find(|d, n| d.node(n).tag == "input")
        .expect("input present");
    assert!(doc.node(checkbox).checked);
    assert_eq!(
        doc.node(checkbox).attributes.input_type.as_deref(),
        Some("checkbox")
    );

    let label = doc.find(|d, n| d.node(n).tag == "label").unwrap();
    assert_eq!(doc.text_content(label), "Notify");
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(Document::from_json("not json").is_err());
}
