// Unit tests for attributes module

use super::*;
use crate::document::{ClientRect, NodeId, NodeKind};
use crate::options::CaptureOptions;
use crate::snapshot::SnapshotNode;
use pretty_assertions::assert_eq;

/// A node whose attribute reads fail after the first one
struct FlakyNode;

impl NodeView for FlakyNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Element
    }
    fn tag_name(&self) -> &str {
        "A"
    }
    fn attribute(&self, name: &str) -> Result<Option<String>, QueryError> {
        if name == "id" {
            Ok(Some("first".to_string()))
        } else {
            Err(QueryError::Host("attribute access denied".to_string()))
        }
    }
    fn text_content(&self) -> String {
        String::new()
    }
    fn has_click_handler(&self) -> bool {
        false
    }
    fn computed_style(&self, _property: &str) -> Result<Option<String>, QueryError> {
        Ok(None)
    }
    fn client_rects(&self) -> Result<Vec<ClientRect>, QueryError> {
        Ok(Vec::new())
    }
    fn parent(&self) -> Option<NodeId> {
        None
    }
    fn previous_element_sibling(&self) -> Option<NodeId> {
        None
    }
}

#[test]
fn test_collects_only_present_allow_listed_attributes() {
    let node = SnapshotNode::element("input")
        .attr("type", "email")
        .attr("placeholder", "you@example.com")
        .attr("data-testid", "email")
        .attr("aria-hidden", "false");

    let attrs = collect_attributes(&node, &CaptureOptions::default().attributes);

    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs["type"], "email");
    assert_eq!(attrs["placeholder"], "you@example.com");
    assert_eq!(attrs["aria-hidden"], "false");
    assert!(!attrs.contains_key("data-testid"));
}

#[test]
fn test_empty_attribute_values_are_kept() {
    let node = SnapshotNode::element("input").attr("value", "");
    let attrs = collect_attributes(&node, &CaptureOptions::default().attributes);
    assert_eq!(attrs.get("value").map(String::as_str), Some(""));
}

#[test]
fn test_failed_lookup_yields_empty_map() {
    let attrs = collect_attributes(&FlakyNode, &CaptureOptions::default().attributes);
    assert!(attrs.is_empty());
}

#[test]
fn test_aria_label_falls_back_to_labelledby() {
    let labelled = SnapshotNode::element("button").attr("aria-label", "Close");
    assert_eq!(aria_label(&labelled), "Close");

    let by_ref = SnapshotNode::element("button").attr("aria-labelledby", "dialog-title");
    assert_eq!(aria_label(&by_ref), "dialog-title");

    assert_eq!(aria_label(&SnapshotNode::element("button")), "");
    assert_eq!(aria_label(&FlakyNode), "");
}

#[test]
fn test_text_collapses_whitespace_runs() {
    let node = SnapshotNode::text_node("  Sign   in\n\n  now\tplease ");
    assert_eq!(normalized_text(&node), "Sign in now\tplease");
}
