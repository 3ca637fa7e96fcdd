// Unit tests for locator module

use super::*;
use crate::snapshot::{DocumentSnapshot, SnapshotBuilder, SnapshotNode};
use pretty_assertions::assert_eq;

/// document > html > body, returning (builder, body)
fn page() -> (SnapshotBuilder, NodeId) {
    let mut builder = SnapshotBuilder::new(1024.0, 768.0);
    let doc = builder.append(None, SnapshotNode::document());
    let html = builder.append(Some(doc), SnapshotNode::element("html"));
    let body = builder.append(Some(html), SnapshotNode::element("body"));
    (builder, body)
}

fn build(builder: SnapshotBuilder) -> DocumentSnapshot {
    builder.build().unwrap()
}

#[test]
fn test_selector_prefers_id() {
    let (mut b, body) = page();
    let button = b.append(
        Some(body),
        SnapshotNode::element("button")
            .attr("id", "go")
            .attr("class", "btn primary")
            .attr("name", "submit"),
    );
    let doc = build(b);

    assert_eq!(css_selector(&doc, button, 200), "#go");
}

#[test]
fn test_selector_combines_tag_classes_and_name() {
    let (mut b, body) = page();
    let input = b.append(
        Some(body),
        SnapshotNode::element("INPUT")
            .attr("class", "  form-control \n  big ")
            .attr("name", "email"),
    );
    let doc = build(b);

    assert_eq!(
        css_selector(&doc, input, 200),
        "input.form-control.big[name=\"email\"]"
    );
}

#[test]
fn test_selector_ignores_empty_id_and_blank_class() {
    let (mut b, body) = page();
    let link = b.append(
        Some(body),
        SnapshotNode::element("a").attr("id", "").attr("class", "   "),
    );
    let doc = build(b);

    assert_eq!(css_selector(&doc, link, 200), "a");
}

#[test]
fn test_overlong_selector_falls_back_to_tag() {
    let classes = (0..40).map(|i| format!("utility-{i}")).collect::<Vec<_>>().join(" ");
    let (mut b, body) = page();
    let div = b.append(Some(body), SnapshotNode::element("div").attr("class", &classes));
    let doc = build(b);

    assert!(format!("div.{}", classes.replace(' ', ".")).len() > 200);
    assert_eq!(css_selector(&doc, div, 200), "div");
}

#[test]
fn test_selector_at_exact_limit_is_kept() {
    // "div." + 196 chars = 200
    let class = "x".repeat(196);
    let (mut b, body) = page();
    let div = b.append(Some(body), SnapshotNode::element("div").attr("class", &class));
    let doc = build(b);

    assert_eq!(css_selector(&doc, div, 200), format!("div.{class}"));
}

#[test]
fn test_non_element_locators_are_empty() {
    let (mut b, body) = page();
    let text = b.append(Some(body), SnapshotNode::text_node("hello"));
    let doc = build(b);

    assert_eq!(css_selector(&doc, text, 200), "");
    assert_eq!(xpath(&doc, text), "");
    assert_eq!(xpath(&doc, NodeId(0)), "");
}

#[test]
fn test_xpath_counts_same_tag_siblings() {
    let (mut b, body) = page();
    b.append(Some(body), SnapshotNode::element("div"));
    b.append(Some(body), SnapshotNode::element("p"));
    let div = b.append(Some(body), SnapshotNode::element("div"));
    let ul = b.append(Some(div), SnapshotNode::element("ul"));
    b.append(Some(ul), SnapshotNode::element("li"));
    b.append(Some(ul), SnapshotNode::text_node("\n"));
    b.append(Some(ul), SnapshotNode::element("li"));
    let li = b.append(Some(ul), SnapshotNode::element("LI"));
    let link = b.append(Some(li), SnapshotNode::element("a"));
    let doc = build(b);

    assert_eq!(xpath(&doc, link), "/html[1]/body[1]/div[2]/ul[1]/li[3]/a[1]");
}

#[test]
fn test_xpath_stops_at_nearest_id() {
    let (mut b, body) = page();
    let main = b.append(Some(body), SnapshotNode::element("main").attr("id", "content"));
    let ul = b.append(Some(main), SnapshotNode::element("ul"));
    b.append(Some(ul), SnapshotNode::element("li"));
    let li = b.append(Some(ul), SnapshotNode::element("li"));
    let doc = build(b);

    assert_eq!(xpath(&doc, li), "/*[@id=\"content\"]/ul[1]/li[2]");
    assert_eq!(xpath(&doc, main), "/*[@id=\"content\"]");
}

#[test]
fn test_element_tag_is_lowercase() {
    assert_eq!(element_tag(&SnapshotNode::element("BUTTON")), "button");
    assert_eq!(element_tag(&SnapshotNode::text_node("BUTTON")), "");
}
