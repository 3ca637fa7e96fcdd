//! Best-effort locators for re-finding an element later.
//!
//! Neither the selector nor the path is guaranteed to be unique; both are
//! hints for a downstream agent, not resolution keys.

use crate::document::{DocumentContext, NodeId, NodeKind, NodeView};

/// Lowercase tag name of an element node, empty for anything else
pub fn element_tag<N: NodeView>(node: &N) -> String {
    if node.kind() == NodeKind::Element {
        node.tag_name().to_ascii_lowercase()
    } else {
        String::new()
    }
}

fn non_empty_attribute<N: NodeView>(node: &N, name: &str) -> Option<String> {
    node.attribute(name)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

/// Short CSS selector: `#id`, or `tag.class1.class2[name="..."]`.
///
/// A selector longer than `max_len` characters collapses to the bare tag.
pub fn css_selector<C: DocumentContext>(ctx: &C, id: NodeId, max_len: usize) -> String {
    let Some(node) = ctx.node(id) else {
        return String::new();
    };
    if node.kind() != NodeKind::Element {
        return String::new();
    }

    if let Some(element_id) = non_empty_attribute(node, "id") {
        return format!("#{element_id}");
    }

    let tag = element_tag(node);
    let mut selector = tag.clone();

    if let Some(class_name) = non_empty_attribute(node, "class") {
        let tokens: Vec<&str> = class_name.split_whitespace().collect();
        if !tokens.is_empty() {
            selector.push('.');
            selector.push_str(&tokens.join("."));
        }
    }

    if let Some(name) = non_empty_attribute(node, "name") {
        selector.push_str(&format!("[name=\"{name}\"]"));
    }

    if selector.chars().count() > max_len {
        return tag;
    }
    selector
}

/// Structural path from the nearest id-bearing ancestor (or the root) down
/// to the node, e.g. `/*[@id="main"]/ul[1]/li[3]/a[1]`.
pub fn xpath<C: DocumentContext>(ctx: &C, id: NodeId) -> String {
    let mut steps: Vec<String> = Vec::new();
    let mut current = Some(id);

    while let Some(node_id) = current {
        let Some(node) = ctx.node(node_id) else {
            break;
        };
        if node.kind() != NodeKind::Element {
            break;
        }

        if let Some(element_id) = non_empty_attribute(node, "id") {
            steps.push(format!("/*[@id=\"{element_id}\"]"));
            break;
        }

        let tag = node.tag_name();
        let mut nth = 1;
        let mut sibling = node.previous_element_sibling();
        while let Some(sibling_id) = sibling {
            let Some(sib) = ctx.node(sibling_id) else {
                break;
            };
            if sib.tag_name().eq_ignore_ascii_case(tag) {
                nth += 1;
            }
            sibling = sib.previous_element_sibling();
        }
        steps.push(format!("/{}[{}]", tag.to_ascii_lowercase(), nth));

        current = node.parent();
    }

    steps.reverse();
    steps.concat()
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;
