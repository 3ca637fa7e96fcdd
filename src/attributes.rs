use std::collections::HashMap;

use tracing::warn;

use crate::document::NodeView;
use crate::errors::QueryError;

/// Copy the allow-listed attributes present on `node`.
///
/// All or nothing: if any lookup fails the node gets an empty map.
pub fn collect_attributes<N: NodeView>(node: &N, allow_list: &[String]) -> HashMap<String, String> {
    let collected: Result<HashMap<String, String>, QueryError> = allow_list
        .iter()
        .filter_map(|name| match node.attribute(name) {
            Ok(Some(value)) => Some(Ok((name.clone(), value))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        })
        .collect();

    collected.unwrap_or_else(|e| {
        warn!("Attribute collection failed, reporting none: {}", e);
        HashMap::new()
    })
}

/// `aria-label`, falling back to `aria-labelledby`
pub fn aria_label<N: NodeView>(node: &N) -> String {
    ["aria-label", "aria-labelledby"]
        .iter()
        .filter_map(|name| node.attribute(name).ok().flatten())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Trimmed text content with runs of two or more whitespace characters
/// collapsed to one space
pub fn normalized_text<N: NodeView>(node: &N) -> String {
    let content = node.text_content();
    let mut out = String::with_capacity(content.len());
    let mut run = String::new();

    for ch in content.trim().chars() {
        if ch.is_whitespace() {
            run.push(ch);
            continue;
        }
        match run.chars().count() {
            0 => {}
            1 => out.push_str(&run),
            _ => out.push(' '),
        }
        run.clear();
        out.push(ch);
    }

    out
}

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;
