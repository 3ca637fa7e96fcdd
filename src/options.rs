//! Capture tuning knobs

use serde::{Deserialize, Serialize};

/// Attributes copied into [`crate::ElementRecord::attributes`], in order
pub const DEFAULT_ATTRIBUTES: [&str; 13] = [
    "id",
    "name",
    "href",
    "type",
    "value",
    "placeholder",
    "title",
    "role",
    "tabindex",
    "aria-label",
    "aria-hidden",
    "alt",
    "src",
];

/// Tags that are interactive on their own, regardless of handlers or cursor
pub const DEFAULT_INTERACTIVE_TAGS: [&str; 7] =
    ["input", "textarea", "select", "button", "a", "iframe", "video"];

/// Options for [`crate::capture_with`]
///
/// Missing fields deserialize to their defaults, so a partial JSON object
/// such as `{"minArea": 100}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Minimum visible area, in square pixels after clipping
    pub min_area: f64,
    /// Longest selector kept before falling back to the bare tag name
    pub max_selector_len: usize,
    /// Attribute allow-list
    pub attributes: Vec<String>,
    /// Lowercase tag names that are always interactive
    pub interactive_tags: Vec<String>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            min_area: 20.0,
            max_selector_len: 200,
            attributes: DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            interactive_tags: DEFAULT_INTERACTIVE_TAGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
