use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One viewport-clipped rectangle of an element, in whole CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Aggregate click point of an element
///
/// Both coordinates are `None` (serialized as `null`) when none of the
/// element's rectangles survived clipping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Center {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Center {
    pub fn point(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }
}

/// An interactive element, detached from the document it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    /// Ordinal position in the capture (0-based, dense)
    pub index: usize,
    /// Lowercase tag name
    #[serde(rename = "type")]
    pub element_type: String,
    /// Trimmed text content with whitespace runs collapsed
    pub text: String,
    pub aria_label: String,
    /// Allow-listed attributes present on the element
    pub attributes: HashMap<String, String>,
    pub css_selector: String,
    pub xpath: String,
    pub visible: bool,
    pub computed_cursor: String,
    /// Sum of the clipped rectangle areas
    pub area: f64,
    pub rects: Vec<Rect>,
    pub center: Center,
}

/// Page-level context, captured once per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    pub url: String,
    pub title: String,
    /// ISO-8601 UTC capture time
    pub timestamp: String,
}

/// Everything a capture returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResult {
    pub page_info: PageContext,
    pub elements: Vec<ElementRecord>,
}

impl CaptureResult {
    /// Look up an element by its ordinal index
    pub fn element(&self, index: usize) -> Option<&ElementRecord> {
        self.elements.get(index)
    }

    /// Click point for the element at `index`, if it has one
    pub fn center_of(&self, index: usize) -> Option<(f64, f64)> {
        self.element(index).and_then(|el| el.center.point())
    }

    /// JSON rendering with the camelCase field names agents expect
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
