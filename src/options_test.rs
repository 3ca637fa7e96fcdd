// Unit tests for options module

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let options = CaptureOptions::default();
    assert_eq!(options.min_area, 20.0);
    assert_eq!(options.max_selector_len, 200);
    assert_eq!(options.attributes.len(), 13);
    assert!(options.interactive_tags.contains(&"iframe".to_string()));
}

#[test]
fn test_partial_json_fills_defaults() {
    let options: CaptureOptions = serde_json::from_str(r#"{"minArea": 100}"#).unwrap();
    assert_eq!(options.min_area, 100.0);
    assert_eq!(options.max_selector_len, 200);
    assert_eq!(options.attributes[0], "id");
}
