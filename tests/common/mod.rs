// Common test utilities and fixtures

use pagemark::{CaptureResult, DocumentSnapshot, NodeId, SnapshotBuilder, SnapshotNode};

/// Install a test log writer once; honours RUST_LOG (e.g. `pagemark=debug`)
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load a snapshot from `tests/fixtures/`
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> DocumentSnapshot {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let json = std::fs::read_to_string(&path).expect("Failed to read fixture");
    DocumentSnapshot::from_json(&json).expect("Failed to parse fixture")
}

/// An empty page: document > html > body, all covering the viewport.
/// Returns the builder and the body handle.
#[allow(dead_code)]
pub fn blank_page(width: f64, height: f64) -> (SnapshotBuilder, NodeId) {
    let mut builder = SnapshotBuilder::new(width, height)
        .url("https://example.test/")
        .title("Test Page");
    let doc = builder.append(None, SnapshotNode::document());
    let html = builder.append(
        Some(doc),
        SnapshotNode::element("html").rect(0.0, 0.0, width, height),
    );
    let body = builder.append(
        Some(html),
        SnapshotNode::element("body").rect(0.0, 0.0, width, height),
    );
    (builder, body)
}

/// Selectors of the captured elements, in output order
#[allow(dead_code)]
pub fn selectors(result: &CaptureResult) -> Vec<&str> {
    result
        .elements
        .iter()
        .map(|e| e.css_selector.as_str())
        .collect()
}
