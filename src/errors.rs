use thiserror::Error;

use crate::document::NodeId;

/// A read-only query against a single node failed.
///
/// These never reach the caller of [`crate::capture`]; each stage applies its
/// own fallback (visible, empty attributes, empty cursor) and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The handle does not resolve to a node in this document
    #[error("node {0} is not part of this document")]
    UnknownNode(NodeId),
    /// The node cannot answer this query (e.g. style on a text node)
    #[error("node {node} does not support {query}")]
    Unsupported { node: NodeId, query: &'static str },
    /// The host binding failed to answer
    #[error("host query failed: {0}")]
    Host(String),
}

/// The document as a whole cannot be observed.
///
/// This is the only class of error a capture surfaces; ensuring a live
/// document exists before capturing is the caller's job.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("document tree is unavailable: {0}")]
    TreeUnavailable(String),
    #[error("viewport size is unavailable: {0}")]
    ViewportUnavailable(String),
}

/// A serialized [`crate::snapshot::DocumentSnapshot`] could not be loaded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Parents must precede their children in the node list
    #[error("node {node} references parent {parent}, which does not precede it")]
    InvalidParent { node: usize, parent: usize },
    #[error("node {node} is a {kind:?} node and cannot have children")]
    ParentNotContainer {
        node: usize,
        kind: crate::document::NodeKind,
    },
}
