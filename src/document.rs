//! Read-only view of a host document.
//!
//! A capture never touches the page directly. Everything it knows about the
//! document comes through [`DocumentContext`] (tree enumeration, hit testing,
//! viewport and page info) and [`NodeView`] (per-node queries). Nodes are
//! addressed by [`NodeId`] handles into the host's own node table, so no
//! node reference can end up in the returned data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DocumentError, QueryError};

/// Opaque handle to a node in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// DOM node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Element,
    Text,
    Comment,
    Document,
    Other,
}

/// An unclipped client rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    pub fn top(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    pub fn bottom(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// Inclusive point containment
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &ClientRect) -> ClientRect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        ClientRect::new(left, top, right - left, bottom - top)
    }
}

/// Layout viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Per-node queries a capture needs from the host
pub trait NodeView {
    fn kind(&self) -> NodeKind;

    /// Tag name as the host reports it (any case); empty for non-elements
    fn tag_name(&self) -> &str;

    /// Attribute value, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Result<Option<String>, QueryError>;

    /// Concatenated text of the node and its descendants
    fn text_content(&self) -> String;

    /// Whether a primitive click handler (`onclick`) is registered
    fn has_click_handler(&self) -> bool;

    /// Computed style property value, `None` when the host has no value
    fn computed_style(&self, property: &str) -> Result<Option<String>, QueryError>;

    fn client_rects(&self) -> Result<Vec<ClientRect>, QueryError>;

    /// Union of the non-empty client rects; the first rect when every one
    /// is empty, the zero rect when there are none
    fn bounding_client_rect(&self) -> Result<ClientRect, QueryError> {
        let rects = self.client_rects()?;
        let mut sized = rects.iter().filter(|r| r.width != 0.0 && r.height != 0.0);
        Ok(match sized.next() {
            Some(first) => sized.fold(*first, |acc, r| acc.union(r)),
            None => rects.first().copied().unwrap_or_default(),
        })
    }

    fn parent(&self) -> Option<NodeId>;

    fn previous_element_sibling(&self) -> Option<NodeId>;
}

/// Document-level queries a capture needs from the host
pub trait DocumentContext {
    type Node: NodeView;

    /// Every node in the tree
    fn node_ids(&self) -> Result<Vec<NodeId>, DocumentError>;

    fn node(&self, id: NodeId) -> Option<&Self::Node>;

    /// Topmost rendered node at a viewport point
    fn element_from_point(&self, x: f64, y: f64) -> Result<Option<NodeId>, QueryError>;

    fn viewport(&self) -> Result<Viewport, DocumentError>;

    fn url(&self) -> Result<String, QueryError>;

    fn title(&self) -> Result<String, QueryError>;

    /// Like `Node.contains`: true when `node` is `ancestor` or lies beneath it
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent());
        }
        false
    }

    fn require(&self, id: NodeId) -> Result<&Self::Node, QueryError> {
        self.node(id).ok_or(QueryError::UnknownNode(id))
    }
}
