//! In-memory document binding.
//!
//! A [`DocumentSnapshot`] is a flat, serializable copy of a rendered page:
//! every node with its attributes, computed style, client rects, parent link
//! and stacking order. It answers the same queries a live page would,
//! including hit testing, so a capture can run against a page that was
//! serialized elsewhere (or built by hand in tests).
//!
//! Nodes must be listed in document order, parents before children.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{ClientRect, DocumentContext, NodeId, NodeKind, NodeView, Viewport};
use crate::errors::{DocumentError, QueryError, SnapshotError};

/// CSS initial values for the properties a capture reads
fn initial_style_value(property: &str) -> Option<&'static str> {
    match property {
        "display" => Some("inline"),
        "visibility" => Some("visible"),
        "opacity" => Some("1"),
        "cursor" => Some("auto"),
        "pointer-events" => Some("auto"),
        _ => None,
    }
}

/// One node of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotNode {
    pub kind: NodeKind,
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// Character data of text and comment nodes
    pub text: String,
    pub onclick: bool,
    /// Computed style, property name to value
    pub style: BTreeMap<String, String>,
    pub rects: Vec<ClientRect>,
    pub parent: Option<usize>,
    /// Stacking order; inherited from the parent when unset
    pub z_index: Option<i32>,
    /// Set by the producer when style or geometry could not be read
    pub query_error: Option<String>,

    #[serde(skip)]
    id: usize,
    #[serde(skip)]
    previous_sibling: Option<usize>,
    #[serde(skip)]
    text_content: String,
    #[serde(skip)]
    effective_z: i32,
    #[serde(skip)]
    display_none_ancestor: bool,
}

impl SnapshotNode {
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn text_node(text: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn document() -> Self {
        Self {
            kind: NodeKind::Document,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.style.insert(property.to_string(), value.to_string());
        self
    }

    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rects.push(ClientRect::new(x, y, width, height));
        self
    }

    pub fn onclick(mut self) -> Self {
        self.onclick = true;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    pub fn query_error(mut self, message: &str) -> Self {
        self.query_error = Some(message.to_string());
        self
    }

    fn check_queryable(&self, query: &'static str) -> Result<(), QueryError> {
        if let Some(message) = &self.query_error {
            return Err(QueryError::Host(message.clone()));
        }
        if self.kind != NodeKind::Element {
            return Err(QueryError::Unsupported {
                node: NodeId(self.id),
                query,
            });
        }
        Ok(())
    }

    fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .get(property)
            .map(String::as_str)
            .or_else(|| initial_style_value(property))
    }

    fn is_rendered(&self) -> bool {
        self.kind == NodeKind::Element
            && self.query_error.is_none()
            && !self.display_none_ancestor
            && self.style_value("display") != Some("none")
            && self.style_value("visibility") != Some("hidden")
            && self.style_value("pointer-events") != Some("none")
    }
}

impl NodeView for SnapshotNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn tag_name(&self) -> &str {
        match self.kind {
            NodeKind::Element => &self.tag,
            _ => "",
        }
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, QueryError> {
        self.check_queryable("attribute")?;
        Ok(self.attributes.get(name).cloned())
    }

    fn text_content(&self) -> String {
        match self.kind {
            NodeKind::Element => self.text_content.clone(),
            NodeKind::Document => String::new(),
            _ => self.text.clone(),
        }
    }

    fn has_click_handler(&self) -> bool {
        self.onclick
    }

    fn computed_style(&self, property: &str) -> Result<Option<String>, QueryError> {
        self.check_queryable("computed style")?;
        Ok(self.style_value(property).map(str::to_string))
    }

    fn client_rects(&self) -> Result<Vec<ClientRect>, QueryError> {
        self.check_queryable("client rects")?;
        if self.display_none_ancestor || self.style_value("display") == Some("none") {
            return Ok(Vec::new());
        }
        Ok(self.rects.clone())
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent.map(NodeId)
    }

    fn previous_element_sibling(&self) -> Option<NodeId> {
        self.previous_sibling.map(NodeId)
    }
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    viewport: Viewport,
    #[serde(default)]
    nodes: Vec<SnapshotNode>,
}

/// A complete, self-contained document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSnapshot {
    url: String,
    title: String,
    viewport: Viewport,
    nodes: Vec<SnapshotNode>,
}

impl DocumentSnapshot {
    /// Validate the node list and derive sibling links, text content and
    /// stacking order.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        viewport: Viewport,
        mut nodes: Vec<SnapshotNode>,
    ) -> Result<Self, SnapshotError> {
        let mut last_element_child: HashMap<Option<usize>, usize> = HashMap::new();

        for i in 0..nodes.len() {
            let parent = nodes[i].parent;
            if let Some(p) = parent {
                if p >= i {
                    return Err(SnapshotError::InvalidParent { node: i, parent: p });
                }
                if !matches!(nodes[p].kind, NodeKind::Element | NodeKind::Document) {
                    return Err(SnapshotError::ParentNotContainer {
                        node: p,
                        kind: nodes[p].kind,
                    });
                }
            }

            let (parent_z, parent_hidden) = match parent {
                Some(p) => (
                    nodes[p].effective_z,
                    nodes[p].display_none_ancestor
                        || nodes[p].style.get("display").map(String::as_str) == Some("none"),
                ),
                None => (0, false),
            };

            let node = &mut nodes[i];
            node.id = i;
            node.text_content.clear();
            node.effective_z = node.z_index.unwrap_or(parent_z);
            node.display_none_ancestor = parent_hidden;
            node.previous_sibling = None;

            if node.kind == NodeKind::Element {
                node.previous_sibling = last_element_child.insert(parent, i);
            }

            if node.kind == NodeKind::Text {
                let text = node.text.clone();
                let mut ancestor = parent;
                while let Some(a) = ancestor {
                    nodes[a].text_content.push_str(&text);
                    ancestor = nodes[a].parent;
                }
            }
        }

        debug!("Loaded document snapshot with {} nodes", nodes.len());

        Ok(Self {
            url: url.into(),
            title: title.into(),
            viewport,
            nodes,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Self::new(raw.url, raw.title, raw.viewport, raw.nodes)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_value(value)?;
        Self::new(raw.url, raw.title, raw.viewport, raw.nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl DocumentContext for DocumentSnapshot {
    type Node = SnapshotNode;

    fn node_ids(&self) -> Result<Vec<NodeId>, DocumentError> {
        Ok((0..self.nodes.len()).map(NodeId).collect())
    }

    fn node(&self, id: NodeId) -> Option<&SnapshotNode> {
        self.nodes.get(id.0)
    }

    fn element_from_point(&self, x: f64, y: f64) -> Result<Option<NodeId>, QueryError> {
        if x < 0.0 || y < 0.0 || x > self.viewport.width || y > self.viewport.height {
            return Ok(None);
        }

        // Later nodes paint over earlier ones at the same stacking level
        let topmost = self
            .nodes
            .iter()
            .filter(|n| n.is_rendered() && n.rects.iter().any(|r| r.contains_point(x, y)))
            .max_by_key(|n| (n.effective_z, n.id));

        Ok(topmost.map(|n| NodeId(n.id)))
    }

    fn viewport(&self) -> Result<Viewport, DocumentError> {
        Ok(self.viewport)
    }

    fn url(&self) -> Result<String, QueryError> {
        Ok(self.url.clone())
    }

    fn title(&self) -> Result<String, QueryError> {
        Ok(self.title.clone())
    }
}

/// Builds a [`DocumentSnapshot`] node by node
///
/// ```
/// use pagemark::snapshot::{SnapshotBuilder, SnapshotNode};
///
/// let mut builder = SnapshotBuilder::new(1280.0, 720.0).title("Login");
/// let body = builder.append(None, SnapshotNode::element("body").rect(0.0, 0.0, 1280.0, 720.0));
/// builder.append(Some(body), SnapshotNode::element("button").attr("id", "go").rect(10.0, 10.0, 40.0, 20.0));
/// let snapshot = builder.build().unwrap();
/// assert_eq!(snapshot.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    url: String,
    title: String,
    viewport: Viewport,
    nodes: Vec<SnapshotNode>,
}

impl SnapshotBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            url: "about:blank".to_string(),
            title: String::new(),
            viewport: Viewport { width, height },
            nodes: Vec::new(),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Append `node` as the last child of `parent` (or at the root)
    pub fn append(&mut self, parent: Option<NodeId>, mut node: SnapshotNode) -> NodeId {
        node.parent = parent.map(|p| p.0);
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn build(self) -> Result<DocumentSnapshot, SnapshotError> {
        DocumentSnapshot::new(self.url, self.title, self.viewport, self.nodes)
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
