//! Viewport clipping and the visibility predicate.

use tracing::warn;

use crate::document::{ClientRect, DocumentContext, NodeId, NodeView, Viewport};
use crate::errors::QueryError;

/// A client rect clipped to the viewport and rounded to whole pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl ClippedRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Clip one rect to `[0, width] x [0, height]`.
///
/// Returns `None` when nothing of it is left on screen.
pub fn clip_to_viewport(rect: &ClientRect, viewport: Viewport) -> Option<ClippedRect> {
    let left = rect.left().max(0.0);
    let top = rect.top().max(0.0);
    let right = rect.right().min(viewport.width);
    let bottom = rect.bottom().min(viewport.height);
    let width = (right - left).max(0.0);
    let height = (bottom - top).max(0.0);

    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    Some(ClippedRect {
        left: left.round(),
        top: top.round(),
        right: right.round(),
        bottom: bottom.round(),
        width: width.round(),
        height: height.round(),
    })
}

/// All of a node's client rects that survive clipping, in host order
pub fn visible_rects<N: NodeView>(
    node: &N,
    viewport: Viewport,
) -> Result<Vec<ClippedRect>, QueryError> {
    Ok(node
        .client_rects()?
        .iter()
        .filter_map(|r| clip_to_viewport(r, viewport))
        .collect())
}

pub fn total_area(rects: &[ClippedRect]) -> f64 {
    rects.iter().map(ClippedRect::area).sum()
}

fn opacity_is_zero(value: Option<&str>) -> bool {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("1");
    value.parse::<f64>().map(|o| o == 0.0).unwrap_or(false)
}

/// Whether the node is actually visible to a user right now.
///
/// Fails open: if any query needed to decide errors out, the node counts as
/// visible.
pub fn is_visible<C: DocumentContext>(ctx: &C, id: NodeId, viewport: Viewport) -> bool {
    match check_visibility(ctx, id, viewport) {
        Ok(visible) => visible,
        Err(e) => {
            warn!("Visibility check failed for node {}, assuming visible: {}", id, e);
            true
        }
    }
}

fn check_visibility<C: DocumentContext>(
    ctx: &C,
    id: NodeId,
    viewport: Viewport,
) -> Result<bool, QueryError> {
    let node = ctx.require(id)?;

    if node.computed_style("display")?.as_deref() == Some("none")
        || node.computed_style("visibility")?.as_deref() == Some("hidden")
        || opacity_is_zero(node.computed_style("opacity")?.as_deref())
    {
        return Ok(false);
    }

    let bounds = node.bounding_client_rect()?;
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Ok(false);
    }

    let cx = bounds.x + bounds.width / 2.0;
    let cy = bounds.y + bounds.height / 2.0;
    if cx < 0.0 || cy < 0.0 || cx > viewport.width || cy > viewport.height {
        return Ok(false);
    }

    // Something unrelated painted over the center means the user cannot hit it
    match ctx.element_from_point(cx, cy)? {
        Some(top) => Ok(ctx.contains(id, top)),
        None => Ok(false),
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
