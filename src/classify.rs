//! Which nodes count as interaction targets.

use tracing::debug;

use crate::document::{DocumentContext, NodeId, NodeKind, NodeView, Viewport};
use crate::geometry::{self, ClippedRect};
use crate::locator::element_tag;
use crate::options::CaptureOptions;

/// A node that passed the interactivity, size and visibility gates.
///
/// Still holds a live handle; [`crate::capture`] resolves it and drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    pub rects: Vec<ClippedRect>,
    pub area: f64,
    pub visible: bool,
}

/// Pipeline counters, logged once per capture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    pub scanned: usize,
    pub interactive: usize,
    pub passed_filter: usize,
    pub kept: usize,
}

/// Form controls, links, media embeds, click handlers and pointer cursors.
pub fn is_interactive<N: NodeView>(node: &N, options: &CaptureOptions) -> bool {
    if node.kind() != NodeKind::Element {
        return false;
    }

    let tag = element_tag(node);
    if options.interactive_tags.iter().any(|t| *t == tag) {
        return true;
    }

    if node.has_click_handler() {
        return true;
    }

    matches!(node.computed_style("cursor"), Ok(Some(cursor)) if cursor == "pointer")
}

/// Keep interactive nodes with enough on-screen area that are visible.
///
/// Relative order of `nodes` is preserved.
pub fn filter_candidates<C: DocumentContext>(
    ctx: &C,
    nodes: &[NodeId],
    viewport: Viewport,
    options: &CaptureOptions,
    stats: &mut CaptureStats,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for &id in nodes {
        stats.scanned += 1;
        let Some(node) = ctx.node(id) else {
            continue;
        };
        if !is_interactive(node, options) {
            continue;
        }
        stats.interactive += 1;

        let rects = geometry::visible_rects(node, viewport).unwrap_or_else(|e| {
            debug!("No client rects for node {}: {}", id, e);
            Vec::new()
        });
        let area = geometry::total_area(&rects);
        if area < options.min_area {
            continue;
        }

        if !geometry::is_visible(ctx, id, viewport) {
            continue;
        }

        candidates.push(Candidate {
            node: id,
            rects,
            area,
            visible: true,
        });
    }

    stats.passed_filter = candidates.len();
    candidates
}

/// Drop every candidate that contains another candidate, so a clickable
/// wrapper never shadows the control inside it.
pub fn keep_innermost<C: DocumentContext>(ctx: &C, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let ids: Vec<NodeId> = candidates.iter().map(|c| c.node).collect();

    candidates
        .into_iter()
        .filter(|outer| {
            !ids
                .iter()
                .any(|&inner| inner != outer.node && ctx.contains(outer.node, inner))
        })
        .collect()
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
