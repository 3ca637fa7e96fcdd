use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

use crate::attributes::{aria_label, collect_attributes, normalized_text};
use crate::classify::{self, Candidate, CaptureStats};
use crate::document::{DocumentContext, NodeView};
use crate::errors::DocumentError;
use crate::geometry::ClippedRect;
use crate::locator::{css_selector, element_tag, xpath};
use crate::options::CaptureOptions;
use crate::types::{CaptureResult, Center, ElementRecord, PageContext, Rect};
use crate::walker;

/// Capture the interactive elements of `ctx` with default options.
///
/// Read-only and stateless: calling it twice on an unchanged document gives
/// the same elements. Per-node query failures are absorbed; only an
/// unobservable document is an error.
pub fn capture<C: DocumentContext>(ctx: &C) -> Result<CaptureResult, DocumentError> {
    capture_with(ctx, &CaptureOptions::default())
}

/// Capture with explicit [`CaptureOptions`]
pub fn capture_with<C: DocumentContext>(
    ctx: &C,
    options: &CaptureOptions,
) -> Result<CaptureResult, DocumentError> {
    let viewport = ctx.viewport()?;
    let nodes = walker::walk(ctx)?;
    debug!(
        "Scanning {} nodes in a {}x{} viewport",
        nodes.len(),
        viewport.width,
        viewport.height
    );

    let mut stats = CaptureStats::default();
    let candidates = classify::filter_candidates(ctx, &nodes, viewport, options, &mut stats);
    let candidates = classify::keep_innermost(ctx, candidates);
    stats.kept = candidates.len();

    debug!(
        "Interactive: {}, passed size/visibility: {}, innermost: {}",
        stats.interactive, stats.passed_filter, stats.kept
    );

    let elements: Vec<ElementRecord> = candidates
        .into_iter()
        .filter_map(|candidate| build_record(ctx, candidate, options))
        .enumerate()
        .map(|(index, record)| ElementRecord { index, ..record })
        .collect();

    let page_info = page_context(ctx);
    info!(
        "Captured {} interactive elements from {} ({} nodes scanned)",
        elements.len(),
        page_info.url,
        stats.scanned
    );

    Ok(CaptureResult {
        page_info,
        elements,
    })
}

fn to_rect(clipped: &ClippedRect) -> Rect {
    Rect {
        left: clipped.left,
        top: clipped.top,
        right: clipped.right,
        bottom: clipped.bottom,
        width: clipped.width,
        height: clipped.height,
        center_x: (clipped.left + clipped.width / 2.0).round(),
        center_y: (clipped.top + clipped.height / 2.0).round(),
    }
}

/// Mean of the rect centers, or nulls when there are none
fn aggregate_center(rects: &[Rect]) -> Center {
    if rects.is_empty() {
        return Center::default();
    }
    let n = rects.len() as f64;
    let sx: f64 = rects.iter().map(|r| r.center_x).sum();
    let sy: f64 = rects.iter().map(|r| r.center_y).sum();
    Center {
        x: Some((sx / n).round()),
        y: Some((sy / n).round()),
    }
}

fn build_record<C: DocumentContext>(
    ctx: &C,
    candidate: Candidate,
    options: &CaptureOptions,
) -> Option<ElementRecord> {
    let node = ctx.node(candidate.node)?;
    let rects: Vec<Rect> = candidate.rects.iter().map(to_rect).collect();
    let center = aggregate_center(&rects);

    Some(ElementRecord {
        index: 0,
        element_type: element_tag(node),
        text: normalized_text(node),
        aria_label: aria_label(node),
        attributes: collect_attributes(node, &options.attributes),
        css_selector: css_selector(ctx, candidate.node, options.max_selector_len),
        xpath: xpath(ctx, candidate.node),
        visible: candidate.visible,
        computed_cursor: node
            .computed_style("cursor")
            .ok()
            .flatten()
            .unwrap_or_default(),
        area: candidate.area,
        rects,
        center,
    })
}

fn page_context<C: DocumentContext>(ctx: &C) -> PageContext {
    let url = ctx.url().unwrap_or_else(|e| {
        warn!("Could not read page URL: {}", e);
        String::new()
    });
    let title = ctx.title().unwrap_or_else(|e| {
        warn!("Could not read page title: {}", e);
        String::new()
    });

    PageContext {
        url,
        title,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;
