//! # pagemark
#![allow(clippy::uninlined_format_args)]
//!
//! Point-in-time inventory of the elements on a rendered page that a user or
//! an LLM agent could interact with: links, form controls, buttons, clickable
//! containers and media embeds.
//!
//! The result is plain data. Every element comes with viewport-clipped
//! rectangles, a click point, its text and a few semantic attributes, plus
//! two best-effort locators (a short CSS selector and a structural path).
//! Nothing in it points back into the document.
//!
//! ## How an element is selected
//!
//! 1. It is interactive: a form control, link, iframe or video, or it has a
//!    click handler, or its computed cursor is `pointer`.
//! 2. At least 20 square pixels of it are inside the viewport.
//! 3. It is visible: not `display: none`, `visibility: hidden` or fully
//!    transparent, and hit testing at its center lands on it or inside it.
//! 4. No other selected element sits inside it. A clickable card wrapping a
//!    button reports only the button.
//!
//! ## Usage
//!
//! The page is read through the [`DocumentContext`] trait. Any live browser
//! binding can implement it; [`DocumentSnapshot`] implements it for a
//! serialized page.
//!
//! ```
//! use pagemark::snapshot::{SnapshotBuilder, SnapshotNode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = SnapshotBuilder::new(1280.0, 720.0)
//!     .url("https://example.com/login")
//!     .title("Sign in");
//! let body = page.append(None, SnapshotNode::element("body").rect(0.0, 0.0, 1280.0, 720.0));
//! page.append(
//!     Some(body),
//!     SnapshotNode::element("button").attr("id", "go").rect(100.0, 100.0, 40.0, 20.0),
//! );
//!
//! let result = pagemark::capture(&page.build()?)?;
//! assert_eq!(result.elements.len(), 1);
//! assert_eq!(result.elements[0].css_selector, "#go");
//! assert_eq!(result.center_of(0), Some((120.0, 110.0)));
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates are CSS pixels relative to the viewport and only valid at the
//! moment of capture.

/// Extraction entry points and result assembly
pub mod capture;

/// Allow-listed attribute and text extraction
pub mod attributes;

/// Interactivity predicate and innermost-candidate filtering
pub mod classify;

/// Host document capability traits
pub mod document;

/// Error types
pub mod errors;

/// Viewport clipping and visibility
pub mod geometry;

/// CSS selector and structural path synthesis
pub mod locator;

/// Capture configuration
pub mod options;

/// Serializable in-memory document binding
pub mod snapshot;

/// Output data model
pub mod types;

/// Node enumeration
pub mod walker;

pub use capture::{capture, capture_with};
pub use document::{ClientRect, DocumentContext, NodeId, NodeKind, NodeView, Viewport};
pub use errors::{DocumentError, QueryError, SnapshotError};
pub use options::CaptureOptions;
pub use snapshot::{DocumentSnapshot, SnapshotBuilder, SnapshotNode};
pub use types::{CaptureResult, Center, ElementRecord, PageContext, Rect};
