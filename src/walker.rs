use tracing::debug;

use crate::document::{DocumentContext, NodeId};
use crate::errors::DocumentError;

/// Enumerate every node of the document, unfiltered.
///
/// Handles that the context cannot resolve are dropped here so later stages
/// only ever see live nodes.
pub fn walk<C: DocumentContext>(ctx: &C) -> Result<Vec<NodeId>, DocumentError> {
    let ids = ctx.node_ids()?;
    let total = ids.len();
    let nodes: Vec<NodeId> = ids.into_iter().filter(|id| ctx.node(*id).is_some()).collect();

    if nodes.len() != total {
        debug!(
            "Dropped {} unresolvable node handles out of {}",
            total - nodes.len(),
            total
        );
    }

    Ok(nodes)
}
