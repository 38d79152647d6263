use thiserror::Error;

use crate::graph::NodeId;

/// Failures surfaced by the search entry points.
///
/// An unreachable target is not an error; it comes back as a normal
/// result with the `-1` distance sentinel. Only a source id the graph has
/// never seen is rejected, so callers can tell "you handed me a bad handle"
/// apart from "there is no path".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The source node is not present in the graph.
    #[error("unknown source node '{0}'")]
    UnknownSource(NodeId),
}
