// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for graph operations.

use crate::id::{ArcId, NodeId};

/// Result alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Error returned by graph operations.
///
/// Broken internal consistency is not represented here: the engine panics
/// instead, since it means the engine itself is wrong.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The identifier does not name a live node of this graph
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The identifier does not name a live arc of this graph
    #[error("Unknown arc: {0}")]
    UnknownArc(ArcId),

    /// Arc endpoints are the same node
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(NodeId),

    /// Writing an export failed
    #[error("Failed to write graph: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Whether the error reports an identifier that is not live
    pub fn is_unknown_id(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::UnknownArc(_))
    }
}
