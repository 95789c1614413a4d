// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for signal-flow graph operations.

use crate::op::{Direction, OpKind};
use flowgraph_core::{GraphError, NodeId};

/// Result alias for signal-flow graph operations
pub type SfgResult<T> = Result<T, SfgError>;

/// Error returned by signal-flow graph operations
#[derive(Debug, thiserror::Error)]
pub enum SfgError {
    /// The underlying graph rejected the operation
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A typed node has the wrong number of arcs on one side
    #[error("{op} node {node} has {actual} {direction}, expected {expected}")]
    ArityMismatch {
        /// Offending node
        node: NodeId,
        /// Its operation kind
        op: OpKind,
        /// Side that was checked
        direction: Direction,
        /// Count required by the arity table
        expected: usize,
        /// Count found in the graph
        actual: usize,
    },
}
