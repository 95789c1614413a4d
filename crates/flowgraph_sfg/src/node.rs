// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-node attributes of a signal-flow graph.

use crate::op::OpKind;
use serde::{Deserialize, Serialize};

/// Attributes the signal-flow layer keeps for each node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfgNode {
    /// Display name (may be empty)
    pub name: String,
    /// Operation performed by the node, if known
    pub op: Option<OpKind>,
}

impl SfgNode {
    /// Create attributes with a name and no operation
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: None,
        }
    }

    /// Set the operation
    pub fn with_op(mut self, op: OpKind) -> Self {
        self.op = Some(op);
        self
    }
}
