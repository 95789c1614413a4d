// SPDX-License-Identifier: MIT OR Apache-2.0
//! Arc (directed edge) definitions for the graph.

use crate::id::NodeId;
use serde::{Deserialize, Serialize};

/// A directed arc from `src` to `dst` carrying a payload.
///
/// The plain engine uses `()` as payload. Domain layers put their own tag
/// here instead of extending the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc<P = ()> {
    src: NodeId,
    dst: NodeId,
    payload: P,
}

impl<P> Arc<P> {
    /// Create a new arc
    pub(crate) fn new(src: NodeId, dst: NodeId, payload: P) -> Self {
        Self { src, dst, payload }
    }

    /// Source node
    pub fn src(&self) -> NodeId {
        self.src
    }

    /// Destination node
    pub fn dst(&self) -> NodeId {
        self.dst
    }

    /// Both endpoints as `(src, dst)`
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.src, self.dst)
    }

    /// The payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The payload, mutably. Endpoints cannot be changed.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Consume the arc, returning its payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Check if this arc involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.src == node_id || self.dst == node_id
    }

    /// Check if this arc runs from `src` to `dst`
    pub fn connects(&self, src: NodeId, dst: NodeId) -> bool {
        self.src == src && self.dst == dst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_accessors() {
        let a = NodeId::from_raw(0);
        let b = NodeId::from_raw(1);
        let mut arc = Arc::new(a, b, 7u8);

        assert_eq!(arc.endpoints(), (a, b));
        assert!(arc.involves_node(a) && arc.involves_node(b));
        assert!(!arc.involves_node(NodeId::from_raw(2)));
        assert!(arc.connects(a, b));
        assert!(!arc.connects(b, a));

        *arc.payload_mut() += 1;
        assert_eq!(arc.into_payload(), 8);
    }
}
