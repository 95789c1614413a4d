// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node records.

use crate::container::{Hashed, IdSet, SetFamily};
use crate::id::ArcId;

/// A node in the graph.
///
/// A node only records which arcs touch it. Everything else about it lives
/// with the caller, keyed by its [`NodeId`](crate::NodeId).
#[derive(Debug, Clone)]
pub struct Node<S: SetFamily = Hashed> {
    /// Arcs terminating at this node
    pub(crate) inputs: S::Set<ArcId>,
    /// Arcs originating at this node
    pub(crate) outputs: S::Set<ArcId>,
}

impl<S: SetFamily> Node<S> {
    /// Create a node with no arcs
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            outputs: Default::default(),
        }
    }

    /// Arcs terminating at this node
    pub fn inputs(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.inputs.iter()
    }

    /// Arcs originating at this node
    pub fn outputs(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.outputs.iter()
    }

    /// The underlying input set
    pub fn input_set(&self) -> &S::Set<ArcId> {
        &self.inputs
    }

    /// The underlying output set
    pub fn output_set(&self) -> &S::Set<ArcId> {
        &self.outputs
    }

    /// Number of arcs terminating here
    pub fn in_degree(&self) -> usize {
        self.inputs.len()
    }

    /// Number of arcs originating here
    pub fn out_degree(&self) -> usize {
        self.outputs.len()
    }

    /// Whether no arc touches this node
    pub fn is_isolated(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    /// Check if an arc is registered on either side of this node
    pub fn touches(&self, arc_id: ArcId) -> bool {
        self.inputs.contains(&arc_id) || self.outputs.contains(&arc_id)
    }

    /// Snapshot of every incident arc, inputs first.
    pub(crate) fn incident_arcs(&self) -> Vec<ArcId> {
        let mut arcs = Vec::with_capacity(self.inputs.len() + self.outputs.len());
        arcs.extend(self.inputs.iter());
        arcs.extend(self.outputs.iter());
        arcs
    }
}

impl<S: SetFamily> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Ordered;

    #[test]
    fn test_new_node_is_isolated() {
        let node = Node::<Hashed>::new();
        assert!(node.is_isolated());
        assert_eq!(node.in_degree(), 0);
        assert_eq!(node.out_degree(), 0);
    }

    #[test]
    fn test_incident_arcs_lists_inputs_then_outputs() {
        let mut node = Node::<Ordered>::new();
        node.outputs.insert(ArcId::from_raw(1));
        node.inputs.insert(ArcId::from_raw(4));
        node.inputs.insert(ArcId::from_raw(2));

        assert_eq!(
            node.incident_arcs(),
            vec![ArcId::from_raw(2), ArcId::from_raw(4), ArcId::from_raw(1)]
        );
        assert!(node.touches(ArcId::from_raw(1)));
        assert!(!node.touches(ArcId::from_raw(3)));
    }
}
