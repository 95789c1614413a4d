// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure owning nodes and arcs.

use crate::arc::Arc;
use crate::container::{AssociativeArray, Hashed, IdSet, Indexed, MapFamily, Ordered, SetFamily};
use crate::error::{GraphError, GraphResult};
use crate::id::{ArcId, IdAllocator, NodeId};
use crate::node::Node;
use std::fmt;

/// Graph backed by hash collections
pub type HashGraph<P = ()> = Graph<P, Hashed, Hashed>;

/// Graph backed by B-tree collections. Exports are reproducible.
pub type OrderedGraph<P = ()> = Graph<P, Ordered, Ordered>;

/// Graph backed by `indexmap` collections. Exports are reproducible.
pub type IndexedGraph<P = ()> = Graph<P, Indexed, Indexed>;

/// A directed graph.
///
/// The graph is the only owner of its nodes and arcs. Callers hold
/// [`NodeId`]s and [`ArcId`]s, which stay safe to use after deletion: a stale
/// identifier is never reissued, so lookups with it just fail.
///
/// Invariants kept by every operation:
/// - every arc id in a node's inputs (outputs) names a live arc whose
///   destination (source) is that node;
/// - every live arc has two live, distinct endpoints.
pub struct Graph<P = (), M: MapFamily = Hashed, S: SetFamily = Hashed> {
    nodes: M::Map<NodeId, Node<S>>,
    arcs: M::Map<ArcId, Arc<P>>,
    node_ids: IdAllocator<NodeId>,
    arc_ids: IdAllocator<ArcId>,
}

impl<P, M: MapFamily, S: SetFamily> Graph<P, M, S> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            nodes: Default::default(),
            arcs: Default::default(),
            node_ids: IdAllocator::new(),
            arc_ids: IdAllocator::new(),
        }
    }

    /// Create a node with no arcs. Always succeeds.
    pub fn create_node(&mut self) -> NodeId {
        let id = self.node_ids.next();
        self.nodes.insert(id, Node::new());
        tracing::trace!(node = %id, "created node");
        id
    }

    /// Create an arc from `src` to `dst` with a default payload.
    ///
    /// See [`Graph::create_arc_with`].
    pub fn create_arc(&mut self, src: NodeId, dst: NodeId) -> GraphResult<ArcId>
    where
        P: Default,
    {
        self.create_arc_with(src, dst, P::default())
    }

    /// Create an arc from `src` to `dst` carrying `payload`.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either endpoint is not a
    /// live node, or [`GraphError::SelfLoop`] if they are the same node. The
    /// graph is left untouched on failure.
    pub fn create_arc_with(&mut self, src: NodeId, dst: NodeId, payload: P) -> GraphResult<ArcId> {
        self.check_arc(src, dst)?;

        let id = self.arc_ids.next();
        self.arcs.insert(id, Arc::new(src, dst, payload));
        self.node_entry_mut(src).outputs.insert(id);
        self.node_entry_mut(dst).inputs.insert(id);

        tracing::trace!(arc = %id, %src, %dst, "created arc");
        Ok(id)
    }

    /// Create the arcs `a -> b` and `b -> a`, returned in that order.
    ///
    /// The two arcs are created by independent calls. If the second one
    /// fails the first is kept.
    pub fn create_bidirectional_arc(&mut self, a: NodeId, b: NodeId) -> GraphResult<(ArcId, ArcId)>
    where
        P: Default,
    {
        let forward = self.create_arc(a, b)?;
        let backward = self.create_arc(b, a)?;
        Ok((forward, backward))
    }

    /// Check whether an arc `src -> dst` could be created right now
    pub fn check_arc(&self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        self.require_node(src)?;
        self.require_node(dst)?;
        if src == dst {
            return Err(GraphError::SelfLoop(src));
        }
        Ok(())
    }

    /// Delete a node together with every arc touching it.
    ///
    /// Incident arcs are snapshotted first and then removed one by one
    /// through [`Graph::delete_arc`].
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<()> {
        let incident = self.require_node(id)?.incident_arcs();
        let arc_count = incident.len();

        for arc_id in incident {
            if self.delete_arc(arc_id).is_err() {
                invariant_violation(format_args!(
                    "node {id} lists arc {arc_id}, which is not live"
                ));
            }
        }

        if self.nodes.remove(&id).is_none() {
            invariant_violation(format_args!("node {id} vanished during deletion"));
        }

        tracing::debug!(node = %id, arcs = arc_count, "deleted node");
        Ok(())
    }

    /// Delete an arc, returning it.
    ///
    /// Fails with [`GraphError::UnknownArc`] if `id` is not a live arc.
    pub fn delete_arc(&mut self, id: ArcId) -> GraphResult<Arc<P>> {
        let (src, dst) = self
            .arcs
            .get(&id)
            .ok_or(GraphError::UnknownArc(id))?
            .endpoints();
        self.assert_registered(id, src, dst);

        self.node_entry_mut(src).outputs.remove(&id);
        self.node_entry_mut(dst).inputs.remove(&id);
        let Some(arc) = self.arcs.remove(&id) else {
            invariant_violation(format_args!("arc {id} vanished during deletion"));
        };

        tracing::trace!(arc = %id, %src, %dst, "deleted arc");
        Ok(arc)
    }

    /// Delete every arc running from `src` to `dst`, returning how many were
    /// removed.
    pub fn delete_arcs_between(&mut self, src: NodeId, dst: NodeId) -> GraphResult<usize> {
        self.require_node(src)?;
        self.require_node(dst)?;

        let matching: Vec<ArcId> = self.arcs_between(src, dst).collect();
        for &arc_id in &matching {
            self.delete_arc(arc_id)?;
        }
        Ok(matching.len())
    }

    /// Get a node by ID
    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(&id)
    }

    /// Get an arc by ID
    pub fn arc(&self, id: ArcId) -> Option<&Arc<P>> {
        self.arcs.get(&id)
    }

    /// Get a mutable arc by ID. Only the payload can be changed through it.
    pub fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc<P>> {
        self.arcs.get_mut(&id)
    }

    /// Check if a node is live
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Check if an arc is live
    pub fn contains_arc(&self, id: ArcId) -> bool {
        self.arcs.contains_key(&id)
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of arcs
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get all node IDs, in the map's iteration order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Get all arc IDs, in the map's iteration order
    pub fn arc_ids(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.arcs.keys()
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> + '_ {
        self.nodes.iter()
    }

    /// Get all arcs
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc<P>)> + '_ {
        self.arcs.iter()
    }

    /// Arcs terminating at a node
    pub fn inputs(&self, id: NodeId) -> GraphResult<impl Iterator<Item = ArcId> + '_> {
        Ok(self.require_node(id)?.inputs())
    }

    /// Arcs originating at a node
    pub fn outputs(&self, id: NodeId) -> GraphResult<impl Iterator<Item = ArcId> + '_> {
        Ok(self.require_node(id)?.outputs())
    }

    /// Destination of every arc leaving a node, one entry per arc
    pub fn successors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        let node = self.require_node(id)?;
        Ok(node.outputs().map(move |arc_id| self.arc_entry(arc_id).dst()))
    }

    /// Source of every arc entering a node, one entry per arc
    pub fn predecessors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        let node = self.require_node(id)?;
        Ok(node.inputs().map(move |arc_id| self.arc_entry(arc_id).src()))
    }

    /// Arcs running from `src` to `dst`, in `src`'s output order.
    ///
    /// Empty if `src` is not live.
    pub fn arcs_between(&self, src: NodeId, dst: NodeId) -> impl Iterator<Item = ArcId> + '_ {
        self.nodes
            .get(&src)
            .into_iter()
            .flat_map(Node::outputs)
            .filter(move |&arc_id| self.arc_entry(arc_id).dst() == dst)
    }

    /// First arc running from `src` to `dst`
    pub fn find_arc(&self, src: NodeId, dst: NodeId) -> Option<ArcId> {
        self.arcs_between(src, dst).next()
    }

    fn require_node(&self, id: NodeId) -> GraphResult<&Node<S>> {
        self.nodes.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    /// Arc lookup for ids taken from node records.
    pub(crate) fn arc_entry(&self, id: ArcId) -> &Arc<P> {
        match self.arcs.get(&id) {
            Some(arc) => arc,
            None => invariant_violation(format_args!("arc {id} is referenced but not live")),
        }
    }

    fn node_entry_mut(&mut self, id: NodeId) -> &mut Node<S> {
        match self.nodes.get_mut(&id) {
            Some(node) => node,
            None => invariant_violation(format_args!("node {id} is referenced but not live")),
        }
    }

    fn assert_registered(&self, id: ArcId, src: NodeId, dst: NodeId) {
        if src == dst {
            invariant_violation(format_args!("arc {id} is a self-loop on node {src}"));
        }
        let in_src = self
            .nodes
            .get(&src)
            .is_some_and(|node| node.outputs.contains(&id));
        let in_dst = self
            .nodes
            .get(&dst)
            .is_some_and(|node| node.inputs.contains(&id));
        if !(in_src && in_dst) {
            invariant_violation(format_args!(
                "arc {id} ({src} -> {dst}) is not registered on both endpoints"
            ));
        }
    }
}

impl<P, M: MapFamily, S: SetFamily> Default for Graph<P, M, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, M: MapFamily, S: SetFamily> Clone for Graph<P, M, S>
where
    M::Map<NodeId, Node<S>>: Clone,
    M::Map<ArcId, Arc<P>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            arcs: self.arcs.clone(),
            node_ids: self.node_ids.clone(),
            arc_ids: self.arc_ids.clone(),
        }
    }
}

impl<P, M: MapFamily, S: SetFamily> fmt::Debug for Graph<P, M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.node_count())
            .field("arc_count", &self.arc_count())
            .field("next_node_id", &self.node_ids.peek())
            .field("next_arc_id", &self.arc_ids.peek())
            .finish_non_exhaustive()
    }
}

/// Report broken internal consistency and abort the operation.
#[cold]
#[track_caller]
pub(crate) fn invariant_violation(message: fmt::Arguments<'_>) -> ! {
    tracing::error!("graph invariant violated: {message}");
    panic!("graph invariant violated: {message}");
}
