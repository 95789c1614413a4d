// SPDX-License-Identifier: MIT OR Apache-2.0
//! The signal-flow graph.

use crate::error::{SfgError, SfgResult};
use crate::node::SfgNode;
use crate::op::{Direction, OpKind};
use crate::role::OperandRole;
use flowgraph_core::{
    ArcId, AssociativeArray, Graph, GraphError, Hashed, Indexed, MapFamily, NodeId, Ordered,
    SetFamily,
};
use std::fmt;

/// Signal-flow graph backed by hash collections
pub type HashSfg = Sfg<Hashed, Hashed>;

/// Signal-flow graph backed by B-tree collections. Exports are reproducible.
pub type OrderedSfg = Sfg<Ordered, Ordered>;

/// Signal-flow graph backed by `indexmap` collections. Exports are reproducible.
pub type IndexedSfg = Sfg<Indexed, Indexed>;

/// A signal-flow graph.
///
/// Wraps a [`Graph`] whose arcs carry an [`OperandRole`]. Node names and
/// operation kinds are kept next to the graph, keyed by [`NodeId`], and
/// follow node creation and deletion.
pub struct Sfg<M: MapFamily = Hashed, S: SetFamily = Hashed> {
    graph: Graph<OperandRole, M, S>,
    attributes: M::Map<NodeId, SfgNode>,
}

impl<M: MapFamily, S: SetFamily> Sfg<M, S> {
    /// Create a new empty signal-flow graph
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            attributes: Default::default(),
        }
    }

    /// The underlying graph
    pub fn graph(&self) -> &Graph<OperandRole, M, S> {
        &self.graph
    }

    /// Create an unnamed, untyped node
    pub fn create_node(&mut self) -> NodeId {
        self.insert_node(SfgNode::default())
    }

    /// Create a named, untyped node
    pub fn create_named_node(&mut self, name: impl Into<String>) -> NodeId {
        self.insert_node(SfgNode::named(name))
    }

    /// Create a named node performing `op`
    pub fn create_operation_node(&mut self, op: OpKind, name: impl Into<String>) -> NodeId {
        self.insert_node(SfgNode::named(name).with_op(op))
    }

    fn insert_node(&mut self, attributes: SfgNode) -> NodeId {
        let id = self.graph.create_node();
        self.attributes.insert(id, attributes);
        id
    }

    /// Attributes of a node
    pub fn attributes(&self, id: NodeId) -> Option<&SfgNode> {
        self.attributes.get(&id)
    }

    /// Name of a node
    pub fn name(&self, id: NodeId) -> SfgResult<&str> {
        Ok(&self.require_attributes(id)?.name)
    }

    /// Rename a node
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> SfgResult<()> {
        self.require_attributes_mut(id)?.name = name.into();
        Ok(())
    }

    /// Operation of a node
    pub fn op(&self, id: NodeId) -> SfgResult<Option<OpKind>> {
        Ok(self.require_attributes(id)?.op)
    }

    /// Set or clear the operation of a node
    pub fn set_op(&mut self, id: NodeId, op: Option<OpKind>) -> SfgResult<()> {
        self.require_attributes_mut(id)?.op = op;
        Ok(())
    }

    /// First node with the given name, in container order
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.attributes
            .iter()
            .find(|(_, attributes)| attributes.name == name)
            .map(|(id, _)| id)
    }

    /// Delete a node, its arcs and its attributes
    pub fn delete_node(&mut self, id: NodeId) -> SfgResult<()> {
        self.graph.delete_node(id)?;
        self.attributes.remove(&id);
        Ok(())
    }

    /// Delete an arc, returning its role
    pub fn delete_arc(&mut self, id: ArcId) -> SfgResult<OperandRole> {
        Ok(self.graph.delete_arc(id)?.into_payload())
    }

    /// Create an arc `src -> dst` with an explicit role
    pub fn connect(&mut self, src: NodeId, dst: NodeId, role: OperandRole) -> SfgResult<ArcId> {
        let arc = self.graph.create_arc_with(src, dst, role)?;
        tracing::trace!(arc = %arc, %src, %dst, %role, "connected operand");
        Ok(arc)
    }

    /// Add a unit delay: one arc `input -> output` tagged [`OperandRole::Delay`]
    pub fn add_delay(&mut self, input: NodeId, output: NodeId) -> SfgResult<ArcId> {
        self.connect(input, output, OperandRole::Delay)
    }

    /// Add an adder, `output = in1 + in2`: two [`OperandRole::Term`] arcs
    pub fn add_adder(
        &mut self,
        in1: NodeId,
        in2: NodeId,
        output: NodeId,
    ) -> SfgResult<(ArcId, ArcId)> {
        self.add_binary((in1, OperandRole::Term), (in2, OperandRole::Term), output)
    }

    /// Add a subtractor, `output = minuend - subtrahend`
    pub fn add_subtractor(
        &mut self,
        minuend: NodeId,
        subtrahend: NodeId,
        output: NodeId,
    ) -> SfgResult<(ArcId, ArcId)> {
        self.add_binary(
            (minuend, OperandRole::Minuend),
            (subtrahend, OperandRole::Subtrahend),
            output,
        )
    }

    /// Add a multiplier, `output = in1 * in2`: a [`OperandRole::Multiplier`]
    /// arc from `in1` and a [`OperandRole::Multiplicand`] arc from `in2`
    pub fn add_multiplier(
        &mut self,
        in1: NodeId,
        in2: NodeId,
        output: NodeId,
    ) -> SfgResult<(ArcId, ArcId)> {
        self.add_binary(
            (in1, OperandRole::Multiplier),
            (in2, OperandRole::Multiplicand),
            output,
        )
    }

    /// Add a divider, `output = dividend / divisor`
    pub fn add_divider(
        &mut self,
        dividend: NodeId,
        divisor: NodeId,
        output: NodeId,
    ) -> SfgResult<(ArcId, ArcId)> {
        self.add_binary(
            (dividend, OperandRole::Dividend),
            (divisor, OperandRole::Divisor),
            output,
        )
    }

    /// Add a scaling by a constant coefficient: one
    /// [`OperandRole::Multiplicand`] arc `input -> output`
    pub fn add_constant_multiplier(&mut self, input: NodeId, output: NodeId) -> SfgResult<ArcId> {
        self.connect(input, output, OperandRole::Multiplicand)
    }

    /// Forward a signal unchanged, e.g. into an output node
    pub fn add_signal(&mut self, src: NodeId, dst: NodeId) -> SfgResult<ArcId> {
        self.connect(src, dst, OperandRole::Signal)
    }

    /// Both arcs are validated before either is created.
    fn add_binary(
        &mut self,
        (lhs, lhs_role): (NodeId, OperandRole),
        (rhs, rhs_role): (NodeId, OperandRole),
        output: NodeId,
    ) -> SfgResult<(ArcId, ArcId)> {
        self.graph.check_arc(lhs, output)?;
        self.graph.check_arc(rhs, output)?;
        let first = self.connect(lhs, output, lhs_role)?;
        let second = self.connect(rhs, output, rhs_role)?;
        Ok((first, second))
    }

    /// Role of an arc
    pub fn role(&self, arc: ArcId) -> Option<OperandRole> {
        self.graph.arc(arc).map(|arc| *arc.payload())
    }

    /// Arcs carrying the given role, in container order
    pub fn arcs_with_role(&self, role: OperandRole) -> impl Iterator<Item = ArcId> + '_ {
        self.graph
            .arcs()
            .filter(move |(_, arc)| *arc.payload() == role)
            .map(|(id, _)| id)
    }

    /// Check a node's arc counts against the arity of its operation.
    ///
    /// Inputs must match exactly. A node whose operation has results must
    /// feed at least that many arcs (a result may fan out); one without
    /// results must feed none. Untyped nodes always pass.
    pub fn check_arity(&self, id: NodeId) -> SfgResult<()> {
        let node = self.graph.node(id).ok_or(GraphError::UnknownNode(id))?;
        let Some(op) = self.require_attributes(id)?.op else {
            return Ok(());
        };
        let arity = op.arity();

        if node.in_degree() != arity.inputs {
            return Err(SfgError::ArityMismatch {
                node: id,
                op,
                direction: Direction::Input,
                expected: arity.inputs,
                actual: node.in_degree(),
            });
        }

        let outputs_ok = if arity.outputs == 0 {
            node.out_degree() == 0
        } else {
            node.out_degree() >= arity.outputs
        };
        if !outputs_ok {
            return Err(SfgError::ArityMismatch {
                node: id,
                op,
                direction: Direction::Output,
                expected: arity.outputs,
                actual: node.out_degree(),
            });
        }

        Ok(())
    }

    /// Check every typed node, collecting all arity violations
    pub fn validate(&self) -> Result<(), Vec<SfgError>> {
        let errors: Vec<SfgError> = self
            .attributes
            .keys()
            .filter_map(|id| self.check_arity(id).err())
            .inspect(|err| tracing::warn!("{err}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Write the DOT rendering of the graph into `sink`
    pub fn export_topology<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.graph.export_topology(sink)
    }

    /// Render the graph as a DOT string
    pub fn to_dot(&self) -> String {
        self.graph.to_dot()
    }

    fn require_attributes(&self, id: NodeId) -> SfgResult<&SfgNode> {
        self.attributes
            .get(&id)
            .ok_or(SfgError::Graph(GraphError::UnknownNode(id)))
    }

    fn require_attributes_mut(&mut self, id: NodeId) -> SfgResult<&mut SfgNode> {
        self.attributes
            .get_mut(&id)
            .ok_or(SfgError::Graph(GraphError::UnknownNode(id)))
    }
}

impl<M: MapFamily, S: SetFamily> Default for Sfg<M, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MapFamily, S: SetFamily> fmt::Debug for Sfg<M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sfg").field("graph", &self.graph).finish_non_exhaustive()
    }
}
