// SPDX-License-Identifier: MIT OR Apache-2.0
//! Signal-flow graphs on top of `flowgraph_core`.
//!
//! A signal-flow graph records the structure of a DSP computation. Nodes are
//! signals or operations, arcs are operands tagged with an [`OperandRole`]:
//! - Delays (`add_delay`)
//! - Adders and subtractors (`add_adder`, `add_subtractor`)
//! - Multipliers and dividers (`add_multiplier`, `add_divider`)
//!
//! Nothing here evaluates or schedules the computation.
//!
//! ```
//! use flowgraph_sfg::{OperandRole, OrderedSfg};
//!
//! let mut sfg = OrderedSfg::new();
//! let a = sfg.create_named_node("a");
//! let b = sfg.create_named_node("b");
//! let sum = sfg.create_named_node("sum");
//! sfg.add_adder(a, b, sum).unwrap();
//!
//! assert_eq!(sfg.arcs_with_role(OperandRole::Term).count(), 2);
//! ```

pub mod error;
pub mod node;
pub mod op;
pub mod role;
pub mod sfg;

#[cfg(test)]
mod testing;

pub use error::{SfgError, SfgResult};
pub use flowgraph_core::{ArcId, NodeId};
pub use node::SfgNode;
pub use op::{Direction, OpArity, OpKind, OP_ARITY};
pub use role::OperandRole;
pub use sfg::{HashSfg, IndexedSfg, OrderedSfg, Sfg};
