// SPDX-License-Identifier: MIT OR Apache-2.0
//! Generic directed graph engine.
//!
//! This crate provides the graph container that domain layers such as
//! signal-flow graphs are built on:
//! - Stable, never reused node and arc identifiers
//! - Referential integrity between nodes and arcs
//! - Cascading node deletion
//! - Graphviz DOT export
//!
//! ## Architecture
//!
//! A [`Graph`] owns every node and arc. Callers only hold [`NodeId`]s and
//! [`ArcId`]s. The collections behind a graph are chosen at compile time
//! through a [`MapFamily`] and a [`SetFamily`]; see [`container`].
//!
//! ```
//! use flowgraph_core::OrderedGraph;
//!
//! let mut graph = OrderedGraph::<()>::new();
//! let a = graph.create_node();
//! let b = graph.create_node();
//! graph.create_arc(a, b).unwrap();
//!
//! assert_eq!(graph.to_dot(), "strict digraph {\n    0 -> { 1 }\n    1 -> { }\n}");
//! ```

pub mod arc;
pub mod container;
pub mod dot;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;

#[cfg(test)]
mod testing;

pub use arc::Arc;
pub use container::{AssociativeArray, Hashed, IdSet, Indexed, MapFamily, Ordered, SetFamily};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, HashGraph, IndexedGraph, OrderedGraph};
pub use id::{ArcId, IdAllocator, Identifier, NodeId};
pub use node::Node;
