// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graphviz DOT export.
//!
//! The output looks like
//!
//! ```text
//! strict digraph {
//!     0 -> { 1 2 }
//!     2 -> { }
//! }
//! ```
//!
//! One line per live node, listing the destination node of each outgoing
//! arc. Nodes and destinations appear in the graph's container order, so
//! only [`Ordered`](crate::Ordered) and [`Indexed`](crate::Indexed) graphs
//! give reproducible text. There is no newline after the closing brace.

use crate::container::{MapFamily, SetFamily};
use crate::error::GraphResult;
use crate::graph::Graph;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl<P, M: MapFamily, S: SetFamily> Graph<P, M, S> {
    /// Write the DOT rendering of the graph into `sink`.
    ///
    /// Never mutates the graph. Only fails if the sink does.
    pub fn export_topology<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        writeln!(sink, "strict digraph {{")?;
        for (node_id, node) in self.nodes() {
            write!(sink, "    {node_id} -> {{ ")?;
            for arc_id in node.outputs() {
                write!(sink, "{} ", self.arc_entry(arc_id).dst())?;
            }
            writeln!(sink, "}}")?;
        }
        write!(sink, "}}")
    }

    /// Render the graph as a DOT string
    pub fn to_dot(&self) -> String {
        let mut dot = String::with_capacity(32 + 16 * self.node_count());
        // Writing into a String cannot fail
        let _ = self.export_topology(&mut dot);
        dot
    }

    /// Write the DOT rendering to a byte stream
    pub fn write_dot<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        writer.write_all(self.to_dot().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the DOT rendering to a file, replacing it if it exists
    pub fn write_dot_file(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_dot(BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), nodes = self.node_count(), "wrote DOT graph");
        Ok(())
    }
}

impl<P, M: MapFamily, S: SetFamily> fmt::Display for Graph<P, M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.export_topology(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::container::{Hashed, Indexed, Ordered};
    use crate::graph::{HashGraph, IndexedGraph, OrderedGraph};
    use crate::id::NodeId;
    use crate::testing::init_tracing;
    use crate::Graph;

    fn three_node_graph<M: crate::MapFamily, S: crate::SetFamily>() -> Graph<(), M, S> {
        let mut graph = Graph::new();
        let n0 = graph.create_node();
        let n1 = graph.create_node();
        let n2 = graph.create_node();
        graph.create_bidirectional_arc(n0, n1).unwrap();
        graph.create_arc(n0, n2).unwrap();
        graph.create_arc(n1, n2).unwrap();
        graph
    }

    #[test]
    fn test_empty_graph() {
        let graph = OrderedGraph::<()>::new();
        assert_eq!(graph.to_dot(), "strict digraph {\n}");
    }

    #[test]
    fn test_three_node_export() {
        init_tracing();
        let expected = "strict digraph {\n    0 -> { 1 2 }\n    1 -> { 0 2 }\n    2 -> { }\n}";
        assert_eq!(three_node_graph::<Ordered, Ordered>().to_dot(), expected);
        assert_eq!(three_node_graph::<Indexed, Indexed>().to_dot(), expected);
        assert_eq!(three_node_graph::<Ordered, Indexed>().to_dot(), expected);
    }

    #[test]
    fn test_deletion_export() {
        fn build<M: crate::MapFamily, S: crate::SetFamily>() -> String {
            let mut graph = Graph::<(), M, S>::new();
            let nodes: Vec<NodeId> = (0..5).map(|_| graph.create_node()).collect();
            for pair in nodes.windows(2) {
                graph.create_bidirectional_arc(pair[0], pair[1]).unwrap();
            }

            graph.delete_node(nodes[2]).unwrap();
            let arc = graph.find_arc(nodes[3], nodes[4]).unwrap();
            graph.delete_arc(arc).unwrap();
            graph.to_dot()
        }

        let expected =
            "strict digraph {\n    0 -> { 1 }\n    1 -> { 0 }\n    3 -> { }\n    4 -> { 3 }\n}";
        assert_eq!(build::<Ordered, Ordered>(), expected);
        assert_eq!(build::<Indexed, Indexed>(), expected);
    }

    #[test]
    fn test_hashed_export_has_same_lines() {
        let dot = three_node_graph::<Hashed, Hashed>().to_dot();
        let mut lines: Vec<&str> = dot.lines().collect();

        assert_eq!(lines.first(), Some(&"strict digraph {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert!(!dot.ends_with('\n'));

        lines.sort_unstable();
        let mut expected = vec![
            "strict digraph {",
            "}",
            "    2 -> { }",
        ];
        let zero = lines.iter().find(|l| l.starts_with("    0 -> ")).unwrap();
        let one = lines.iter().find(|l| l.starts_with("    1 -> ")).unwrap();
        assert!(*zero == "    0 -> { 1 2 }" || *zero == "    0 -> { 2 1 }");
        assert!(*one == "    1 -> { 0 2 }" || *one == "    1 -> { 2 0 }");
        expected.push(*zero);
        expected.push(*one);
        expected.sort_unstable();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_export_is_pure() {
        let graph = three_node_graph::<Hashed, Hashed>();
        let first = graph.to_dot();
        let second = graph.to_dot();
        assert_eq!(first, second);
        assert_eq!(graph.to_string(), first);
        assert_eq!(graph.arc_count(), 4);
    }

    #[test]
    fn test_write_dot_to_stream_and_file() {
        init_tracing();
        let graph = three_node_graph::<Ordered, Ordered>();

        let mut buffer = Vec::new();
        graph.write_dot(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), graph.to_dot());

        let path = std::env::temp_dir().join(format!("flowgraph-{}.dot", std::process::id()));
        graph.write_dot_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, graph.to_dot());
    }

    #[test]
    fn test_write_dot_file_reports_io_errors() {
        let graph = HashGraph::<()>::new();
        let missing_dir = std::env::temp_dir()
            .join(format!("flowgraph-missing-{}", std::process::id()))
            .join("graph.dot");
        assert!(matches!(
            graph.write_dot_file(missing_dir),
            Err(crate::GraphError::Io(_))
        ));
    }

    #[test]
    fn test_indexed_export_after_node_deletion_keeps_order() {
        let mut graph = IndexedGraph::<()>::new();
        let nodes: Vec<NodeId> = (0..4).map(|_| graph.create_node()).collect();
        graph.create_arc(nodes[3], nodes[0]).unwrap();
        graph.create_arc(nodes[3], nodes[2]).unwrap();
        graph.create_arc(nodes[3], nodes[1]).unwrap();
        graph.delete_node(nodes[2]).unwrap();

        assert_eq!(
            graph.to_dot(),
            "strict digraph {\n    0 -> { }\n    1 -> { }\n    3 -> { 0 1 }\n}"
        );
    }
}
