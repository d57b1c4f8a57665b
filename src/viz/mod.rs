//! Machine topology export for external viewers.
//!
//! A [`MachineGraph`] is a plain snapshot of a machine's states and edges,
//! detached from the rules (predicates do not serialize; labels stand in
//! for them). It renders to Graphviz DOT for `dot -Tpng` style pipelines,
//! or to JSON for anything else.

mod error;

pub use error::ExportError;

use std::fmt;
use std::hash::Hash;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::{EdgeFlags, Machine};

/// One state in an exported graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Rendered state id.
    pub id: String,
    /// Display name, empty when the state was never named.
    pub name: String,
}

/// One edge in an exported graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Rendered source state id. For global edges this is the default
    /// state and carries no resolution meaning.
    pub source: String,
    /// Rendered destination state id.
    pub destination: String,
    /// Edge label, with backslashes already doubled.
    pub label: String,
    /// Whether the edge is silent.
    pub silent: bool,
    /// Whether the edge applies from every state.
    pub global: bool,
}

/// Serializable snapshot of a machine's topology.
///
/// Nodes are sorted by rendered id and per-state edges are grouped by
/// sorted source id, so capturing the same machine twice yields the same
/// snapshot. Global edges keep their registration order.
///
/// # Example
///
/// ```rust
/// use edgewise::{EdgeFlags, MachineGraph, TextMachine};
///
/// let mut machine: TextMachine<u32> = TextMachine::new(0);
/// machine.set_state_name(0, "Ready");
/// machine.add_pattern_edge(0, 1, "a-z", EdgeFlags::NONE)?;
///
/// let graph = MachineGraph::capture(&machine);
/// let mut dot = Vec::new();
/// graph.write_dot(&mut dot)?;
/// assert!(String::from_utf8(dot).unwrap().starts_with("digraph G {"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub global_edges: Vec<GraphEdge>,
}

impl MachineGraph {
    /// Snapshot the topology of `machine`.
    pub fn capture<S, C>(machine: &Machine<S, C>) -> MachineGraph
    where
        S: Clone + Eq + Hash + fmt::Debug + fmt::Display,
    {
        let mut states: Vec<(String, &S)> = machine
            .states()
            .map(|state| (state.to_string(), state))
            .collect();
        states.sort_by(|a, b| a.0.cmp(&b.0));

        let nodes = states
            .iter()
            .map(|(id, state)| GraphNode {
                id: id.clone(),
                name: machine.state_name(state).to_string(),
            })
            .collect();

        let mut edges = Vec::new();
        for (id, state) in &states {
            for edge in machine.edges_from(state) {
                edges.push(GraphEdge {
                    source: id.clone(),
                    destination: edge.destination().to_string(),
                    label: edge.label().to_string(),
                    silent: edge.flags().contains(EdgeFlags::SILENT),
                    global: false,
                });
            }
        }

        let global_edges = machine
            .global_edges()
            .iter()
            .map(|edge| GraphEdge {
                source: edge.source().to_string(),
                destination: edge.destination().to_string(),
                label: edge.label().to_string(),
                silent: edge.flags().contains(EdgeFlags::SILENT),
                global: true,
            })
            .collect();

        MachineGraph {
            nodes,
            edges,
            global_edges,
        }
    }

    /// Render the snapshot as a Graphviz DOT digraph.
    ///
    /// States draw as boxes labeled `Name (id)` when named, bare `id`
    /// otherwise. Silent edges draw dotted. Each global edge is fanned out
    /// from every state, since that is where it can actually fire.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when the writer fails.
    pub fn write_dot<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        writeln!(writer, "digraph G {{")?;

        for node in &self.nodes {
            if node.name.is_empty() {
                writeln!(writer, "\t{} [shape=box label=\"{}\"]", node.id, node.id)?;
            } else {
                writeln!(
                    writer,
                    "\t{} [shape=box label=\"{} ({})\"]",
                    node.id, node.name, node.id
                )?;
            }
        }

        writeln!(writer)?;

        for edge in &self.edges {
            writeln!(
                writer,
                "\t{} -> {} [style={} label=\"{}\"]",
                edge.source,
                edge.destination,
                style(edge.silent),
                edge.label
            )?;
        }

        for edge in &self.global_edges {
            for node in &self.nodes {
                writeln!(
                    writer,
                    "\t{} -> {} [style={} label=\"{}\"]",
                    node.id,
                    edge.destination,
                    style(edge.silent),
                    edge.label
                )?;
            }
        }

        write!(writer, "}}")?;
        Ok(())
    }

    /// Render the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] when serialization or the underlying
    /// writer fails.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl<S, C> Machine<S, C>
where
    S: Clone + Eq + Hash + fmt::Debug + fmt::Display,
{
    /// Dump the machine's topology as a Graphviz DOT digraph.
    ///
    /// Shorthand for [`MachineGraph::capture`] followed by
    /// [`MachineGraph::write_dot`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when the writer fails.
    pub fn write_dot<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        MachineGraph::capture(self).write_dot(writer)
    }

    /// Dump the machine's topology as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] when serialization or the underlying
    /// writer fails.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        MachineGraph::capture(self).write_json(writer)
    }
}

fn style(silent: bool) -> &'static str {
    if silent {
        "dotted"
    } else {
        "solid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextMachine;

    fn sample() -> TextMachine<u32> {
        let mut machine = TextMachine::new(0);
        machine.set_state_name(0, "Ready");
        machine.set_state_name(1, "Word");
        machine.add_pattern_edge(0, 1, "a-z", EdgeFlags::NONE).unwrap();
        machine.add_pattern_edge(1, 1, "a-z", EdgeFlags::NONE).unwrap();
        machine
            .add_pattern_global_edge(0, "\\s", EdgeFlags::SILENT)
            .unwrap();
        machine
    }

    #[test]
    fn capture_sorts_nodes_and_groups_edges() {
        let graph = MachineGraph::capture(&sample());

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1"]);

        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0].source, "0");
        assert_eq!(graph.edges[1].source, "1");

        assert_eq!(graph.global_edges.len(), 1);
        assert!(graph.global_edges[0].global);
        assert!(graph.global_edges[0].silent);
    }

    #[test]
    fn dot_output_matches_the_expected_shape() {
        let mut out = Vec::new();
        sample().write_dot(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        let expected = "digraph G {\n\
             \t0 [shape=box label=\"Ready (0)\"]\n\
             \t1 [shape=box label=\"Word (1)\"]\n\
             \n\
             \t0 -> 1 [style=solid label=\"a-z\"]\n\
             \t1 -> 1 [style=solid label=\"a-z\"]\n\
             \t0 -> 0 [style=dotted label=\"\\\\s\"]\n\
             \t1 -> 0 [style=dotted label=\"\\\\s\"]\n\
             }";
        assert_eq!(dot, expected);
    }

    #[test]
    fn dot_ends_without_a_trailing_newline() {
        let mut out = Vec::new();
        sample().write_dot(&mut out).unwrap();

        assert_eq!(out.last(), Some(&b'}'));
    }

    #[test]
    fn unnamed_states_label_with_their_id() {
        let mut machine: TextMachine<u32> = TextMachine::new(3);
        let mut out = Vec::new();
        machine.write_dot(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.contains("\t3 [shape=box label=\"3\"]"));

        machine.set_state_name(3, "Idle");
        let mut out = Vec::new();
        machine.write_dot(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.contains("\t3 [shape=box label=\"Idle (3)\"]"));
    }

    #[test]
    fn capture_is_deterministic() {
        let machine = sample();

        assert_eq!(MachineGraph::capture(&machine), MachineGraph::capture(&machine));
    }

    #[test]
    fn json_round_trips() {
        let graph = MachineGraph::capture(&sample());

        let mut out = Vec::new();
        graph.write_json(&mut out).unwrap();
        let parsed: MachineGraph = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed, graph);
    }

    #[test]
    fn display_states_render_their_ids() {
        let mut machine: Machine<String, char> = Machine::new("ready".to_string());
        machine.add_edge(
            "ready".to_string(),
            "word".to_string(),
            'a',
            "a",
            EdgeFlags::NONE,
        );

        let graph = MachineGraph::capture(&machine);
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["ready", "word"]);
    }
}
