//! Machine Graph Export
//!
//! This example demonstrates dumping a machine's topology for external
//! viewers.
//!
//! Key concepts:
//! - DOT output for Graphviz (`dot -Tpng`)
//! - JSON output for everything else
//! - Silent edges rendered dotted, global edges fanned out
//!
//! Run with: cargo run --example graph_export
//! Render with: cargo run --example graph_export | dot -Tpng -o machine.png

use std::io::stdout;

use edgewise::{EdgeFlags, ExportError, MachineGraph, TextMachine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ExportError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut machine: TextMachine<u32> = TextMachine::new(0);
    machine.set_state_name(0, "Ready");
    machine.set_state_name(1, "Word");
    machine.set_state_name(2, "Number");

    if let Err(err) = build_edges(&mut machine) {
        eprintln!("bad pattern: {err}");
        return Ok(());
    }

    // DOT on stdout, JSON on stderr, so the DOT stream pipes cleanly
    // into Graphviz.
    let graph = MachineGraph::capture(&machine);
    graph.write_dot(stdout())?;
    println!();

    eprintln!();
    graph.write_json(std::io::stderr())?;
    eprintln!();

    Ok(())
}

fn build_edges(machine: &mut TextMachine<u32>) -> Result<(), edgewise::PatternError> {
    machine.add_pattern_edge(0, 1, "\\w", EdgeFlags::NONE)?;
    machine.add_pattern_edge(1, 1, "\\w\\d", EdgeFlags::NONE)?;
    machine.add_pattern_edge(0, 2, "\\d", EdgeFlags::NONE)?;
    machine.add_pattern_edge(2, 2, "\\d", EdgeFlags::NONE)?;
    machine.add_pattern_global_edge(0, "\\s\\n", EdgeFlags::SILENT)?;
    Ok(())
}
